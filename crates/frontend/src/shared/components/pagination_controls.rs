use crate::shared::components::data_table::model::pagination_info;
use crate::shared::icons::icon;
use contracts::shared::filters::PER_PAGE_OPTIONS;
use contracts::shared::pagination::PaginationDescriptor;
use leptos::prelude::*;

/// Previous/next pager with a page-size selector.
///
/// Pages are 1-based. "Next" is disabled once `current_page * per_page`
/// reaches `total`.
#[component]
pub fn PaginationControls(
    /// Server paging metadata of the page on screen
    #[prop(into)]
    pagination: Signal<PaginationDescriptor>,

    /// Receives the requested 1-based page
    on_page_change: Callback<u64>,

    /// Receives the requested page size
    on_per_page_change: Callback<u64>,

    /// Page size choices (defaults to the allowed per-page set)
    #[prop(optional)]
    per_page_options: Option<Vec<u64>>,
) -> impl IntoView {
    let options = per_page_options
        .unwrap_or_else(|| PER_PAGE_OPTIONS.iter().map(|&n| n as u64).collect());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_previous() {
                        on_page_change.run(p.current_page - 1);
                    }
                }
                disabled=move || !pagination.get().has_previous()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || pagination_info(&pagination.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_next() {
                        on_page_change.run(p.current_page + 1);
                    }
                }
                disabled=move || !pagination.get().has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<u64>() {
                        Ok(size) => on_per_page_change.run(size),
                        Err(e) => log::warn!("Ignoring page size selection: {}", e),
                    }
                }
                prop:value=move || pagination.get().per_page.to_string()
            >
                {options.into_iter().map(|size| {
                    view! {
                        <option
                            value=size.to_string()
                            selected=move || pagination.get().per_page == size
                        >
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

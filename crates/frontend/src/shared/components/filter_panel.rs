use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Collapsible filter panel. The form inside is applied as one compound
/// change through `on_apply`.
#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    on_apply: Callback<()>,

    on_reset: Callback<()>,

    /// Filter form fields
    #[prop(into)]
    filter_content: ViewFn,

    /// Active filter chips
    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header" on:click=toggle_expanded>
                <span class=move || {
                    if is_expanded.get() {
                        "filter-panel__chevron filter-panel__chevron--expanded"
                    } else {
                        "filter-panel__chevron"
                    }
                }>
                    {icon("chevron-down")}
                </span>
                {icon("filter")}
                <span class="filter-panel__title">"Filters"</span>
                {move || {
                    let count = active_filters_count.get();
                    (count > 0).then(|| view! {
                        <span class="badge badge--primary">{count}</span>
                    })
                }}
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">
                    {filter_content.run()}
                    <div class="filter-panel-actions">
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_apply.run(())
                        >
                            "Apply"
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| on_reset.run(())
                        >
                            "Reset"
                        </Button>
                    </div>
                </div>
            </Show>

            {filter_tags.as_ref().map(|tags| view! {
                <div class="filter-panel-tags">{tags.run()}</div>
            })}
        </div>
    }
}

/// Chip for one active filter
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}

/// Text field bound to a draft value, committed with the panel's Apply
#[component]
pub fn FilterField(
    #[prop(into)]
    label: String,

    #[prop(into)]
    value: Signal<String>,

    on_input: Callback<String>,

    #[prop(optional, into)]
    input_type: Option<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    view! {
        <label class="filter-field">
            <span class="filter-field__label">{label}</span>
            <input
                class="filter-field__input"
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Human label of a filter key for the chips
pub fn filter_label(key: &str) -> &'static str {
    match key {
        "search" => "Search",
        "provinceCode" => "Province",
        "cityCode" => "City",
        "customerCode" => "Customer",
        "salesCode" => "Sales",
        "startDate" => "From",
        "endDate" => "To",
        _ => "Filter",
    }
}

mod state;

use self::state::{create_draft, CustomerFilterDraft};
use crate::domain::a001_customer::api::fetch_customers;
use crate::shared::components::data_table::{to_rows, ColumnDescriptor, DataTable, PLACEHOLDER};
use crate::shared::components::filter_panel::{filter_label, FilterField, FilterPanel, FilterTag};
use crate::shared::format::format_date;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::SearchInput;
use crate::shared::list_view::use_list_view;
use contracts::shared::filters::{active_filters, EntityType, FilterIntent, FilterValue};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

fn customer_columns() -> Vec<ColumnDescriptor> {
    let sortable = |column: ColumnDescriptor| {
        if EntityType::Customer.is_sortable(&column.key) {
            column.sortable()
        } else {
            column
        }
    };

    vec![
        ColumnDescriptor::new("code", "Code").width("110px"),
        ColumnDescriptor::new("name", "Name").width("240px"),
        ColumnDescriptor::new("province_name", "Province"),
        ColumnDescriptor::new("city_name", "City"),
        ColumnDescriptor::new("phone", "Phone"),
        ColumnDescriptor::new("created_at", "Created").render(|value, _, _| {
            value
                .as_str()
                .map(format_date)
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        }),
    ]
    .into_iter()
    .map(sortable)
    .collect()
}

/// Customers with server-side paging, sorting, search and location filters.
/// A row opens the transactions of that customer.
#[component]
pub fn CustomerList() -> impl IntoView {
    let list = use_list_view(ListController::new(EntityType::Customer), fetch_customers);
    let dispatch = list.dispatch;
    let navigate = use_navigate();

    let draft = list.state.with_untracked(|s| create_draft(s.controller.state()));
    let is_filter_expanded = RwSignal::new(false);

    let sync_draft = move || {
        if let Some(applied) =
            list.state.try_with_untracked(|s| CustomerFilterDraft::from_state(s.controller.state()))
        {
            draft.set(applied);
        }
    };

    let rows = Signal::derive(move || list.state.with(|s| to_rows(&s.items)));
    let search_value =
        Signal::derive(move || list.state.with(|s| s.controller.state().search_term().to_string()));

    let on_apply = Callback::new(move |_: ()| {
        dispatch.run(FilterIntent::SetFields(draft.get_untracked().to_partial()));
    });

    let on_reset = Callback::new(move |_: ()| {
        list.reset.run(());
        sync_draft();
    });

    let filter_tags = move || {
        list.state
            .with(|s| active_filters(s.controller.state(), s.controller.entity()))
            .into_iter()
            .map(|(key, value)| {
                let label = format!("{}: {}", filter_label(key), value);
                let on_remove = Callback::new(move |_: ()| {
                    dispatch.run(FilterIntent::SetField {
                        key: key.to_string(),
                        value: FilterValue::from(""),
                    });
                    sync_draft();
                });
                view! { <FilterTag label=label on_remove=on_remove /> }
            })
            .collect_view()
    };

    let filter_content = move || {
        view! {
            <div class="filter-panel__fields">
                <FilterField
                    label="Province code"
                    value=Signal::derive(move || draft.with(|d| d.province_code.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.province_code = v))
                />
                <FilterField
                    label="City code"
                    value=Signal::derive(move || draft.with(|d| d.city_code.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.city_code = v))
                />
            </div>
        }
    };

    let on_row_click = Callback::new(move |index: usize| {
        let code = list
            .state
            .with_untracked(|s| s.items.get(index).map(|c| c.code.clone()));
        if let Some(code) = code {
            navigate(
                &format!("/transactions?customerCode={}", urlencoding::encode(&code)),
                Default::default(),
            );
        }
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Customers"</h1>
                <SearchInput
                    value=search_value
                    on_change=move |term: String| dispatch.run(FilterIntent::Search(term))
                    placeholder="Search by code or name..."
                />
            </div>

            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=list.active_filters_count()
                on_apply=on_apply
                on_reset=on_reset
                filter_content=filter_content
                filter_tags=move || filter_tags
            />

            {move || {
                list.error().get().map(|e| view! { <div class="alert alert--error">{e}</div> })
            }}

            <DataTable
                columns=customer_columns()
                data=rows
                loading=list.is_loading()
                pagination=list.pagination()
                show_pagination=true
                on_page_change=Callback::new(move |page: u64| {
                    dispatch.run(FilterIntent::ChangePage(page as i64))
                })
                on_per_page_change=Callback::new(move |size: u64| {
                    dispatch.run(FilterIntent::ChangePerPage(size as i64))
                })
                sort=list.sort()
                on_sort=Callback::new(move |field: String| {
                    dispatch.run(FilterIntent::ToggleSort(field))
                })
                on_row_click=on_row_click
                empty_message="No customers found"
            />
        </div>
    }
}

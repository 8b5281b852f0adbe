mod state;

use self::state::{create_draft, query_filters, TransactionFilterDraft};
use crate::domain::a002_transaction::api::fetch_transactions;
use crate::shared::components::data_table::model::{cell_value, default_text};
use crate::shared::components::data_table::{to_rows, ColumnDescriptor, DataTable, PLACEHOLDER};
use crate::shared::components::filter_panel::{filter_label, FilterField, FilterPanel, FilterTag};
use crate::shared::format::{format_date, format_money};
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::SearchInput;
use crate::shared::list_view::use_list_view;
use contracts::shared::filters::state::{END_DATE, START_DATE};
use contracts::shared::filters::{active_filters, EntityType, FilterIntent, FilterValue};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

fn transaction_columns() -> Vec<ColumnDescriptor> {
    let sortable = |column: ColumnDescriptor| {
        if EntityType::Transaction.is_sortable(&column.key) {
            column.sortable()
        } else {
            column
        }
    };

    vec![
        ColumnDescriptor::new("transaction_date", "Date")
            .width("110px")
            .render(|value, _, _| {
                value
                    .as_str()
                    .map(format_date)
                    .unwrap_or_else(|| PLACEHOLDER.to_string())
            }),
        ColumnDescriptor::new("code", "Code").width("140px"),
        // Name when the backend resolved it, code otherwise
        ColumnDescriptor::new("customer_name", "Customer").render(|value, row, _| {
            match default_text(value) {
                text if text == PLACEHOLDER => default_text(cell_value(row, "customer_code")),
                text => text,
            }
        }),
        ColumnDescriptor::new("sales_name", "Sales"),
        ColumnDescriptor::new("amount", "Amount")
            .width("140px")
            .render(|value, _, _| {
                value
                    .as_f64()
                    .map(format_money)
                    .unwrap_or_else(|| PLACEHOLDER.to_string())
            }),
        ColumnDescriptor::new("note", "Note"),
    ]
    .into_iter()
    .map(sortable)
    .collect()
}

/// Transactions with server-side paging, sorting, search, period and
/// reference filters. Filters present in the URL query seed the list.
#[component]
pub fn TransactionList() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

    let seeded = query.with_untracked(|q| query_filters(|key| q.get(key)));
    let controller = ListController::with_overrides(EntityType::Transaction.as_str(), &seeded)
        .unwrap_or_else(|e| {
            log::error!("Failed to seed transaction filters: {}", e);
            ListController::new(EntityType::Transaction)
        });

    let list = use_list_view(controller, fetch_transactions);
    let dispatch = list.dispatch;

    let draft = list.state.with_untracked(|s| create_draft(s.controller.state()));
    let is_filter_expanded = RwSignal::new(false);

    let sync_draft = move || {
        if let Some(applied) = list
            .state
            .try_with_untracked(|s| TransactionFilterDraft::from_state(s.controller.state()))
        {
            draft.set(applied);
        }
    };

    // Same route, new query (e.g. from a customer row): apply it as one change
    Effect::new(move |prev: Option<()>| {
        let filters = query.with(|q| query_filters(|key| q.get(key)));
        if prev.is_some() {
            dispatch.run(FilterIntent::SetFields(filters));
            sync_draft();
        }
    });

    let rows = Signal::derive(move || list.state.with(|s| to_rows(&s.items)));
    let search_value =
        Signal::derive(move || list.state.with(|s| s.controller.state().search_term().to_string()));
    let start_date =
        Signal::derive(move || list.state.with(|s| s.controller.state().text(START_DATE).to_string()));
    let end_date =
        Signal::derive(move || list.state.with(|s| s.controller.state().text(END_DATE).to_string()));

    let on_start_date = Callback::new(move |value: String| {
        dispatch.run(FilterIntent::SetDateRange {
            start_date: value,
            end_date: end_date.get_untracked(),
        });
    });
    let on_end_date = Callback::new(move |value: String| {
        dispatch.run(FilterIntent::SetDateRange {
            start_date: start_date.get_untracked(),
            end_date: value,
        });
    });

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
                    label="Customer code"
                    value=Signal::derive(move || draft.with(|d| d.customer_code.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.customer_code = v))
                />
                <FilterField
                    label="Sales code"
                    value=Signal::derive(move || draft.with(|d| d.sales_code.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.sales_code = v))
                />
            </div>
        }
    };

    let on_row_click = Callback::new(move |index: usize| {
        let code = list
            .state
            .with_untracked(|s| s.items.get(index).map(|t| t.code.clone()));
        if let Some(code) = code {
            navigate(
                &format!("/transactions/{}", urlencoding::encode(&code)),
                Default::default(),
            );
        }
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Transactions"</h1>
                <div class="page__period">
                    <FilterField label="From" value=start_date on_input=on_start_date input_type="date" />
                    <FilterField label="To" value=end_date on_input=on_end_date input_type="date" />
                </div>
                <SearchInput
                    value=search_value
                    on_change=move |term: String| dispatch.run(FilterIntent::Search(term))
                    placeholder="Search by code or note..."
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
                columns=transaction_columns()
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
                empty_message="No transactions found"
            />
        </div>
    }
}

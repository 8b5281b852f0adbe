use super::model::{
    self, shows_pagination, table_body, ColumnDescriptor, Row, SortState, DEFAULT_EMPTY_MESSAGE,
    LOADING_MESSAGE,
};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::pagination::PaginationDescriptor;
use leptos::prelude::*;
use thaw::*;

/// Generic table over JSON rows.
///
/// Renders exactly one of: a loading row, an empty-message row, or the data
/// rows. The pager is shown when `show_pagination` is set, a descriptor is
/// available and the page has rows.
///
/// ```ignore
/// <DataTable
///     columns=columns()
///     data=rows
///     loading=is_loading
///     pagination=pagination
///     show_pagination=true
///     on_page_change=Callback::new(move |page| dispatch.run(FilterIntent::ChangePage(page as i64)))
///     on_per_page_change=Callback::new(move |size| dispatch.run(FilterIntent::ChangePerPage(size as i64)))
/// />
/// ```
#[component]
pub fn DataTable(
    /// Column layout, fixed for the lifetime of the table
    columns: Vec<ColumnDescriptor>,

    #[prop(into)]
    data: Signal<Vec<Row>>,

    #[prop(into)]
    loading: Signal<bool>,

    #[prop(optional, into)]
    pagination: MaybeProp<PaginationDescriptor>,

    /// Opt-in for the pager under the table
    #[prop(optional)]
    show_pagination: bool,

    #[prop(optional)]
    on_page_change: Option<Callback<u64>>,

    #[prop(optional)]
    on_per_page_change: Option<Callback<u64>>,

    /// Current sort, drives the header arrows
    #[prop(optional, into)]
    sort: MaybeProp<SortState>,

    /// Header click on a sortable column
    #[prop(optional)]
    on_sort: Option<Callback<String>>,

    /// Click on a data row, with its index in `data`
    #[prop(optional)]
    on_row_click: Option<Callback<usize>>,

    #[prop(optional, into)]
    empty_message: Option<String>,
) -> impl IntoView {
    let columns = StoredValue::new(columns);
    let empty_message = StoredValue::new(
        empty_message.unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string()),
    );

    let body = Memo::new(move |_| {
        let is_loading = loading.get();
        columns.with_value(|cols| data.with(|rows| table_body(cols, rows, is_loading)))
    });

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let title = col.title.clone();
                let style = col
                    .width
                    .as_ref()
                    .map(|w| format!("min-width: {};", w))
                    .unwrap_or_default();

                match on_sort.filter(|_| col.sortable) {
                    Some(on_sort) => {
                        let key_for_click = col.key.clone();
                        let key_for_indicator = col.key.clone();
                        let key_for_class = col.key.clone();
                        view! {
                            <TableHeaderCell>
                                <div
                                    class="table__sortable-header"
                                    style=format!("cursor: pointer; {}", style)
                                    on:click=move |_| on_sort.run(key_for_click.clone())
                                >
                                    {title}
                                    <span class=move || {
                                        get_sort_class(sort.get().as_ref(), &key_for_class)
                                    }>
                                        {move || {
                                            get_sort_indicator(sort.get().as_ref(), &key_for_indicator)
                                        }}
                                    </span>
                                </div>
                            </TableHeaderCell>
                        }
                        .into_any()
                    }
                    None => view! {
                        <TableHeaderCell>
                            <div style=style>{title}</div>
                        </TableHeaderCell>
                    }
                    .into_any(),
                }
            })
            .collect_view()
    });

    let body_rows = move || match body.get() {
        model::TableBody::Loading { colspan } => view! {
            <TableRow>
                <td colspan=colspan.to_string() class="table__placeholder-row">
                    {LOADING_MESSAGE}
                </td>
            </TableRow>
        }
        .into_any(),
        model::TableBody::Empty { colspan } => view! {
            <TableRow>
                <td colspan=colspan.to_string() class="table__empty-row">
                    {empty_message.get_value()}
                </td>
            </TableRow>
        }
        .into_any(),
        model::TableBody::Rows(rows) => rows
            .into_iter()
            .enumerate()
            .map(|(index, cells)| {
                view! {
                    <TableRow
                        class=if on_row_click.is_some() { "table__row--clickable" } else { "" }
                        on:click=move |_| {
                            if let Some(on_row_click) = on_row_click {
                                on_row_click.run(index);
                            }
                        }
                    >
                        {cells
                            .into_iter()
                            .map(|text| view! {
                                <TableCell>
                                    <TableCellLayout truncate=true>{text}</TableCellLayout>
                                </TableCell>
                            })
                            .collect_view()}
                    </TableRow>
                }
            })
            .collect_view()
            .into_any(),
    };

    let pager_visible = move || {
        shows_pagination(
            pagination.get().as_ref(),
            data.with(|rows| rows.len()),
            show_pagination,
        )
    };
    let on_page_change = on_page_change.unwrap_or_else(|| Callback::new(|_: u64| {}));
    let on_per_page_change = on_per_page_change.unwrap_or_else(|| Callback::new(|_: u64| {}));

    view! {
        <div class="data-table">
            <Table>
                <TableHeader>
                    <TableRow>{header_cells}</TableRow>
                </TableHeader>
                <TableBody>{body_rows}</TableBody>
            </Table>
            {move || {
                pager_visible().then(|| view! {
                    <div class="data-table__pagination">
                        <PaginationControls
                            pagination=Signal::derive(move || pagination.get().unwrap_or_default())
                            on_page_change=on_page_change
                            on_per_page_change=on_per_page_change
                        />
                    </div>
                })
            }}
        </div>
    }
}

use crate::domain::a002_transaction::api::fetch_transaction_detail;
use crate::shared::components::data_table::{to_rows, ColumnDescriptor, DataTable, PLACEHOLDER};
use crate::shared::format::{format_date, format_datetime, format_money};
use crate::shared::request_seq::RequestSeq;
use contracts::domain::a002_transaction::TransactionDetailDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use leptos_router::components::A;

fn money_column(key: &str, title: &str) -> ColumnDescriptor {
    ColumnDescriptor::new(key, title).width("120px").render(|value, _, _| {
        value
            .as_f64()
            .map(format_money)
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    })
}

fn item_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("#", "#")
            .width("48px")
            .render(|_, _, index| (index + 1).to_string()),
        ColumnDescriptor::new("product_code", "Product code").width("140px"),
        ColumnDescriptor::new("product_name", "Product"),
        ColumnDescriptor::new("qty", "Qty").width("80px"),
        money_column("price", "Price"),
        money_column("subtotal", "Subtotal"),
    ]
}

fn or_placeholder(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

/// Header fields and lines of one transaction, `/transactions/:code`
#[component]
pub fn TransactionDetail() -> impl IntoView {
    let params = use_params_map();
    let code = Memo::new(move |_| params.with(|p| p.get("code").unwrap_or_default()));

    let (detail, set_detail) = signal::<Option<TransactionDetailDto>>(None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // A response for a code the page has already moved away from is dropped
    let request_seq = StoredValue::new(RequestSeq::default());

    Effect::new(move |_| {
        let code = code.get();
        if code.is_empty() {
            return;
        }
        let Some(seq) = request_seq.try_update_value(|s| s.next()) else {
            return;
        };
        set_loading.set(true);
        set_error.set(None);
        set_detail.set(None);
        spawn_local(async move {
            let result = fetch_transaction_detail(&code).await;
            if request_seq.try_with_value(|s| s.is_current(seq)) != Some(true) {
                log::debug!("Dropping stale transaction {} response #{}", code, seq);
                return;
            }
            match result {
                Ok(data) => set_detail.set(Some(data)),
                Err(e) => {
                    log::error!("Failed to load transaction {}: {}", code, e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let items = Signal::derive(move || {
        detail.with(|d| d.as_ref().map(|d| to_rows(&d.items)).unwrap_or_default())
    });

    let header = move || {
        detail.get().map(|d| {
            let t = d.transaction;
            let customer = match &t.customer_name {
                Some(name) if !name.is_empty() => format!("{} ({})", name, t.customer_code),
                _ => t.customer_code.clone(),
            };
            view! {
                <dl class="detail-grid">
                    <dt>"Code"</dt>
                    <dd>{t.code.clone()}</dd>
                    <dt>"Date"</dt>
                    <dd>{format_date(&t.transaction_date)}</dd>
                    <dt>"Customer"</dt>
                    <dd>{customer}</dd>
                    <dt>"Sales"</dt>
                    <dd>{or_placeholder(&t.sales_name)}</dd>
                    <dt>"Amount"</dt>
                    <dd>{format_money(t.amount)}</dd>
                    <dt>"Note"</dt>
                    <dd>{or_placeholder(&t.note)}</dd>
                    <dt>"Created"</dt>
                    <dd>{format_datetime(&t.created_at)}</dd>
                </dl>
            }
        })
    };

    view! {
        <div class="page">
            <div class="page__header">
                <A href="/transactions">"← Transactions"</A>
                <h1 class="page__title">{move || format!("Transaction {}", code.get())}</h1>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {header}

            <h2 class="page__subtitle">"Items"</h2>
            <DataTable
                columns=item_columns()
                data=items
                loading=loading
                empty_message="No items"
            />
        </div>
    }
}

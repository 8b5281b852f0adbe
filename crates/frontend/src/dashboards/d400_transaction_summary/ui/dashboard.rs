use crate::dashboards::d400_transaction_summary::api;
use crate::shared::components::data_table::{to_rows, ColumnDescriptor, DataTable, PLACEHOLDER};
use crate::shared::components::filter_panel::FilterField;
use crate::shared::components::stat_card::{StatCard, ValueFormat};
use crate::shared::format::{format_date, format_money};
use crate::shared::request_seq::RequestSeq;
use contracts::dashboards::d400_transaction_summary::{
    SummaryRequest, SummaryResponse, TransactionTotals,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn daily_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("date", "Date").width("120px").render(|value, _, _| {
            value
                .as_str()
                .map(format_date)
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        }),
        ColumnDescriptor::new("count", "Transactions").width("120px"),
        ColumnDescriptor::new("amount", "Amount").render(|value, _, _| {
            value
                .as_f64()
                .map(format_money)
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        }),
    ]
}

/// Transaction Summary Dashboard component
///
/// Totals and a per-day breakdown for a period, the current month by default.
#[component]
pub fn TransactionSummaryDashboard() -> impl IntoView {
    let (period, set_period) = signal(SummaryRequest::current_month());

    // Data state
    let (data, set_data) = signal(None::<SummaryResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Only the latest request may write its result
    let request_seq = StoredValue::new(RequestSeq::default());

    // Load data when period changes
    Effect::new(move |_| {
        let request = period.get();
        let Some(seq) = request_seq.try_update_value(|s| s.next()) else {
            return;
        };
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::get_transaction_summary(&request).await;
            if request_seq.try_with_value(|s| s.is_current(seq)) != Some(true) {
                log::debug!("Dropping stale summary response #{}", seq);
                return;
            }
            match result {
                Ok(response) => set_data.set(Some(response)),
                Err(e) => {
                    log::error!(
                        "Failed to load summary {}..{}: {}",
                        request.start_date,
                        request.end_date,
                        e
                    );
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let totals = Memo::new(move |_| data.with(|d| d.as_ref().map(SummaryResponse::totals)));
    let daily_rows = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| to_rows(&d.daily())).unwrap_or_default())
    });

    let card_value = move |pick: fn(&TransactionTotals) -> f64| {
        Signal::derive(move || totals.get().map(|t| pick(&t)))
    };

    let start_date = Signal::derive(move || period.with(|p| p.start_date.clone()));
    let end_date = Signal::derive(move || period.with(|p| p.end_date.clone()));

    view! {
        <div class="page d400-dashboard">
            <div class="page__header">
                <h1 class="page__title">"Transaction summary"</h1>
                <div class="page__period">
                    <FilterField
                        label="From"
                        value=start_date
                        on_input=Callback::new(move |v: String| set_period.update(|p| p.start_date = v))
                        input_type="date"
                    />
                    <FilterField
                        label="To"
                        value=end_date
                        on_input=Callback::new(move |v: String| set_period.update(|p| p.end_date = v))
                        input_type="date"
                    />
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="stat-cards">
                <StatCard
                    label="Transactions"
                    icon_name="transactions"
                    value=card_value(|t| t.count as f64)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Total amount"
                    icon_name="dashboard"
                    value=card_value(|t| t.total_amount)
                    format=ValueFormat::Money
                />
                <StatCard
                    label="Average amount"
                    icon_name="dashboard"
                    value=card_value(|t| t.average_amount)
                    format=ValueFormat::Money
                />
                <StatCard
                    label="Customers"
                    icon_name="customers"
                    value=card_value(|t| t.customer_count as f64)
                    format=ValueFormat::Integer
                />
            </div>

            <h2 class="page__subtitle">"By day"</h2>
            <DataTable
                columns=daily_columns()
                data=daily_rows
                loading=loading
                empty_message="No transactions in this period"
            />
        </div>
    }
}

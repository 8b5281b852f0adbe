use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::a002_transaction::TransactionDto;

/// Period of the summary dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// "YYYY-MM-DD"
    #[serde(rename = "startDate")]
    pub start_date: String,
    /// "YYYY-MM-DD"
    #[serde(rename = "endDate")]
    pub end_date: String,
}

impl SummaryRequest {
    /// Whole calendar month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(first);
        Self {
            start_date: first.format("%Y-%m-%d").to_string(),
            end_date: last.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn current_month() -> Self {
        Self::month_of(chrono::Utc::now().date_naive())
    }
}

/// Figures for the stat cards
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionTotals {
    pub count: u64,
    pub total_amount: f64,
    pub average_amount: f64,
    pub customer_count: u64,
}

/// One point of the daily chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// "YYYY-MM-DD"
    pub date: String,
    pub count: u64,
    pub amount: f64,
}

/// `GET /api/summaries/transactions`: every transaction of the period.
/// Cards and the daily series are shaped on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(rename = "data", default)]
    pub transactions: Vec<TransactionDto>,
}

impl SummaryResponse {
    pub fn totals(&self) -> TransactionTotals {
        summarize(&self.transactions)
    }

    pub fn daily(&self) -> Vec<ChartPoint> {
        daily_series(&self.transactions)
    }
}

/// Card figures over a set of transactions
pub fn summarize(transactions: &[TransactionDto]) -> TransactionTotals {
    if transactions.is_empty() {
        return TransactionTotals::default();
    }

    let total_amount: f64 = transactions.iter().map(|t| t.amount).sum();
    let customers: HashSet<&str> = transactions
        .iter()
        .map(|t| t.customer_code.as_str())
        .collect();
    let count = transactions.len() as u64;

    TransactionTotals {
        count,
        total_amount,
        average_amount: total_amount / count as f64,
        customer_count: customers.len() as u64,
    }
}

/// Per-day totals in date order. Rows whose date does not parse are skipped.
pub fn daily_series(transactions: &[TransactionDto]) -> Vec<ChartPoint> {
    let mut by_day: BTreeMap<NaiveDate, (u64, f64)> = BTreeMap::new();

    for t in transactions {
        let day = t.transaction_date.split('T').next().unwrap_or_default();
        let Ok(date) = NaiveDate::parse_from_str(day, "%Y-%m-%d") else {
            continue;
        };
        let entry = by_day.entry(date).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += t.amount;
    }

    by_day
        .into_iter()
        .map(|(date, (count, amount))| ChartPoint {
            date: date.format("%Y-%m-%d").to_string(),
            count,
            amount,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(code: &str, date: &str, customer: &str, amount: f64) -> TransactionDto {
        TransactionDto {
            code: code.to_string(),
            transaction_date: date.to_string(),
            customer_code: customer.to_string(),
            customer_name: None,
            sales_code: None,
            sales_name: None,
            amount,
            note: None,
            created_at: format!("{}T08:00:00Z", date),
        }
    }

    #[test]
    fn test_month_of() {
        let req = SummaryRequest::month_of(NaiveDate::from_ymd_opt(2024, 2, 17).unwrap());
        assert_eq!(req.start_date, "2024-02-01");
        assert_eq!(req.end_date, "2024-02-29");

        let req = SummaryRequest::month_of(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(req.start_date, "2023-12-01");
        assert_eq!(req.end_date, "2023-12-31");
    }

    #[test]
    fn test_summarize() {
        let rows = vec![
            tx("T1", "2024-01-02", "C1", 100.0),
            tx("T2", "2024-01-02", "C2", 50.0),
            tx("T3", "2024-01-05", "C1", 30.0),
        ];
        let totals = summarize(&rows);
        assert_eq!(totals.count, 3);
        assert_eq!(totals.total_amount, 180.0);
        assert_eq!(totals.average_amount, 60.0);
        assert_eq!(totals.customer_count, 2);

        assert_eq!(summarize(&[]), TransactionTotals::default());
    }

    #[test]
    fn test_daily_series_sorted_and_grouped() {
        let rows = vec![
            tx("T1", "2024-01-05", "C1", 30.0),
            tx("T2", "2024-01-02T10:15:00Z", "C2", 50.0),
            tx("T3", "2024-01-02", "C1", 100.0),
            tx("T4", "not a date", "C3", 1.0),
        ];
        let series = daily_series(&rows);
        assert_eq!(
            series,
            vec![
                ChartPoint {
                    date: "2024-01-02".to_string(),
                    count: 2,
                    amount: 150.0
                },
                ChartPoint {
                    date: "2024-01-05".to_string(),
                    count: 1,
                    amount: 30.0
                },
            ]
        );
    }

    #[test]
    fn test_response_shapes_rows() {
        let json = serde_json::json!({
            "data": [
                {"code": "T1", "transaction_date": "2024-03-01", "customer_code": "C1",
                 "amount": 20.0, "created_at": "2024-03-01T09:00:00Z"},
                {"code": "T2", "transaction_date": "2024-03-01", "customer_code": "C1",
                 "amount": 30.0, "created_at": "2024-03-01T10:00:00Z"}
            ]
        });
        let response: SummaryResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.totals().count, 2);
        assert_eq!(response.totals().customer_count, 1);
        assert_eq!(response.daily().len(), 1);
        assert_eq!(response.daily()[0].amount, 50.0);
    }

    #[test]
    fn test_request_wire_keys() {
        let req = SummaryRequest {
            start_date: "2024-01-01".into(),
            end_date: "2024-01-31".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["startDate"], "2024-01-01");
        assert_eq!(json["endDate"], "2024-01-31");
    }
}

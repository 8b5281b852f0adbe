pub mod dto;

pub use dto::{daily_series, summarize, ChartPoint, SummaryRequest, SummaryResponse, TransactionTotals};

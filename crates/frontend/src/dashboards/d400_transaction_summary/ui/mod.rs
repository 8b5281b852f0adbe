pub mod dashboard;

pub use dashboard::TransactionSummaryDashboard;

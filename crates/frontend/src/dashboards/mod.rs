pub mod d400_transaction_summary;

pub use d400_transaction_summary::ui::TransactionSummaryDashboard;

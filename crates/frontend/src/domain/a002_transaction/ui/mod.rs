pub mod details;
pub mod list;

pub use details::TransactionDetail;
pub use list::TransactionList;

pub mod dto;

pub use dto::{TransactionDetailDto, TransactionDto, TransactionItemDto};

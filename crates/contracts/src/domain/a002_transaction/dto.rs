use serde::{Deserialize, Serialize};

/// Transaction row of `GET /api/transactions`. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDto {
    pub code: String,
    /// "YYYY-MM-DD"
    pub transaction_date: String,

    // References
    pub customer_code: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub sales_code: Option<String>,
    #[serde(default)]
    pub sales_name: Option<String>,

    pub amount: f64,
    #[serde(default)]
    pub note: Option<String>,

    pub created_at: String,
}

/// Line of a transaction, present only on the detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionItemDto {
    pub product_code: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub qty: f64,
    pub price: f64,
    pub subtotal: f64,
}

/// `GET /api/transactions/{code}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetailDto {
    pub transaction: TransactionDto,
    #[serde(default)]
    pub items: Vec<TransactionItemDto>,
}

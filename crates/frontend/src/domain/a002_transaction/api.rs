use contracts::domain::a002_transaction::{TransactionDetailDto, TransactionDto};
use contracts::shared::filters::ParamMap;
use contracts::shared::pagination::ListResponse;

use crate::shared::api_utils::{api_base, fetch_list, get_json};

const TRANSACTIONS_PATH: &str = "/api/transactions";

/// One page of transactions for the given filter parameters
pub async fn fetch_transactions(params: ParamMap) -> Result<ListResponse<TransactionDto>, String> {
    fetch_list(TRANSACTIONS_PATH, &params).await
}

/// Transaction header with its lines
pub async fn fetch_transaction_detail(code: &str) -> Result<TransactionDetailDto, String> {
    let url = format!(
        "{}{}/{}",
        api_base(),
        TRANSACTIONS_PATH,
        urlencoding::encode(code)
    );
    log::debug!("GET {}", url);
    get_json(&url).await
}

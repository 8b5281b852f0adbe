use contracts::domain::a001_customer::CustomerDto;
use contracts::shared::filters::ParamMap;
use contracts::shared::pagination::ListResponse;

use crate::shared::api_utils::fetch_list;

const CUSTOMERS_PATH: &str = "/api/customers";

/// One page of customers for the given filter parameters
pub async fn fetch_customers(params: ParamMap) -> Result<ListResponse<CustomerDto>, String> {
    fetch_list(CUSTOMERS_PATH, &params).await
}

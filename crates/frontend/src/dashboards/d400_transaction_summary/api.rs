use contracts::dashboards::d400_transaction_summary::{SummaryRequest, SummaryResponse};

use crate::shared::api_utils::{api_base, get_json, join_url};

const SUMMARY_PATH: &str = "/api/summaries/transactions";

/// All transactions of the requested period
pub async fn get_transaction_summary(request: &SummaryRequest) -> Result<SummaryResponse, String> {
    let query = serde_qs::to_string(request)
        .map_err(|e| format!("Failed to encode query: {}", e))?;
    let url = join_url(&api_base(), SUMMARY_PATH, &query);
    log::debug!("GET {}", url);
    get_json(&url).await
}

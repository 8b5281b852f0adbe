//! API utilities for frontend-backend communication
//!
//! Builds request URLs from filter parameters and performs the JSON GETs the
//! list and dashboard pages need.

use contracts::shared::filters::ParamMap;
use contracts::shared::pagination::ListResponse;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Compile-time override of the backend origin, e.g. `https://admin.example.com`
const API_BASE_OVERRIDE: Option<&str> = option_env!("ADMIN_API_BASE");

/// Port of the backend when it is served next to the frontend host
const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Uses `ADMIN_API_BASE` when it was set at build time, otherwise the current
/// window location with the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Query string for a parameter map, without the leading `?`
pub fn query_string(params: &ParamMap) -> Result<String, String> {
    serde_qs::to_string(&params.to_query_pairs())
        .map_err(|e| format!("Failed to encode query: {}", e))
}

/// Joins base, path and an optional query string
pub fn join_url(base: &str, path: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{}{}", base, path)
    } else {
        format!("{}{}?{}", base, path, query)
    }
}

/// Full URL of an API path with filter parameters
pub fn api_url_with_params(path: &str, params: &ParamMap) -> Result<String, String> {
    Ok(join_url(&api_base(), path, &query_string(params)?))
}

/// GET returning JSON
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET of a paginated list endpoint
pub async fn fetch_list<T: DeserializeOwned>(
    path: &str,
    params: &ParamMap,
) -> Result<ListResponse<T>, String> {
    let url = api_url_with_params(path, params)?;
    log::debug!("GET {}", url);
    get_json(&url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::filters::{build_params, FilterState, FilterValue};

    #[test]
    fn test_query_string_keeps_empty_dates() {
        let state = FilterState::new()
            .with("page", 2i64)
            .with("search", "")
            .with("startDate", "")
            .with("endDate", FilterValue::Null);
        let query = query_string(&build_params(&state)).unwrap();
        assert_eq!(query, "endDate=&page=2&startDate=");
    }

    #[test]
    fn test_query_string_encodes_values() {
        let state = FilterState::new().with("search", "acme & co");
        let query = query_string(&build_params(&state)).unwrap();
        assert!(query.starts_with("search=acme"));
        assert!(!query.contains(' '));
        assert!(!query.contains("& co"));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://h:3000", "/api/customers", "page=1"),
            "http://h:3000/api/customers?page=1"
        );
        assert_eq!(join_url("", "/api/customers", ""), "/api/customers");
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::state::*;

/// Keys sent even when empty: the backend tells "no date" apart from
/// "date not given"
const ALWAYS_SENT: [&str; 2] = [START_DATE, END_DATE];

/// Request parameters derived from a FilterState, ready for the query string
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamMap(BTreeMap<String, FilterValue>);

impl ParamMap {
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// String pairs for the URL encoder
    pub fn to_query_pairs(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.to_param_string()))
            .collect()
    }
}

/// Keeps only keys with a value. Null and empty text are dropped, except for
/// the date range keys. Keys and values are copied as they are.
pub fn build_params(state: &FilterState) -> ParamMap {
    let params = state
        .iter()
        .filter(|(key, value)| ALWAYS_SENT.contains(key) || !value.is_empty())
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();
    ParamMap(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::defaults::{get_defaults, CUSTOMER_CODE, SALES_CODE};
    use crate::shared::filters::validator::validate;

    #[test]
    fn test_transaction_defaults_round_trip() {
        let params = build_params(&validate(&get_defaults("transaction").unwrap()));

        assert_eq!(params.get(PAGE), Some(&FilterValue::Number(1)));
        assert_eq!(params.get(PER_PAGE), Some(&FilterValue::Number(10)));
        assert_eq!(params.get(SORT_BY), Some(&FilterValue::from("created_at")));
        assert_eq!(params.get(SORT_DIRECTION), Some(&FilterValue::from("desc")));
        assert_eq!(params.get(START_DATE), Some(&FilterValue::from("")));
        assert_eq!(params.get(END_DATE), Some(&FilterValue::from("")));
        assert!(!params.contains_key(SEARCH));
        assert!(!params.contains_key(CUSTOMER_CODE));
        assert!(!params.contains_key(SALES_CODE));
    }

    #[test]
    fn test_drops_empty_and_null() {
        let state = FilterState::new()
            .with(SEARCH, "")
            .with("cityCode", FilterValue::Null)
            .with("provinceCode", "31")
            .with(PAGE, 0i64);
        let params = build_params(&state);
        assert_eq!(params.keys().collect::<Vec<_>>(), vec![PAGE, "provinceCode"]);
    }

    #[test]
    fn test_never_emits_empty_text_outside_dates() {
        let state = get_defaults("customer")
            .unwrap()
            .with(START_DATE, "")
            .with(END_DATE, FilterValue::Null)
            .with("blank", "");
        let params = build_params(&state);
        for key in params.keys() {
            if !ALWAYS_SENT.contains(&key) {
                assert!(!params.get(key).unwrap().is_empty(), "{}", key);
            }
        }
        assert!(params.contains_key(START_DATE));
        assert!(params.contains_key(END_DATE));
        assert!(params.keys().all(|k| state.contains_key(k)));
    }

    #[test]
    fn test_query_pairs() {
        let state = FilterState::new()
            .with(PAGE, 2i64)
            .with(SEARCH, "acme corp")
            .with(START_DATE, FilterValue::Null);
        let pairs = build_params(&state).to_query_pairs();
        assert_eq!(pairs.get(PAGE).map(String::as_str), Some("2"));
        assert_eq!(pairs.get(SEARCH).map(String::as_str), Some("acme corp"));
        assert_eq!(pairs.get(START_DATE).map(String::as_str), Some(""));
    }
}

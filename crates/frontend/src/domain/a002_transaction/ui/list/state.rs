use contracts::shared::filters::defaults::{CUSTOMER_CODE, SALES_CODE};
use contracts::shared::filters::state::SEARCH;
use contracts::shared::filters::{EntityType, FilterState};
use leptos::prelude::*;

/// Reference filters being edited before they are applied. Dates are not
/// drafted, they apply on change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionFilterDraft {
    pub customer_code: String,
    pub sales_code: String,
}

impl TransactionFilterDraft {
    pub fn from_state(state: &FilterState) -> Self {
        Self {
            customer_code: state.text(CUSTOMER_CODE).to_string(),
            sales_code: state.text(SALES_CODE).to_string(),
        }
    }

    pub fn to_partial(&self) -> FilterState {
        FilterState::new()
            .with(CUSTOMER_CODE, self.customer_code.trim())
            .with(SALES_CODE, self.sales_code.trim())
    }
}

pub fn create_draft(state: &FilterState) -> RwSignal<TransactionFilterDraft> {
    RwSignal::new(TransactionFilterDraft::from_state(state))
}

/// Filters carried in the page URL, e.g. `/transactions?customerCode=C001`.
/// Every filter key is present; keys missing from the URL are empty.
pub fn query_filters(get: impl Fn(&str) -> Option<String>) -> FilterState {
    std::iter::once(SEARCH)
        .chain(EntityType::Transaction.filter_keys().iter().copied())
        .map(|key| (key, get(key).unwrap_or_default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::filters::state::{END_DATE, START_DATE};
    use std::collections::HashMap;

    #[test]
    fn test_query_filters_fills_missing_keys() {
        let query: HashMap<&str, &str> = [("customerCode", "C001"), ("page", "4")].into();
        let filters = query_filters(|key| query.get(key).map(|v| v.to_string()));

        assert_eq!(filters.text(CUSTOMER_CODE), "C001");
        assert_eq!(filters.text(SALES_CODE), "");
        assert_eq!(filters.text(START_DATE), "");
        assert_eq!(filters.text(END_DATE), "");
        assert_eq!(filters.text(SEARCH), "");
        assert!(!filters.contains_key("page"));
    }

    #[test]
    fn test_draft_round_trip_through_state() {
        let state = EntityType::Transaction
            .defaults()
            .with(CUSTOMER_CODE, "C001")
            .with(SALES_CODE, "S07");
        let draft = TransactionFilterDraft::from_state(&state);
        assert_eq!(draft.customer_code, "C001");
        assert_eq!(draft.to_partial().text(SALES_CODE), "S07");
    }
}

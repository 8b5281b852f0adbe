//! Default filter sets per entity type
//!
//! The registry is the initial state of every list view and the target of a
//! reset. Entity-specific filters default to an empty string, meaning
//! "no filter".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::FilterError;
use super::state::*;

pub const PROVINCE_CODE: &str = "provinceCode";
pub const CITY_CODE: &str = "cityCode";
pub const CUSTOMER_CODE: &str = "customerCode";
pub const SALES_CODE: &str = "salesCode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Customer,
    Transaction,
}

impl EntityType {
    pub const ALL: [EntityType; 2] = [EntityType::Customer, EntityType::Transaction];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Customer => "customer",
            EntityType::Transaction => "transaction",
        }
    }

    /// Filter keys beyond the canonical pagination/sort/search set
    pub fn filter_keys(&self) -> &'static [&'static str] {
        match self {
            EntityType::Customer => &[PROVINCE_CODE, CITY_CODE],
            EntityType::Transaction => &[START_DATE, END_DATE, CUSTOMER_CODE, SALES_CODE],
        }
    }

    /// Fields the backend accepts in `sortBy`
    pub fn sortable_fields(&self) -> &'static [&'static str] {
        match self {
            EntityType::Customer => &[
                "created_at",
                "code",
                "name",
                "province_name",
                "city_name",
            ],
            EntityType::Transaction => &[
                "created_at",
                "transaction_date",
                "code",
                "customer_name",
                "sales_name",
                "amount",
            ],
        }
    }

    pub fn is_sortable(&self, field: &str) -> bool {
        self.sortable_fields().contains(&field)
    }

    /// Fresh default state. Every call builds a new value.
    pub fn defaults(&self) -> FilterState {
        let mut state = FilterState::new()
            .with(PAGE, DEFAULT_PAGE)
            .with(PER_PAGE, DEFAULT_PER_PAGE)
            .with(SORT_BY, DEFAULT_SORT_BY)
            .with(SORT_DIRECTION, SortDirection::Desc)
            .with(SEARCH, "");

        for key in self.filter_keys() {
            state.insert(*key, "");
        }
        state
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::ALL
            .into_iter()
            .find(|entity| entity.as_str() == s)
            .ok_or_else(|| FilterError::Configuration(format!("unknown entity type '{}'", s)))
    }
}

/// Defaults for an entity type given by name
pub fn get_defaults(entity_type: &str) -> Result<FilterState, FilterError> {
    Ok(entity_type.parse::<EntityType>()?.defaults())
}

/// Initial state of a view: the entity defaults with caller overrides on top
pub fn seed(entity_type: &str, overrides: &FilterState) -> Result<FilterState, FilterError> {
    let mut state = get_defaults(entity_type)?;
    state.merge(overrides);
    Ok(state)
}

/// Filters that currently narrow the list (search included), with their
/// values as sent on the wire
pub fn active_filters(state: &FilterState, entity: EntityType) -> Vec<(&'static str, String)> {
    std::iter::once(SEARCH)
        .chain(entity.filter_keys().iter().copied())
        .filter_map(|key| match state.get(key) {
            Some(value) if !value.is_empty() => Some((key, value.to_param_string())),
            _ => None,
        })
        .collect()
}

pub fn active_filter_count(state: &FilterState, entity: EntityType) -> usize {
    active_filters(state, entity).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_defaults() {
        let state = get_defaults("customer").unwrap();
        assert_eq!(state.page(), Some(1));
        assert_eq!(state.per_page(), Some(10));
        assert_eq!(state.sort_by(), Some("created_at"));
        assert_eq!(state.sort_direction(), Some(SortDirection::Desc));
        assert_eq!(state.get(SEARCH), Some(&FilterValue::from("")));
        assert_eq!(state.get(PROVINCE_CODE), Some(&FilterValue::from("")));
        assert_eq!(state.get(CITY_CODE), Some(&FilterValue::from("")));
        assert!(!state.contains_key(START_DATE));
    }

    #[test]
    fn test_transaction_defaults_have_dates() {
        let state = get_defaults("transaction").unwrap();
        for key in [START_DATE, END_DATE, CUSTOMER_CODE, SALES_CODE] {
            assert_eq!(state.get(key), Some(&FilterValue::from("")), "{}", key);
        }
        for key in CANONICAL_KEYS {
            assert!(state.contains_key(key), "{}", key);
        }
    }

    #[test]
    fn test_unknown_entity_fails() {
        let err = get_defaults("invoice").unwrap_err();
        assert!(matches!(err, FilterError::Configuration(_)));
        assert!(seed("invoice", &FilterState::new()).is_err());
    }

    #[test]
    fn test_defaults_are_independent_copies() {
        let mut first = get_defaults("customer").unwrap();
        first.insert(SEARCH, "changed");
        let second = get_defaults("customer").unwrap();
        assert_eq!(second.search_term(), "");
    }

    #[test]
    fn test_seed_merges_overrides() {
        let overrides = FilterState::new().with(CUSTOMER_CODE, "C-001").with(PER_PAGE, 25i64);
        let state = seed("transaction", &overrides).unwrap();
        assert_eq!(state.text(CUSTOMER_CODE), "C-001");
        assert_eq!(state.per_page(), Some(25));
        assert_eq!(state.sort_by(), Some("created_at"));
        assert!(state.contains_key(SALES_CODE));
    }

    #[test]
    fn test_active_filter_count() {
        let entity = EntityType::Transaction;
        let mut state = entity.defaults();
        assert_eq!(active_filter_count(&state, entity), 0);

        state.insert(SEARCH, "acme");
        state.insert(START_DATE, "2024-01-01");
        state.insert(PAGE, 4i64);
        assert_eq!(active_filter_count(&state, entity), 2);
        assert_eq!(
            active_filters(&state, entity),
            vec![(SEARCH, "acme".to_string()), (START_DATE, "2024-01-01".to_string())]
        );
    }

    #[test]
    fn test_sortable_fields() {
        assert!(EntityType::Customer.is_sortable("name"));
        assert!(!EntityType::Customer.is_sortable("amount"));
        assert!(EntityType::Transaction.is_sortable("amount"));
    }
}

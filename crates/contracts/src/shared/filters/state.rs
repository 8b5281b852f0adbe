use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::error::FilterError;

pub const PAGE: &str = "page";
pub const PER_PAGE: &str = "perPage";
pub const SORT_BY: &str = "sortBy";
pub const SORT_DIRECTION: &str = "sortDirection";
pub const SEARCH: &str = "search";
pub const START_DATE: &str = "startDate";
pub const END_DATE: &str = "endDate";

/// Keys every entity type carries, whatever its own filters are
pub const CANONICAL_KEYS: [&str; 5] = [PAGE, PER_PAGE, SORT_BY, SORT_DIRECTION, SEARCH];

/// Allowed page sizes, in the order the per-page selector shows them
pub const PER_PAGE_OPTIONS: [i64; 4] = [10, 25, 50, 100];

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10;
pub const DEFAULT_SORT_BY: &str = "created_at";

/// Single filter value. Untagged so that a FilterState reads and writes as a
/// plain JSON object (`{"page": 1, "search": ""}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Null,
    Number(i64),
    Float(f64),
    Text(String),
}

impl FilterValue {
    /// Null and empty text mean "no filter"
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Null => true,
            FilterValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view of the value. Integral floats and numeric text count,
    /// anything else does not.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FilterValue::Number(n) => Some(*n),
            FilterValue::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            FilterValue::Text(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Text form used on the wire. Null renders as an empty string.
    pub fn to_param_string(&self) -> String {
        match self {
            FilterValue::Null => String::new(),
            FilterValue::Number(n) => n.to_string(),
            FilterValue::Float(f) => f.to_string(),
            FilterValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

impl From<SortDirection> for FilterValue {
    fn from(value: SortDirection) -> Self {
        FilterValue::Text(value.as_str().to_string())
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FilterValue::Null)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(FilterError::InvalidArgument(format!(
                "unknown sort direction '{}'",
                other
            ))),
        }
    }
}

/// Complete set of named query parameters driving one list view
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    fields: BTreeMap<String, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for literals and tests
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.fields.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<FilterValue> {
        self.fields.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Overwrites every key of `other` onto `self`
    pub fn merge(&mut self, other: &FilterState) {
        for (key, value) in other.iter() {
            self.fields.insert(key.to_string(), value.clone());
        }
    }

    pub fn page(&self) -> Option<i64> {
        self.get(PAGE).and_then(FilterValue::as_integer)
    }

    pub fn per_page(&self) -> Option<i64> {
        self.get(PER_PAGE).and_then(FilterValue::as_integer)
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.get(SORT_BY).and_then(FilterValue::as_str)
    }

    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.get(SORT_DIRECTION)
            .and_then(FilterValue::as_str)
            .and_then(|s| s.parse().ok())
    }

    pub fn search_term(&self) -> &str {
        self.text(SEARCH)
    }

    /// Text value of a key, empty when missing or not text
    pub fn text(&self, key: &str) -> &str {
        self.get(key).and_then(FilterValue::as_str).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for FilterState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut state = FilterState::new();
        for (k, v) in iter {
            state.insert(k, v);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_integer() {
        assert_eq!(FilterValue::Number(3).as_integer(), Some(3));
        assert_eq!(FilterValue::Float(3.0).as_integer(), Some(3));
        assert_eq!(FilterValue::Float(2.5).as_integer(), None);
        assert_eq!(FilterValue::from("7").as_integer(), Some(7));
        assert_eq!(FilterValue::from("abc").as_integer(), None);
        assert_eq!(FilterValue::Null.as_integer(), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(FilterValue::Null.is_empty());
        assert!(FilterValue::from("").is_empty());
        assert!(!FilterValue::from(" ").is_empty());
        assert!(!FilterValue::Number(0).is_empty());
    }

    #[test]
    fn test_sort_direction_parse() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("up".parse::<SortDirection>().is_err());
        assert!("ASC".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
    }

    #[test]
    fn test_state_json_shape() {
        let state = FilterState::new()
            .with(PAGE, 2i64)
            .with(SEARCH, "acme")
            .with(SORT_DIRECTION, SortDirection::Asc);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"page": 2, "search": "acme", "sortDirection": "asc"})
        );

        let back: FilterState =
            serde_json::from_value(serde_json::json!({"page": 2.5, "cityCode": null})).unwrap();
        assert_eq!(back.get(PAGE), Some(&FilterValue::Float(2.5)));
        assert_eq!(back.get("cityCode"), Some(&FilterValue::Null));
    }

    #[test]
    fn test_merge_overwrites() {
        let mut base = FilterState::new().with(PAGE, 1i64).with(SEARCH, "");
        base.merge(&FilterState::new().with(SEARCH, "x").with("cityCode", "C1"));
        assert_eq!(base.search_term(), "x");
        assert_eq!(base.text("cityCode"), "C1");
        assert_eq!(base.page(), Some(1));
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(FilterValue::from(i64::MAX), FilterValue::Number(i64::MAX));
        assert_eq!(FilterValue::from(-3i64), FilterValue::Number(-3));
        assert_eq!(FilterValue::from(2.5f64), FilterValue::Float(2.5));
        assert_eq!(FilterValue::from(None::<i64>), FilterValue::Null);
        assert_eq!(FilterValue::from(Some("x")), FilterValue::Text("x".into()));
    }
}

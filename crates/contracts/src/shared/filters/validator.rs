use super::state::*;

/// Repairs page, page size and sort direction so the state is always safe to
/// send. Never fails: bad values are replaced, other keys pass through.
pub fn validate(state: &FilterState) -> FilterState {
    let mut next = state.clone();

    let page = state
        .get(PAGE)
        .and_then(FilterValue::as_integer)
        .filter(|page| *page >= 1)
        .unwrap_or(DEFAULT_PAGE);
    next.insert(PAGE, page);

    let per_page = state
        .get(PER_PAGE)
        .and_then(FilterValue::as_integer)
        .filter(|per_page| PER_PAGE_OPTIONS.contains(per_page))
        .unwrap_or(DEFAULT_PER_PAGE);
    next.insert(PER_PAGE, per_page);

    let direction = state.sort_direction().unwrap_or(SortDirection::Desc);
    next.insert(SORT_DIRECTION, direction);

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::defaults::get_defaults;

    #[test]
    fn test_repairs_invalid_values() {
        let state = FilterState::new()
            .with(PAGE, -1i64)
            .with(PER_PAGE, 999i64)
            .with(SORT_DIRECTION, "up");
        let fixed = validate(&state);
        assert_eq!(fixed.get(PAGE), Some(&FilterValue::Number(1)));
        assert_eq!(fixed.get(PER_PAGE), Some(&FilterValue::Number(10)));
        assert_eq!(fixed.get(SORT_DIRECTION), Some(&FilterValue::from("desc")));
    }

    #[test]
    fn test_repairs_missing_keys() {
        let fixed = validate(&FilterState::new().with(SEARCH, "acme"));
        assert_eq!(fixed.page(), Some(1));
        assert_eq!(fixed.per_page(), Some(10));
        assert_eq!(fixed.sort_direction(), Some(SortDirection::Desc));
        assert_eq!(fixed.search_term(), "acme");
    }

    #[test]
    fn test_page_shapes() {
        let page_of = |value: FilterValue| validate(&FilterState::new().with(PAGE, value)).page();
        assert_eq!(page_of(FilterValue::Number(0)), Some(1));
        assert_eq!(page_of(FilterValue::Float(2.5)), Some(1));
        assert_eq!(page_of(FilterValue::Float(3.0)), Some(3));
        assert_eq!(page_of(FilterValue::from("4")), Some(4));
        assert_eq!(page_of(FilterValue::from("four")), Some(1));
        assert_eq!(page_of(FilterValue::Null), Some(1));
    }

    #[test]
    fn test_numeric_text_is_normalized() {
        let state = FilterState::new().with(PAGE, "2").with(PER_PAGE, "25");
        let fixed = validate(&state);
        assert_eq!(fixed.get(PAGE), Some(&FilterValue::Number(2)));
        assert_eq!(fixed.get(PER_PAGE), Some(&FilterValue::Number(25)));
    }

    #[test]
    fn test_keeps_valid_values_and_other_keys() {
        let state = get_defaults("transaction")
            .unwrap()
            .with(PAGE, 7i64)
            .with(PER_PAGE, 50i64)
            .with(SORT_DIRECTION, "asc")
            .with("customerCode", "C-9");
        assert_eq!(validate(&state), state);
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            FilterState::new(),
            FilterState::new()
                .with(PAGE, "x")
                .with(PER_PAGE, 12.0f64)
                .with(SORT_DIRECTION, "ASC"),
            get_defaults("customer").unwrap().with(PAGE, 2.0f64),
            get_defaults("transaction").unwrap().with(PER_PAGE, FilterValue::Null),
        ];
        for state in samples {
            let once = validate(&state);
            assert_eq!(validate(&once), once);
        }
    }
}

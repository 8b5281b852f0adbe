//! Filter state transitions
//!
//! Every function takes the current state and returns the next one. Any change
//! other than an explicit page change moves the view back to page 1, since the
//! old position means nothing under a new filter or sort.

use super::defaults::get_defaults;
use super::error::FilterError;
use super::state::*;

pub fn set_field(
    state: &FilterState,
    key: &str,
    value: impl Into<FilterValue>,
) -> FilterState {
    let mut next = state.clone();
    next.insert(key, value);
    if key != PAGE {
        next.insert(PAGE, DEFAULT_PAGE);
    }
    next
}

/// Compound update from a filter panel submit. Page goes back to 1 even when
/// `partial` carries its own page.
pub fn set_fields(state: &FilterState, partial: &FilterState) -> FilterState {
    let mut next = state.clone();
    next.merge(partial);
    next.insert(PAGE, DEFAULT_PAGE);
    next
}

pub fn change_page(state: &FilterState, page: i64) -> Result<FilterState, FilterError> {
    if page < 1 {
        return Err(FilterError::InvalidArgument(format!(
            "page must be a positive integer, got {}",
            page
        )));
    }
    let mut next = state.clone();
    next.insert(PAGE, page);
    Ok(next)
}

pub fn change_per_page(state: &FilterState, per_page: i64) -> FilterState {
    let mut next = state.clone();
    next.insert(PER_PAGE, per_page);
    next.insert(PAGE, DEFAULT_PAGE);
    next
}

pub fn change_sorting(
    state: &FilterState,
    sort_by: &str,
    sort_direction: SortDirection,
) -> FilterState {
    let mut next = state.clone();
    next.insert(SORT_BY, sort_by);
    next.insert(SORT_DIRECTION, sort_direction);
    next.insert(PAGE, DEFAULT_PAGE);
    next
}

/// Header click: same column flips the direction, a new column starts descending
pub fn toggle_sort(state: &FilterState, field: &str) -> FilterState {
    let direction = if state.sort_by() == Some(field) {
        state.sort_direction().unwrap_or_default().toggled()
    } else {
        SortDirection::Desc
    };
    change_sorting(state, field, direction)
}

pub fn search(state: &FilterState, term: &str) -> FilterState {
    set_field(state, SEARCH, term)
}

/// No ordering check between the two dates
pub fn set_date_range(state: &FilterState, start_date: &str, end_date: &str) -> FilterState {
    let mut next = state.clone();
    next.insert(START_DATE, start_date);
    next.insert(END_DATE, end_date);
    next.insert(PAGE, DEFAULT_PAGE);
    next
}

pub fn reset(_state: &FilterState, entity_type: &str) -> Result<FilterState, FilterError> {
    get_defaults(entity_type)
}

/// A user intent against a list view
#[derive(Debug, Clone, PartialEq)]
pub enum FilterIntent {
    SetField { key: String, value: FilterValue },
    SetFields(FilterState),
    ChangePage(i64),
    ChangePerPage(i64),
    ChangeSorting { sort_by: String, direction: SortDirection },
    ToggleSort(String),
    Search(String),
    SetDateRange { start_date: String, end_date: String },
    Reset { entity_type: String },
}

impl FilterIntent {
    /// Only a page change keeps the current position meaningful
    pub fn resets_page(&self) -> bool {
        match self {
            FilterIntent::ChangePage(_) => false,
            FilterIntent::SetField { key, .. } => key != PAGE,
            _ => true,
        }
    }
}

pub fn apply(state: &FilterState, intent: &FilterIntent) -> Result<FilterState, FilterError> {
    let next = match intent {
        FilterIntent::SetField { key, value } => set_field(state, key, value.clone()),
        FilterIntent::SetFields(partial) => set_fields(state, partial),
        FilterIntent::ChangePage(page) => change_page(state, *page)?,
        FilterIntent::ChangePerPage(per_page) => change_per_page(state, *per_page),
        FilterIntent::ChangeSorting { sort_by, direction } => {
            change_sorting(state, sort_by, *direction)
        }
        FilterIntent::ToggleSort(field) => toggle_sort(state, field),
        FilterIntent::Search(term) => search(state, term),
        FilterIntent::SetDateRange {
            start_date,
            end_date,
        } => set_date_range(state, start_date, end_date),
        FilterIntent::Reset { entity_type } => reset(state, entity_type)?,
    };
    Ok(next)
}

use contracts::shared::filters::defaults::{CITY_CODE, PROVINCE_CODE};
use contracts::shared::filters::FilterState;
use leptos::prelude::*;

/// Filter form values being edited before they are applied
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerFilterDraft {
    pub province_code: String,
    pub city_code: String,
}

impl CustomerFilterDraft {
    pub fn from_state(state: &FilterState) -> Self {
        Self {
            province_code: state.text(PROVINCE_CODE).to_string(),
            city_code: state.text(CITY_CODE).to_string(),
        }
    }

    /// Partial state for one `SetFields` change
    pub fn to_partial(&self) -> FilterState {
        FilterState::new()
            .with(PROVINCE_CODE, self.province_code.trim())
            .with(CITY_CODE, self.city_code.trim())
    }
}

pub fn create_draft(state: &FilterState) -> RwSignal<CustomerFilterDraft> {
    RwSignal::new(CustomerFilterDraft::from_state(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::filters::EntityType;

    #[test]
    fn test_draft_from_defaults_is_empty() {
        let draft = CustomerFilterDraft::from_state(&EntityType::Customer.defaults());
        assert_eq!(draft, CustomerFilterDraft::default());
    }

    #[test]
    fn test_to_partial_trims_values() {
        let draft = CustomerFilterDraft {
            province_code: " 31 ".to_string(),
            city_code: String::new(),
        };
        let partial = draft.to_partial();
        assert_eq!(partial.text(PROVINCE_CODE), "31");
        assert_eq!(partial.text(CITY_CODE), "");
        assert_eq!(partial.len(), 2);
    }
}

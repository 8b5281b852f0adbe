//! Owner of one list view's filter state
//!
//! Turns each intent into the next validated state and a [`FetchCommand`] the
//! view executes. Requests are numbered so that a response arriving after a
//! newer request was issued can be recognised and dropped.

use contracts::shared::filters::{
    active_filter_count, apply, build_params, seed, validate, EntityType, FilterError,
    FilterIntent, FilterState, ParamMap,
};

use crate::shared::request_seq::RequestSeq;

/// Request the view must send after a transition
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCommand {
    pub seq: u64,
    pub params: ParamMap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListController {
    entity: EntityType,
    state: FilterState,
    seq: RequestSeq,
}

impl ListController {
    pub fn new(entity: EntityType) -> Self {
        Self {
            entity,
            state: validate(&entity.defaults()),
            seq: RequestSeq::default(),
        }
    }

    /// Defaults of `entity_type` with `overrides` merged on top
    pub fn with_overrides(entity_type: &str, overrides: &FilterState) -> Result<Self, FilterError> {
        let entity: EntityType = entity_type.parse()?;
        let state = seed(entity_type, overrides)?;
        Ok(Self {
            entity,
            state: validate(&state),
            seq: RequestSeq::default(),
        })
    }

    pub fn entity(&self) -> EntityType {
        self.entity
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn active_filter_count(&self) -> usize {
        active_filter_count(&self.state, self.entity)
    }

    /// Applies `intent`. On error the state is left as it was and no request
    /// is issued. A reset must name this controller's own entity.
    pub fn dispatch(&mut self, intent: FilterIntent) -> Result<FetchCommand, FilterError> {
        if let FilterIntent::Reset { entity_type } = &intent {
            if entity_type != self.entity.as_str() {
                return Err(FilterError::Configuration(format!(
                    "cannot reset {} filters to '{}' defaults",
                    self.entity, entity_type
                )));
            }
        }
        let next = apply(&self.state, &intent)?;
        self.state = validate(&next);
        log::debug!(
            "{} filters: {:?} -> page {:?}",
            self.entity,
            intent,
            self.state.page()
        );
        Ok(self.next_command())
    }

    /// Back to the entity defaults
    pub fn reset(&mut self) -> FetchCommand {
        self.state = validate(&self.entity.defaults());
        log::debug!("{} filters reset", self.entity);
        self.next_command()
    }

    /// Re-issues the current query, e.g. on mount or a manual refresh
    pub fn refresh(&mut self) -> FetchCommand {
        self.next_command()
    }

    /// True while no newer request has been issued after `seq`
    pub fn is_current(&self, seq: u64) -> bool {
        self.seq.is_current(seq)
    }

    fn next_command(&mut self) -> FetchCommand {
        FetchCommand {
            seq: self.seq.next(),
            params: build_params(&self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::filters::state::{FilterValue, PAGE, PER_PAGE, SEARCH, START_DATE};
    use contracts::shared::filters::SortDirection;

    #[test]
    fn test_initial_refresh_uses_defaults() {
        let mut controller = ListController::new(EntityType::Transaction);
        let command = controller.refresh();
        assert_eq!(command.seq, 1);
        assert_eq!(command.params.get(PAGE), Some(&FilterValue::Number(1)));
        assert!(command.params.contains_key(START_DATE));
        assert!(!command.params.contains_key(SEARCH));
    }

    #[test]
    fn test_dispatch_validates_and_resets_page() {
        let mut controller = ListController::new(EntityType::Customer);
        controller.dispatch(FilterIntent::ChangePage(4)).unwrap();
        assert_eq!(controller.state().page(), Some(4));

        let command = controller
            .dispatch(FilterIntent::Search("acme".into()))
            .unwrap();
        assert_eq!(controller.state().page(), Some(1));
        assert_eq!(command.params.get(SEARCH), Some(&FilterValue::from("acme")));

        // 33 is not an allowed page size
        controller.dispatch(FilterIntent::ChangePerPage(33)).unwrap();
        assert_eq!(controller.state().per_page(), Some(10));
    }

    #[test]
    fn test_failed_intent_keeps_state() {
        let mut controller = ListController::new(EntityType::Customer);
        controller.dispatch(FilterIntent::ChangePage(3)).unwrap();
        let before = controller.clone();

        assert!(controller.dispatch(FilterIntent::ChangePage(0)).is_err());
        assert!(controller
            .dispatch(FilterIntent::Reset {
                entity_type: "unknown".into()
            })
            .is_err());
        assert_eq!(controller, before);
    }

    #[test]
    fn test_reset_to_other_entity_is_rejected() {
        let mut controller = ListController::new(EntityType::Transaction);
        controller.dispatch(FilterIntent::ChangePage(2)).unwrap();
        let before = controller.clone();

        let err = controller
            .dispatch(FilterIntent::Reset {
                entity_type: "customer".into(),
            })
            .unwrap_err();
        assert!(matches!(err, FilterError::Configuration(_)));
        assert_eq!(controller, before);

        let command = controller
            .dispatch(FilterIntent::Reset {
                entity_type: "transaction".into(),
            })
            .unwrap();
        assert_eq!(controller.entity(), EntityType::Transaction);
        assert!(command.params.contains_key(START_DATE));
        assert!(command.params.contains_key("endDate"));
        assert_eq!(controller.state().page(), Some(1));
    }

    #[test]
    fn test_stale_responses_are_detected() {
        let mut controller = ListController::new(EntityType::Customer);
        let first = controller.refresh();
        let second = controller
            .dispatch(FilterIntent::ChangeSorting {
                sort_by: "name".into(),
                direction: SortDirection::Asc,
            })
            .unwrap();
        assert!(!controller.is_current(first.seq));
        assert!(controller.is_current(second.seq));
    }

    #[test]
    fn test_with_overrides_and_reset() {
        let overrides = FilterState::new()
            .with("customerCode", "C-7")
            .with(PER_PAGE, 25i64);
        let mut controller = ListController::with_overrides("transaction", &overrides).unwrap();
        assert_eq!(controller.state().text("customerCode"), "C-7");
        assert_eq!(controller.active_filter_count(), 1);

        controller.reset();
        assert_eq!(controller.state(), &validate(&EntityType::Transaction.defaults()));
        assert!(ListController::with_overrides("invoice", &overrides).is_err());
    }
}

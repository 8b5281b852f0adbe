//! Reactive wrapper of [`ListController`] for server-paginated list pages
//!
//! The page owns one [`ListView`]; every filter intent goes through
//! `dispatch`, which updates the filter state and runs the fetch it produces.

use std::future::Future;

use contracts::shared::filters::{FilterIntent, ParamMap};
use contracts::shared::pagination::{ListResponse, PaginationDescriptor};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::data_table::SortState;
use crate::shared::list_controller::{FetchCommand, ListController};

#[derive(Debug, Clone)]
pub struct ListViewState<T> {
    pub controller: ListController,
    pub items: Vec<T>,
    pub pagination: Option<PaginationDescriptor>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> ListViewState<T> {
    fn new(controller: ListController) -> Self {
        Self {
            controller,
            items: Vec::new(),
            pagination: None,
            is_loading: false,
            error: None,
        }
    }

    pub fn sort(&self) -> Option<SortState> {
        SortState::from_filters(self.controller.state())
    }

    /// Stores the outcome of the current request. A failed request leaves no
    /// rows or pager behind that belong to the previous filters.
    fn apply_response(&mut self, result: Result<ListResponse<T>, String>) {
        self.is_loading = false;
        match result {
            Ok(response) => {
                self.pagination = Some(PaginationDescriptor::from(&response.meta));
                self.items = response.data;
                self.error = None;
            }
            Err(e) => {
                log::error!("Failed to load {} list: {}", self.controller.entity(), e);
                self.items.clear();
                self.pagination = None;
                self.error = Some(e);
            }
        }
    }
}

pub struct ListView<T: 'static> {
    pub state: RwSignal<ListViewState<T>>,
    pub dispatch: Callback<FilterIntent>,
    pub reset: Callback<()>,
    pub refresh: Callback<()>,
}

impl<T: 'static> Clone for ListView<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ListView<T> {}

impl<T: Clone + Send + Sync + 'static> ListView<T> {
    pub fn items(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items.clone()))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading))
    }

    pub fn pagination(&self) -> Signal<Option<PaginationDescriptor>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.pagination))
    }

    pub fn sort(&self) -> Signal<Option<SortState>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.sort()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    pub fn active_filters_count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.controller.active_filter_count()))
    }
}

/// Creates the list state and issues the first request.
///
/// `fetch` receives the wire parameters of one request. A response that
/// arrives after a newer request was issued is dropped.
pub fn use_list_view<T, F, Fut>(controller: ListController, fetch: F) -> ListView<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(ParamMap) -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<ListResponse<T>, String>> + 'static,
{
    let state = RwSignal::new(ListViewState::new(controller));

    let execute = move |command: FetchCommand| {
        state.update(|s| {
            s.is_loading = true;
            s.error = None;
        });
        let seq = command.seq;
        spawn_local(async move {
            let result = fetch(command.params).await;

            // None once the page is gone
            if state.try_with_untracked(|s| s.controller.is_current(seq)) != Some(true) {
                log::debug!("Dropping stale list response #{}", seq);
                return;
            }

            state.update(|s| s.apply_response(result));
        });
    };

    let dispatch = Callback::new(move |intent: FilterIntent| {
        match state.try_update(|s| s.controller.dispatch(intent)) {
            Some(Ok(command)) => execute(command),
            Some(Err(e)) => {
                log::warn!("Rejected filter change: {}", e);
                state.update(|s| s.error = Some(e.to_string()));
            }
            None => {}
        }
    });

    let reset = Callback::new(move |_: ()| {
        if let Some(command) = state.try_update(|s| s.controller.reset()) {
            execute(command);
        }
    });

    let refresh = Callback::new(move |_: ()| {
        if let Some(command) = state.try_update(|s| s.controller.refresh()) {
            execute(command);
        }
    });

    refresh.run(());

    ListView {
        state,
        dispatch,
        reset,
        refresh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::filters::EntityType;
    use contracts::shared::pagination::PaginationMeta;

    fn page_of(items: Vec<&str>, current_page: u64) -> ListResponse<String> {
        ListResponse {
            meta: PaginationMeta {
                current_page,
                per_page: 10,
                total: 35,
                last_page: 4,
                from: None,
                to: None,
            },
            data: items.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_successful_response_fills_rows_and_pager() {
        let mut state = ListViewState::new(ListController::new(EntityType::Customer));
        state.is_loading = true;
        state.apply_response(Ok(page_of(vec!["C-1", "C-2"], 2)));

        assert!(!state.is_loading);
        assert_eq!(state.items, vec!["C-1", "C-2"]);
        assert_eq!(state.pagination.map(|p| p.current_page), Some(2));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failed_response_clears_previous_page() {
        let mut state = ListViewState::new(ListController::new(EntityType::Customer));
        state.apply_response(Ok(page_of(vec!["C-1"], 1)));

        state.is_loading = true;
        state.apply_response(Err("HTTP error: 500".to_string()));

        assert!(!state.is_loading);
        assert!(state.items.is_empty());
        assert_eq!(state.pagination, None);
        assert_eq!(state.error.as_deref(), Some("HTTP error: 500"));
    }
}

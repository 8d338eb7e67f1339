//! Lead List State
//!
//! Every load takes a ticket; only the newest ticket may touch the list, the
//! error or the loading flag, so a slow response cannot overwrite a newer one.

use super::{ReleaseGuard, StateHandle};
use crate::api::{ApiError, LeadApi};
use crate::models::Lead;

/// Shown above the table when the latest load failed
pub const LOAD_ERROR_NOTICE: &str = "Could not load leads";

/// Identity of one list request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct LeadListState {
    pub leads: Vec<Lead>,
    pub loading: bool,
    /// Set when the latest load failed; the stale list stays visible
    pub error: Option<String>,
    latest: LoadTicket,
}

impl Default for LeadListState {
    fn default() -> Self {
        Self {
            leads: Vec::new(),
            // first load starts on mount
            loading: true,
            error: None,
            latest: LoadTicket(0),
        }
    }
}

impl LeadListState {
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest = LoadTicket(self.latest.0 + 1);
        self.loading = true;
        self.latest
    }

    pub fn is_latest(&self, ticket: LoadTicket) -> bool {
        ticket == self.latest
    }

    /// Apply a list response. Responses for superseded tickets are dropped.
    pub fn apply(&mut self, ticket: LoadTicket, result: Result<Vec<Lead>, ApiError>) -> LoadOutcome {
        if !self.is_latest(ticket) {
            return LoadOutcome::Superseded;
        }
        match result {
            Ok(leads) => {
                self.leads = leads;
                self.error = None;
                LoadOutcome::Replaced(self.leads.len())
            }
            Err(err) => {
                self.error = Some(LOAD_ERROR_NOTICE.to_string());
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Clear the loading flag if `ticket` is still the newest load
    pub fn settle(&mut self, ticket: LoadTicket) {
        if self.is_latest(ticket) {
            self.loading = false;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// List replaced with this many leads
    Replaced(usize),
    /// Previous list kept
    Failed(ApiError),
    /// A newer load started meanwhile; response ignored
    Superseded,
    /// The list state no longer exists
    Detached,
}

/// Fetch the lead list and replace the displayed one.
pub async fn load_leads<A, H>(api: &A, list: &H) -> LoadOutcome
where
    A: LeadApi + ?Sized,
    H: StateHandle<LeadListState>,
{
    let Some(ticket) = list.modify(LeadListState::begin_load) else {
        return LoadOutcome::Detached;
    };
    let _loading = ReleaseGuard::new(|| {
        list.modify(|state| state.settle(ticket));
    });

    let result = api.list_leads().await;
    let outcome = list
        .modify(|state| state.apply(ticket, result))
        .unwrap_or(LoadOutcome::Detached);

    match &outcome {
        LoadOutcome::Replaced(count) => tracing::debug!(?ticket, count, "leads loaded"),
        LoadOutcome::Failed(err) => tracing::error!(?ticket, error = %err, "failed to load leads"),
        LoadOutcome::Superseded => tracing::debug!(?ticket, "stale lead list dropped"),
        LoadOutcome::Detached => {}
    }
    outcome
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::state::testing::{lead, FakeApi};

    #[test]
    fn test_starts_loading() {
        let state = LeadListState::default();
        assert!(state.loading);
        assert!(state.leads.is_empty());
    }

    #[tokio::test]
    async fn test_load_replaces_list_in_backend_order() {
        let list = RefCell::new(LeadListState::default());
        list.borrow_mut().leads = vec![lead("old", "Old")];
        let api = FakeApi::listing(vec![Ok(vec![lead("b", "Bea"), lead("a", "Ali")])]);

        let outcome = load_leads(&api, &list).await;

        assert_eq!(outcome, LoadOutcome::Replaced(2));
        assert_eq!(api.list_calls.get(), 1);
        let state = list.borrow();
        let ids: Vec<_> = state.leads.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_load_empty_response_clears_list() {
        let list = RefCell::new(LeadListState::default());
        list.borrow_mut().leads = vec![lead("old", "Old")];
        let api = FakeApi::listing(vec![Ok(Vec::new())]);

        load_leads(&api, &list).await;

        assert!(list.borrow().leads.is_empty());
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_list() {
        let list = RefCell::new(LeadListState::default());
        let api = FakeApi::listing(vec![
            Ok(vec![lead("a", "Ali")]),
            Err(ApiError::transport("/leads", "offline")),
        ]);

        load_leads(&api, &list).await;
        let outcome = load_leads(&api, &list).await;

        assert!(matches!(outcome, LoadOutcome::Failed(_)));
        let state = list.borrow();
        assert_eq!(state.leads, vec![lead("a", "Ali")]);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(LOAD_ERROR_NOTICE));
    }

    #[tokio::test]
    async fn test_successful_load_clears_previous_error() {
        let list = RefCell::new(LeadListState::default());
        let api = FakeApi::listing(vec![Err(ApiError::Decode("eof".to_string())), Ok(vec![lead("a", "Ali")])]);

        load_leads(&api, &list).await;
        assert!(list.borrow().error.is_some());
        load_leads(&api, &list).await;

        assert_eq!(list.borrow().error, None);
        assert_eq!(api.list_calls.get(), 2);
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let mut state = LeadListState::default();
        let first = state.begin_load();
        let second = state.begin_load();

        assert_eq!(state.apply(second, Ok(vec![lead("new", "New")])), LoadOutcome::Replaced(1));
        state.settle(second);
        assert!(!state.loading);

        assert_eq!(state.apply(first, Ok(vec![lead("old", "Old")])), LoadOutcome::Superseded);
        assert_eq!(state.leads[0].id, "new");
    }

    #[test]
    fn test_stale_settle_keeps_loading() {
        let mut state = LeadListState::default();
        let first = state.begin_load();
        let _second = state.begin_load();

        state.settle(first);
        assert!(state.loading);
        assert!(matches!(
            state.apply(first, Err(ApiError::Rejected)),
            LoadOutcome::Superseded
        ));
        assert_eq!(state.error, None);
    }
}

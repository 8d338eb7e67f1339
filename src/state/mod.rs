//! Component State
//!
//! Each component owns one plain state struct held in a Leptos `RwSignal`.
//! The async drivers here only touch that state through [`StateHandle`], so
//! they run unchanged against a `RefCell` in tests.

mod entry_form;
mod lead_list;

use leptos::prelude::*;

pub use entry_form::{submit_lead, EntryFormState, SubmitOutcome};
pub use lead_list::{load_leads, LeadListState, LoadOutcome, LoadTicket};

/// Shared, mutable access to a component's state
pub trait StateHandle<T> {
    /// Run `f` against the state; `None` if the state is gone (component unmounted).
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateHandle<T> for RwSignal<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Runs `release` when dropped, whichever way the owning scope exits.
pub struct ReleaseGuard<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> ReleaseGuard<F> {
    pub fn new(release: F) -> Self {
        Self(Some(release))
    }
}

impl<F: FnOnce()> Drop for ReleaseGuard<F> {
    fn drop(&mut self) {
        if let Some(release) = self.0.take() {
            release();
        }
    }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn test_release_runs_on_drop() {
        let flag = RefCell::new(true);
        {
            let _release = ReleaseGuard::new(|| {
                flag.modify(|busy| *busy = false);
            });
            assert!(*flag.borrow());
        }
        assert!(!*flag.borrow());
    }
}

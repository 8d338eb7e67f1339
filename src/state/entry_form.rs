//! Entry Form State
//!
//! Draft values plus the busy flag guarding one in-flight submission.

use std::str::FromStr;

use super::{ReleaseGuard, StateHandle};
use crate::api::{ApiError, LeadApi};
use crate::models::{Lead, LeadDraft, LeadField, UnknownField};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFormState {
    pub draft: LeadDraft,
    /// True while a create request is in flight
    pub busy: bool,
}

impl EntryFormState {
    pub fn set_field(&mut self, field: LeadField, value: String) {
        self.draft.set(field, value);
    }

    /// Update a field by its wire name; unknown names leave the draft as is.
    pub fn set_field_by_name(&mut self, name: &str, value: String) -> Result<(), UnknownField> {
        let field = LeadField::from_str(name)?;
        self.set_field(field, value);
        Ok(())
    }

    /// Mark the form busy and hand out the draft to send.
    /// Returns `None` when a submission is already running.
    pub fn begin_submit(&mut self) -> Option<LeadDraft> {
        if self.busy {
            return None;
        }
        self.busy = true;
        Some(self.draft.clone())
    }

    pub fn clear(&mut self) {
        self.draft = LeadDraft::default();
    }
}

/// Result of one press of the submit button
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A submission was already in flight
    Skipped,
    Created,
    /// Draft kept; the error decides the notice shown
    Failed(ApiError),
}

/// Send the current draft as a new lead.
///
/// On success `on_created` runs with the stored lead (when the backend echoes
/// it) and the draft is reset. On failure the draft is untouched. `busy` is
/// released on every exit path.
pub async fn submit_lead<A, H>(api: &A, form: &H, on_created: impl FnOnce(Option<Lead>)) -> SubmitOutcome
where
    A: LeadApi + ?Sized,
    H: StateHandle<EntryFormState>,
{
    let Some(Some(draft)) = form.modify(EntryFormState::begin_submit) else {
        tracing::debug!("submit ignored, lead creation already in flight");
        return SubmitOutcome::Skipped;
    };
    let _busy = ReleaseGuard::new(|| {
        form.modify(|state| state.busy = false);
    });

    match api.create_lead(&draft).await {
        Ok(lead) => {
            match &lead {
                Some(lead) => tracing::info!(id = %lead.id, "lead created"),
                None => tracing::warn!("lead created, backend sent no record back"),
            }
            on_created(lead);
            form.modify(EntryFormState::clear);
            SubmitOutcome::Created
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to create lead");
            SubmitOutcome::Failed(err)
        }
    }
}

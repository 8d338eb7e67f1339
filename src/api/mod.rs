//! Lead Backend Bindings
//!
//! Frontend bindings to the lead HTTP API.

mod client;
mod error;
mod wire;

use std::rc::Rc;

use async_trait::async_trait;

use crate::models::{Lead, LeadDraft};

pub use client::LeadClient;
pub use error::ApiError;
pub use wire::{decode_created, decode_listed};

/// Backend operations the UI depends on
///
/// Futures are not `Send`; everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait LeadApi {
    /// Persist a new lead from the draft; the stored lead if the backend echoes it
    async fn create_lead(&self, draft: &LeadDraft) -> Result<Option<Lead>, ApiError>;

    /// Most recent leads, in backend order
    async fn list_leads(&self) -> Result<Vec<Lead>, ApiError>;
}

#[async_trait(?Send)]
impl<T: LeadApi + ?Sized> LeadApi for Rc<T> {
    async fn create_lead(&self, draft: &LeadDraft) -> Result<Option<Lead>, ApiError> {
        (**self).create_lead(draft).await
    }

    async fn list_leads(&self) -> Result<Vec<Lead>, ApiError> {
        (**self).list_leads().await
    }
}

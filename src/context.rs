//! Application Context
//!
//! The backend client is provided once by `App` and read by the components
//! that issue requests.

use leptos::prelude::*;

use crate::api::LeadClient;

pub fn provide_lead_client(client: LeadClient) {
    provide_context(client);
}

/// Get the lead client from context
pub fn use_lead_client() -> LeadClient {
    expect_context::<LeadClient>()
}

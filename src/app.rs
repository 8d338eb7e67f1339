//! Lead Intake App
//!
//! Root component: entry form above the recent leads table.

use leptos::prelude::*;

use crate::api::LeadClient;
use crate::components::{EntryForm, LeadList};
use crate::config::AppConfig;
use crate::context::provide_lead_client;
use crate::models::Lead;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_lead_client(LeadClient::new(&config));

    // Bumped once per created lead; LeadList reloads on every change
    let (refresh, set_refresh) = signal(0u32);

    let on_created = move |lead: Option<Lead>| {
        tracing::debug!(id = ?lead.map(|l| l.id), "refreshing lead list");
        bump_refresh(set_refresh);
    };

    view! {
        <div class="page">
            <div class="container">
                <h1>"PK Lead Intake & Follow-up"</h1>
                <EntryForm on_created=on_created />
                <LeadList refresh=refresh />
            </div>
        </div>
    }
}

/// Advance the refresh counter by one; readers react to the change.
pub fn bump_refresh(set_refresh: WriteSignal<u32>) {
    set_refresh.update(|r| *r = r.wrapping_add(1));
}

//! Entry Form Component
//!
//! Collects a lead draft and submits it to the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_lead_client;
use crate::models::{Lead, LeadField};
use crate::state::{submit_lead, EntryFormState, SubmitOutcome};

/// Form for creating a new lead
///
/// # Arguments
/// * `on_created` - Runs once after a successful submit, with the stored lead
///   when the backend sends it back
#[component]
pub fn EntryForm(#[prop(into)] on_created: Callback<Option<Lead>>) -> impl IntoView {
    let client = use_lead_client();
    let form = RwSignal::new(EntryFormState::default());
    let busy = move || form.with(|state| state.busy);

    // Shared by every input; the input's `name` picks the draft field
    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let name = input.name();
        let result = form.try_update(|state| state.set_field_by_name(&name, input.value()));
        if let Some(Err(err)) = result {
            tracing::warn!(error = %err, "input ignored");
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let client = client.clone();
        spawn_local(async move {
            if let SubmitOutcome::Failed(err) = submit_lead(&client, &form, |lead| on_created.run(lead)).await {
                notify(err.create_notice());
            }
        });
    };

    view! {
        <form class="entry-form" on:submit=submit>
            <div class="entry-grid">
                {LeadField::ALL.into_iter().map(|field| {
                    let class = if field.wide() { "entry-input wide" } else { "entry-input" };
                    view! {
                        <input
                            class=class
                            type="text"
                            name=field.name()
                            placeholder=field.placeholder()
                            required=field.required()
                            prop:value=move || form.with(|state| state.draft.get(field).to_string())
                            on:input=on_input
                        />
                    }
                }).collect_view()}
            </div>
            <button type="submit" class="submit-btn" disabled=busy>
                {move || if busy() { "Saving..." } else { "Add Lead" }}
            </button>
        </form>
    }
}

fn notify(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                tracing::warn!(%message, "could not show alert");
            }
        }
        None => tracing::warn!(%message, "no window to show alert"),
    }
}

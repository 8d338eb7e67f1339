//! UI Components
//!
//! Leptos components of the lead intake page.

mod entry_form;
mod lead_list;

pub use entry_form::EntryForm;
pub use lead_list::LeadList;

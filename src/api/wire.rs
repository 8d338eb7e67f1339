//! Response Envelopes
//!
//! The backend wraps every payload in a small JSON envelope. Status codes are
//! not interpreted; the body alone decides success.

use serde::Deserialize;

use super::ApiError;
use crate::models::Lead;

#[derive(Debug, Deserialize)]
struct CreateLeadResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    lead: Option<Lead>,
}

#[derive(Debug, Deserialize)]
struct ListLeadsResponse {
    #[serde(default)]
    leads: Option<Vec<Lead>>,
}

/// Decode the body of `POST /leads`. `ok` alone decides success; the stored
/// lead is echoed back when the backend includes it.
pub fn decode_created(body: &str) -> Result<Option<Lead>, ApiError> {
    let response: CreateLeadResponse = serde_json::from_str(body)?;
    if response.ok {
        Ok(response.lead)
    } else {
        Err(ApiError::Rejected)
    }
}

/// Decode the body of `GET /leads`; a missing `leads` array means no leads.
pub fn decode_listed(body: &str) -> Result<Vec<Lead>, ApiError> {
    let response: ListLeadsResponse = serde_json::from_str(body)?;
    Ok(response.leads.unwrap_or_default())
}

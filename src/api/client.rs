//! Fetch-based Lead Client

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{decode_created, decode_listed, ApiError, LeadApi};
use crate::config::AppConfig;
use crate::models::{Lead, LeadDraft};

const LEADS_PATH: &str = "/leads";

/// HTTP client for the lead backend, backed by `window.fetch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadClient {
    base: String,
}

impl LeadClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base: config.api_base.clone(),
        }
    }

    /// Absolute (or origin-relative, when no base is configured) endpoint URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn fetch_text(&self, method: &str, url: &str, body: Option<String>) -> Result<String, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::transport(url, "no window"))?;

        let init = RequestInit::new();
        init.set_method(method);
        if let Some(body) = &body {
            init.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &init)
            .map_err(|e| ApiError::transport(url, js_message(&e)))?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(|e| ApiError::transport(url, js_message(&e)))?;
        }

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::transport(url, js_message(&e)))?
            .dyn_into()
            .map_err(|_| ApiError::transport(url, "fetch did not resolve to a Response"))?;
        tracing::debug!(%method, %url, status = response.status(), "lead request settled");

        let text = JsFuture::from(
            response
                .text()
                .map_err(|e| ApiError::transport(url, js_message(&e)))?,
        )
        .await
        .map_err(|e| ApiError::transport(url, js_message(&e)))?;

        text.as_string()
            .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))
    }
}

#[async_trait(?Send)]
impl LeadApi for LeadClient {
    async fn create_lead(&self, draft: &LeadDraft) -> Result<Option<Lead>, ApiError> {
        let url = self.endpoint(LEADS_PATH);
        let body = serde_json::to_string(draft)?;
        let text = self.fetch_text("POST", &url, Some(body)).await?;
        decode_created(&text)
    }

    async fn list_leads(&self) -> Result<Vec<Lead>, ApiError> {
        let url = self.endpoint(LEADS_PATH);
        let text = self.fetch_text("GET", &url, None).await?;
        decode_listed(&text)
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

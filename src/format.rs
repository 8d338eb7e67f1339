//! Display Helpers
//!
//! Turns a lead into the strings shown in one table row.

#[cfg(not(target_arch = "wasm32"))]
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::models::Lead;

/// Shown for absent or empty optional values
pub const PLACEHOLDER: &str = "-";

/// Same text the browser shows for `new Date(garbage)`
pub const INVALID_DATE: &str = "Invalid Date";

/// Header labels, in column order
pub const COLUMNS: [&str; 8] = ["Name", "Phone", "Area", "Job", "Source", "Status", "Assigned", "Created"];

/// Cells for one lead, in [`COLUMNS`] order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRow {
    pub key: String,
    pub cells: [String; 8],
}

impl From<&Lead> for LeadRow {
    fn from(lead: &Lead) -> Self {
        Self {
            key: lead.id.clone(),
            cells: [
                lead.name.clone(),
                lead.phone.clone(),
                or_placeholder(lead.area.as_deref()),
                or_placeholder(lead.job_category.as_deref()),
                lead.source.clone(),
                lead.status.clone(),
                or_placeholder(lead.assigned_sales_whatsapp.as_deref()),
                format_timestamp(&lead.timestamp),
            ],
        }
    }
}

pub fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Locale-formatted local date and time, as `new Date(raw).toLocaleString()`
/// would show it. All-digit values are epoch milliseconds.
pub fn format_timestamp(raw: &str) -> String {
    locale_string(raw.trim()).unwrap_or_else(|| INVALID_DATE.to_string())
}

#[cfg(target_arch = "wasm32")]
fn locale_string(raw: &str) -> Option<String> {
    use wasm_bindgen::JsValue;

    let value = match raw.parse::<i64>() {
        Ok(millis) => JsValue::from_f64(millis as f64),
        Err(_) => JsValue::from_str(raw),
    };
    let date = js_sys::Date::new(&value);
    if date.get_time().is_nan() {
        return None;
    }
    Some(String::from(date.to_locale_string("default", &JsValue::UNDEFINED)))
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_string(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|instant| instant.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())
}

/// Native mirror of the browser's date parsing: offset-less date-times are
/// local, date-only values are UTC midnight.
#[cfg(not(target_arch = "wasm32"))]
fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    use chrono::{NaiveDate, Utc};

    if let Ok(millis) = raw.parse::<i64>() {
        return Utc.timestamp_millis_opt(millis).single().map(|dt| dt.with_timezone(&Local));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight).with_timezone(&Local));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()?;
    Local.from_local_datetime(&naive).earliest()
}

//! Frontend Models
//!
//! Data structures matching the lead backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Lead as returned by the backend.
///
/// `id`, `source`, `status` and `timestamp` are assigned server-side and never
/// sent by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub job_category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assigned_sales_whatsapp: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    /// Raw instant as sent by the backend; epoch numbers keep their digits
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: String,
}

/// `null` becomes empty and scalars keep their text, so one odd record
/// cannot fail a whole response.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Fields the user can edit before submitting a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    Phone,
    Area,
    JobCategory,
    Description,
    AssignedSalesWhatsapp,
}

impl LeadField {
    /// Form order
    pub const ALL: [LeadField; 6] = [
        LeadField::Name,
        LeadField::Phone,
        LeadField::Area,
        LeadField::JobCategory,
        LeadField::Description,
        LeadField::AssignedSalesWhatsapp,
    ];

    /// Wire name, also used as the input's `name` attribute
    pub fn name(self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Phone => "phone",
            LeadField::Area => "area",
            LeadField::JobCategory => "job_category",
            LeadField::Description => "description",
            LeadField::AssignedSalesWhatsapp => "assigned_sales_whatsapp",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            LeadField::Name => "Name",
            LeadField::Phone => "Phone",
            LeadField::Area => "Area",
            LeadField::JobCategory => "Job category",
            LeadField::Description => "Description",
            LeadField::AssignedSalesWhatsapp => "Assigned sales WhatsApp (+60...)",
        }
    }

    /// Marked `required` on the input; not re-checked on submit.
    pub fn required(self) -> bool {
        matches!(self, LeadField::Name | LeadField::Phone)
    }

    /// Long free-text fields span the whole form row
    pub fn wide(self) -> bool {
        matches!(self, LeadField::Description | LeadField::AssignedSalesWhatsapp)
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a field name does not match any [`LeadField`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown lead field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for LeadField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Client-side draft of a lead; serialized as the create request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadDraft {
    pub name: String,
    pub phone: String,
    pub area: String,
    pub job_category: String,
    pub description: String,
    pub assigned_sales_whatsapp: String,
}

impl LeadDraft {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Phone => &self.phone,
            LeadField::Area => &self.area,
            LeadField::JobCategory => &self.job_category,
            LeadField::Description => &self.description,
            LeadField::AssignedSalesWhatsapp => &self.assigned_sales_whatsapp,
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        let slot = match field {
            LeadField::Name => &mut self.name,
            LeadField::Phone => &mut self.phone,
            LeadField::Area => &mut self.area,
            LeadField::JobCategory => &mut self.job_category,
            LeadField::Description => &mut self.description,
            LeadField::AssignedSalesWhatsapp => &mut self.assigned_sales_whatsapp,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in LeadField::ALL {
            assert_eq!(field.name().parse::<LeadField>(), Ok(field));
        }
        assert_eq!(
            "email".parse::<LeadField>(),
            Err(UnknownField("email".to_string()))
        );
    }

    #[test]
    fn test_only_name_and_phone_required() {
        let required: Vec<_> = LeadField::ALL.into_iter().filter(|f| f.required()).collect();
        assert_eq!(required, vec![LeadField::Name, LeadField::Phone]);
    }

    #[test]
    fn test_draft_set_touches_one_field() {
        let mut draft = LeadDraft::default();
        draft.set(LeadField::JobCategory, "plumbing".to_string());

        assert_eq!(draft.job_category, "plumbing");
        assert_eq!(draft.get(LeadField::JobCategory), "plumbing");
        assert!(draft.name.is_empty());
        assert!(draft.area.is_empty());
        assert_ne!(draft, LeadDraft::default());
    }

    #[test]
    fn test_draft_serializes_every_field() {
        let draft = LeadDraft {
            name: "Ali".to_string(),
            phone: "+60123".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["name"], "Ali");
        assert_eq!(json["phone"], "+60123");
        assert_eq!(json["assigned_sales_whatsapp"], "");
        assert_eq!(json.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_lead_tolerates_missing_and_null_optionals() {
        let lead: Lead = serde_json::from_str(
            r#"{"_id":"a1","name":"Ali","phone":"+60123","area":null,"source":"manual","status":"new","timestamp":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(lead.id, "a1");
        assert_eq!(lead.area, None);
        assert_eq!(lead.job_category, None);
        assert_eq!(lead.source, "manual");
    }

    #[test]
    fn test_lead_tolerates_null_backend_fields() {
        let lead: Lead = serde_json::from_str(
            r#"{"_id":"a2","name":"Bea","phone":null,"source":null,"status":null,"timestamp":1714557600000}"#,
        )
        .unwrap();

        assert_eq!(lead.name, "Bea");
        assert_eq!(lead.phone, "");
        assert_eq!(lead.source, "");
        assert_eq!(lead.status, "");
        assert_eq!(lead.timestamp, "1714557600000");
    }
}

//! Canonical enquiry record and its partial-update form.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{EnquiryStatus, RecordId};

/// A customer enquiry in canonical shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EnquiryRecord {
    /// Store identifier; `None` only for documents stored without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Name of the person enquiring; empty when unknown.
    pub name: String,
    /// Contact e-mail; empty when unknown.
    pub email: String,
    /// Contact phone; empty when unknown.
    pub phone: String,
    /// Desired event date.
    pub event_date: Option<String>,
    /// Desired location.
    pub location: Option<String>,
    /// Free-text guest count, e.g. `"10-15"`.
    pub guests: Option<String>,
    /// Free-text budget, e.g. `"$500-800"`.
    pub budget: Option<String>,
    /// Special requests.
    pub special_requests: Option<String>,
    /// Message body.
    pub message: Option<String>,
    /// Legacy resolution flag; [`EnquiryRecord::status`] takes precedence.
    pub is_resolved: Option<bool>,
    /// Handling status.
    pub status: EnquiryStatus,
    /// Creation timestamp (ISO 8601).
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601).
    pub updated_at: Option<String>,
}

/// Partial enquiry update. `None` and empty strings are never written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EnquiryPatch {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New e-mail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New event date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    /// New location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// New guest-count descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<String>,
    /// New budget descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    /// New special requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// New message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// New legacy resolution flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_resolved: Option<bool>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnquiryStatus>,
}

impl EnquiryPatch {
    /// A patch that only changes the enquiry status.
    #[must_use]
    pub fn status(status: EnquiryStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl From<&EnquiryRecord> for EnquiryPatch {
    /// Every field of `record`, as an edit form submits it.
    fn from(record: &EnquiryRecord) -> Self {
        Self {
            name: Some(record.name.clone()),
            email: Some(record.email.clone()),
            phone: Some(record.phone.clone()),
            event_date: record.event_date.clone(),
            location: record.location.clone(),
            guests: record.guests.clone(),
            budget: record.budget.clone(),
            special_requests: record.special_requests.clone(),
            message: record.message.clone(),
            is_resolved: record.is_resolved,
            status: Some(record.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_patch_sets_only_status() {
        let patch = EnquiryPatch::status(EnquiryStatus::Reviewed);
        let json = serde_json::to_value(&patch).unwrap_or_default();
        assert_eq!(json, serde_json::json!({"status": "Reviewed"}));
    }

    #[test]
    fn record_deserializes_with_defaults() {
        let record: EnquiryRecord =
            serde_json::from_str(r#"{"name":"John Doe"}"#).unwrap_or_default();
        assert_eq!(record.name, "John Doe");
        assert_eq!(record.status, EnquiryStatus::Pending);
        assert!(record.location.is_none());
    }
}

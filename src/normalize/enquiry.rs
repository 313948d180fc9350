//! Enquiry documents ⇄ [`EnquiryRecord`].

use super::aliases::{enquiry as alias, timestamps};
use crate::domain::{EnquiryPatch, EnquiryRecord, RawDocument, map_enquiry_status};

/// Builds an [`EnquiryRecord`] from any source document.
///
/// Name, e-mail and phone default to empty strings; the status comes from
/// [`map_enquiry_status`], so an explicit `status` field beats the legacy
/// `isResolved` flag.
#[must_use]
pub fn normalize_enquiry(doc: &RawDocument) -> EnquiryRecord {
    let is_resolved = doc.flag(alias::IS_RESOLVED);
    let status = doc.text(alias::STATUS);

    EnquiryRecord {
        id: doc.identifier(),
        name: doc.text(alias::NAME).unwrap_or_default(),
        email: doc.text(alias::EMAIL).unwrap_or_default(),
        phone: doc.text(alias::PHONE).unwrap_or_default(),
        event_date: doc.text(alias::EVENT_DATE),
        location: doc.text(alias::LOCATION),
        guests: doc.text(alias::GUESTS),
        budget: doc.text(alias::BUDGET),
        special_requests: doc.text(alias::SPECIAL_REQUESTS),
        message: doc.text(alias::MESSAGE),
        is_resolved,
        status: map_enquiry_status(is_resolved, status.as_deref()),
        created_at: doc.text(timestamps::CREATED_AT),
        updated_at: doc.text(timestamps::UPDATED_AT),
    }
}

/// Maps a partial enquiry back onto source field names.
///
/// Enquiry documents already use the canonical names. Absent values and
/// empty strings are both dropped.
#[must_use]
pub fn denormalize_enquiry(patch: &EnquiryPatch) -> RawDocument {
    let mut doc = RawDocument::new();

    let texts = [
        ("name", &patch.name),
        ("email", &patch.email),
        ("phone", &patch.phone),
        ("eventDate", &patch.event_date),
        ("location", &patch.location),
        ("guests", &patch.guests),
        ("budget", &patch.budget),
        ("specialRequests", &patch.special_requests),
        ("message", &patch.message),
    ];
    for (key, value) in texts {
        doc.insert_opt(key, value.clone().filter(|s| !s.is_empty()));
    }
    doc.insert_opt("isResolved", patch.is_resolved);
    doc.insert_opt("status", patch.status.map(|s| s.as_str()));

    doc
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{EnquiryStatus, RecordId};
    use serde_json::{Value, json};

    fn doc(value: Value) -> RawDocument {
        let Some(doc) = RawDocument::from_value(value) else {
            panic!("expected an object");
        };
        doc
    }

    #[test]
    fn empty_document_gets_defaults() {
        let record = normalize_enquiry(&RawDocument::new());
        assert_eq!(record.name, "");
        assert_eq!(record.email, "");
        assert_eq!(record.phone, "");
        assert_eq!(record.status, EnquiryStatus::Pending);
        assert!(record.guests.is_none());
        assert!(record.is_resolved.is_none());
    }

    #[test]
    fn resolved_flag_without_status_closes() {
        let record = normalize_enquiry(&doc(json!({"_id": "e1", "isResolved": true})));
        assert_eq!(record.id, Some(RecordId::from("e1")));
        assert_eq!(record.status, EnquiryStatus::Closed);
        assert_eq!(record.is_resolved, Some(true));
    }

    #[test]
    fn status_string_beats_resolved_flag() {
        let record = normalize_enquiry(&doc(json!({"isResolved": true, "status": "Reviewed"})));
        assert_eq!(record.status, EnquiryStatus::Reviewed);
    }

    #[test]
    fn message_and_requests_borrow_from_each_other() {
        let record = normalize_enquiry(&doc(json!({"message": "Any slots in November?"})));
        assert_eq!(record.special_requests.as_deref(), Some("Any slots in November?"));
        assert_eq!(record.message.as_deref(), Some("Any slots in November?"));

        let record = normalize_enquiry(&doc(json!({"notes": "Call back"})));
        assert_eq!(record.special_requests, None);
        assert_eq!(record.message.as_deref(), Some("Call back"));
    }

    #[test]
    fn numeric_guest_count_becomes_text() {
        let record = normalize_enquiry(&doc(json!({"numberOfGuests": 20})));
        assert_eq!(record.guests.as_deref(), Some("20"));
    }

    #[test]
    fn denormalize_drops_empty_strings() {
        let patch = EnquiryPatch {
            name: Some(String::new()),
            budget: Some("$500-800".to_string()),
            status: Some(EnquiryStatus::Closed),
            ..EnquiryPatch::default()
        };
        let doc = denormalize_enquiry(&patch);
        assert_eq!(doc.len(), 2);
        assert!(!doc.contains_key("name"));
        assert_eq!(doc.get("status"), Some(&json!("Closed")));
    }

    #[test]
    fn round_trip_is_stable() {
        let source = doc(json!({
            "_id": "e2",
            "name": "Jane Smith",
            "email": "jane@example.com",
            "phone": "098-765-4321",
            "eventDate": "2025-11-02",
            "location": "Los Angeles",
            "guests": "20-25",
            "budget": "$800-1200",
            "specialRequests": "Package for 20 kids",
            "message": "Availability in November?",
            "isResolved": false,
            "status": "reviewed"
        }));
        let first = normalize_enquiry(&source);
        let mut second = normalize_enquiry(&denormalize_enquiry(&EnquiryPatch::from(&first)));
        second.id.clone_from(&first.id);
        assert_eq!(first, second);
    }
}

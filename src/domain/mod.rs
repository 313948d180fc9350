//! Domain layer: canonical records, raw source documents, and status
//! vocabularies.
//!
//! Canonical records are what the dashboard reads and edits. Raw
//! documents are what the document store actually holds; the
//! [`crate::normalize`] module translates between the two.

pub mod booking;
pub mod enquiry;
pub mod raw_document;
pub mod record_id;
pub mod status;

pub use booking::{ActivityItem, AddonItem, BookingPatch, BookingRecord, PackageDetails, ThemeItem};
pub use enquiry::{EnquiryPatch, EnquiryRecord};
pub use raw_document::RawDocument;
pub use record_id::RecordId;
pub use status::{
    BookingStatus, EnquiryStatus, PaymentStatus, map_booking_status, map_enquiry_status,
    map_payment_status,
};

//! Field normalizer: source documents ⇄ canonical records.
//!
//! Normalization is total. Any JSON object, including `{}`, yields a
//! fully-populated canonical record; the alias tables in [`aliases`]
//! decide which source field feeds which canonical field.
//!
//! Denormalization is the inverse for writes: it maps the populated
//! fields of a patch onto source field names and leaves everything else
//! out. It is not a perfect inverse. Guest counts are re-encoded as range
//! strings and only the first theme of a booking is written back.

pub mod aliases;
pub mod booking;
pub mod enquiry;
pub mod guests;

pub use booking::{denormalize_booking, normalize_booking};
pub use enquiry::{denormalize_enquiry, normalize_enquiry};
pub use guests::{encode_guest_range, parse_guest_count};

//! Status vocabularies and the synonym tables that collapse free-form
//! source strings into them.
//!
//! The store holds whatever the public booking form or an earlier admin
//! tool wrote: `"CONFIRM"`, `"booked"`, `"canceled"`, or nothing at all.
//! Every lookup is case-insensitive and total; unknown input maps to the
//! `Pending` variant of the target vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum BookingStatus {
    /// Awaiting confirmation.
    #[default]
    Pending,
    /// Accepted by the business.
    Confirmed,
    /// The party took place.
    Completed,
    /// Called off.
    Cancelled,
}

/// Payment progress of a booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PaymentStatus {
    /// Nothing paid yet.
    #[default]
    Pending,
    /// Deposit or part payment received.
    Partial,
    /// Fully paid.
    Paid,
    /// Money returned to the customer.
    Refunded,
}

/// Handling status of an enquiry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EnquiryStatus {
    /// Not yet looked at.
    #[default]
    Pending,
    /// Seen and followed up.
    Reviewed,
    /// Resolved.
    Closed,
}

const BOOKING_SYNONYMS: &[(&str, BookingStatus)] = &[
    ("pending", BookingStatus::Pending),
    ("confirmed", BookingStatus::Confirmed),
    ("confirm", BookingStatus::Confirmed),
    ("active", BookingStatus::Confirmed),
    ("booked", BookingStatus::Confirmed),
    ("cancelled", BookingStatus::Cancelled),
    ("cancel", BookingStatus::Cancelled),
    ("canceled", BookingStatus::Cancelled),
    ("completed", BookingStatus::Completed),
    ("complete", BookingStatus::Completed),
    ("finished", BookingStatus::Completed),
    ("done", BookingStatus::Completed),
];

const PAYMENT_SYNONYMS: &[(&str, PaymentStatus)] = &[
    ("pending", PaymentStatus::Pending),
    ("partial", PaymentStatus::Partial),
    ("paid", PaymentStatus::Paid),
    ("refunded", PaymentStatus::Refunded),
];

const ENQUIRY_SYNONYMS: &[(&str, EnquiryStatus)] = &[
    ("pending", EnquiryStatus::Pending),
    ("reviewed", EnquiryStatus::Reviewed),
    ("closed", EnquiryStatus::Closed),
];

fn find<T: Copy>(table: &[(&str, T)], raw: &str) -> Option<T> {
    let key = raw.trim().to_lowercase();
    table
        .iter()
        .find(|(synonym, _)| *synonym == key)
        .map(|(_, status)| *status)
}

fn lookup<T: Copy + Default>(table: &[(&str, T)], raw: Option<&str>) -> T {
    raw.and_then(|raw| find(table, raw)).unwrap_or_default()
}

/// Maps a raw booking status string onto [`BookingStatus`].
#[must_use]
pub fn map_booking_status(raw: Option<&str>) -> BookingStatus {
    lookup(BOOKING_SYNONYMS, raw)
}

/// Maps a raw payment status string onto [`PaymentStatus`].
#[must_use]
pub fn map_payment_status(raw: Option<&str>) -> PaymentStatus {
    lookup(PAYMENT_SYNONYMS, raw)
}

/// Resolves an enquiry's status from its two redundant source signals.
///
/// A non-empty `status` string always wins over the legacy `is_resolved`
/// flag. Only when `status` is absent does the flag decide: `true` means
/// [`EnquiryStatus::Closed`], anything else [`EnquiryStatus::Pending`].
#[must_use]
pub fn map_enquiry_status(is_resolved: Option<bool>, status: Option<&str>) -> EnquiryStatus {
    match status.filter(|s| !s.is_empty()) {
        Some(status) => lookup(ENQUIRY_SYNONYMS, Some(status)),
        None if is_resolved == Some(true) => EnquiryStatus::Closed,
        None => EnquiryStatus::Pending,
    }
}

impl BookingStatus {
    /// Every variant, in display order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Canonical spelling as stored and displayed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Strict lookup: `None` for strings outside the synonym table.
    #[must_use]
    pub fn from_synonym(raw: &str) -> Option<Self> {
        find(BOOKING_SYNONYMS, raw)
    }
}

impl PaymentStatus {
    /// Every variant, in display order.
    pub const ALL: [Self; 4] = [Self::Pending, Self::Partial, Self::Paid, Self::Refunded];

    /// Canonical spelling as stored and displayed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Partial => "Partial",
            Self::Paid => "Paid",
            Self::Refunded => "Refunded",
        }
    }

    /// Strict lookup: `None` for strings outside the synonym table.
    #[must_use]
    pub fn from_synonym(raw: &str) -> Option<Self> {
        find(PAYMENT_SYNONYMS, raw)
    }
}

impl EnquiryStatus {
    /// Every variant, in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Reviewed, Self::Closed];

    /// Canonical spelling as stored and displayed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Reviewed => "Reviewed",
            Self::Closed => "Closed",
        }
    }

    /// Strict lookup: `None` for strings outside the synonym table.
    #[must_use]
    pub fn from_synonym(raw: &str) -> Option<Self> {
        find(ENQUIRY_SYNONYMS, raw)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EnquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_lookup_rejects_unknown() {
        assert_eq!(BookingStatus::from_synonym(" Booked "), Some(BookingStatus::Confirmed));
        assert_eq!(BookingStatus::from_synonym("someday"), None);
        assert_eq!(EnquiryStatus::from_synonym("CLOSED"), Some(EnquiryStatus::Closed));
        assert_eq!(PaymentStatus::from_synonym(""), None);
    }

    #[test]
    fn booking_synonyms_in_any_case() {
        for (raw, expected) in BOOKING_SYNONYMS {
            assert_eq!(map_booking_status(Some(*raw)), *expected, "{raw}");
            assert_eq!(
                map_booking_status(Some(raw.to_uppercase().as_str())),
                *expected,
                "{raw}"
            );
        }
        assert_eq!(
            map_booking_status(Some("CONFIRM")),
            BookingStatus::Confirmed
        );
        assert_eq!(map_booking_status(Some("Done")), BookingStatus::Completed);
    }

    #[test]
    fn unknown_booking_status_is_pending() {
        assert_eq!(map_booking_status(None), BookingStatus::Pending);
        assert_eq!(map_booking_status(Some("")), BookingStatus::Pending);
        assert_eq!(map_booking_status(Some("on hold")), BookingStatus::Pending);
    }

    #[test]
    fn payment_status_lookup() {
        assert_eq!(map_payment_status(Some("PAID")), PaymentStatus::Paid);
        assert_eq!(map_payment_status(Some("partial")), PaymentStatus::Partial);
        assert_eq!(map_payment_status(Some("Refunded")), PaymentStatus::Refunded);
        assert_eq!(map_payment_status(Some("owed")), PaymentStatus::Pending);
        assert_eq!(map_payment_status(None), PaymentStatus::Pending);
    }

    #[test]
    fn enquiry_status_string_wins_over_flag() {
        assert_eq!(
            map_enquiry_status(Some(true), Some("reviewed")),
            EnquiryStatus::Reviewed
        );
        assert_eq!(
            map_enquiry_status(Some(true), Some("PENDING")),
            EnquiryStatus::Pending
        );
        // An unrecognized string still shadows the flag.
        assert_eq!(
            map_enquiry_status(Some(true), Some("archived")),
            EnquiryStatus::Pending
        );
    }

    #[test]
    fn enquiry_status_falls_back_to_flag() {
        assert_eq!(map_enquiry_status(Some(true), None), EnquiryStatus::Closed);
        assert_eq!(map_enquiry_status(Some(false), None), EnquiryStatus::Pending);
        assert_eq!(map_enquiry_status(None, None), EnquiryStatus::Pending);
        assert_eq!(map_enquiry_status(Some(true), Some("")), EnquiryStatus::Closed);
    }

    #[test]
    fn serializes_with_canonical_spelling() {
        let json = serde_json::to_string(&BookingStatus::Cancelled).unwrap_or_default();
        assert_eq!(json, "\"Cancelled\"");
        for status in EnquiryStatus::ALL {
            assert_eq!(status.to_string(), status.as_str());
        }
    }
}

//! Canonical booking record and its partial-update form.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{BookingStatus, PaymentStatus, RecordId};

/// Package summary attached to a booking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageDetails {
    /// Package display name.
    pub name: String,
    /// Base price of the package.
    pub price: f64,
    /// Duration label, e.g. `"3 hours"`.
    pub duration: String,
    /// Services bundled with the package.
    pub included_services: Vec<String>,
}

/// An add-on line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AddonItem {
    /// Add-on name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Number of units.
    pub quantity: u32,
}

/// An activity scheduled during the party.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityItem {
    /// Activity name.
    pub name: String,
    /// Duration label, e.g. `"45 minutes"`.
    pub duration: String,
    /// Age-group label, e.g. `"5-12"`.
    pub age_group: String,
}

/// A decoration theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeItem {
    /// Theme name.
    pub name: String,
    /// Decoration items.
    pub decorations: Vec<String>,
    /// Color palette.
    pub colors: Vec<String>,
}

/// A booking in canonical shape.
///
/// Every field is populated regardless of what the source document
/// contained; see [`crate::normalize::normalize_booking`] for the
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRecord {
    /// Store identifier; `None` only for documents stored without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Customer's full name.
    pub customer_name: String,
    /// Customer e-mail address.
    pub customer_email: Option<String>,
    /// Customer phone number.
    pub customer_phone: Option<String>,
    /// Event date (ISO `YYYY-MM-DD`); empty when unknown.
    pub event_date: String,
    /// Event start time, e.g. `"14:00"`.
    pub event_time: Option<String>,
    /// Venue or room.
    pub event_location: String,
    /// Package name.
    pub package: String,
    /// Package summary.
    pub package_details: PackageDetails,
    /// Selected add-ons, in order.
    pub addons: Vec<AddonItem>,
    /// Selected activities, in order.
    pub activities: Vec<ActivityItem>,
    /// Selected themes, in order.
    pub themes: Vec<ThemeItem>,
    /// Total price; never negative.
    pub total_amount: f64,
    /// Payment progress.
    pub payment_status: PaymentStatus,
    /// Booking lifecycle status.
    pub status: BookingStatus,
    /// Expected number of guests.
    pub number_of_guests: Option<u32>,
    /// Special requests, one per entry.
    pub special_requests: Vec<String>,
    /// Free-form admin notes.
    pub notes: String,
    /// Creation timestamp (ISO 8601).
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601).
    pub updated_at: Option<String>,
}

/// Partial booking update.
///
/// `None` means "leave the stored value alone". Explicit JSON `null`
/// deserializes to `None` as well, so it never reaches the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingPatch {
    /// New customer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// New customer e-mail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// New customer phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    /// New event date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    /// New event time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,
    /// New event location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_location: Option<String>,
    /// New package name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// New package summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_details: Option<PackageDetails>,
    /// Replacement add-on list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addons: Option<Vec<AddonItem>>,
    /// Replacement activity list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<ActivityItem>>,
    /// Replacement theme list; only the first theme is written back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub themes: Option<Vec<ThemeItem>>,
    /// New total amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    /// New payment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    /// New booking status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    /// New guest count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_guests: Option<u32>,
    /// Replacement special-request list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<Vec<String>>,
    /// New notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp to carry through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl BookingPatch {
    /// A patch that only changes the booking status.
    #[must_use]
    pub fn status(status: BookingStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl From<&BookingRecord> for BookingPatch {
    /// Every field of `record`, as an edit form submits it.
    fn from(record: &BookingRecord) -> Self {
        Self {
            customer_name: Some(record.customer_name.clone()),
            customer_email: record.customer_email.clone(),
            customer_phone: record.customer_phone.clone(),
            event_date: Some(record.event_date.clone()),
            event_time: record.event_time.clone(),
            event_location: Some(record.event_location.clone()),
            package: Some(record.package.clone()),
            package_details: Some(record.package_details.clone()),
            addons: Some(record.addons.clone()),
            activities: Some(record.activities.clone()),
            themes: Some(record.themes.clone()),
            total_amount: Some(record.total_amount),
            payment_status: Some(record.payment_status),
            status: Some(record.status),
            number_of_guests: record.number_of_guests,
            special_requests: Some(record.special_requests.clone()),
            notes: Some(record.notes.clone()),
            created_at: record.created_at.clone(),
        }
    }
}

//! Booking documents ⇄ [`BookingRecord`].

use serde_json::{Value, json};

use super::aliases::{booking as alias, item, timestamps};
use super::guests::{encode_guest_range, parse_guest_count};
use crate::domain::{
    ActivityItem, AddonItem, BookingPatch, BookingRecord, PackageDetails, RawDocument, ThemeItem,
    map_booking_status, map_payment_status,
};

const UNKNOWN_CUSTOMER: &str = "Unknown Customer";
const UNKNOWN_PACKAGE: &str = "Unknown Package";
const UNKNOWN_ADDON: &str = "Unknown Addon";
const UNKNOWN_ACTIVITY: &str = "Unknown Activity";
const UNKNOWN_THEME: &str = "Unknown Theme";
const LOCATION_TBD: &str = "TBD";
const NOT_AVAILABLE: &str = "N/A";
const ALL_AGES: &str = "All ages";

/// Builds a [`BookingRecord`] from any source document.
///
/// Total: every canonical field has a deterministic default, so this
/// never fails, whatever the document contains.
#[must_use]
pub fn normalize_booking(doc: &RawDocument) -> BookingRecord {
    let status = doc.text(alias::STATUS);
    let payment_status = doc.text(alias::PAYMENT_STATUS);

    BookingRecord {
        id: doc.identifier(),
        customer_name: doc
            .text(alias::CUSTOMER_NAME)
            .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
        customer_email: doc.text(alias::CUSTOMER_EMAIL),
        customer_phone: doc.text(alias::CUSTOMER_PHONE),
        event_date: doc.text(alias::EVENT_DATE).unwrap_or_default(),
        event_time: doc.text(alias::EVENT_TIME),
        event_location: doc
            .text(alias::EVENT_LOCATION)
            .unwrap_or_else(|| LOCATION_TBD.to_string()),
        package: doc
            .text(alias::PACKAGE)
            .unwrap_or_else(|| UNKNOWN_PACKAGE.to_string()),
        package_details: package_details(doc),
        addons: elements(doc.list(alias::ADDONS), addon),
        activities: elements(doc.list(alias::ACTIVITIES), activity),
        themes: themes(doc),
        total_amount: doc.amount(alias::TOTAL_AMOUNT).unwrap_or(0.0),
        payment_status: map_payment_status(payment_status.as_deref()),
        status: map_booking_status(status.as_deref()),
        number_of_guests: guest_count(doc),
        special_requests: doc.strings(alias::SPECIAL_REQUESTS).unwrap_or_default(),
        notes: doc.text(alias::NOTES).unwrap_or_default(),
        created_at: doc.text(timestamps::CREATED_AT),
        updated_at: doc.text(timestamps::UPDATED_AT),
    }
}

/// Maps a partial booking back onto source field names.
///
/// Only populated fields are emitted, so a partial update never clobbers
/// unrelated fields in the store. The guest count is re-encoded as a
/// range string (see [`encode_guest_range`]) and only the first theme is
/// written, as `selectedTheme`.
#[must_use]
pub fn denormalize_booking(patch: &BookingPatch) -> RawDocument {
    let mut doc = RawDocument::new();

    doc.insert_opt("fullName", patch.customer_name.clone());
    doc.insert_opt("email", patch.customer_email.clone());
    doc.insert_opt("phoneNumber", patch.customer_phone.clone());
    doc.insert_opt("eventDate", patch.event_date.clone());
    doc.insert_opt("eventTime", patch.event_time.clone());
    doc.insert_opt("location", patch.event_location.clone());
    doc.insert_opt(
        "expectedGuests",
        patch
            .number_of_guests
            .filter(|n| *n > 0)
            .map(encode_guest_range),
    );
    doc.insert_opt("status", patch.status.map(|s| s.as_str()));
    doc.insert_opt("paymentStatus", patch.payment_status.map(|s| s.as_str()));
    doc.insert_opt("notes", patch.notes.clone());

    doc.insert_opt("packageTitle", patch.package.clone());
    if let Some(details) = &patch.package_details {
        doc.insert("packageSubtitle", details.name.clone());
        doc.insert("basePrice", details.price);
        doc.insert("packageDuration", details.duration.clone());
        doc.insert("includedServices", details.included_services.clone());
    }

    doc.insert_opt(
        "selectedAddOns",
        patch.addons.as_ref().map(|addons| {
            addons
                .iter()
                .map(|a| json!({"name": a.name, "price": a.price, "quantity": a.quantity}))
                .collect::<Vec<_>>()
        }),
    );
    doc.insert_opt(
        "selectedActivities",
        patch.activities.as_ref().map(|activities| {
            activities
                .iter()
                .map(|a| json!({"name": a.name, "duration": a.duration, "ageGroup": a.age_group}))
                .collect::<Vec<_>>()
        }),
    );
    doc.insert_opt(
        "selectedTheme",
        patch
            .themes
            .as_ref()
            .and_then(|themes| themes.first())
            .map(|t| json!({"title": t.name, "decorations": t.decorations, "colors": t.colors})),
    );

    doc.insert_opt(
        "totalPrice",
        patch.total_amount.filter(|a| a.is_finite() && *a >= 0.0),
    );
    doc.insert_opt("specialRequests", patch.special_requests.clone());
    doc.insert_opt("createdAt", patch.created_at.clone());

    doc
}

fn package_details(doc: &RawDocument) -> PackageDetails {
    if let Some(nested) = doc.nested(alias::PACKAGE_DETAILS) {
        return PackageDetails {
            name: nested
                .text(item::DETAILS_NAME)
                .unwrap_or_else(|| UNKNOWN_PACKAGE.to_string()),
            price: nested.amount(item::PRICE).unwrap_or(0.0),
            duration: nested
                .text(item::DURATION)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            included_services: nested.strings(item::DETAILS_SERVICES).unwrap_or_default(),
        };
    }
    PackageDetails {
        name: doc
            .text(alias::PACKAGE_DETAILS_NAME)
            .unwrap_or_else(|| UNKNOWN_PACKAGE.to_string()),
        price: doc.amount(alias::PACKAGE_PRICE).unwrap_or(0.0),
        duration: doc
            .text(alias::PACKAGE_DURATION)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        included_services: doc.strings(alias::INCLUDED_SERVICES).unwrap_or_default(),
    }
}

fn elements<T>(list: Option<&[Value]>, map: fn(&RawDocument) -> T) -> Vec<T> {
    list.unwrap_or_default()
        .iter()
        .map(|value| map(&RawDocument::from_value(value.clone()).unwrap_or_default()))
        .collect()
}

fn addon(doc: &RawDocument) -> AddonItem {
    AddonItem {
        name: doc
            .text(item::NAME)
            .unwrap_or_else(|| UNKNOWN_ADDON.to_string()),
        price: doc.amount(item::PRICE).unwrap_or(0.0),
        quantity: item::QUANTITY
            .iter()
            .filter_map(|key| doc.present(key))
            .find_map(parse_guest_count)
            .unwrap_or(1),
    }
}

fn activity(doc: &RawDocument) -> ActivityItem {
    ActivityItem {
        name: doc
            .text(item::NAME)
            .unwrap_or_else(|| UNKNOWN_ACTIVITY.to_string()),
        duration: doc
            .text(item::DURATION)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        age_group: doc
            .text(item::AGE_GROUP)
            .unwrap_or_else(|| ALL_AGES.to_string()),
    }
}

fn theme(doc: &RawDocument) -> ThemeItem {
    ThemeItem {
        name: doc
            .text(item::THEME_NAME)
            .unwrap_or_else(|| UNKNOWN_THEME.to_string()),
        decorations: doc.strings(item::DECORATIONS).unwrap_or_default(),
        colors: doc.strings(item::COLORS).unwrap_or_default(),
    }
}

fn themes(doc: &RawDocument) -> Vec<ThemeItem> {
    match doc.present(alias::SELECTED_THEME) {
        Some(selected) => vec![theme(
            &RawDocument::from_value(selected.clone()).unwrap_or_default(),
        )],
        None => elements(doc.list(alias::THEMES), theme),
    }
}

fn guest_count(doc: &RawDocument) -> Option<u32> {
    std::iter::once(alias::EXPECTED_GUESTS)
        .chain(alias::NUMBER_OF_GUESTS.iter().copied())
        .filter_map(|key| doc.present(key))
        .filter_map(parse_guest_count)
        .find(|n| *n > 0)
}

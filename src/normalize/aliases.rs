//! Alias tables: which source field names feed which canonical field.
//!
//! Each table lists source keys in priority order; the first present
//! value wins. Keeping them here, rather than inline in the mapping
//! code, makes every resolution rule reviewable in one place.

/// Booking document aliases.
pub mod booking {
    /// Customer name.
    pub const CUSTOMER_NAME: &[&str] = &["fullName", "customerName"];
    /// Customer e-mail.
    pub const CUSTOMER_EMAIL: &[&str] = &["email", "customerEmail"];
    /// Customer phone.
    pub const CUSTOMER_PHONE: &[&str] = &["phoneNumber", "customerPhone", "phone"];
    /// Event date.
    pub const EVENT_DATE: &[&str] = &["eventDate", "event_date", "date"];
    /// Event time.
    pub const EVENT_TIME: &[&str] = &["eventTime", "time"];
    /// Event location.
    pub const EVENT_LOCATION: &[&str] = &["location", "eventLocation"];
    /// Package name.
    pub const PACKAGE: &[&str] = &["packageTitle", "package", "packageName"];
    /// Package details name when no nested `packageDetails` object exists.
    pub const PACKAGE_DETAILS_NAME: &[&str] = &["packageSubtitle", "packageTitle", "package"];
    /// Package base price.
    pub const PACKAGE_PRICE: &[&str] = &["basePrice", "packagePrice", "price"];
    /// Package duration.
    pub const PACKAGE_DURATION: &[&str] = &["packageDuration", "duration"];
    /// Services included in the package.
    pub const INCLUDED_SERVICES: &[&str] = &["includedServices"];
    /// Nested package details object.
    pub const PACKAGE_DETAILS: &str = "packageDetails";
    /// Add-on list.
    pub const ADDONS: &[&str] = &["selectedAddOns", "addons"];
    /// Activity list.
    pub const ACTIVITIES: &[&str] = &["selectedActivities", "activities"];
    /// Single selected theme, wrapped into a one-element list.
    pub const SELECTED_THEME: &str = "selectedTheme";
    /// Theme list.
    pub const THEMES: &[&str] = &["themes"];
    /// Total amount.
    pub const TOTAL_AMOUNT: &[&str] = &["totalPrice", "totalAmount", "total", "price"];
    /// Payment status.
    pub const PAYMENT_STATUS: &[&str] = &["paymentStatus"];
    /// Booking status.
    pub const STATUS: &[&str] = &["status", "bookingStatus"];
    /// Guest count encoded as a range string, parsed first.
    pub const EXPECTED_GUESTS: &str = "expectedGuests";
    /// Guest count fallbacks.
    pub const NUMBER_OF_GUESTS: &[&str] = &["numberOfGuests", "guests"];
    /// Special requests.
    pub const SPECIAL_REQUESTS: &[&str] = &["specialRequests", "special_requests"];
    /// Notes.
    pub const NOTES: &[&str] = &["notes", "description"];
}

/// Nested line-item aliases.
pub mod item {
    /// Add-on or activity name.
    pub const NAME: &[&str] = &["name", "title"];
    /// Theme name; themes prefer `title`.
    pub const THEME_NAME: &[&str] = &["title", "name"];
    /// Price.
    pub const PRICE: &[&str] = &["price"];
    /// Quantity.
    pub const QUANTITY: &[&str] = &["quantity"];
    /// Activity duration.
    pub const DURATION: &[&str] = &["duration"];
    /// Activity age group.
    pub const AGE_GROUP: &[&str] = &["ageGroup", "age_group"];
    /// Theme decorations.
    pub const DECORATIONS: &[&str] = &["decorations"];
    /// Theme colors.
    pub const COLORS: &[&str] = &["colors"];
    /// Package details name.
    pub const DETAILS_NAME: &[&str] = &["name"];
    /// Package details services.
    pub const DETAILS_SERVICES: &[&str] = &["includedServices"];
}

/// Enquiry document aliases.
pub mod enquiry {
    /// Name.
    pub const NAME: &[&str] = &["name"];
    /// E-mail.
    pub const EMAIL: &[&str] = &["email"];
    /// Phone.
    pub const PHONE: &[&str] = &["phone"];
    /// Event date.
    pub const EVENT_DATE: &[&str] = &["eventDate", "event_date", "date"];
    /// Location.
    pub const LOCATION: &[&str] = &["location"];
    /// Guest-count descriptor.
    pub const GUESTS: &[&str] = &["guests", "numberOfGuests", "expectedGuests"];
    /// Budget descriptor.
    pub const BUDGET: &[&str] = &["budget"];
    /// Special requests; falls back to the message body.
    pub const SPECIAL_REQUESTS: &[&str] = &["specialRequests", "special_requests", "message"];
    /// Message body; falls back to special requests and notes.
    pub const MESSAGE: &[&str] = &["message", "specialRequests", "notes"];
    /// Legacy resolution flag.
    pub const IS_RESOLVED: &str = "isResolved";
    /// Status string.
    pub const STATUS: &[&str] = &["status"];
}

/// Timestamp aliases shared by both collections.
pub mod timestamps {
    /// Creation timestamp.
    pub const CREATED_AT: &[&str] = &["createdAt", "created_at", "createdDate"];
    /// Update timestamp.
    pub const UPDATED_AT: &[&str] = &["updatedAt", "updated_at", "updatedDate"];
}

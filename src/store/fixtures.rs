//! Demo documents served when the gateway runs with `DEMO_MODE=true`.
//!
//! The documents mix two shapes: some use the booking form's field names
//! (`fullName`, `selectedTheme`, `expectedGuests`), others the canonical
//! ones, the way a long-lived collection ends up.

use serde_json::json;

use crate::domain::RawDocument;

/// Demo booking documents in source shape.
#[must_use]
pub fn bookings() -> Vec<RawDocument> {
    [
        json!({
            "_id": "507f1f77bcf86cd799439011",
            "customerName": "Alice Johnson",
            "customerEmail": "alice.johnson@email.com",
            "customerPhone": "+1-555-0123",
            "eventDate": "2025-10-15",
            "eventTime": "14:00",
            "eventLocation": "Party Hall A",
            "package": "Premium Package",
            "packageDetails": {
                "name": "Premium Package",
                "price": 500,
                "duration": "4 hours",
                "includedServices": ["Decorations", "Entertainment", "Catering", "Photography"]
            },
            "addons": [
                {"name": "Extra Hour", "price": 100, "quantity": 1},
                {"name": "Face Painting", "price": 75, "quantity": 1}
            ],
            "activities": [
                {"name": "Magic Show", "duration": "45 minutes", "ageGroup": "5-12"},
                {"name": "Balloon Animals", "duration": "30 minutes", "ageGroup": "3-10"}
            ],
            "themes": [{
                "name": "Superhero Theme",
                "decorations": ["Superhero banners", "Colored balloons", "Table covers"],
                "colors": ["Red", "Blue", "Yellow"]
            }],
            "totalAmount": 675,
            "paymentStatus": "Paid",
            "status": "Confirmed",
            "numberOfGuests": 15,
            "specialRequests": ["Gluten-free cake", "No nuts in food"],
            "notes": "Birthday child loves Superman",
            "createdAt": "2025-01-10T10:00:00Z",
            "updatedAt": "2025-01-11T14:30:00Z"
        }),
        json!({
            "_id": "507f1f77bcf86cd799439012",
            "fullName": "Bob Williams",
            "email": "bob.williams@email.com",
            "phoneNumber": "+1-555-0124",
            "eventDate": "2025-10-20",
            "eventTime": "16:00",
            "location": "Garden Area",
            "packageTitle": "Standard Package",
            "packageSubtitle": "Standard Package",
            "basePrice": "300",
            "packageDuration": "3 hours",
            "includedServices": ["Basic Decorations", "Entertainment", "Light Refreshments"],
            "selectedAddOns": [{"title": "DJ Service", "price": 150}],
            "selectedActivities": [
                {"title": "Games & Activities", "duration": "60 minutes", "age_group": "6-14"}
            ],
            "selectedTheme": {
                "title": "Princess Theme",
                "decorations": ["Pink banners", "Princess castle backdrop", "Sparkly table covers"],
                "colors": ["Pink", "Purple", "Gold"]
            },
            "totalPrice": 450,
            "paymentStatus": "partial",
            "status": "booked",
            "expectedGuests": "12-22 guests",
            "specialRequests": ["Vegetarian food only"],
            "notes": "Princess dress-up requested",
            "createdAt": "2025-01-08T09:15:00Z",
            "updatedAt": "2025-01-10T11:20:00Z"
        }),
        json!({
            "_id": "507f1f77bcf86cd799439013",
            "customerName": "Charlie Brown",
            "customerEmail": "charlie.brown@email.com",
            "customerPhone": "+1-555-0125",
            "eventDate": "2025-11-05",
            "eventTime": "13:00",
            "eventLocation": "Main Hall",
            "package": "Basic Package",
            "packageDetails": {
                "name": "Basic Package",
                "price": 200,
                "duration": "2 hours",
                "includedServices": ["Simple Decorations", "Basic Entertainment"]
            },
            "addons": [],
            "activities": [
                {"name": "Clown Performance", "duration": "30 minutes", "ageGroup": "3-8"}
            ],
            "themes": [{
                "name": "Cartoon Theme",
                "decorations": ["Cartoon character cutouts", "Colorful balloons"],
                "colors": ["Red", "Yellow", "Blue", "Green"]
            }],
            "totalAmount": 200,
            "paymentStatus": "Pending",
            "status": "Pending",
            "numberOfGuests": 8,
            "specialRequests": [],
            "notes": "Simple celebration for 5-year-old",
            "createdAt": "2025-01-12T15:45:00Z",
            "updatedAt": "2025-01-12T15:45:00Z"
        }),
        json!({
            "_id": "507f1f77bcf86cd799439014",
            "fullName": "Diana Miller",
            "email": "diana.miller@email.com",
            "phone": "+1-555-0126",
            "date": "2025-11-12",
            "time": "15:30",
            "location": "VIP Room",
            "packageName": "Premium Package",
            "packageDetails": {
                "name": "Premium Package",
                "price": 500,
                "duration": "4 hours",
                "includedServices": ["Decorations", "Entertainment", "Catering", "Photography"]
            },
            "addons": [
                {"name": "Video Recording", "price": 200, "quantity": 1},
                {"name": "Live Music", "price": 300, "quantity": 1},
                {"name": "Extra Decorations", "price": 100, "quantity": "2"}
            ],
            "activities": [
                {"name": "Dance Performance", "duration": "45 minutes", "ageGroup": "8-16"},
                {"name": "Game Station", "duration": "120 minutes", "ageGroup": "8-16"}
            ],
            "themes": [{
                "name": "Space Adventure",
                "decorations": ["Planet mobiles", "Star projector"],
                "colors": ["Navy", "Silver"]
            }],
            "total": 1200,
            "status": "pending",
            "guests": 25,
            "notes": "Wants a rocket-shaped cake",
            "createdDate": "2025-01-14T08:00:00Z"
        }),
    ]
    .into_iter()
    .filter_map(RawDocument::from_value)
    .collect()
}

/// Demo enquiry documents in source shape.
#[must_use]
pub fn enquiries() -> Vec<RawDocument> {
    [
        json!({
            "_id": "507f1f77bcf86cd799439021",
            "name": "John Doe",
            "email": "john.doe@example.com",
            "phone": "123-456-7890",
            "eventDate": "2025-10-15",
            "location": "New York",
            "guests": "10-15",
            "budget": "$500-800",
            "specialRequests": "Interested in the Gold Package for my son's 10th birthday.",
            "message": "Interested in the Gold Package for my son's 10th birthday.",
            "isResolved": false,
            "status": "Pending",
            "createdAt": "2025-01-10T10:00:00Z",
            "updatedAt": "2025-01-10T10:00:00Z"
        }),
        json!({
            "_id": "507f1f77bcf86cd799439022",
            "name": "Jane Smith",
            "email": "jane.smith@example.com",
            "phone": "098-765-4321",
            "eventDate": "2025-11-02",
            "location": "Los Angeles",
            "guests": "20-25",
            "budget": "$800-1200",
            "message": "Do you have any availability in November? Looking for a package for 20 kids.",
            "isResolved": false,
            "status": "Reviewed",
            "createdAt": "2025-01-08T09:15:00Z",
            "updatedAt": "2025-01-10T11:20:00Z"
        }),
        json!({
            "_id": "507f1f77bcf86cd799439023",
            "name": "Peter Jones",
            "email": "peter.jones@example.com",
            "phone": "456-123-7890",
            "date": "2025-09-28",
            "location": "Chicago",
            "numberOfGuests": 18,
            "budget": "$600-900",
            "specialRequests": "I would like to know more about the custom themes.",
            "isResolved": true,
            "createdAt": "2025-01-05T14:30:00Z",
            "updatedAt": "2025-01-06T16:45:00Z"
        }),
    ]
    .into_iter()
    .filter_map(RawDocument::from_value)
    .collect()
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::{BookingStatus, EnquiryStatus, PaymentStatus};
    use crate::normalize::{normalize_booking, normalize_enquiry};

    #[test]
    fn every_fixture_has_an_identifier() {
        assert_eq!(bookings().len(), 4);
        assert_eq!(enquiries().len(), 3);
        assert!(bookings().iter().all(|d| d.identifier().is_some()));
        assert!(enquiries().iter().all(|d| d.identifier().is_some()));
    }

    #[test]
    fn form_shaped_booking_normalizes() {
        let docs = bookings();
        let bob = normalize_booking(&docs[1]);
        assert_eq!(bob.customer_name, "Bob Williams");
        assert_eq!(bob.status, BookingStatus::Confirmed);
        assert_eq!(bob.payment_status, PaymentStatus::Partial);
        assert_eq!(bob.number_of_guests, Some(12));
        assert_eq!(bob.themes.len(), 1);
        assert!((bob.package_details.price - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn legacy_flag_closes_enquiry_without_status() {
        let docs = enquiries();
        let peter = normalize_enquiry(&docs[2]);
        assert_eq!(peter.status, EnquiryStatus::Closed);
        assert_eq!(peter.guests.as_deref(), Some("18"));
    }
}

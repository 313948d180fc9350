//! Request and response bodies for the booking and enquiry endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{BookingRecord, EnquiryRecord, RecordId};

/// Optional status filter for list endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusFilter {
    /// Status name or synonym (case-insensitive), e.g. `confirmed` or `booked`.
    pub status: Option<String>,
}

/// `GET /bookings` response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookingListResponse {
    /// Normalized bookings in store order.
    pub data: Vec<BookingRecord>,
    /// Number of bookings in `data`.
    pub total: usize,
}

/// `GET /enquiries` response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EnquiryListResponse {
    /// Normalized enquiries in store order.
    pub data: Vec<EnquiryRecord>,
    /// Number of enquiries in `data`.
    pub total: usize,
}

/// `POST /bookings` response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateBookingResponse {
    /// The booking with its generated identifier and timestamps.
    pub record: BookingRecord,
    /// Always `false`: creation is not written to the store.
    pub persisted: bool,
}

/// `POST /enquiries` response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateEnquiryResponse {
    /// The enquiry with its generated identifier and timestamps.
    pub record: EnquiryRecord,
    /// Always `false`: creation is not written to the store.
    pub persisted: bool,
}

/// `DELETE /bookings/{id}` and `DELETE /enquiries/{id}` response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteRecordResponse {
    /// Identifier named in the request.
    pub id: RecordId,
    /// Whether the client reported the deletion as successful.
    pub deleted: bool,
    /// Always `false`: the store still holds the record.
    pub persisted: bool,
}

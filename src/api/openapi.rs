//! OpenAPI document for the REST gateway.

use utoipa::OpenApi;

use super::handlers::{bookings, dashboard, enquiries, system};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "party-gateway",
        description = "Normalized access to the bookings and enquiries collections of the party document store."
    ),
    paths(
        bookings::list_bookings,
        bookings::get_booking,
        bookings::update_booking,
        bookings::create_booking,
        bookings::delete_booking,
        enquiries::list_enquiries,
        enquiries::get_enquiry,
        enquiries::update_enquiry,
        enquiries::create_enquiry,
        enquiries::delete_enquiry,
        dashboard::dashboard_summary,
        system::health_handler,
        system::statuses_handler,
    ),
    components(schemas(ErrorResponse, ErrorBody)),
    tags(
        (name = "Bookings", description = "Party bookings"),
        (name = "Enquiries", description = "Customer enquiries"),
        (name = "Dashboard", description = "Aggregated counters"),
        (name = "System", description = "Health and configuration"),
    )
)]
pub struct ApiDoc;

//! System endpoints: health check and status vocabularies.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::{BookingStatus, EnquiryStatus, PaymentStatus};

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp. Does not contact the record store.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Canonical status values accepted and returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusVocabularies {
    booking: Vec<BookingStatus>,
    payment: Vec<PaymentStatus>,
    enquiry: Vec<EnquiryStatus>,
}

/// `GET /config/statuses` — List the status vocabularies.
#[utoipa::path(
    get,
    path = "/config/statuses",
    tag = "System",
    summary = "List status vocabularies",
    description = "Returns every booking, payment and enquiry status in display order, as used by the dashboard's status pickers.",
    responses(
        (status = 200, description = "Status vocabularies", body = StatusVocabularies),
    )
)]
pub async fn statuses_handler() -> impl IntoResponse {
    Json(StatusVocabularies {
        booking: BookingStatus::ALL.to_vec(),
        payment: PaymentStatus::ALL.to_vec(),
        enquiry: EnquiryStatus::ALL.to_vec(),
    })
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/statuses", get(statuses_handler))
}

//! Dashboard summary handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};
use crate::service::DashboardSummary;

/// `GET /dashboard` — Counters and short lists for the admin dashboard.
///
/// # Errors
///
/// Returns a store error if either collection cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "Dashboard",
    summary = "Dashboard summary",
    description = "Reads bookings and enquiries concurrently and returns totals, bookings per status, converted leads, the five first leads and the five pending events with the latest dates.",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary),
        (status = 503, description = "Record store unreachable", body = ErrorResponse),
    )
)]
pub async fn dashboard_summary(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    Ok(Json(state.dashboard.summary().await?))
}

/// Dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard_summary))
}

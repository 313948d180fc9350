//! Booking handlers: list, get, update, and the local-only create/delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{BookingListResponse, CreateBookingResponse, DeleteRecordResponse, StatusFilter};
use crate::app_state::AppState;
use crate::domain::{BookingPatch, BookingRecord, BookingStatus, RecordId};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /bookings` — List bookings, optionally filtered by status.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for an unknown status filter,
/// or a store error if the collection cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    summary = "List bookings",
    description = "Returns every booking in store order, normalized to the canonical shape. The optional `status` filter accepts any status synonym.",
    params(StatusFilter),
    responses(
        (status = 200, description = "Normalized bookings", body = BookingListResponse),
        (status = 400, description = "Unknown status filter", body = ErrorResponse),
        (status = 503, description = "Record store unreachable", body = ErrorResponse),
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> Result<impl IntoResponse, GatewayError> {
    let wanted = filter
        .status
        .as_deref()
        .map(|raw| {
            BookingStatus::from_synonym(raw)
                .ok_or_else(|| GatewayError::InvalidRequest(format!("unknown booking status: {raw}")))
        })
        .transpose()?;

    let mut data = state.bookings.get_all().await?;
    if let Some(status) = wanted {
        data.retain(|b| b.status == status);
    }

    Ok(Json(BookingListResponse {
        total: data.len(),
        data,
    }))
}

/// `GET /bookings/{id}` — Get a single booking.
///
/// # Errors
///
/// Returns [`GatewayError::RecordNotFound`] if no booking has this
/// identifier.
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    summary = "Get booking",
    description = "Reads one booking directly, falling back to a scan of the collection when the direct read fails.",
    params(
        ("id" = String, Path, description = "Record identifier (`_id` or `id`)"),
    ),
    responses(
        (status = 200, description = "Normalized booking", body = BookingRecord),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let id = RecordId::from(id);
    let record = state
        .bookings
        .get_by_id(&id)
        .await?
        .ok_or_else(|| GatewayError::RecordNotFound {
            collection: state.bookings.collection().name(),
            id,
        })?;
    Ok(Json(record))
}

/// `PUT /bookings/{id}` — Apply a partial update.
///
/// # Errors
///
/// Returns a store error if the write fails.
#[utoipa::path(
    put,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    summary = "Update booking",
    description = "Maps the populated fields back onto the store's field names and writes them. Fields left out of the body are not touched. Last writer wins.",
    params(
        ("id" = String, Path, description = "Record identifier"),
    ),
    request_body = BookingPatch,
    responses(
        (status = 200, description = "Booking as stored after the write", body = BookingRecord),
        (status = 502, description = "Record store rejected the write", body = ErrorResponse),
    )
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<BookingPatch>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state.bookings.update(&RecordId::from(id), &patch).await?;
    Ok(Json(record))
}

/// `POST /bookings` — Create a booking locally.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] if the customer name is blank.
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    summary = "Create booking (not persisted)",
    description = "Assigns an identifier and timestamps and echoes the booking back. The record store is not written.",
    request_body = BookingRecord,
    responses(
        (status = 201, description = "Booking created locally", body = CreateBookingResponse),
        (status = 400, description = "Invalid booking", body = ErrorResponse),
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(record): Json<BookingRecord>,
) -> Result<impl IntoResponse, GatewayError> {
    if record.customer_name.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "customerName must not be empty".to_string(),
        ));
    }
    let record = state.bookings.create(record);
    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            record,
            persisted: false,
        }),
    ))
}

/// `DELETE /bookings/{id}` — Delete a booking locally.
#[utoipa::path(
    delete,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    summary = "Delete booking (not persisted)",
    description = "Reports success without removing anything from the record store.",
    params(
        ("id" = String, Path, description = "Record identifier"),
    ),
    responses(
        (status = 200, description = "Deletion acknowledged", body = DeleteRecordResponse),
    )
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = RecordId::from(id);
    let deleted = state.bookings.delete(&id);
    Json(DeleteRecordResponse {
        id,
        deleted,
        persisted: false,
    })
}

/// Booking routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(list_bookings).post(create_booking))
        .route(
            "/bookings/{id}",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
}

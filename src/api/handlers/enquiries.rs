//! Enquiry handlers: list, get, update, and the local-only create/delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreateEnquiryResponse, DeleteRecordResponse, EnquiryListResponse, StatusFilter};
use crate::app_state::AppState;
use crate::domain::{EnquiryPatch, EnquiryRecord, EnquiryStatus, RecordId};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /enquiries` — List enquiries, optionally filtered by status.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for an unknown status filter,
/// or a store error if the collection cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/enquiries",
    tag = "Enquiries",
    summary = "List enquiries",
    description = "Returns every enquiry in store order. Status is resolved from `status` first and the legacy `isResolved` flag second.",
    params(StatusFilter),
    responses(
        (status = 200, description = "Normalized enquiries", body = EnquiryListResponse),
        (status = 400, description = "Unknown status filter", body = ErrorResponse),
        (status = 503, description = "Record store unreachable", body = ErrorResponse),
    )
)]
pub async fn list_enquiries(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> Result<impl IntoResponse, GatewayError> {
    let wanted = match filter.status.as_deref() {
        Some(raw) => Some(EnquiryStatus::from_synonym(raw).ok_or_else(|| {
            GatewayError::InvalidRequest(format!("unknown enquiry status: {raw}"))
        })?),
        None => None,
    };

    let mut data = state.enquiries.get_all().await?;
    if let Some(status) = wanted {
        data.retain(|e| e.status == status);
    }

    Ok(Json(EnquiryListResponse {
        total: data.len(),
        data,
    }))
}

/// `GET /enquiries/{id}` — Get a single enquiry.
///
/// # Errors
///
/// Returns [`GatewayError::RecordNotFound`] if no enquiry has this
/// identifier.
#[utoipa::path(
    get,
    path = "/api/v1/enquiries/{id}",
    tag = "Enquiries",
    summary = "Get enquiry",
    params(
        ("id" = String, Path, description = "Record identifier (`_id` or `id`)"),
    ),
    responses(
        (status = 200, description = "Normalized enquiry", body = EnquiryRecord),
        (status = 404, description = "Enquiry not found", body = ErrorResponse),
    )
)]
pub async fn get_enquiry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let id = RecordId::from(id);
    match state.enquiries.get_by_id(&id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(GatewayError::RecordNotFound {
            collection: state.enquiries.collection().name(),
            id,
        }),
    }
}

/// `PUT /enquiries/{id}` — Apply a partial update.
///
/// # Errors
///
/// Returns a store error if the write fails.
#[utoipa::path(
    put,
    path = "/api/v1/enquiries/{id}",
    tag = "Enquiries",
    summary = "Update enquiry",
    description = "Writes the populated, non-empty fields of the body. Typical use is a status change such as `{\"status\": \"Reviewed\"}`.",
    params(
        ("id" = String, Path, description = "Record identifier"),
    ),
    request_body = EnquiryPatch,
    responses(
        (status = 200, description = "Enquiry as stored after the write", body = EnquiryRecord),
        (status = 502, description = "Record store rejected the write", body = ErrorResponse),
    )
)]
pub async fn update_enquiry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EnquiryPatch>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state.enquiries.update(&RecordId::from(id), &patch).await?;
    Ok(Json(record))
}

/// `POST /enquiries` — Create an enquiry locally.
#[utoipa::path(
    post,
    path = "/api/v1/enquiries",
    tag = "Enquiries",
    summary = "Create enquiry (not persisted)",
    request_body = EnquiryRecord,
    responses(
        (status = 201, description = "Enquiry created locally", body = CreateEnquiryResponse),
    )
)]
pub async fn create_enquiry(
    State(state): State<AppState>,
    Json(record): Json<EnquiryRecord>,
) -> impl IntoResponse {
    let record = state.enquiries.create(record);
    (
        StatusCode::CREATED,
        Json(CreateEnquiryResponse {
            record,
            persisted: false,
        }),
    )
}

/// `DELETE /enquiries/{id}` — Delete an enquiry locally.
#[utoipa::path(
    delete,
    path = "/api/v1/enquiries/{id}",
    tag = "Enquiries",
    summary = "Delete enquiry (not persisted)",
    params(
        ("id" = String, Path, description = "Record identifier"),
    ),
    responses(
        (status = 200, description = "Deletion acknowledged", body = DeleteRecordResponse),
    )
)]
pub async fn delete_enquiry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = RecordId::from(id);
    let deleted = state.enquiries.delete(&id);
    Json(DeleteRecordResponse {
        id,
        deleted,
        persisted: false,
    })
}

/// Enquiry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/enquiries", get(list_enquiries).post(create_enquiry))
        .route(
            "/enquiries/{id}",
            get(get_enquiry).put(update_enquiry).delete(delete_enquiry),
        )
}

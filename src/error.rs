//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::RecordId;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 5001,
///     "message": "record store is not running or not reachable at http://localhost:3001/api",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see the table on [`GatewayError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                     |
/// |-----------|-----------------|---------------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request                 |
/// | 2000–2999 | Not Found       | 404 Not Found                   |
/// | 3000–3999 | Server          | 500 Internal Server Error       |
/// | 5000–5999 | Record store    | 502 / 503 / 504                 |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No record with the given identifier exists in the collection.
    #[error("{collection} record not found: {id}")]
    RecordNotFound {
        /// Collection that was searched.
        collection: &'static str,
        /// Identifier that did not match.
        id: RecordId,
    },

    /// The record store could not be reached (connection refused, DNS
    /// failure, network down).
    #[error("record store is not running or not reachable at {0}")]
    StoreUnreachable(String),

    /// The record store did not answer within the configured timeout.
    #[error("record store request timed out: {0}")]
    StoreTimeout(String),

    /// The record store answered with a non-success status.
    #[error("record store rejected the request (HTTP {status}): {message}")]
    StoreRejected {
        /// HTTP status code returned by the store.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// The record store answered with a body that could not be decoded.
    #[error("invalid response from record store: {0}")]
    InvalidStoreResponse(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::RecordNotFound { .. } => 2001,
            Self::Internal(_) => 3000,
            Self::StoreUnreachable(_) => 5001,
            Self::StoreTimeout(_) => 5002,
            Self::StoreRejected { .. } => 5003,
            Self::InvalidStoreResponse(_) => 5004,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::RecordNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::StoreUnreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::StoreTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::StoreRejected { .. } | Self::InvalidStoreResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Returns `true` for failures reaching the store at all, as opposed
    /// to the store answering with an error.
    #[must_use]
    pub const fn is_connectivity(&self) -> bool {
        matches!(self, Self::StoreUnreachable(_) | Self::StoreTimeout(_))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        let target = err
            .url()
            .map_or_else(|| "unknown url".to_string(), ToString::to_string);
        if err.is_timeout() {
            Self::StoreTimeout(target)
        } else if err.is_connect() || err.is_request() {
            Self::StoreUnreachable(target)
        } else if err.is_decode() || err.is_body() {
            Self::InvalidStoreResponse(err.to_string())
        } else if let Some(status) = err.status() {
            Self::StoreRejected {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_connectivity() {
            tracing::error!(code = self.error_code(), error = %self, "record store unavailable");
        } else if status.is_server_error() {
            tracing::warn!(code = self.error_code(), error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Resource endpoints are mounted under `/api/v1`; health and
//! configuration live at the root.

pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
///
/// With the `swagger-ui` feature the interactive docs are served at
/// `/swagger-ui` and the raw document at `/api-docs/openapi.json`.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::store::InMemoryRecordStore;

    fn app() -> Router {
        build_router().with_state(AppState::new(Arc::new(InMemoryRecordStore::with_fixtures())))
    }

    async fn call(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        };
        let Ok(request) = request else {
            panic!("bad request");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("router failed");
        };
        let status = response.status();
        let Ok(bytes) = to_bytes(response.into_body(), usize::MAX).await else {
            panic!("unreadable body");
        };
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = call(app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn statuses_list_vocabularies() {
        let (status, body) = call(app(), Method::GET, "/config/statuses", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["booking"], json!(["Pending", "Confirmed", "Completed", "Cancelled"]));
        assert_eq!(body["enquiry"], json!(["Pending", "Reviewed", "Closed"]));
    }

    #[tokio::test]
    async fn bookings_are_normalized() {
        let (status, body) = call(app(), Method::GET, "/api/v1/bookings", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 4);
        assert_eq!(body["data"][1]["customerName"], "Bob Williams");
        assert_eq!(body["data"][1]["status"], "Confirmed");
        assert_eq!(body["data"][1]["themes"][0]["name"], "Princess Theme");
    }

    #[tokio::test]
    async fn status_filter_accepts_synonyms() {
        let (status, body) = call(app(), Method::GET, "/api/v1/bookings?status=booked", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);

        let (status, body) = call(app(), Method::GET, "/api/v1/enquiries?status=someday", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 1001);
    }

    #[tokio::test]
    async fn unknown_record_is_404() {
        let (status, body) = call(app(), Method::GET, "/api/v1/enquiries/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], 2001);
        assert_eq!(body["error"]["message"], "enquiries record not found: nope");

        let (status, body) = call(app(), Method::GET, "/api/v1/bookings/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "bookings record not found: nope");
    }

    #[tokio::test]
    async fn update_then_read_back() {
        let app = app();
        let uri = "/api/v1/enquiries/507f1f77bcf86cd799439021";
        let (status, body) =
            call(app.clone(), Method::PUT, uri, Some(json!({"status": "Reviewed"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Reviewed");
        assert_eq!(body["name"], "John Doe");

        let (_, body) = call(app, Method::GET, uri, None).await;
        assert_eq!(body["status"], "Reviewed");
        assert!(body["updatedAt"].as_str().is_some_and(|s| s.ends_with('Z')));
    }

    #[tokio::test]
    async fn create_and_delete_are_flagged_local() {
        let app = app();
        let (status, body) = call(
            app.clone(),
            Method::POST,
            "/api/v1/bookings",
            Some(json!({"customerName": "Eve", "eventDate": "2025-12-01"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["persisted"], false);
        assert!(body["record"]["id"].is_string());

        let (status, body) = call(app.clone(), Method::POST, "/api/v1/bookings", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 1001);

        let (status, body) =
            call(app.clone(), Method::DELETE, "/api/v1/bookings/507f1f77bcf86cd799439011", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deleted"], true);
        assert_eq!(body["persisted"], false);

        let (_, body) = call(app, Method::GET, "/api/v1/bookings", None).await;
        assert_eq!(body["total"], 4);
    }

    #[tokio::test]
    async fn dashboard_summarizes_fixtures() {
        let (status, body) = call(app(), Method::GET, "/api/v1/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalBookings"], 4);
        assert_eq!(body["convertedLeads"], 2);
        assert_eq!(body["bookingsByStatus"]["confirmed"], 2);
    }
}

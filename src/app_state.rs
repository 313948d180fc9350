//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{BookingClient, DashboardService, EnquiryClient};
use crate::store::RecordStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Record client for the `bookings` collection.
    pub bookings: Arc<BookingClient>,
    /// Record client for the `enquiries` collection.
    pub enquiries: Arc<EnquiryClient>,
    /// Dashboard aggregation over both collections.
    pub dashboard: Arc<DashboardService>,
}

impl AppState {
    /// Wires every client to the same record store.
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        let bookings = BookingClient::new(Arc::clone(&store));
        let enquiries = EnquiryClient::new(store);
        let dashboard = DashboardService::new(bookings.clone(), enquiries.clone());
        Self {
            bookings: Arc::new(bookings),
            enquiries: Arc::new(enquiries),
            dashboard: Arc::new(dashboard),
        }
    }
}

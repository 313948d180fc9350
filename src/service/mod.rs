//! Service layer: record clients and dashboard aggregation.
//!
//! [`RecordClient`] turns store documents into canonical records and
//! canonical patches into store writes. [`DashboardService`] joins both
//! collections for the dashboard counters.

pub mod dashboard;
pub mod record_client;

pub use dashboard::{BookingStatusCounts, DashboardService, DashboardSummary};
pub use record_client::{
    BookingClient, BookingKind, EnquiryClient, EnquiryKind, RecordClient, RecordKind,
};

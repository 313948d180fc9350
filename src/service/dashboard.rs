//! Dashboard aggregation over both collections.

use std::cmp::Reverse;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::record_client::{BookingClient, EnquiryClient};
use crate::domain::{BookingRecord, BookingStatus, EnquiryRecord, EnquiryStatus};
use crate::error::GatewayError;

/// Number of leads and events listed on the dashboard.
pub const DASHBOARD_LIST_LEN: usize = 5;

/// Bookings per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookingStatusCounts {
    /// Pending bookings.
    pub pending: usize,
    /// Confirmed bookings.
    pub confirmed: usize,
    /// Completed bookings.
    pub completed: usize,
    /// Cancelled bookings.
    pub cancelled: usize,
}

impl BookingStatusCounts {
    fn count(bookings: &[BookingRecord]) -> Self {
        bookings.iter().fold(Self::default(), |mut counts, b| {
            match b.status {
                BookingStatus::Pending => counts.pending += 1,
                BookingStatus::Confirmed => counts.confirmed += 1,
                BookingStatus::Completed => counts.completed += 1,
                BookingStatus::Cancelled => counts.cancelled += 1,
            }
            counts
        })
    }
}

/// Counters and short lists shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Enquiries in the store.
    pub total_enquiries: usize,
    /// Bookings in the store.
    pub total_bookings: usize,
    /// Bookings per status.
    pub bookings_by_status: BookingStatusCounts,
    /// Enquiries that have been reviewed or closed.
    pub converted_leads: usize,
    /// Enquiries still pending.
    pub pending_enquiries: usize,
    /// First enquiries in store order.
    pub recent_leads: Vec<EnquiryRecord>,
    /// Pending bookings, latest event date first, undated last.
    pub upcoming_events: Vec<BookingRecord>,
}

impl DashboardSummary {
    /// Derives the summary from already-fetched records.
    #[must_use]
    pub fn from_records(bookings: Vec<BookingRecord>, enquiries: Vec<EnquiryRecord>) -> Self {
        let converted_leads = enquiries
            .iter()
            .filter(|e| matches!(e.status, EnquiryStatus::Reviewed | EnquiryStatus::Closed))
            .count();
        let pending_enquiries = enquiries
            .iter()
            .filter(|e| e.status == EnquiryStatus::Pending)
            .count();

        let mut upcoming_events: Vec<BookingRecord> = bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Pending)
            .cloned()
            .collect();
        upcoming_events.sort_by_key(|b| Reverse(event_day(&b.event_date)));
        upcoming_events.truncate(DASHBOARD_LIST_LEN);

        Self {
            total_enquiries: enquiries.len(),
            total_bookings: bookings.len(),
            bookings_by_status: BookingStatusCounts::count(&bookings),
            converted_leads,
            pending_enquiries,
            recent_leads: enquiries.into_iter().take(DASHBOARD_LIST_LEN).collect(),
            upcoming_events,
        }
    }
}

/// Builds [`DashboardSummary`] values from the two record clients.
#[derive(Debug, Clone)]
pub struct DashboardService {
    bookings: BookingClient,
    enquiries: EnquiryClient,
}

impl DashboardService {
    /// Creates a new `DashboardService`.
    #[must_use]
    pub fn new(bookings: BookingClient, enquiries: EnquiryClient) -> Self {
        Self {
            bookings,
            enquiries,
        }
    }

    /// Fetches both collections concurrently and derives the summary.
    ///
    /// # Errors
    ///
    /// Returns the first [`GatewayError`] either fetch produces.
    pub async fn summary(&self) -> Result<DashboardSummary, GatewayError> {
        let (bookings, enquiries) =
            futures_util::future::try_join(self.bookings.get_all(), self.enquiries.get_all())
                .await?;
        let summary = DashboardSummary::from_records(bookings, enquiries);
        tracing::info!(
            bookings = summary.total_bookings,
            enquiries = summary.total_enquiries,
            "dashboard summary computed"
        );
        Ok(summary)
    }
}

/// Calendar day of an ISO date or datetime string.
fn event_day(date: &str) -> Option<NaiveDate> {
    date.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::RecordId;
    use crate::store::{InMemoryRecordStore, RecordStore};

    fn booking(id: &str, status: BookingStatus, date: &str) -> BookingRecord {
        BookingRecord {
            id: Some(RecordId::from(id)),
            status,
            event_date: date.to_string(),
            ..BookingRecord::default()
        }
    }

    fn enquiry(status: EnquiryStatus) -> EnquiryRecord {
        EnquiryRecord {
            status,
            ..EnquiryRecord::default()
        }
    }

    #[test]
    fn upcoming_events_are_pending_latest_first() {
        let bookings = vec![
            booking("a", BookingStatus::Pending, "2025-10-01"),
            booking("b", BookingStatus::Pending, ""),
            booking("c", BookingStatus::Confirmed, "2026-01-01"),
            booking("d", BookingStatus::Pending, "2025-12-24T18:00:00Z"),
        ];
        let summary = DashboardSummary::from_records(bookings, Vec::new());
        let order: Vec<&str> = summary
            .upcoming_events
            .iter()
            .filter_map(|b| b.id.as_ref().map(RecordId::as_str))
            .collect();
        assert_eq!(order, ["d", "a", "b"]);
        assert_eq!(summary.bookings_by_status.pending, 3);
        assert_eq!(summary.bookings_by_status.confirmed, 1);
    }

    #[test]
    fn lists_are_capped() {
        let bookings = (0..8)
            .map(|i| booking(&i.to_string(), BookingStatus::Pending, "2025-10-01"))
            .collect();
        let enquiries = (0..7).map(|_| enquiry(EnquiryStatus::Pending)).collect();
        let summary = DashboardSummary::from_records(bookings, enquiries);
        assert_eq!(summary.upcoming_events.len(), DASHBOARD_LIST_LEN);
        assert_eq!(summary.recent_leads.len(), DASHBOARD_LIST_LEN);
        assert_eq!(summary.total_bookings, 8);
        assert_eq!(summary.total_enquiries, 7);
    }

    #[test]
    fn converted_leads_count_reviewed_and_closed() {
        let enquiries = vec![
            enquiry(EnquiryStatus::Pending),
            enquiry(EnquiryStatus::Reviewed),
            enquiry(EnquiryStatus::Closed),
        ];
        let summary = DashboardSummary::from_records(Vec::new(), enquiries);
        assert_eq!(summary.converted_leads, 2);
        assert_eq!(summary.pending_enquiries, 1);
    }

    #[tokio::test]
    async fn summary_over_demo_fixtures() {
        let store: Arc<dyn RecordStore> = Arc::new(InMemoryRecordStore::with_fixtures());
        let service = DashboardService::new(
            BookingClient::new(Arc::clone(&store)),
            EnquiryClient::new(store),
        );
        let Ok(summary) = service.summary().await else {
            panic!("summary failed");
        };
        assert_eq!(summary.total_bookings, 4);
        assert_eq!(summary.total_enquiries, 3);
        assert_eq!(summary.converted_leads, 2);
        assert_eq!(summary.bookings_by_status.pending, 2);
        assert_eq!(summary.upcoming_events[0].customer_name, "Diana Miller");
    }
}

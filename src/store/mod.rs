//! Record store: the remote document collections behind the gateway.
//!
//! [`RecordStore`] is the seam between the record clients and wherever
//! the documents live. [`HttpRecordStore`] talks to the REST layer of
//! the document database; [`InMemoryRecordStore`] backs explicit demo
//! mode and tests.

pub mod fixtures;
pub mod http;
pub mod memory;

use std::fmt;

use async_trait::async_trait;

use crate::domain::{RawDocument, RecordId};
use crate::error::GatewayError;

pub use http::HttpRecordStore;
pub use memory::InMemoryRecordStore;

/// A document collection exposed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Party bookings.
    Bookings,
    /// Customer enquiries.
    Enquiries,
}

impl Collection {
    /// Path segment (and collection name) in the store.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bookings => "bookings",
            Self::Enquiries => "enquiries",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read and partial-update access to the store's collections.
///
/// Implementations return raw source documents; normalization happens
/// in the record clients.
#[async_trait]
pub trait RecordStore: Send + Sync + fmt::Debug {
    /// Reads every document in `collection`, in store order.
    ///
    /// # Errors
    ///
    /// Returns a store [`GatewayError`] if the collection cannot be read.
    async fn find_all(&self, collection: Collection) -> Result<Vec<RawDocument>, GatewayError>;

    /// Reads the document addressed by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::RecordNotFound`] or
    /// [`GatewayError::StoreRejected`] when the store has no such
    /// document, or another store error if the read fails.
    async fn find_one(
        &self,
        collection: Collection,
        id: &RecordId,
    ) -> Result<RawDocument, GatewayError>;

    /// Overwrites the fields present in `patch` on the document addressed
    /// by `id` and returns the document as stored afterwards.
    ///
    /// # Errors
    ///
    /// Returns a store [`GatewayError`] if the write fails.
    async fn update_one(
        &self,
        collection: Collection,
        id: &RecordId,
        patch: RawDocument,
    ) -> Result<RawDocument, GatewayError>;
}

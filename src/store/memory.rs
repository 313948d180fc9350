//! In-process [`RecordStore`] backed by a `HashMap` of collections.
//!
//! Used when the gateway is started in demo mode and by the service and
//! API tests. Writes behave like the remote store's partial update: the
//! fields of the patch overwrite the stored ones, nothing else changes.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Collection, RecordStore, fixtures};
use crate::domain::{RawDocument, RecordId};
use crate::error::GatewayError;

/// Document collections held in memory.
///
/// A single [`RwLock`] guards all collections; reads run concurrently and
/// writes are serialized.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    collections: RwLock<HashMap<Collection, Vec<RawDocument>>>,
}

impl InMemoryRecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the demo bookings and enquiries.
    #[must_use]
    pub fn with_fixtures() -> Self {
        Self::new()
            .with_documents(Collection::Bookings, fixtures::bookings())
            .with_documents(Collection::Enquiries, fixtures::enquiries())
    }

    /// Replaces the contents of `collection` with `docs`.
    #[must_use]
    pub fn with_documents(self, collection: Collection, docs: Vec<RawDocument>) -> Self {
        let mut map = self.collections.into_inner();
        map.insert(collection, docs);
        Self {
            collections: RwLock::new(map),
        }
    }

    /// Appends a document to `collection`.
    pub async fn insert(&self, collection: Collection, doc: RawDocument) {
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(doc);
    }

    /// Returns the number of documents in `collection`.
    pub async fn len(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .await
            .get(&collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn find_all(&self, collection: Collection) -> Result<Vec<RawDocument>, GatewayError> {
        let map = self.collections.read().await;
        Ok(map.get(&collection).cloned().unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: Collection,
        id: &RecordId,
    ) -> Result<RawDocument, GatewayError> {
        let map = self.collections.read().await;
        map.get(&collection)
            .and_then(|docs| docs.iter().find(|doc| doc.has_identifier(id)))
            .cloned()
            .ok_or_else(|| GatewayError::RecordNotFound {
                collection: collection.name(),
                id: id.clone(),
            })
    }

    async fn update_one(
        &self,
        collection: Collection,
        id: &RecordId,
        patch: RawDocument,
    ) -> Result<RawDocument, GatewayError> {
        let mut map = self.collections.write().await;
        let doc = map
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.has_identifier(id)))
            .ok_or_else(|| GatewayError::RecordNotFound {
                collection: collection.name(),
                id: id.clone(),
            })?;
        doc.merge(patch);
        Ok(doc.clone())
    }
}

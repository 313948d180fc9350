//! Record clients: normalized reads and partial writes per collection.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

use crate::domain::{BookingPatch, BookingRecord, EnquiryPatch, EnquiryRecord, RawDocument, RecordId};
use crate::error::GatewayError;
use crate::normalize::{denormalize_booking, denormalize_enquiry, normalize_booking, normalize_enquiry};
use crate::store::{Collection, RecordStore};

/// Source field stamped on every write.
const UPDATED_AT_FIELD: &str = "updatedAt";

/// Binds a canonical record type to its collection and field mapping.
pub trait RecordKind: Send + Sync + 'static {
    /// Canonical record.
    type Record: Clone + fmt::Debug + Send + Sync;
    /// Partial update of [`Self::Record`].
    type Patch: fmt::Debug + Send + Sync;

    /// Collection holding the source documents.
    const COLLECTION: Collection;

    /// Source document → canonical record.
    fn normalize(doc: &RawDocument) -> Self::Record;

    /// Patch → source field names.
    fn denormalize(patch: &Self::Patch) -> RawDocument;

    /// Identifier of `record`, if it has one.
    fn record_id(record: &Self::Record) -> Option<&RecordId>;

    /// Sets the identifier of `record`.
    fn set_id(record: &mut Self::Record, id: RecordId);

    /// Sets both creation and update timestamps of `record`.
    fn stamp_created(record: &mut Self::Record, now: &str);
}

/// Marker for the `bookings` collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingKind;

/// Marker for the `enquiries` collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnquiryKind;

impl RecordKind for BookingKind {
    type Record = BookingRecord;
    type Patch = BookingPatch;

    const COLLECTION: Collection = Collection::Bookings;

    fn normalize(doc: &RawDocument) -> BookingRecord {
        normalize_booking(doc)
    }

    fn denormalize(patch: &BookingPatch) -> RawDocument {
        denormalize_booking(patch)
    }

    fn record_id(record: &BookingRecord) -> Option<&RecordId> {
        record.id.as_ref()
    }

    fn set_id(record: &mut BookingRecord, id: RecordId) {
        record.id = Some(id);
    }

    fn stamp_created(record: &mut BookingRecord, now: &str) {
        record.created_at = Some(now.to_string());
        record.updated_at = Some(now.to_string());
    }
}

impl RecordKind for EnquiryKind {
    type Record = EnquiryRecord;
    type Patch = EnquiryPatch;

    const COLLECTION: Collection = Collection::Enquiries;

    fn normalize(doc: &RawDocument) -> EnquiryRecord {
        normalize_enquiry(doc)
    }

    fn denormalize(patch: &EnquiryPatch) -> RawDocument {
        denormalize_enquiry(patch)
    }

    fn record_id(record: &EnquiryRecord) -> Option<&RecordId> {
        record.id.as_ref()
    }

    fn set_id(record: &mut EnquiryRecord, id: RecordId) {
        record.id = Some(id);
    }

    fn stamp_created(record: &mut EnquiryRecord, now: &str) {
        record.created_at = Some(now.to_string());
        record.updated_at = Some(now.to_string());
    }
}

/// Client for the `bookings` collection.
pub type BookingClient = RecordClient<BookingKind>;

/// Client for the `enquiries` collection.
pub type EnquiryClient = RecordClient<EnquiryKind>;

/// Reads and updates one collection through a [`RecordStore`].
///
/// Every record leaving the client is normalized; every write goes
/// through the inverse mapping first. Updates are last-writer-wins: the
/// client sends no version and the store does not check one.
pub struct RecordClient<K: RecordKind> {
    store: Arc<dyn RecordStore>,
    kind: PhantomData<fn() -> K>,
}

impl<K: RecordKind> fmt::Debug for RecordClient<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordClient")
            .field("collection", &K::COLLECTION)
            .field("store", &self.store)
            .finish()
    }
}

impl<K: RecordKind> Clone for RecordClient<K> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            kind: PhantomData,
        }
    }
}

impl<K: RecordKind> RecordClient<K> {
    /// Creates a client over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            kind: PhantomData,
        }
    }

    /// Returns the collection this client addresses.
    #[must_use]
    pub const fn collection(&self) -> Collection {
        K::COLLECTION
    }

    /// Fetches and normalizes the whole collection, in store order.
    ///
    /// # Errors
    ///
    /// Propagates any [`GatewayError`] from the store.
    pub async fn get_all(&self) -> Result<Vec<K::Record>, GatewayError> {
        let docs = self.store.find_all(K::COLLECTION).await?;
        let records: Vec<K::Record> = docs.iter().map(K::normalize).collect();
        tracing::info!(collection = %K::COLLECTION, count = records.len(), "fetched records");
        Ok(records)
    }

    /// Fetches a single record.
    ///
    /// If the direct read fails for any reason, the whole collection is
    /// read and scanned for a document whose `_id` or `id` equals `id`.
    /// Returns `Ok(None)` when nothing matches.
    ///
    /// # Errors
    ///
    /// Propagates any [`GatewayError`] from the fallback scan.
    pub async fn get_by_id(&self, id: &RecordId) -> Result<Option<K::Record>, GatewayError> {
        match self.store.find_one(K::COLLECTION, id).await {
            Ok(doc) => Ok(Some(Self::normalize_with_id(&doc, id))),
            Err(err) => {
                tracing::warn!(
                    collection = %K::COLLECTION,
                    %id,
                    error = %err,
                    "direct read failed, scanning collection"
                );
                let docs = self.store.find_all(K::COLLECTION).await?;
                Ok(docs
                    .iter()
                    .find(|doc| doc.has_identifier(id))
                    .map(|doc| Self::normalize_with_id(doc, id)))
            }
        }
    }

    /// Writes the populated fields of `patch` to the record addressed by
    /// `id` and returns the record as stored afterwards.
    ///
    /// The write carries only the denormalized fields of the patch plus an
    /// `updatedAt` stamp. A single attempt is made.
    ///
    /// # Errors
    ///
    /// Propagates any [`GatewayError`] from the store.
    pub async fn update(&self, id: &RecordId, patch: &K::Patch) -> Result<K::Record, GatewayError> {
        let mut doc = K::denormalize(patch);
        doc.insert(UPDATED_AT_FIELD, now());
        tracing::debug!(collection = %K::COLLECTION, %id, fields = doc.len(), "writing patch");

        let stored = self.store.update_one(K::COLLECTION, id, doc).await?;
        let record = Self::normalize_with_id(&stored, id);
        tracing::info!(collection = %K::COLLECTION, %id, "record updated");
        Ok(record)
    }

    /// Assigns a fresh identifier and timestamps to `record`.
    ///
    /// Local only: the store is not contacted and the record is not
    /// persisted.
    #[must_use]
    pub fn create(&self, mut record: K::Record) -> K::Record {
        let id = RecordId::generate();
        tracing::info!(collection = %K::COLLECTION, %id, "record created locally, not persisted");
        K::set_id(&mut record, id);
        K::stamp_created(&mut record, &now());
        record
    }

    /// Reports the record addressed by `id` as deleted.
    ///
    /// Local only: the store is not contacted and always keeps the record.
    #[must_use]
    pub fn delete(&self, id: &RecordId) -> bool {
        tracing::info!(collection = %K::COLLECTION, %id, "record deleted locally, not persisted");
        true
    }

    /// Replaces the element of `records` that has the same identifier as
    /// `updated`. Returns `false` if no element matched.
    pub fn merge_updated(records: &mut [K::Record], updated: K::Record) -> bool {
        let Some(id) = K::record_id(&updated) else {
            return false;
        };
        let Some(slot) = records.iter_mut().find(|r| K::record_id(r) == Some(id)) else {
            return false;
        };
        *slot = updated;
        true
    }

    fn normalize_with_id(doc: &RawDocument, id: &RecordId) -> K::Record {
        let mut record = K::normalize(doc);
        if K::record_id(&record).is_none() {
            K::set_id(&mut record, id.clone());
        }
        record
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::{BookingStatus, EnquiryStatus};
    use crate::store::InMemoryRecordStore;

    fn doc(value: Value) -> RawDocument {
        let Some(doc) = RawDocument::from_value(value) else {
            panic!("expected an object");
        };
        doc
    }

    fn seeded(collection: Collection, docs: Vec<RawDocument>) -> Arc<dyn RecordStore> {
        Arc::new(InMemoryRecordStore::new().with_documents(collection, docs))
    }

    /// Store whose direct reads always fail and which records every patch.
    #[derive(Debug)]
    struct FlakyStore {
        docs: Vec<RawDocument>,
        patches: Mutex<Vec<RawDocument>>,
    }

    impl FlakyStore {
        fn new(docs: Vec<RawDocument>) -> Self {
            Self {
                docs,
                patches: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RecordStore for FlakyStore {
        async fn find_all(&self, _: Collection) -> Result<Vec<RawDocument>, GatewayError> {
            Ok(self.docs.clone())
        }

        async fn find_one(&self, _: Collection, _: &RecordId) -> Result<RawDocument, GatewayError> {
            Err(GatewayError::StoreRejected {
                status: 500,
                message: "boom".to_string(),
            })
        }

        async fn update_one(
            &self,
            _: Collection,
            _: &RecordId,
            patch: RawDocument,
        ) -> Result<RawDocument, GatewayError> {
            if let Ok(mut patches) = self.patches.lock() {
                patches.push(patch.clone());
            }
            Ok(patch)
        }
    }

    #[tokio::test]
    async fn get_all_normalizes_in_store_order() {
        let client = BookingClient::new(seeded(
            Collection::Bookings,
            vec![
                doc(json!({"_id": "b1", "fullName": "Bob"})),
                doc(json!({"_id": "b2", "customerName": "Ann", "status": "done"})),
            ],
        ));
        let Ok(records) = client.get_all().await else {
            panic!("get_all failed");
        };
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].customer_name, "Bob");
        assert_eq!(records[1].status, BookingStatus::Completed);
    }

    #[tokio::test]
    async fn get_all_propagates_store_errors() {
        #[derive(Debug)]
        struct DownStore;

        #[async_trait]
        impl RecordStore for DownStore {
            async fn find_all(&self, _: Collection) -> Result<Vec<RawDocument>, GatewayError> {
                Err(GatewayError::StoreUnreachable("http://localhost:3001/api".to_string()))
            }
            async fn find_one(&self, _: Collection, _: &RecordId) -> Result<RawDocument, GatewayError> {
                Err(GatewayError::StoreUnreachable("http://localhost:3001/api".to_string()))
            }
            async fn update_one(
                &self,
                _: Collection,
                _: &RecordId,
                _: RawDocument,
            ) -> Result<RawDocument, GatewayError> {
                Err(GatewayError::StoreUnreachable("http://localhost:3001/api".to_string()))
            }
        }

        let client = EnquiryClient::new(Arc::new(DownStore));
        let result = client.get_all().await;
        assert!(matches!(result, Err(GatewayError::StoreUnreachable(_))));
        let result = client.get_by_id(&RecordId::from("e1")).await;
        assert!(matches!(result, Err(GatewayError::StoreUnreachable(_))));
    }

    #[tokio::test]
    async fn get_by_id_falls_back_to_scan() {
        let store = Arc::new(FlakyStore::new(vec![
            doc(json!({"_id": "e1", "name": "John"})),
            doc(json!({"id": "e2", "name": "Jane", "isResolved": true})),
        ]));
        let client = EnquiryClient::new(store);

        let Ok(Some(jane)) = client.get_by_id(&RecordId::from("e2")).await else {
            panic!("expected the scan to find e2");
        };
        assert_eq!(jane.name, "Jane");
        assert_eq!(jane.status, EnquiryStatus::Closed);

        let missing = client.get_by_id(&RecordId::from("e9")).await;
        assert!(matches!(missing, Ok(None)));
    }

    #[tokio::test]
    async fn update_sends_only_populated_fields() {
        let store = Arc::new(FlakyStore::new(Vec::new()));
        let client = BookingClient::new(Arc::clone(&store) as Arc<dyn RecordStore>);

        let id = RecordId::from("b1");
        let Ok(record) = client.update(&id, &BookingPatch::status(BookingStatus::Cancelled)).await else {
            panic!("update failed");
        };
        assert_eq!(record.id, Some(id));
        assert_eq!(record.status, BookingStatus::Cancelled);
        assert!(record.updated_at.is_some());

        let patches = store.patches.lock().map(|p| p.clone()).unwrap_or_default();
        assert_eq!(patches.len(), 1);
        let mut keys: Vec<&str> = patches[0].keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["status", "updatedAt"]);
    }

    #[tokio::test]
    async fn update_returns_merged_document() {
        let client = BookingClient::new(seeded(
            Collection::Bookings,
            vec![doc(json!({"_id": "b1", "fullName": "Bob", "totalPrice": 450}))],
        ));
        let Ok(record) = client
            .update(&RecordId::from("b1"), &BookingPatch::status(BookingStatus::Confirmed))
            .await
        else {
            panic!("update failed");
        };
        assert_eq!(record.customer_name, "Bob");
        assert!((record.total_amount - 450.0).abs() < f64::EPSILON);
        assert_eq!(record.status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn negative_total_leaves_stored_amount_alone() {
        let store = Arc::new(InMemoryRecordStore::new().with_documents(
            Collection::Bookings,
            vec![doc(json!({"_id": "b1", "fullName": "Bob", "totalPrice": 450}))],
        ));
        let client = BookingClient::new(Arc::clone(&store) as Arc<dyn RecordStore>);
        let id = RecordId::from("b1");

        let patch = BookingPatch {
            total_amount: Some(-50.0),
            ..BookingPatch::default()
        };
        let Ok(record) = client.update(&id, &patch).await else {
            panic!("update failed");
        };
        assert!((record.total_amount - 450.0).abs() < f64::EPSILON);

        let Ok(stored) = store.find_one(Collection::Bookings, &id).await else {
            panic!("record vanished");
        };
        assert_eq!(stored.get("totalPrice"), Some(&json!(450)));
    }

    #[tokio::test]
    async fn overlapping_edits_last_writer_wins() {
        let client = BookingClient::new(seeded(
            Collection::Bookings,
            vec![doc(json!({"_id": "b1", "fullName": "Bob", "notes": "original"}))],
        ));
        let id = RecordId::from("b1");

        let (Ok(Some(first)), Ok(Some(second))) =
            (client.get_by_id(&id).await, client.get_by_id(&id).await)
        else {
            panic!("both reads should succeed");
        };

        let mut rename = BookingPatch::from(&first);
        rename.customer_name = Some("Robert".to_string());
        let mut renote = BookingPatch::from(&second);
        renote.notes = Some("call before noon".to_string());

        tokio_test::assert_ok!(client.update(&id, &rename).await);
        let Ok(last) = client.update(&id, &renote).await else {
            panic!("second update failed");
        };
        assert_eq!(last.customer_name, "Bob");
        assert_eq!(last.notes, "call before noon");
    }

    #[tokio::test]
    async fn create_and_delete_stay_local() {
        let store = Arc::new(InMemoryRecordStore::new());
        let client = EnquiryClient::new(Arc::clone(&store) as Arc<dyn RecordStore>);

        let created = client.create(EnquiryRecord::default());
        assert!(created.id.is_some());
        assert!(created.created_at.is_some());
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(store.len(Collection::Enquiries).await, 0);

        assert!(client.delete(&RecordId::from("anything")));
    }

    #[test]
    fn merge_updated_replaces_by_identifier() {
        let mut records = vec![
            EnquiryRecord {
                id: Some(RecordId::from("e1")),
                name: "John".to_string(),
                ..EnquiryRecord::default()
            },
            EnquiryRecord {
                id: Some(RecordId::from("e2")),
                name: "Jane".to_string(),
                ..EnquiryRecord::default()
            },
        ];
        let updated = EnquiryRecord {
            id: Some(RecordId::from("e2")),
            name: "Jane S.".to_string(),
            status: EnquiryStatus::Reviewed,
            ..EnquiryRecord::default()
        };
        assert!(EnquiryClient::merge_updated(&mut records, updated));
        assert_eq!(records[1].name, "Jane S.");
        assert_eq!(records[0].name, "John");

        assert!(!EnquiryClient::merge_updated(&mut records, EnquiryRecord::default()));
    }
}

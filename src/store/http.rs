//! HTTP implementation of [`RecordStore`] on top of `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde_json::Value;

use super::{Collection, RecordStore};
use crate::domain::{RawDocument, RecordId};
use crate::error::GatewayError;

/// Record store reached over the document database's REST layer.
///
/// Owns a single [`reqwest::Client`], and with it the connection pool
/// every request goes through. Build one at start-up and share it; the
/// pool is released when the last clone is dropped.
///
/// Endpoints, relative to the base URL:
///
/// | call          | request                     |
/// |---------------|-----------------------------|
/// | `find_all`    | `GET {base}/{collection}`      |
/// | `find_one`    | `GET {base}/{collection}/{id}` |
/// | `update_one`  | `PUT {base}/{collection}/{id}` |
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    client: Client,
    base_url: Url,
}

impl HttpRecordStore {
    /// Creates a store client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] if `base_url` cannot carry
    /// path segments (e.g. `mailto:`), or [`GatewayError::Internal`] if the
    /// HTTP client cannot be built.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, GatewayError> {
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidRequest(format!(
                "record store url cannot be a base: {base_url}"
            )));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Internal(format!("failed to build http client: {e}")))?;
        Ok(Self { client, base_url })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, collection: Collection, id: Option<&RecordId>) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                GatewayError::Internal(format!("cannot extend url {}", self.base_url))
            })?;
            segments.pop_if_empty().push(collection.name());
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    async fn read_json(response: Response) -> Result<Value, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or("no reason").to_string()
            } else {
                body
            };
            return Err(GatewayError::StoreRejected {
                status: status.as_u16(),
                message,
            });
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| GatewayError::InvalidStoreResponse(e.to_string()))
    }

    fn into_document(value: Value) -> Result<RawDocument, GatewayError> {
        RawDocument::from_value(value).ok_or_else(|| {
            GatewayError::InvalidStoreResponse("expected a JSON object".to_string())
        })
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn find_all(&self, collection: Collection) -> Result<Vec<RawDocument>, GatewayError> {
        let url = self.url(collection, None)?;
        tracing::debug!(%url, "GET collection");

        let response = self.client.get(url).send().await?;
        let Value::Array(items) = Self::read_json(response).await? else {
            return Err(GatewayError::InvalidStoreResponse(format!(
                "expected a JSON array of {collection}"
            )));
        };

        let total = items.len();
        let docs: Vec<RawDocument> = items.into_iter().filter_map(RawDocument::from_value).collect();
        if docs.len() < total {
            tracing::warn!(
                %collection,
                skipped = total - docs.len(),
                "ignoring non-object entries in collection"
            );
        }
        Ok(docs)
    }

    async fn find_one(
        &self,
        collection: Collection,
        id: &RecordId,
    ) -> Result<RawDocument, GatewayError> {
        let url = self.url(collection, Some(id))?;
        tracing::debug!(%url, "GET record");

        let response = self.client.get(url).send().await?;
        match Self::read_json(response).await {
            Ok(Value::Null) => Err(GatewayError::RecordNotFound {
                collection: collection.name(),
                id: id.clone(),
            }),
            Ok(value) => Self::into_document(value),
            Err(GatewayError::StoreRejected { status, .. })
                if status == StatusCode::NOT_FOUND.as_u16() =>
            {
                Err(GatewayError::RecordNotFound {
                    collection: collection.name(),
                    id: id.clone(),
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn update_one(
        &self,
        collection: Collection,
        id: &RecordId,
        patch: RawDocument,
    ) -> Result<RawDocument, GatewayError> {
        let url = self.url(collection, Some(id))?;
        let payload = patch.into_value();
        tracing::debug!(%url, bytes = payload.to_string().len(), "PUT record");

        let response = self.client.put(url).json(&payload).send().await?;
        Self::into_document(Self::read_json(response).await?)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn store(base: &str) -> HttpRecordStore {
        let Ok(url) = Url::parse(base) else {
            panic!("bad url");
        };
        let Ok(store) = HttpRecordStore::new(url, Duration::from_secs(1)) else {
            panic!("store construction failed");
        };
        store
    }

    #[test]
    fn collection_urls_append_segments() {
        let s = store("http://localhost:3001/api");
        let Ok(url) = s.url(Collection::Bookings, None) else {
            panic!("url");
        };
        assert_eq!(url.as_str(), "http://localhost:3001/api/bookings");
    }

    #[test]
    fn trailing_slash_and_id_escaping() {
        let s = store("http://localhost:3001/api/");
        let Ok(url) = s.url(Collection::Enquiries, Some(&RecordId::from("a b/c"))) else {
            panic!("url");
        };
        assert_eq!(url.as_str(), "http://localhost:3001/api/enquiries/a%20b%2Fc");
    }

    #[test]
    fn rejects_non_base_urls() {
        let Ok(url) = Url::parse("mailto:admin@example.com") else {
            panic!("bad url");
        };
        tokio_test::assert_err!(HttpRecordStore::new(url, Duration::from_secs(1)));
    }
}

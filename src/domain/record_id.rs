//! Type-safe record identifier.
//!
//! [`RecordId`] wraps the identifier the document store assigns to a
//! booking or enquiry. Store identifiers are opaque strings (usually a
//! 24-character hex object id), so unlike a UUID they are never parsed.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier of a stored booking or enquiry.
///
/// Assigned by the document store and immutable thereafter. Used as the
/// path segment of every single-record store call and as the match key
/// when merging an updated record into a list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "507f1f77bcf86cd799439011")]
pub struct RecordId(String);

impl RecordId {
    /// Wraps an existing store identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a local identifier for records that have not been
    /// written to the store.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl PartialEq<str> for RecordId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

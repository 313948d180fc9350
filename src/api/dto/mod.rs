//! Data Transfer Objects for REST request/response serialization.
//!
//! Canonical records are returned as-is (camelCase JSON); the types here
//! wrap them with list totals and the local-only flags of create/delete.

pub mod record_dto;

pub use record_dto::*;

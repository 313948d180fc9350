//! # party-gateway
//!
//! REST gateway between the party-business admin dashboard and the
//! schemaless document store that holds its bookings and enquiries.
//!
//! The store's documents were written by several generations of forms
//! and tools, so the same field turns up under different names and
//! statuses arrive as free text. This crate reconciles every document
//! into a fixed canonical record on the way out and maps partial edits
//! back onto the store's field names on the way in.
//!
//! ## Architecture
//!
//! ```text
//! Admin dashboard (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── RecordClient / DashboardService (service/)
//!     ├── Field normalizer + status mapper (normalize/, domain/)
//!     │
//!     └── RecordStore (store/)
//!           ├── HttpRecordStore ── remote document store
//!           └── InMemoryRecordStore ── demo mode, tests
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod normalize;
pub mod service;
pub mod store;

//! # medtab-service
//!
//! HTTP service for medical reference table queries.
//!
//! This crate provides the axum router over a loaded
//! [`TableStore`](medtab_loader::TableStore): a status endpoint reporting
//! record counts, text search per table, and exact code lookup per table.
//! Query validation (minimum length) and the 422/404 error mapping live
//! here; matching semantics live in `medtab-loader`.

#![warn(missing_docs)]

mod server;

pub use server::{build_router, ApiError, AppState, MIN_QUERY_LEN, SERVICE_NAME};

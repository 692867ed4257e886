//! Review Service Module
//!
//! Serves the review collection over HTTP: filtered, sentiment-ranked reads and creation of
//! new reviews.
//!
//! ## Overview
//! A read validates its query parameters, takes a snapshot of the `ReviewStore`, keeps the
//! records matching every given predicate, scores each survivor with a `SentimentScorer`
//! and returns them strongest-positive first. A write validates the form body and appends
//! a new record with a server-assigned id and timestamp.
//!
//! ## Submodules
//! - **`engine`**: Parameter validation, predicate matching and the filter-rank pipeline.
//! - **`error`**: `ReviewError` and its mapping to HTTP responses.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: The review record, the location allow-list and request/response DTOs.

pub mod engine;
pub mod error;
pub mod handlers;
pub mod types;

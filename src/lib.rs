//! Review Analyzer Library
//!
//! An HTTP service over a collection of customer reviews. Reads filter the collection by
//! location and date range and rank the matches by computed sentiment; writes append new
//! reviews to the in-memory store.
//!
//! ## Architecture Modules
//! - **`sentiment`**: Lexicon and rule-based polarity scoring of review text.
//! - **`storage`**: The append-only, lock-guarded review collection and its CSV bootstrap.
//! - **`reviews`**: The review model, the filter-rank pipeline and the HTTP handlers.
//! - **`config`**: Port, bind address and data file settings.
//! - **`app`**: Router construction shared by the binary and the tests.

pub mod app;
pub mod config;
pub mod reviews;
pub mod sentiment;
pub mod storage;

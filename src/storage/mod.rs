//! Review Storage Module
//!
//! Owns the review collection for the lifetime of the process.
//!
//! ## Core Concepts
//! - **Append-only**: Records are added at the end and never updated or removed.
//! - **Snapshots**: Reads copy the collection under a read lock, so a request always sees a
//!   consistent set of whole records even while other requests append.
//! - **Bootstrap**: `loader` fills the store once at startup from a CSV file.

pub mod loader;
pub mod memory;

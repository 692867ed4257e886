//! CSV Review Loader
//!
//! Reads the initial review set from a CSV file with a header row. Required columns are
//! `ReviewBody`, `Location` and `Timestamp`; `ReviewId` is optional and any other column
//! is ignored.

use crate::reviews::types::Review;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

pub fn load_reviews_csv(path: &Path) -> Result<Vec<Review>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open review data {}", path.display()))?;
    let reviews = read_reviews(file)
        .with_context(|| format!("failed to load review data {}", path.display()))?;

    tracing::info!("Loaded {} reviews from {}", reviews.len(), path.display());
    Ok(reviews)
}

/// Parses reviews from any CSV source.
///
/// Every timestamp must already be in `YYYY-MM-DD HH:MM:SS` form; the first row that is
/// not aborts the load. Rows are numbered from 1, after the header.
pub fn read_reviews<R: Read>(reader: R) -> Result<Vec<Review>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut reviews = Vec::new();

    for (idx, record) in csv_reader.deserialize::<Review>().enumerate() {
        let row = idx + 1;
        let review = record.with_context(|| format!("malformed review in row {}", row))?;
        review
            .parsed_timestamp()
            .with_context(|| format!("invalid timestamp '{}' in row {}", review.timestamp, row))?;
        reviews.push(review);
    }

    Ok(reviews)
}

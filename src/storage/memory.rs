use crate::reviews::types::Review;

use tokio::sync::RwLock;
use uuid::Uuid;

/// The in-memory review collection.
///
/// Records are kept in insertion order and only ever appended. Readers take an owned
/// snapshot under the read lock, so an append running concurrently is either fully visible
/// to them or not at all.
#[derive(Debug, Default)]
pub struct ReviewStore {
    reviews: RwLock<Vec<Review>>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with pre-loaded records. Their ids are kept as-is (possibly absent).
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews: RwLock::new(reviews),
        }
    }

    /// Snapshot of every record, in insertion order.
    pub async fn all(&self) -> Vec<Review> {
        self.reviews.read().await.clone()
    }

    /// Appends a record, assigning a fresh UUID v4 `ReviewId` when none was given.
    ///
    /// Returns the record as stored.
    pub async fn append(&self, mut review: Review) -> Review {
        if review.review_id.is_none() {
            review.review_id = Some(Uuid::new_v4().to_string());
        }

        let mut reviews = self.reviews.write().await;
        reviews.push(review.clone());
        tracing::debug!(
            "Stored review {:?} ({} total)",
            review.review_id,
            reviews.len()
        );
        review
    }

    pub async fn len(&self) -> usize {
        self.reviews.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.reviews.read().await.is_empty()
    }
}

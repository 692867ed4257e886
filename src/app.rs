//! HTTP application wiring.

use crate::reviews::handlers::{handle_create_review, handle_list_reviews};
use crate::sentiment::SentimentScorer;
use crate::storage::memory::ReviewStore;

use axum::routing::get;
use axum::{Extension, Router};
use std::sync::Arc;

/// Builds the router serving reads (`GET`) and creates (`POST`) on `/` and `/reviews`.
pub fn build_router(store: Arc<ReviewStore>, scorer: Arc<dyn SentimentScorer>) -> Router {
    Router::new()
        .route("/", get(handle_list_reviews).post(handle_create_review))
        .route(
            "/reviews",
            get(handle_list_reviews).post(handle_create_review),
        )
        .layer(Extension(store))
        .layer(Extension(scorer))
}

use super::engine::filter_and_rank;
use super::error::ReviewError;
use super::types::{
    is_allowed_location, CreateReviewForm, FormPairs, Review, ReviewFilter, ReviewQuery,
    ScoredReview,
};
use crate::sentiment::SentimentScorer;
use crate::storage::memory::ReviewStore;

use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Form, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_list_reviews(
    Extension(store): Extension<Arc<ReviewStore>>,
    Extension(scorer): Extension<Arc<dyn SentimentScorer>>,
    query: Result<Query<FormPairs>, QueryRejection>,
) -> Result<Json<Vec<ScoredReview>>, ReviewError> {
    let Query(pairs) = query.map_err(|e| ReviewError::MalformedQuery(e.body_text()))?;
    let filter = ReviewFilter::from_query(ReviewQuery::from_pairs(&pairs))?;

    let results = filter_and_rank(&store, scorer.as_ref(), &filter).await?;
    tracing::debug!(
        "Listed {} reviews (location={:?}, start={:?}, end={:?})",
        results.len(),
        filter.location,
        filter.start_date,
        filter.end_date
    );

    Ok(Json(results))
}

pub async fn handle_create_review(
    Extension(store): Extension<Arc<ReviewStore>>,
    form: Result<Form<FormPairs>, FormRejection>,
) -> Result<(StatusCode, Json<Review>), ReviewError> {
    let Form(pairs) = form.map_err(|e| ReviewError::MalformedBody(e.body_text()))?;
    let review = validate_new_review(CreateReviewForm::from_pairs(&pairs))?;

    let stored = store.append(review).await;
    tracing::info!(
        "Created review {:?} for {}",
        stored.review_id,
        stored.location
    );

    Ok((StatusCode::CREATED, Json(stored)))
}

/// Checks a create request and turns it into an unsaved review stamped with the current time.
///
/// Blank fields count as missing. Whitespace is not blank: a body of `" "` is accepted.
pub fn validate_new_review(form: CreateReviewForm) -> Result<Review, ReviewError> {
    let review_body = form.review_body.filter(|v| !v.is_empty());
    let location = form.location.filter(|v| !v.is_empty());

    let (Some(review_body), Some(location)) = (review_body, location) else {
        return Err(ReviewError::MissingFields);
    };
    if !is_allowed_location(&location) {
        return Err(ReviewError::CreateLocationNotAllowed);
    }

    Ok(Review::new(review_body, location))
}

use super::error::ReviewError;
use super::types::{
    is_allowed_location, ReviewFilter, ReviewQuery, ScoredReview, DATE_FORMAT,
};
use crate::sentiment::SentimentScorer;
use crate::storage::memory::ReviewStore;

use chrono::{NaiveDate, NaiveDateTime};

impl ReviewFilter {
    /// Validates raw query parameters.
    ///
    /// Blank values count as absent. A location outside the allow-list or a date that is not
    /// `YYYY-MM-DD` is rejected before any review is looked at.
    pub fn from_query(query: ReviewQuery) -> Result<Self, ReviewError> {
        let location = non_blank(query.location);
        if let Some(location) = &location {
            if !is_allowed_location(location) {
                return Err(ReviewError::LocationNotAllowed);
            }
        }

        Ok(Self {
            location,
            start_date: non_blank(query.start_date).map(parse_date).transpose()?,
            end_date: non_blank(query.end_date).map(parse_date).transpose()?,
        })
    }

    /// Tests a single record against every set predicate.
    ///
    /// Both date bounds compare against midnight of the given day, so a review written
    /// during `end_date` itself (after 00:00:00) falls outside the range.
    pub fn matches(&self, location: &str, timestamp: NaiveDateTime) -> bool {
        if let Some(wanted) = &self.location {
            if wanted != location {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if timestamp < start.and_time(chrono::NaiveTime::MIN) {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if timestamp > end.and_time(chrono::NaiveTime::MIN) {
                return false;
            }
        }
        true
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_date(value: String) -> Result<NaiveDate, ReviewError> {
    NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|_| ReviewError::InvalidDate(value))
}

/// Selects the reviews matching `filter`, scores each one and orders them by compound
/// sentiment, most positive first.
///
/// Sentiment is recomputed on every call. The sort is stable: reviews with equal compound
/// scores keep their insertion order.
pub async fn filter_and_rank<S>(
    store: &ReviewStore,
    scorer: &S,
    filter: &ReviewFilter,
) -> Result<Vec<ScoredReview>, ReviewError>
where
    S: SentimentScorer + ?Sized,
{
    let snapshot = store.all().await;

    let mut results: Vec<ScoredReview> = Vec::new();
    for review in snapshot {
        let timestamp = review
            .parsed_timestamp()
            .map_err(|_| ReviewError::CorruptTimestamp(review.timestamp.clone()))?;

        if !filter.matches(&review.location, timestamp) {
            continue;
        }

        let sentiment = scorer.score(&review.review_body);
        results.push(ScoredReview { review, sentiment });
    }

    results.sort_by(|a, b| b.sentiment.compound.total_cmp(&a.sentiment.compound));
    Ok(results)
}

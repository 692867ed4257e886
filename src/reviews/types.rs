//! Review Data Types
//!
//! The review record as stored and served, plus the request/response DTOs used by the
//! HTTP layer. Field names are serialized in the PascalCase form of the source data.

use crate::sentiment::SentimentScore;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Storage format of `Review::timestamp`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Format of the `start_date` / `end_date` query parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Locations a review may be written for.
pub const ALLOWED_LOCATIONS: [&str; 18] = [
    "Albuquerque, New Mexico",
    "Carlsbad, California",
    "Chula Vista, California",
    "Colorado Springs, Colorado",
    "Denver, Colorado",
    "El Cajon, California",
    "El Paso, Texas",
    "Escondido, California",
    "Fresno, California",
    "La Mesa, California",
    "Las Vegas, Nevada",
    "Los Angeles, California",
    "Oceanside, California",
    "Phoenix, Arizona",
    "Sacramento, California",
    "Salt Lake City, Utah",
    "San Diego, California",
    "Tucson, Arizona",
];

pub fn is_allowed_location(location: &str) -> bool {
    ALLOWED_LOCATIONS.contains(&location)
}

/// A single customer review.
///
/// `review_id` is absent for pre-loaded rows that carried none; the store assigns one to
/// every record it accepts through `append`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(
        rename = "ReviewId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub review_id: Option<String>,
    #[serde(rename = "ReviewBody")]
    pub review_body: String,
    #[serde(rename = "Location")]
    pub location: String,
    /// `YYYY-MM-DD HH:MM:SS`, see [`TIMESTAMP_FORMAT`].
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

impl Review {
    /// Creates a review stamped with the current local time and no id yet.
    pub fn new(review_body: String, location: String) -> Self {
        Self {
            review_id: None,
            review_body,
            location,
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn parsed_timestamp(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT)
    }
}

/// A review annotated with the sentiment computed for this read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReview {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment: SentimentScore,
}

/// Decoded `key=value` pairs of a query string or form body, in request order.
pub type FormPairs = Vec<(String, String)>;

/// First value given for `key`. Later repeats of the same key are ignored.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Raw query string of the read endpoint.
#[derive(Debug, Default)]
pub struct ReviewQuery {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ReviewQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            location: first_value(pairs, "location"),
            start_date: first_value(pairs, "start_date"),
            end_date: first_value(pairs, "end_date"),
        }
    }
}

/// Validated read parameters. All predicates are optional and combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFilter {
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Form-encoded body of the create endpoint.
#[derive(Debug, Default)]
pub struct CreateReviewForm {
    pub review_body: Option<String>,
    pub location: Option<String>,
}

impl CreateReviewForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            review_body: first_value(pairs, "ReviewBody"),
            location: first_value(pairs, "Location"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

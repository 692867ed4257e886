use serde::{Deserialize, Serialize};

/// Polarity breakdown for a piece of text.
///
/// `negative`, `neutral` and `positive` are proportions in `[0, 1]` that sum to
/// (roughly) one for non-empty input. `compound` is the normalised overall polarity in
/// `[-1, 1]` and is the only field used for ordering reviews.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScore {
    #[serde(rename = "neg")]
    pub negative: f64,
    #[serde(rename = "neu")]
    pub neutral: f64,
    #[serde(rename = "pos")]
    pub positive: f64,
    pub compound: f64,
}

use super::lexicon::{
    booster_scalar, builtin_lexicon, is_negation, parse_lexicon, C_INCR, N_SCALAR,
};
use super::tokenizer::{allcap_differential, is_all_caps, words_and_emoticons};
use super::types::SentimentScore;

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Normalisation constant for the compound score; approximates the max expected sum.
const ALPHA: f64 = 15.0;
const EXCLAMATION_INCR: f64 = 0.292;
const QUESTION_INCR: f64 = 0.18;
const QUESTION_MAX: f64 = 0.96;

/// Anything that can turn text into a `SentimentScore`.
///
/// Implementations must be deterministic: the same text always yields the same score.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}

/// Lexicon and rule-based sentiment analyzer.
pub struct SentimentAnalyzer {
    lexicon: HashMap<String, f64>,
}

impl SentimentAnalyzer {
    /// Creates an analyzer backed by the embedded lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(builtin_lexicon())
    }

    pub fn with_lexicon(lexicon: HashMap<String, f64>) -> Self {
        Self { lexicon }
    }

    /// Loads a VADER-format lexicon file, replacing the embedded table.
    pub fn from_lexicon_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read lexicon {}", path.display()))?;
        let lexicon = parse_lexicon(&content)?;
        tracing::info!("Loaded {} lexicon entries from {}", lexicon.len(), path.display());
        Ok(Self::with_lexicon(lexicon))
    }

    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Scores `text`. Empty input (or input with no tokens) scores all zeros.
    pub fn polarity_scores(&self, text: &str) -> SentimentScore {
        let tokens = words_and_emoticons(text);
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = allcap_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let word = lowered[i].as_str();
            if booster_scalar(word).is_some() {
                sentiments.push(0.0);
                continue;
            }
            if word == "kind" && lowered.get(i + 1).map(String::as_str) == Some("of") {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence_at(&tokens, &lowered, i, cap_diff));
        }

        but_check(&lowered, &mut sentiments);
        self.score_valence(&sentiments, text)
    }

    fn valence_at(&self, tokens: &[&str], lowered: &[String], i: usize, cap_diff: bool) -> f64 {
        let word = lowered[i].as_str();
        let Some(&base) = self.lexicon.get(word) else {
            return 0.0;
        };

        // "no" in front of another rated word acts as a negation, not a sentiment of its own
        if word == "no"
            && lowered
                .get(i + 1)
                .is_some_and(|next| self.lexicon.contains_key(next))
        {
            return 0.0;
        }

        let mut valence = base;
        if cap_diff && is_all_caps(tokens[i]) {
            valence += C_INCR.copysign(valence);
        }

        for start in 0..3 {
            if i <= start {
                break;
            }
            let prev = lowered[i - (start + 1)].as_str();
            if self.lexicon.contains_key(prev) {
                continue;
            }
            let mut scalar = scalar_inc_dec(tokens[i - (start + 1)], prev, valence, cap_diff);
            if start == 1 {
                scalar *= 0.95;
            } else if start == 2 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_check(valence, lowered, start, i);
        }

        if i > 0 && lowered[i - 1] == "no" {
            valence *= N_SCALAR;
        }

        least_check(valence, lowered, i, &self.lexicon)
    }

    fn score_valence(&self, sentiments: &[f64], text: &str) -> SentimentScore {
        if sentiments.is_empty() {
            return SentimentScore::default();
        }

        let punct = punctuation_emphasis(text);
        let mut sum: f64 = sentiments.iter().sum();
        if sum > 0.0 {
            sum += punct;
        } else if sum < 0.0 {
            sum -= punct;
        }
        let compound = normalize(sum);

        let (mut pos_sum, mut neg_sum, neu_count) = sift_sentiments(sentiments);
        if pos_sum > neg_sum.abs() {
            pos_sum += punct;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= punct;
        }

        let total = pos_sum + neg_sum.abs() + neu_count;
        SentimentScore {
            negative: round_to(neg_sum.abs() / total, 3),
            neutral: round_to(neu_count / total, 3),
            positive: round_to(pos_sum.abs() / total, 3),
            compound: round_to(compound, 4),
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for SentimentAnalyzer {
    fn score(&self, text: &str) -> SentimentScore {
        self.polarity_scores(text)
    }
}

fn scalar_inc_dec(token: &str, lowered: &str, valence: f64, cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster_scalar(lowered) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_diff && is_all_caps(token) {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

fn negation_check(valence: f64, lowered: &[String], start: usize, i: usize) -> f64 {
    let prev = lowered[i - (start + 1)].as_str();
    match start {
        1 if prev == "never"
            && matches!(lowered[i - 1].as_str(), "so" | "this") =>
        {
            valence * 1.25
        }
        2 if prev == "never"
            && (matches!(lowered[i - 2].as_str(), "so" | "this")
                || matches!(lowered[i - 1].as_str(), "so" | "this")) =>
        {
            valence * 1.25
        }
        _ if is_negation(prev) => valence * N_SCALAR,
        _ => valence,
    }
}

fn least_check(valence: f64, lowered: &[String], i: usize, lexicon: &HashMap<String, f64>) -> f64 {
    if i == 0 || lowered[i - 1] != "least" || lexicon.contains_key("least") {
        return valence;
    }
    if i > 1 && matches!(lowered[i - 2].as_str(), "at" | "very") {
        return valence;
    }
    valence * N_SCALAR
}

/// Everything before "but" is halved, everything after is amplified.
fn but_check(lowered: &[String], sentiments: &mut [f64]) {
    let Some(but_idx) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (idx, sentiment) in sentiments.iter_mut().enumerate() {
        if idx < but_idx {
            *sentiment *= 0.5;
        } else if idx > but_idx {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();

    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_MAX,
    };

    exclamations * EXCLAMATION_INCR + question_amp
}

fn sift_sentiments(sentiments: &[f64]) -> (f64, f64, f64) {
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    (pos_sum, neg_sum, neu_count)
}

/// Squashes an unbounded valence sum into `[-1, 1]`.
pub fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

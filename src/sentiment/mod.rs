//! Sentiment Analysis Module
//!
//! Rule-based polarity estimation for short English review texts.
//!
//! ## Overview
//! Scoring follows the VADER family of heuristics: every token is looked up in a
//! valence lexicon, then adjusted by its neighbourhood (boosters, negations, capitalisation,
//! contrastive "but") and by the punctuation of the whole text. The adjusted valences are
//! summed and squashed into a single `compound` polarity in `[-1, 1]`, which is what the
//! review ranking sorts on.
//!
//! ## Submodules
//! - **`analyzer`**: The `SentimentScorer` trait and the lexicon-driven `SentimentAnalyzer`.
//! - **`lexicon`**: Built-in valence table, booster words, negations and lexicon file parsing.
//! - **`tokenizer`**: Splits text into words and emoticons, capitalisation helpers.
//! - **`types`**: The `SentimentScore` result returned to callers.

pub mod analyzer;
pub mod lexicon;
pub mod tokenizer;
pub mod types;

pub use analyzer::{SentimentAnalyzer, SentimentScorer};
pub use types::SentimentScore;

#[cfg(test)]
mod tests;

//! Valence tables used by the analyzer.
//!
//! The built-in table is a hospitality-oriented subset of the VADER lexicon (mean human
//! ratings on a -4..+4 scale). A complete `vader_lexicon.txt` can be loaded at startup with
//! [`parse_lexicon`] instead.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;

/// Increment applied by booster words.
pub const B_INCR: f64 = 0.293;
/// Decrement applied by dampener words.
pub const B_DECR: f64 = -0.293;
/// Emphasis added to an all-caps word when the rest of the text is not capitalised.
pub const C_INCR: f64 = 0.733;
/// Multiplier applied to a negated valence.
pub const N_SCALAR: f64 = -0.74;

pub const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't",
    "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt",
    "havent", "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't",
    "isn't", "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not",
    "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "oughtn't", "shan't", "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont",
    "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
];

pub const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptionally", B_INCR),
    ("extremely", B_INCR),
    ("fabulously", B_INCR),
    ("fully", B_INCR),
    ("greatly", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("unbelievably", B_INCR),
    ("unusually", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("kinda", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sorta", B_DECR),
];

const BUILTIN_LEXICON: &[(&str, f64)] = &[
    // positive
    ("accessible", 1.3),
    ("adorable", 2.2),
    ("affordable", 1.6),
    ("amazing", 2.8),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("attentive", 1.9),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("beautifully", 2.7),
    ("best", 3.2),
    ("better", 1.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("charming", 2.4),
    ("cheerful", 2.5),
    ("clean", 1.7),
    ("comfort", 1.5),
    ("comfortable", 2.3),
    ("comfy", 1.8),
    ("convenient", 1.6),
    ("cool", 1.3),
    ("courteous", 2.3),
    ("cozy", 1.9),
    ("delicious", 2.7),
    ("delight", 2.9),
    ("delighted", 2.3),
    ("delightful", 2.8),
    ("easy", 1.9),
    ("efficient", 1.8),
    ("enjoy", 2.2),
    ("enjoyable", 1.9),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("exceptional", 1.5),
    ("excited", 1.4),
    ("fabulous", 2.4),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("generous", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("grateful", 2.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("impressed", 2.1),
    ("impressive", 2.3),
    ("incredible", 2.2),
    ("inviting", 1.8),
    ("kind", 2.4),
    ("like", 2.0),
    ("liked", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("nice", 1.8),
    ("ok", 1.2),
    ("okay", 0.9),
    ("outstanding", 3.0),
    ("peaceful", 2.2),
    ("perfect", 2.7),
    ("perfectly", 3.2),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("polite", 2.0),
    ("popular", 1.8),
    ("professional", 1.7),
    ("quiet", 0.6),
    ("recommend", 1.5),
    ("recommended", 1.6),
    ("relaxing", 2.2),
    ("reliable", 1.9),
    ("relaxed", 2.2),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("smile", 1.5),
    ("spacious", 1.3),
    ("spotless", 1.9),
    ("stunning", 1.6),
    ("superb", 3.1),
    ("sweet", 2.0),
    ("terrific", 2.1),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("tasty", 1.8),
    ("welcoming", 1.9),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("worth", 0.9),
    ("wow", 2.8),
    ("yes", 1.7),
    (":)", 2.0),
    (":-)", 1.3),
    (":d", 2.3),
    ("<3", 1.9),
    // negative
    ("abysmal", -2.9),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("avoid", -1.2),
    ("awful", -2.0),
    ("bad", -2.5),
    ("badly", -2.1),
    ("boring", -1.3),
    ("broke", -1.8),
    ("broken", -1.9),
    ("bug", -1.3),
    ("bugs", -1.6),
    ("complain", -1.5),
    ("complaint", -1.5),
    ("confusing", -1.3),
    ("crap", -1.6),
    ("crappy", -2.5),
    ("cramped", -1.1),
    ("damaged", -1.9),
    ("dirty", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("dreadful", -2.7),
    ("fail", -2.5),
    ("failed", -2.3),
    ("filthy", -2.3),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("gross", -2.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("horrible", -2.5),
    ("horrid", -2.5),
    ("ignored", -1.3),
    ("inconvenient", -1.3),
    ("lousy", -2.5),
    ("mediocre", -1.0),
    ("mess", -1.5),
    ("messy", -1.5),
    ("miserable", -2.2),
    ("nasty", -2.6),
    ("no", -1.2),
    ("noisy", -0.7),
    ("pathetic", -2.6),
    ("poor", -2.1),
    ("poorly", -1.9),
    ("problem", -1.7),
    ("problems", -1.7),
    ("regret", -1.8),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scary", -2.2),
    ("shabby", -1.6),
    ("sick", -2.3),
    ("smelly", -1.4),
    ("sorry", -0.3),
    ("stinks", -1.7),
    ("stupid", -2.4),
    ("sucks", -1.5),
    ("terrible", -2.1),
    ("ugly", -2.3),
    ("uncomfortable", -1.6),
    ("unfriendly", -1.5),
    ("unhappy", -1.8),
    ("unhelpful", -1.9),
    ("unpleasant", -2.1),
    ("upset", -1.6),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
    (":(", -1.9),
    (":-(", -1.5),
];

/// Builds the embedded lexicon.
pub fn builtin_lexicon() -> HashMap<String, f64> {
    BUILTIN_LEXICON
        .iter()
        .map(|(token, valence)| (token.to_string(), *valence))
        .collect()
}

/// Parses a VADER-format lexicon: `token<TAB>mean valence[<TAB>...]` per line.
///
/// Blank lines are skipped. Tokens are stored lowercased. Valences must be finite numbers.
pub fn parse_lexicon(content: &str) -> Result<HashMap<String, f64>> {
    let mut lexicon = HashMap::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let token = fields
            .next()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .with_context(|| format!("lexicon line {}: missing token", idx + 1))?;
        let valence: f64 = fields
            .next()
            .with_context(|| format!("lexicon line {}: missing valence", idx + 1))?
            .trim()
            .parse()
            .with_context(|| format!("lexicon line {}: invalid valence", idx + 1))?;
        if !valence.is_finite() {
            bail!("lexicon line {}: invalid valence", idx + 1);
        }

        lexicon.insert(token.to_lowercase(), valence);
    }

    Ok(lexicon)
}

pub fn booster_scalar(token: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, scalar)| *scalar)
}

pub fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.contains("n't")
}

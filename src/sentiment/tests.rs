//! Sentiment Module Tests
//!
//! ## Test Scopes
//! - **Tokenizer**: Word/emoticon splitting and capitalisation helpers.
//! - **Lexicon**: Parsing VADER-format lexicon files.
//! - **Analyzer**: Polarity direction, heuristics (negation, boosters, caps, "but",
//!   punctuation) and the bounds of the compound score.

#[cfg(test)]
mod tests {
    use crate::sentiment::analyzer::normalize;
    use crate::sentiment::lexicon::{booster_scalar, is_negation, parse_lexicon, B_INCR};
    use crate::sentiment::tokenizer::{allcap_differential, is_all_caps, words_and_emoticons};
    use crate::sentiment::{SentimentAnalyzer, SentimentScore, SentimentScorer};
    use std::collections::HashMap;

    fn compound(text: &str) -> f64 {
        SentimentAnalyzer::new().score(text).compound
    }

    // ============================================================
    // TOKENIZER TESTS
    // ============================================================

    #[test]
    fn test_words_strips_surrounding_punctuation() {
        let tokens = words_and_emoticons("Great stay, lovely staff!!!");
        assert_eq!(tokens, vec!["Great", "stay", "lovely", "staff"]);
    }

    #[test]
    fn test_words_keeps_emoticons() {
        let tokens = words_and_emoticons("loved it :) :-(");
        assert!(tokens.contains(&":)"));
        assert!(tokens.contains(&":-("));
    }

    #[test]
    fn test_words_keeps_contractions() {
        let tokens = words_and_emoticons("It wasn't clean.");
        assert_eq!(tokens, vec!["It", "wasn't", "clean"]);
    }

    #[test]
    fn test_words_drops_single_characters() {
        let tokens = words_and_emoticons("I love it ! a, b");
        assert_eq!(tokens, vec!["love", "it", "a,"]);
    }

    #[test]
    fn test_words_empty() {
        assert!(words_and_emoticons("").is_empty());
        assert!(words_and_emoticons("   \n\t ").is_empty());
    }

    #[test]
    fn test_is_all_caps() {
        assert!(is_all_caps("GREAT"));
        assert!(is_all_caps("GREAT!"));
        assert!(!is_all_caps("Great"));
        assert!(!is_all_caps("!!!"));
    }

    #[test]
    fn test_allcap_differential() {
        assert!(allcap_differential(&["the", "room", "was", "GREAT"]));
        assert!(!allcap_differential(&["THE", "ROOM", "WAS", "GREAT"]));
        assert!(!allcap_differential(&["the", "room"]));
        assert!(!allcap_differential(&[]));
    }

    // ============================================================
    // LEXICON TESTS
    // ============================================================

    #[test]
    fn test_parse_lexicon_reads_vader_format() {
        let content = "good\t1.9\t0.9434\t[2, 1, 2]\nBAD\t-2.5\t0.67082\t[-3, -2]\n\n";
        let lexicon = parse_lexicon(content).expect("valid lexicon");

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get("good"), Some(&1.9));
        // Tokens are lowercased
        assert_eq!(lexicon.get("bad"), Some(&-2.5));
    }

    #[test]
    fn test_parse_lexicon_reports_line_number() {
        let content = "good\t1.9\nbad\tnot-a-number\n";
        let err = parse_lexicon(content).unwrap_err();
        assert!(err.to_string().contains("line 2"), "got: {}", err);
    }

    #[test]
    fn test_parse_lexicon_missing_valence() {
        let err = parse_lexicon("lonely-token\n").unwrap_err();
        assert!(err.to_string().contains("missing valence"));
    }

    #[test]
    fn test_parse_lexicon_rejects_non_finite_valence() {
        for value in ["inf", "-inf", "NaN", "infinity"] {
            let content = format!("good\t1.9\ngreat\t{}\n", value);
            let err = parse_lexicon(&content).unwrap_err();
            assert_eq!(err.to_string(), "lexicon line 2: invalid valence", "value {}", value);
        }
    }

    #[test]
    fn test_from_lexicon_file() {
        let path = std::env::temp_dir().join(format!("lexicon-{}.txt", uuid::Uuid::new_v4()));
        std::fs::write(&path, "splendid\t3.0\ndreary\t-2.0\n").unwrap();

        let analyzer = SentimentAnalyzer::from_lexicon_file(&path).expect("lexicon loads");
        assert_eq!(analyzer.lexicon_len(), 2);
        assert!(analyzer.score("a splendid evening").compound > 0.0);
        // Words outside the custom lexicon no longer carry sentiment
        assert_eq!(analyzer.score("great").compound, 0.0);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_lexicon_file_missing() {
        let path = std::path::Path::new("/definitely/not/here/vader_lexicon.txt");
        assert!(SentimentAnalyzer::from_lexicon_file(path).is_err());
    }

    #[test]
    fn test_booster_and_negation_tables() {
        assert_eq!(booster_scalar("very"), Some(B_INCR));
        assert!(booster_scalar("slightly").unwrap() < 0.0);
        assert_eq!(booster_scalar("room"), None);

        assert!(is_negation("not"));
        assert!(is_negation("never"));
        assert!(is_negation("shouldn't"));
        assert!(!is_negation("nothingness-free"));
    }

    // ============================================================
    // ANALYZER TESTS
    // ============================================================

    #[test]
    fn test_empty_text_scores_zero() {
        let score = SentimentAnalyzer::new().score("");
        assert_eq!(score, SentimentScore::default());
        assert_eq!(score.compound, 0.0);
    }

    #[test]
    fn test_great_stay() {
        let score = SentimentAnalyzer::new().score("Great stay");

        // great = 3.1 -> 3.1 / sqrt(3.1^2 + 15)
        assert!((score.compound - 0.6249).abs() < 1e-4, "got {}", score.compound);
        assert_eq!(score.negative, 0.0);
        assert!((score.positive - 0.804).abs() < 1e-3);
        assert!((score.neutral - 0.196).abs() < 1e-3);
    }

    #[test]
    fn test_single_characters_do_not_count_as_neutral() {
        let score = SentimentAnalyzer::new().score("I love it");

        // love = 3.2 -> pos 4.2 / 5.2, "it" is the only neutral token
        assert!((score.positive - 0.808).abs() < 1e-3, "got {}", score.positive);
        assert!((score.neutral - 0.192).abs() < 1e-3, "got {}", score.neutral);
        assert_eq!(score.compound, compound("love it"));
    }

    #[test]
    fn test_neutral_text() {
        let score = SentimentAnalyzer::new().score("The hotel is on Main Street");
        assert_eq!(score.compound, 0.0);
        assert_eq!(score.neutral, 1.0);
    }

    #[test]
    fn test_polarity_direction() {
        assert!(compound("The room was wonderful and the staff were friendly") > 0.5);
        assert!(compound("The room was dirty and the staff were rude") < -0.5);
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert!(compound("The room was good") > 0.0);
        assert!(compound("The room was not good") < 0.0);
        assert!(compound("The breakfast wasn't bad") > 0.0);
    }

    #[test]
    fn test_no_before_rated_word() {
        // "no" negates the following rated word instead of scoring on its own
        assert!(compound("There were no problems") > 0.0);
        assert!(compound("No") < 0.0);
    }

    #[test]
    fn test_booster_increases_intensity() {
        assert!(compound("The view was very good") > compound("The view was good"));
        assert!(compound("The view was slightly good") < compound("The view was good"));
        assert!(compound("The bed was very bad") < compound("The bed was bad"));
    }

    #[test]
    fn test_caps_emphasis() {
        assert!(compound("The food was GREAT") > compound("The food was great"));
        // All-caps text is not emphasis
        assert_eq!(compound("THE FOOD WAS GREAT"), compound("the food was great"));
    }

    #[test]
    fn test_exclamation_emphasis() {
        assert!(compound("Great stay!") > compound("Great stay"));
        assert!(compound("Great stay!!!!") > compound("Great stay!"));
        // Capped at four marks
        assert_eq!(compound("Great stay!!!!"), compound("Great stay!!!!!!!!"));
    }

    #[test]
    fn test_question_marks() {
        assert_eq!(compound("Great stay?"), compound("Great stay"));
        assert!(compound("Great stay??") > compound("Great stay"));
    }

    #[test]
    fn test_but_shifts_weight_to_second_clause() {
        assert!(compound("The room was great but the staff was rude") < 0.0);
        assert!(compound("The room was bad but the staff was lovely") > 0.0);
    }

    #[test]
    fn test_kind_of_is_not_kindness() {
        assert_eq!(compound("kind of"), 0.0);
        assert!(compound("kind") > 0.0);
    }

    #[test]
    fn test_least_flips() {
        assert!(compound("the least pleasant stay") < 0.0);
        assert!(compound("at least pleasant") > 0.0);
    }

    #[test]
    fn test_compound_bounds() {
        let texts = [
            "",
            "great",
            "GREAT GREAT great great!!!! best best best love love love",
            "worst worst WORST horrible terrible awful!!!!",
            "ok",
            ":) :( <3",
            "I really really really loved it, but it was SO dirty??? not good",
        ];
        let analyzer = SentimentAnalyzer::new();
        for text in texts {
            let score = analyzer.score(text);
            assert!(
                (-1.0..=1.0).contains(&score.compound),
                "compound out of range for {:?}: {}",
                text,
                score.compound
            );
            for part in [score.negative, score.neutral, score.positive] {
                assert!((0.0..=1.0).contains(&part));
            }
        }
    }

    #[test]
    fn test_proportions_sum_to_one() {
        let score = SentimentAnalyzer::new().score("Lovely staff, dirty carpet, quiet street");
        let total = score.negative + score.neutral + score.positive;
        assert!((total - 1.0).abs() < 0.01, "got {}", total);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let analyzer = SentimentAnalyzer::new();
        let text = "Not the best, but the staff were REALLY helpful!";
        assert_eq!(analyzer.score(text), analyzer.score(text));
    }

    #[test]
    fn test_custom_lexicon() {
        let mut lexicon = HashMap::new();
        lexicon.insert("meh".to_string(), -0.5);
        let analyzer = SentimentAnalyzer::with_lexicon(lexicon);

        assert!(analyzer.score("meh").compound < 0.0);
        assert_eq!(analyzer.score("great").compound, 0.0);
    }

    #[test]
    fn test_normalize_bounds() {
        assert_eq!(normalize(0.0), 0.0);
        assert!(normalize(1e9) <= 1.0);
        assert!(normalize(-1e9) >= -1.0);
    }

    #[test]
    fn test_score_serializes_with_short_keys() {
        let score = SentimentScore {
            negative: 0.1,
            neutral: 0.5,
            positive: 0.4,
            compound: 0.3,
        };
        let json = serde_json::to_value(score).unwrap();

        assert_eq!(json["neg"], 0.1);
        assert_eq!(json["neu"], 0.5);
        assert_eq!(json["pos"], 0.4);
        assert_eq!(json["compound"], 0.3);
    }
}

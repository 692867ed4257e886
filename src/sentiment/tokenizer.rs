/// Splits text into scoring tokens.
///
/// Tokens are whitespace-separated and single characters are dropped. Surrounding ASCII punctuation is removed unless the
/// remaining word would be two characters or shorter, so emoticons such as `:)` or `:-(`
/// survive intact.
pub fn words_and_emoticons(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// True when the token has at least one letter and no lowercase letters.
pub fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are written in capitals.
///
/// Capitalised words only count as emphasis when the rest of the text is not shouting.
pub fn allcap_differential(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

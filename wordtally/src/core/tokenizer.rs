// src/core/tokenizer.rs

/// Removes ASCII punctuation and lowercases the text.
///
/// Punctuation is deleted without replacement, so `let's` becomes `lets`
/// and `well-known` becomes `wellknown`. Characters outside ASCII are only
/// lowercased.
#[inline]
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Splits a text into normalized tokens, in the order they appear.
///
/// Runs of separators separate tokens and empty tokens are dropped, so text
/// made only of punctuation and whitespace yields nothing.
#[inline]
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Unicode whitespace plus the ASCII information separators (file, group,
/// record and unit separator).
#[inline]
#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

//! Input tokenization.
//!
//! Converts raw player input into lowercase words. Anything that is not a
//! letter, digit, or underscore separates words, so `ward-candle` becomes
//! `ward candle`.

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Lowercases the input and collapses every run of separators into one space.
    #[must_use]
    pub fn sanitize(input: &str) -> String {
        Self::tokenize(input).join(" ")
    }

    /// Splits input into lowercase words.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        let mut words = Vec::new();
        let mut current = String::new();

        for ch in input.chars() {
            if ch.is_alphanumeric() || ch == '_' {
                current.extend(ch.to_lowercase());
            } else if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            words.push(current);
        }
        words
    }
}

//! Keyword extraction on top of the normalizer.

use std::collections::HashSet;

use super::normalize::{is_numeric, stem, tokenize, StopWords};

/// Default cap on the number of keywords kept per thought.
pub const MAX_KEYWORDS: usize = 10;

/// Turn raw text into an ordered list of up to `max` representative keywords.
///
/// Tokens of two characters or fewer, pure digits, and stop words are dropped.
/// Of the survivors, only the first surface form seen for each distinct stem is
/// kept, in order of appearance.
pub fn extract_keywords(text: &str, stop_words: &StopWords, max: usize) -> Vec<String> {
    let mut seen_stems = HashSet::new();
    let mut keywords = Vec::new();

    for token in tokenize(text) {
        if token.chars().count() <= 2 || is_numeric(&token) || stop_words.contains(&token) {
            continue;
        }
        if seen_stems.insert(stem(&token)) {
            keywords.push(token);
        }
    }

    keywords.truncate(max);
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<String> {
        extract_keywords(text, &StopWords::new(), MAX_KEYWORDS)
    }

    #[test]
    fn drops_stop_words_and_short_tokens() {
        assert_eq!(
            extract("The quick brown fox jumps over the lazy dog"),
            vec!["quick", "brown", "fox", "jumps", "lazy", "dog"]
        );
    }

    #[test]
    fn keeps_first_surface_form_per_stem() {
        assert_eq!(extract("Testing tests tested"), vec!["testing"]);
    }

    #[test]
    fn drops_pure_digits_but_keeps_mixed_tokens() {
        assert_eq!(
            extract("2024 abc 42x hello,world!!"),
            vec!["abc", "42x", "hello", "world"]
        );
    }

    #[test]
    fn contractions_split_on_the_apostrophe() {
        assert_eq!(
            extract("I'm sure it's fine, don't worry"),
            vec!["sure", "fine", "don", "worry"]
        );
    }

    #[test]
    fn truncates_to_max() {
        let text = "one two three four five six seven eight nine ten eleven twelve thirteen";
        let keywords = extract(text);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords.last().map(String::as_str), Some("ten"));

        let short = extract_keywords(text, &StopWords::new(), 3);
        assert_eq!(short, vec!["one", "two", "three"]);
    }

    #[test]
    fn empty_or_filler_text_yields_nothing() {
        assert!(extract("").is_empty());
        assert!(extract("   ").is_empty());
        assert!(extract("it is what it is, so be it").is_empty());
    }

    #[test]
    fn non_ascii_letters_break_words() {
        assert_eq!(extract("café naïve résumé"), vec!["caf", "sum"]);
    }
}

//! Text normalization: tokenization, stop-word filtering, and suffix stemming.
//!
//! The stemmer is a single-pass suffix stripper and is not
//! idempotent: `stem("developers")` is `"developer"`, and stemming that again
//! yields `"develop"`.

use std::collections::HashSet;

/// Suffixes tried by [`stem`], in priority order.
const SUFFIXES: [&str; 11] = [
    "ing", "ed", "ly", "er", "est", "ness", "ment", "tion", "sion", "ies", "s",
];

/// English function words and filler dropped before keyword extraction.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "shall", "can", "this",
    "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", "what", "which", "who",
    "whom", "where", "when", "why", "how", "all", "each", "every", "both", "few", "more", "most",
    "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "just", "about", "into", "through", "during", "before", "after", "above", "below",
    "between", "under", "again", "further", "then", "once", "here", "there", "any", "also", "over",
    "out", "up", "down", "off", "if", "my", "your", "our", "their", "its", "as", "get", "make",
    "like", "think", "know", "want", "need", "use", "try", "come", "go", "see", "look", "way",
    "im", "i'm", "don't", "dont", "can't", "cant", "won't", "wont", "it's", "really", "maybe",
    "something", "things", "thing", "much", "many", "well",
];

/// Reduce a lowercase token to its stem by stripping at most one suffix.
///
/// The first suffix in [`SUFFIXES`] that the word ends with wins, provided the
/// word is longer than the suffix plus two characters. `ies` becomes `y`; every
/// other suffix is dropped.
pub fn stem(word: &str) -> String {
    let word = word.to_lowercase();
    let len = word.chars().count();

    for suffix in SUFFIXES {
        if len <= suffix.len() + 2 {
            continue;
        }
        if let Some(root) = word.strip_suffix(suffix) {
            if suffix == "ies" {
                return format!("{root}y");
            }
            return root.to_string();
        }
    }

    word
}

/// Lowercase `text`, blank out every non-word character, and split on whitespace.
///
/// Word characters are ASCII letters, digits, and `_`. Empty tokens are never
/// returned.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// True if the token is made only of ASCII digits.
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// The fixed stop-word set. Built once and shared read-only.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<&'static str>,
}

impl StopWords {
    pub fn new() -> Self {
        Self {
            words: STOP_WORDS.iter().copied().collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_first_matching_suffix_only() {
        assert_eq!(stem("running"), "runn");
        assert_eq!(stem("mentioned"), "mention");
        assert_eq!(stem("happiness"), "happi");
        assert_eq!(stem("quickly"), "quick");
        assert_eq!(stem("interest"), "inter");
        assert_eq!(stem("stations"), "station");
    }

    #[test]
    fn ies_becomes_y() {
        assert_eq!(stem("cities"), "city");
        // too short for "ies", falls through to "s"
        assert_eq!(stem("ties"), "tie");
    }

    #[test]
    fn length_guard_keeps_short_words() {
        assert_eq!(stem("bed"), "bed");
        assert_eq!(stem("ring"), "ring");
        assert_eq!(stem("is"), "is");
        assert_eq!(stem(""), "");
    }

    #[test]
    fn single_pass_is_not_idempotent() {
        let once = stem("developers");
        assert_eq!(once, "developer");
        assert_eq!(stem(&once), "develop");
    }

    #[test]
    fn stem_lowercases_input() {
        assert_eq!(stem("Testing"), "test");
    }

    #[test]
    fn tokenize_replaces_punctuation_and_non_ascii() {
        assert_eq!(tokenize("Hello,World!!"), vec!["hello", "world"]);
        assert_eq!(tokenize("café"), vec!["caf"]);
        assert_eq!(tokenize("  python_3\trocks\n"), vec!["python_3", "rocks"]);
        assert!(tokenize("?!.,").is_empty());
    }

    #[test]
    fn numeric_tokens() {
        assert!(is_numeric("2024"));
        assert!(!is_numeric("42x"));
        assert!(!is_numeric(""));
    }

    #[test]
    fn stop_word_set_is_complete() {
        let stop = StopWords::new();
        assert_eq!(stop.len(), 138);
        for w in ["the", "i'm", "really", "well", "think"] {
            assert!(stop.contains(w), "{w} should be a stop word");
        }
        assert!(!stop.contains("python"));
    }
}

//! Keyword-set similarity: stem overlap blended with category overlap.

use std::collections::HashSet;

use super::dictionary::{Category, SemanticDictionary};
use super::normalize::stem;

/// Weight of the Jaccard index over stems.
pub const DIRECT_WEIGHT: f64 = 0.6;
/// Weight of the shared-category ratio.
pub const CATEGORY_WEIGHT: f64 = 0.4;

/// Similarity in `[0, 1]` between two keyword lists.
///
/// Returns 0 when either side is empty. Symmetric and deterministic.
pub fn similarity(dictionary: &SemanticDictionary, a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let stems_a: HashSet<String> = a.iter().map(|k| stem(k)).collect();
    let stems_b: HashSet<String> = b.iter().map(|k| stem(k)).collect();
    let shared_stems = stems_a.intersection(&stems_b).count();
    let union = stems_a.len() + stems_b.len() - shared_stems;
    let direct = if union > 0 {
        shared_stems as f64 / union as f64
    } else {
        0.0
    };

    let categories_a = categories(dictionary, a);
    let categories_b = categories(dictionary, b);
    let shared_categories = categories_a.intersection(&categories_b).count();
    let widest = categories_a.len().max(categories_b.len());
    let category = if widest > 0 {
        shared_categories as f64 / widest as f64
    } else {
        0.0
    };

    direct * DIRECT_WEIGHT + category * CATEGORY_WEIGHT
}

fn categories(dictionary: &SemanticDictionary, keywords: &[String]) -> HashSet<Category> {
    keywords
        .iter()
        .filter_map(|k| dictionary.category_of(k))
        .collect()
}

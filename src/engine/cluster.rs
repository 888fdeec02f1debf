//! Cluster assignment for a new thought.
//!
//! Three tiers, each short-circuiting the next:
//!
//! 1. **Category vote**: keywords vote for their category with weight 2, raw
//!    whitespace-split content tokens with weight 1. Any vote at all wins.
//! 2. **Similarity vote**: existing thoughts more similar than the threshold
//!    vote for their own cluster with their similarity score.
//! 3. **Default**: the configured fallback label.

use serde::Serialize;

use super::dictionary::SemanticDictionary;
use super::similarity::similarity;
use super::ThoughtSnapshot;
use crate::config::EngineConfig;

/// Vote weight of a keyword's category.
const KEYWORD_VOTE: f64 = 2.0;
/// Vote weight of a raw content token's category.
const CONTENT_VOTE: f64 = 1.0;

/// Which tier produced a cluster label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterBasis {
    Category,
    Similarity,
    Default,
}

impl std::fmt::Display for ClusterBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ClusterBasis::Category => "category vote",
            ClusterBasis::Similarity => "similarity vote",
            ClusterBasis::Default => "default",
        };
        f.write_str(s)
    }
}

/// The chosen cluster and how it was chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterAssignment {
    pub label: String,
    pub basis: ClusterBasis,
}

/// Running scores keyed in first-seen order.
///
/// [`Tally::best`] returns the earliest key among those sharing the top score,
/// so ties resolve the same way on every run.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    scores: Vec<(K, f64)>,
}

impl<K: PartialEq> Tally<K> {
    pub fn new() -> Self {
        Self { scores: Vec::new() }
    }

    pub fn add(&mut self, key: K, weight: f64) {
        match self.scores.iter_mut().find(|(k, _)| *k == key) {
            Some((_, score)) => *score += weight,
            None => self.scores.push((key, weight)),
        }
    }

    pub fn best(&self) -> Option<(&K, f64)> {
        let mut best: Option<(&K, f64)> = None;
        for (key, score) in &self.scores {
            if best.map_or(true, |(_, top)| *score > top) {
                best = Some((key, *score));
            }
        }
        best
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<K: PartialEq> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick a cluster label for a thought with `keywords` and raw `content`.
pub fn assign_cluster(
    dictionary: &SemanticDictionary,
    config: &EngineConfig,
    keywords: &[String],
    content: &str,
    existing: &[ThoughtSnapshot],
) -> ClusterAssignment {
    let mut votes = Tally::new();
    for keyword in keywords {
        if let Some(category) = dictionary.category_of(keyword) {
            votes.add(category, KEYWORD_VOTE);
        }
    }
    for token in content.to_lowercase().split_whitespace() {
        if let Some(category) = dictionary.category_of(token) {
            votes.add(category, CONTENT_VOTE);
        }
    }
    if let Some((category, _)) = votes.best() {
        return ClusterAssignment {
            label: category.label().to_string(),
            basis: ClusterBasis::Category,
        };
    }

    let mut neighbours: Tally<&str> = Tally::new();
    for thought in existing {
        if thought.cluster.is_empty() {
            continue;
        }
        let score = similarity(dictionary, keywords, &thought.keywords);
        if score > config.cluster_vote_threshold {
            neighbours.add(thought.cluster.as_str(), score);
        }
    }
    if let Some((cluster, score)) = neighbours.best() {
        if score > config.cluster_vote_threshold {
            return ClusterAssignment {
                label: (*cluster).to_string(),
                basis: ClusterBasis::Similarity,
            };
        }
    }

    ClusterAssignment {
        label: config.default_cluster.clone(),
        basis: ClusterBasis::Default,
    }
}

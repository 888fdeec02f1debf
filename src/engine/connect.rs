//! Weighted edges from a new thought to the thoughts already in the store.
//!
//! Two passes, both directed new → existing:
//!
//! 1. every existing thought more similar than the link threshold gets an edge
//!    weighted by that similarity;
//! 2. every remaining thought in the same cluster gets a fixed-strength edge.
//!
//! A pair that is already connected, in either direction, is skipped.

use std::collections::HashSet;

use serde::Serialize;

use super::dictionary::SemanticDictionary;
use super::similarity::similarity;
use super::{Link, ThoughtId, ThoughtSnapshot};
use crate::config::EngineConfig;

/// Existing edges, indexed by unordered endpoint pair.
#[derive(Debug, Clone, Default)]
pub struct LinkSet {
    pairs: HashSet<(ThoughtId, ThoughtId)>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edge. Returns `false` if the pair was already present.
    pub fn insert(&mut self, a: ThoughtId, b: ThoughtId) -> bool {
        self.pairs.insert(pair(a, b))
    }

    /// True if `a` and `b` are connected in either direction.
    pub fn contains(&self, a: ThoughtId, b: ThoughtId) -> bool {
        self.pairs.contains(&pair(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<'a> FromIterator<&'a Link> for LinkSet {
    fn from_iter<I: IntoIterator<Item = &'a Link>>(iter: I) -> Self {
        let mut set = Self::new();
        for link in iter {
            set.insert(link.source_id, link.target_id);
        }
        set
    }
}

impl Extend<Link> for LinkSet {
    fn extend<I: IntoIterator<Item = Link>>(&mut self, iter: I) {
        for link in iter {
            self.insert(link.source_id, link.target_id);
        }
    }
}

fn pair(a: ThoughtId, b: ThoughtId) -> (ThoughtId, ThoughtId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// An edge to `target_id` whose source is not yet known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlannedLink {
    pub target_id: ThoughtId,
    pub strength: f64,
}

impl PlannedLink {
    pub fn from_source(self, source_id: ThoughtId) -> Link {
        Link {
            source_id,
            target_id: self.target_id,
            strength: self.strength,
        }
    }
}

/// Edges from `new` to `existing`, skipping pairs already present in `links`.
pub fn build_connections(
    dictionary: &SemanticDictionary,
    config: &EngineConfig,
    new: &ThoughtSnapshot,
    existing: &[ThoughtSnapshot],
    links: &LinkSet,
) -> Vec<Link> {
    link_targets(
        dictionary,
        config,
        Some(new.id),
        &new.keywords,
        &new.cluster,
        existing,
        links,
    )
    .into_iter()
    .map(|planned| planned.from_source(new.id))
    .collect()
}

/// Edges for a thought that has not been stored yet.
///
/// Such a thought has no id and therefore no prior edges.
pub fn plan_links(
    dictionary: &SemanticDictionary,
    config: &EngineConfig,
    keywords: &[String],
    cluster: &str,
    existing: &[ThoughtSnapshot],
) -> Vec<PlannedLink> {
    link_targets(
        dictionary,
        config,
        None,
        keywords,
        cluster,
        existing,
        &LinkSet::new(),
    )
}

fn link_targets(
    dictionary: &SemanticDictionary,
    config: &EngineConfig,
    source: Option<ThoughtId>,
    keywords: &[String],
    cluster: &str,
    existing: &[ThoughtSnapshot],
    links: &LinkSet,
) -> Vec<PlannedLink> {
    let mut linked: HashSet<ThoughtId> = HashSet::new();
    let mut planned = Vec::new();

    let already_linked = |target: ThoughtId, linked: &HashSet<ThoughtId>| {
        linked.contains(&target) || source.is_some_and(|s| links.contains(s, target))
    };

    for thought in existing {
        if source == Some(thought.id) || already_linked(thought.id, &linked) {
            continue;
        }
        let score = similarity(dictionary, keywords, &thought.keywords);
        if score > config.link_threshold {
            linked.insert(thought.id);
            planned.push(PlannedLink {
                target_id: thought.id,
                strength: score,
            });
        }
    }

    for thought in existing {
        if thought.cluster != cluster
            || source == Some(thought.id)
            || already_linked(thought.id, &linked)
        {
            continue;
        }
        linked.insert(thought.id);
        planned.push(PlannedLink {
            target_id: thought.id,
            strength: config.same_cluster_strength,
        });
    }

    planned
}

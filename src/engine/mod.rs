//! The decision core: keywords, cluster, and links for a new thought.
//!
//! Everything here is a pure function of the new thought's text and a snapshot
//! of the thoughts already stored. The [`Engine`] owns the read-only tables
//! (semantic dictionary, stop words) built once at startup and can be shared
//! across threads behind an `Arc` without locking.

pub mod cluster;
pub mod connect;
pub mod dictionary;
pub mod keywords;
pub mod normalize;
pub mod similarity;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use cluster::{ClusterAssignment, ClusterBasis};
use connect::{LinkSet, PlannedLink};
use dictionary::{Category, SemanticDictionary};
use normalize::StopWords;

/// Store-assigned identity of a thought.
pub type ThoughtId = i64;

/// The parts of a stored thought the engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtSnapshot {
    pub id: ThoughtId,
    pub keywords: Vec<String>,
    pub cluster: String,
}

/// A weighted edge, directed from the thought that created it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source_id: ThoughtId,
    pub target_id: ThoughtId,
    /// In `(0, 1]`.
    pub strength: f64,
}

/// Every decision for a thought that is about to be stored.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub keywords: Vec<String>,
    pub cluster: String,
    pub basis: ClusterBasis,
    pub links: Vec<PlannedLink>,
}

impl Plan {
    /// Stamp the planned edges with the id the store assigned.
    pub fn links_from(&self, source_id: ThoughtId) -> Vec<Link> {
        self.links
            .iter()
            .map(|planned| planned.from_source(source_id))
            .collect()
    }
}

/// Keyword extraction, clustering, and linking over fixed lookup tables.
#[derive(Debug, Clone)]
pub struct Engine {
    dictionary: SemanticDictionary,
    stop_words: StopWords,
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let engine = Self {
            dictionary: SemanticDictionary::new(),
            stop_words: StopWords::new(),
            config,
        };
        tracing::debug!(
            dictionary_terms = engine.dictionary.len(),
            stop_words = engine.stop_words.len(),
            "engine tables built"
        );
        engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &SemanticDictionary {
        &self.dictionary
    }

    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        keywords::extract_keywords(text, &self.stop_words, self.config.max_keywords)
    }

    pub fn category_of(&self, term: &str) -> Option<Category> {
        self.dictionary.category_of(term)
    }

    pub fn similarity(&self, a: &[String], b: &[String]) -> f64 {
        similarity::similarity(&self.dictionary, a, b)
    }

    pub fn assign_cluster(
        &self,
        keywords: &[String],
        content: &str,
        existing: &[ThoughtSnapshot],
    ) -> ClusterAssignment {
        cluster::assign_cluster(&self.dictionary, &self.config, keywords, content, existing)
    }

    pub fn build_connections(
        &self,
        new: &ThoughtSnapshot,
        existing: &[ThoughtSnapshot],
        links: &LinkSet,
    ) -> Vec<Link> {
        connect::build_connections(&self.dictionary, &self.config, new, existing, links)
    }

    /// Decide keywords, cluster, and links for `content` before it is stored.
    pub fn plan(&self, content: &str, existing: &[ThoughtSnapshot]) -> Plan {
        let keywords = self.extract_keywords(content);
        let assignment = self.assign_cluster(&keywords, content, existing);
        let links = connect::plan_links(
            &self.dictionary,
            &self.config,
            &keywords,
            &assignment.label,
            existing,
        );

        tracing::debug!(
            keywords = keywords.len(),
            cluster = %assignment.label,
            basis = ?assignment.basis,
            links = links.len(),
            existing = existing.len(),
            "planned thought"
        );

        Plan {
            keywords,
            cluster: assignment.label,
            basis: assignment.basis,
            links,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(engine: &Engine, id: ThoughtId, content: &str, existing: &[ThoughtSnapshot]) -> ThoughtSnapshot {
        let plan = engine.plan(content, existing);
        ThoughtSnapshot {
            id,
            keywords: plan.keywords,
            cluster: plan.cluster,
        }
    }

    #[test]
    fn hiking_thoughts_share_default_cluster_and_weak_edge() {
        let engine = Engine::default();
        let a = stored(&engine, 1, "I love hiking in the mountains", &[]);
        assert_eq!(a.keywords, vec!["love", "hiking", "mountains"]);
        assert_eq!(a.cluster, "ideas");

        let existing = vec![a];
        let plan = engine.plan("Mountain trails are my favorite", &existing);
        assert_eq!(plan.keywords, vec!["mountain", "trails", "favorite"]);
        // similarity 0.12: above the 0.1 cluster vote, below the 0.15 link threshold
        assert_eq!(plan.cluster, "ideas");
        assert_eq!(plan.basis, ClusterBasis::Similarity);

        let links = plan.links_from(2);
        assert_eq!(
            links,
            vec![Link {
                source_id: 2,
                target_id: 1,
                strength: 0.1
            }]
        );
    }

    #[test]
    fn empty_text_is_total() {
        let engine = Engine::default();
        let plan = engine.plan("", &[]);
        assert!(plan.keywords.is_empty());
        assert_eq!(plan.cluster, "ideas");
        assert!(plan.links.is_empty());
    }

    #[test]
    fn custom_default_cluster() {
        let engine = Engine::new(EngineConfig {
            default_cluster: "inbox".into(),
            ..EngineConfig::default()
        });
        assert_eq!(engine.plan("hmm", &[]).cluster, "inbox");
    }

    #[test]
    fn technology_thoughts_link_strongly() {
        let engine = Engine::default();
        let first = stored(&engine, 1, "Learning rust and python programming", &[]);
        assert_eq!(first.cluster, "Software Development");

        let existing = vec![first];
        let plan = engine.plan("Python programming tips", &existing);
        assert_eq!(plan.cluster, "Software Development");
        assert_eq!(plan.links.len(), 1);
        assert!(plan.links[0].strength > 0.15);
    }
}

use std::collections::HashSet;

use thought_threads::config::EngineConfig;
use thought_threads::engine::cluster::ClusterBasis;
use thought_threads::engine::connect::LinkSet;
use thought_threads::engine::dictionary::Category;
use thought_threads::engine::normalize::{stem, StopWords};
use thought_threads::engine::{Engine, ThoughtSnapshot};

const SAMPLES: &[&str] = &[
    "I love hiking in the mountains",
    "Mountain trails are my favorite",
    "The quick brown fox jumps over the lazy dog while developers write python code, \
     deploy servers, review budgets, plan marketing campaigns, teach students, and cook dinner",
    "Running runs runner! 2024 is ok, ab cd",
    "Budget review meeting",
    "Quarterly budget planning",
    "nurse shift at the hospital",
    "???",
    "",
    "Ünïcödé café naïve résumé",
];

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn keywords_respect_filters() {
    let engine = Engine::default();
    let stop_words = StopWords::new();

    for text in SAMPLES {
        let kws = engine.extract_keywords(text);
        assert!(kws.len() <= 10, "{text:?} gave {} keywords", kws.len());

        let mut stems = HashSet::new();
        for kw in &kws {
            assert!(kw.chars().count() > 2, "{kw:?} is too short");
            assert!(!stop_words.contains(kw), "{kw:?} is a stop word");
            assert!(!kw.chars().all(|c| c.is_ascii_digit()), "{kw:?} is numeric");
            assert_eq!(kw, &kw.to_lowercase());
            assert!(stems.insert(stem(kw)), "{kw:?} repeats a stem in {kws:?}");
        }
    }
}

#[test]
fn long_text_is_truncated_in_order() {
    let engine = Engine::default();
    let kws = engine.extract_keywords(SAMPLES[2]);
    assert_eq!(
        kws,
        keywords(&[
            "quick", "brown", "fox", "jumps", "lazy", "dog", "while", "developers", "write", "python"
        ])
    );
}

#[test]
fn stem_collisions_keep_first_surface_form() {
    let engine = Engine::default();
    assert_eq!(engine.extract_keywords(SAMPLES[3]), keywords(&["running", "runs"]));
}

#[test]
fn non_ascii_letters_split_words() {
    let engine = Engine::default();
    // Every accented letter becomes a separator, leaving only short fragments
    for kw in engine.extract_keywords(SAMPLES[9]) {
        assert!(kw.is_ascii());
    }
}

#[test]
fn similarity_is_symmetric_and_bounded() {
    let engine = Engine::default();
    let sets: Vec<Vec<String>> = SAMPLES.iter().map(|t| engine.extract_keywords(t)).collect();

    for a in &sets {
        for b in &sets {
            let ab = engine.similarity(a, b);
            let ba = engine.similarity(b, a);
            assert!((ab - ba).abs() < 1e-12);
            assert!((0.0..=1.0).contains(&ab));
            if a.is_empty() || b.is_empty() {
                assert_eq!(ab, 0.0);
            }
        }
    }
}

#[test]
fn identical_categorized_lists_score_one() {
    let engine = Engine::default();
    let kws = keywords(&["python", "coding"]);
    assert_eq!(engine.similarity(&kws, &kws), 1.0);
}

#[test]
fn category_vote_fires_before_similarity() {
    let engine = Engine::default();
    let existing = vec![ThoughtSnapshot {
        id: 1,
        keywords: keywords(&["python", "coding"]),
        cluster: "ideas".into(),
    }];
    let assignment =
        engine.assign_cluster(&keywords(&["python", "coding"]), "I love python coding", &existing);
    assert_eq!(assignment.label, "Software Development");
    assert_eq!(assignment.basis, ClusterBasis::Category);
}

#[test]
fn similarity_mixes_direct_and_category_overlap() {
    let engine = Engine::default();
    let a = engine.extract_keywords("Budget review meeting");
    let b = engine.extract_keywords("Quarterly budget planning");
    // jaccard 1/5 on stems, category overlap 1/3
    let expected = 0.6 * 0.2 + 0.4 * (1.0 / 3.0);
    assert!((engine.similarity(&a, &b) - expected).abs() < 1e-9);
}

#[test]
fn dictionary_lookups() {
    let engine = Engine::default();
    assert_eq!(engine.category_of("budget"), Some(Category::FinanceAccounting));
    assert_eq!(engine.category_of("NURSE"), Some(Category::Healthcare));
    assert_eq!(engine.category_of("python"), Some(Category::SoftwareDevelopment));
    assert_eq!(engine.category_of("tips"), Some(Category::Hospitality));
    assert_eq!(engine.category_of("mountains"), None);
}

#[test]
fn later_categories_win_collisions() {
    let engine = Engine::default();
    // "code" is registered by Software Development and later, via the stem of "codes", by Engineering
    assert_eq!(engine.category_of("code"), Some(Category::Engineering));
    assert_eq!(engine.category_of("performance"), Some(Category::HumanResources));
}

#[test]
fn category_vote_needs_no_existing_thoughts() {
    let engine = Engine::default();
    let plan = engine.plan("Budget review meeting", &[]);
    assert_eq!(plan.cluster, "Finance & Accounting");
    assert_eq!(plan.basis, ClusterBasis::Category);
    assert!(plan.links.is_empty());
}

#[test]
fn unmatched_text_without_neighbours_gets_default() {
    let config = EngineConfig {
        default_cluster: "misc".into(),
        ..EngineConfig::default()
    };
    let engine = Engine::new(config);
    let plan = engine.plan("I love hiking in the mountains", &[]);
    assert_eq!(plan.cluster, "misc");
    assert_eq!(plan.basis, ClusterBasis::Default);
}

#[test]
fn build_connections_skips_existing_pairs() {
    let engine = Engine::default();
    let existing = vec![
        ThoughtSnapshot {
            id: 1,
            keywords: keywords(&["python", "coding"]),
            cluster: "Software Development".into(),
        },
        ThoughtSnapshot {
            id: 2,
            keywords: keywords(&["java", "coding"]),
            cluster: "Software Development".into(),
        },
    ];
    let new = ThoughtSnapshot {
        id: 3,
        keywords: keywords(&["python", "coding", "tips"]),
        cluster: "Software Development".into(),
    };

    let first = engine.build_connections(&new, &existing, &LinkSet::new());
    assert_eq!(first.len(), 2);
    assert!(first.iter().all(|l| l.source_id == 3));

    let links: LinkSet = first.iter().collect();
    assert!(engine.build_connections(&new, &existing, &links).is_empty());
}

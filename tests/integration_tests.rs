// Integration tests for Setu Algo: full engine over the shipped catalog

use std::sync::Arc;

use setu_algo::{CandidateProfile, CatalogStore, RecommendationEngine, SimilarityModel};

/// Equality-based similarity model: identical terms (ignoring case) score
/// 1.0, everything else 0. Enough to exercise the semantic pathway without
/// an embeddings file.
struct ExactModel;

impl SimilarityModel for ExactModel {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a.to_lowercase() == b.to_lowercase() {
            1.0
        } else {
            0.0
        }
    }
}

fn load_catalog() -> Arc<CatalogStore> {
    Arc::new(CatalogStore::load("data/internships.json").expect("shipped catalog should load"))
}

fn software_dev_profile() -> CandidateProfile {
    CandidateProfile {
        age: "22".to_string(),
        education: "Graduate".to_string(),
        skills: vec![
            "JavaScript".to_string(),
            "React".to_string(),
            "Node.js".to_string(),
            "Python".to_string(),
            "Database Management".to_string(),
        ],
        sectors: vec!["Technology".to_string()],
        location: "Bangalore, Karnataka".to_string(),
    }
}

#[test]
fn test_perfect_match_scores_one_hundred() {
    // All five factors max out against the Software Development Intern
    // posting: skills 5/5 (exact 0.8 + semantic 0.2, capped at 1.0), exact
    // sector, same city, exact education, age inside 21-24.
    let engine =
        RecommendationEngine::with_default_weights(load_catalog(), Some(Arc::new(ExactModel)));

    let results = engine.recommend(&software_dev_profile(), 5);

    assert!(!results.is_empty());
    let top = &results[0];
    assert_eq!(top.title, "Software Development Intern");
    assert_eq!(top.match_score, 100.0);

    assert_eq!(
        top.match_reason.skills,
        vec!["JavaScript", "React", "Node.js", "Python", "Database Management"]
    );
    assert_eq!(top.match_reason.sector.as_deref(), Some("Technology"));
    assert_eq!(top.match_reason.location.as_deref(), Some("Same location"));
}

#[test]
fn test_without_model_lexical_component_caps_at_eighty() {
    // No similarity model: the semantic component is zero and the lexical
    // weight is not rescaled, so the same perfect profile tops out at
    // 0.8 * 0.35 + 0.25 + 0.20 + 0.15 + 0.05 = 0.93.
    let engine = RecommendationEngine::with_default_weights(load_catalog(), None);

    let results = engine.recommend(&software_dev_profile(), 5);

    let top = &results[0];
    assert_eq!(top.title, "Software Development Intern");
    assert_eq!(top.match_score, 93.0);
    // The displayed reason is lexical-only either way
    assert_eq!(top.match_reason.skills.len(), 5);
}

#[test]
fn test_ranking_is_monotonic_non_increasing() {
    let engine = RecommendationEngine::with_default_weights(load_catalog(), None);

    let results = engine.recommend(&software_dev_profile(), 12);

    assert!(results.len() > 1);
    for pair in results.windows(2) {
        assert!(
            pair[0].match_score >= pair[1].match_score,
            "results not sorted by score"
        );
    }
}

#[test]
fn test_top_k_zero_and_negative_return_empty() {
    let engine = RecommendationEngine::with_default_weights(load_catalog(), None);

    assert!(engine.recommend(&software_dev_profile(), 0).is_empty());
    assert!(engine.recommend(&software_dev_profile(), -1).is_empty());
}

#[test]
fn test_top_k_truncates() {
    let engine = RecommendationEngine::with_default_weights(load_catalog(), None);

    let all = engine.recommend(&software_dev_profile(), 12);
    let top_three = engine.recommend(&software_dev_profile(), 3);

    assert!(all.len() > 3);
    assert_eq!(top_three.len(), 3);
    assert_eq!(top_three[0].id, all[0].id);
}

#[test]
fn test_no_sector_preferences_still_recommends() {
    // Sector score is 0 for every posting, but strong skill/location/
    // education signals still clear the inclusion threshold.
    let mut profile = software_dev_profile();
    profile.sectors = vec![];

    let engine = RecommendationEngine::with_default_weights(load_catalog(), None);
    let results = engine.recommend(&profile, 5);

    assert!(!results.is_empty());
    for r in &results {
        assert_eq!(r.match_reason.sector, None);
    }
}

#[test]
fn test_malformed_profile_degrades_instead_of_failing() {
    let profile = CandidateProfile {
        age: "twenty-two".to_string(),
        education: "Bootcamp".to_string(),
        skills: vec!["Python".to_string()],
        sectors: vec!["Technology".to_string()],
        location: "".to_string(),
    };

    let engine = RecommendationEngine::with_default_weights(load_catalog(), None);
    // Must not panic; neutral fallbacks keep scoring meaningful.
    let results = engine.recommend(&profile, 5);

    for r in &results {
        assert!(r.match_score >= 0.0 && r.match_score <= 100.0);
    }
}

#[test]
fn test_list_all_returns_whole_catalog() {
    let engine = RecommendationEngine::with_default_weights(load_catalog(), None);
    assert_eq!(engine.list_all().len(), 12);
}

#[test]
fn test_get_by_id() {
    let engine = RecommendationEngine::with_default_weights(load_catalog(), None);

    assert_eq!(
        engine.get("2").map(|p| p.title.as_str()),
        Some("Software Development Intern")
    );
    assert!(engine.get("999").is_none());
}

#[test]
fn test_stats_over_shipped_catalog() {
    let engine = RecommendationEngine::with_default_weights(load_catalog(), None);

    let stats = engine.stats();
    assert_eq!(stats.total_internships, 12);
    assert!(stats.sectors.contains(&"Technology".to_string()));
    assert!(stats.locations.contains(&"Bangalore, Karnataka".to_string()));
    // Digit runs stop at the thousands separator: "₹15,000/month" -> 15.
    // First integers across the catalog: 15+20+12+18+10+25+14+16+19+17+13+15.
    assert!((stats.avg_stipend - 194.0 / 12.0).abs() < 1e-9);
}

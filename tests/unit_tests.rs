// Unit tests for Setu Algo

use setu_algo::core::{
    affinity::{age_score, AffinityTables, NEUTRAL_SCORE},
    scoring::{compose_total_score, display_score, INCLUSION_THRESHOLD},
    skills::calculate_skill_score,
};
use setu_algo::models::{FactorScores, ScoringWeights};

fn skills(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn factors(skill: f64, sector: f64, location: f64, education: f64, age: f64) -> FactorScores {
    FactorScores {
        skill,
        sector,
        location,
        education,
        age,
        matched_skills: vec![],
    }
}

#[test]
fn test_empty_posting_skills_score_zero() {
    let (score, _) = calculate_skill_score(&skills(&["Python", "SQL"]), &[], None);
    assert_eq!(score, 0.0);
}

#[test]
fn test_identical_skill_sets_hit_exact_component() {
    // Case-insensitive identity saturates the exact component at 0.8,
    // with or without a semantic matcher.
    let candidate = skills(&["JavaScript", "react", "NODE.JS"]);
    let posting = skills(&["javascript", "React", "Node.js"]);

    let (score, matched) = calculate_skill_score(&candidate, &posting, None);

    assert!((score - 0.8).abs() < 1e-9);
    assert_eq!(matched.len(), 3);
}

#[test]
fn test_skill_denominator_is_posting_count() {
    // Known asymmetry, preserved deliberately: fewer required skills are
    // easier to saturate.
    let candidate = skills(&["Python", "SQL", "Excel", "Tableau", "R"]);

    let (few, _) = calculate_skill_score(&candidate, &skills(&["Python"]), None);
    let (many, _) = calculate_skill_score(
        &candidate,
        &skills(&["Python", "Haskell", "Prolog", "COBOL"]),
        None,
    );

    assert!((few - 0.8).abs() < 1e-9);
    assert!((many - 0.2).abs() < 1e-9);
}

#[test]
fn test_no_sector_preferences_means_zero_for_all() {
    let tables = AffinityTables::default();
    for sector in ["Technology", "Finance", "Design", "Healthcare"] {
        assert_eq!(tables.sector_score(&[], sector), 0.0);
    }
}

#[test]
fn test_empty_candidate_location_is_neutral_not_zero() {
    let tables = AffinityTables::default();
    assert_eq!(tables.location_score("", "Mumbai, Maharashtra"), 0.5);
}

#[test]
fn test_unparseable_age_is_neutral() {
    assert_eq!(age_score("twenty-two", "21-24"), NEUTRAL_SCORE);
}

#[test]
fn test_total_score_stays_in_display_range() {
    let weights = ScoringWeights::default();

    let combos = [
        factors(0.0, 0.0, 0.0, 0.0, 0.0),
        factors(1.0, 1.0, 1.0, 1.0, 1.0),
        factors(0.8, 0.7, 0.3, 0.9, 0.5),
        factors(2.0, -0.5, 1.5, 0.3, 1.0), // out-of-range factors get clamped
    ];

    for scores in &combos {
        let total = compose_total_score(scores, &weights);
        let displayed = display_score(total);
        assert!(
            (0.0..=100.0).contains(&displayed),
            "display score {} out of range",
            displayed
        );
    }
}

#[test]
fn test_inclusion_threshold_is_strict() {
    let weights = ScoringWeights::default();

    // Neutral location, exact education, in-range age, no skill or sector
    // signal: total is exactly 0.30 and must not pass a strict threshold.
    let at_cutoff = compose_total_score(&factors(0.0, 0.0, 0.5, 1.0, 1.0), &weights);
    assert!(!(at_cutoff > INCLUSION_THRESHOLD));

    // Any extra signal pushes past it.
    let above = compose_total_score(&factors(0.1, 0.0, 0.5, 1.0, 1.0), &weights);
    assert!(above > INCLUSION_THRESHOLD);
}

#[test]
fn test_display_score_one_decimal() {
    assert_eq!(display_score(0.435), 43.5);
    assert_eq!(display_score(0.93), 93.0);
    assert_eq!(display_score(1.0), 100.0);
}

use std::collections::HashSet;

use crate::core::semantic::SimilarityModel;

/// Weight of the exact (lexical) skill-match component
const EXACT_WEIGHT: f64 = 0.8;

/// Weight of the semantic skill-match component
const SEMANTIC_WEIGHT: f64 = 0.2;

/// Minimum pairwise similarity for a pair to count as a semantic match
pub const SEMANTIC_MATCH_THRESHOLD: f64 = 0.7;

/// Calculate the skill match score (0-1) for one posting
///
/// The denominator of both components is the posting's skill count, not the
/// candidate's or the union size. A posting with few required skills is
/// therefore easier to saturate than one with many. This asymmetry is
/// deliberate policy, not an oversight.
///
/// Without a similarity model the semantic component is exactly 0 and the
/// 0.8 lexical weight is not rescaled to compensate: the maximum achievable
/// score drops, keeping behavior reproducible in both modes.
///
/// Also returns the posting skills (original casing) whose lower-cased form
/// appears in the candidate's skill set, for the match explanation.
pub fn calculate_skill_score(
    candidate_skills: &[String],
    posting_skills: &[String],
    model: Option<&dyn SimilarityModel>,
) -> (f64, Vec<String>) {
    // Empty on either side means "no information", scored 0 rather than
    // masked by a division fallback.
    if candidate_skills.is_empty() || posting_skills.is_empty() {
        return (0.0, Vec::new());
    }

    let candidate_lower: HashSet<String> = candidate_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let posting_lower: HashSet<String> = posting_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let exact_matches = posting_lower.intersection(&candidate_lower).count();

    let matched_skills: Vec<String> = posting_skills
        .iter()
        .filter(|s| candidate_lower.contains(&s.to_lowercase()))
        .cloned()
        .collect();

    let total_skills = posting_skills.len() as f64;
    let exact_score = (exact_matches as f64 / total_skills) * EXACT_WEIGHT;

    let mut partial_matches = 0.0;
    if let Some(model) = model {
        for candidate_skill in candidate_skills {
            for posting_skill in posting_skills {
                let similarity = model.similarity(candidate_skill, posting_skill);
                if similarity > SEMANTIC_MATCH_THRESHOLD {
                    partial_matches += similarity;
                }
            }
        }
    }
    let partial_score = (partial_matches / total_skills) * SEMANTIC_WEIGHT;

    ((exact_score + partial_score).min(1.0), matched_skills)
}

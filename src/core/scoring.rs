use crate::models::{FactorScores, MatchReason, Posting, ScoringWeights};

/// Minimum raw total score for a posting to be included in results
///
/// Strictly greater-than: a posting scoring exactly 0.30 is excluded.
/// Fixed by business rule, not configurable.
pub const INCLUSION_THRESHOLD: f64 = 0.30;

/// Sector score above which the sector is shown as a match reason
const SECTOR_REASON_THRESHOLD: f64 = 0.5;

/// Location score above which the reason reads "Same location"
const SAME_LOCATION_THRESHOLD: f64 = 0.8;

/// Location score above which the reason reads "Nearby location"
const NEARBY_LOCATION_THRESHOLD: f64 = 0.5;

/// Combine the five factor scores into one weighted total in [0, 1]
///
/// Scoring formula (the central business rule, reproduced exactly):
/// total = (
///     skill_score * 0.35 +        # skills are most important
///     sector_score * 0.25 +       # sector preference
///     location_score * 0.20 +     # location preference
///     education_score * 0.15 +    # education match
///     age_score * 0.05            # age match
/// )
///
/// Factor scores are clamped to [0, 1] before weighting.
pub fn compose_total_score(scores: &FactorScores, weights: &ScoringWeights) -> f64 {
    clamp01(scores.skill) * weights.skill
        + clamp01(scores.sector) * weights.sector
        + clamp01(scores.location) * weights.location
        + clamp01(scores.education) * weights.education
        + clamp01(scores.age) * weights.age
}

/// Scale a raw [0, 1] total to the 0-100 display value, one decimal place
pub fn display_score(total: f64) -> f64 {
    (total * 1000.0).round() / 10.0
}

/// Derive the match explanation from already-computed factor scores
///
/// No matcher is re-run here: the reason is a pure function of the
/// FactorScores produced during scoring. The display thresholds below are
/// independent of the composer weights and must not be conflated with them.
pub fn build_match_reason(posting: &Posting, scores: &FactorScores) -> MatchReason {
    let sector = if scores.sector > SECTOR_REASON_THRESHOLD {
        Some(posting.sector.clone())
    } else {
        None
    };

    let location = if scores.location > SAME_LOCATION_THRESHOLD {
        Some("Same location".to_string())
    } else if scores.location > NEARBY_LOCATION_THRESHOLD {
        Some("Nearby location".to_string())
    } else {
        None
    };

    MatchReason {
        skills: scores.matched_skills.clone(),
        sector,
        location,
    }
}

#[inline]
fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

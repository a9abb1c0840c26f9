use serde::{Deserialize, Serialize};

/// One internship opportunity in the catalog
///
/// Postings are loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub sector: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// "city, region" free text
    pub location: String,
    pub duration: String,
    /// Free-text currency string, e.g. "₹15,000/month"
    pub stipend: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub education_level: String,
    /// Inclusive integer interval encoded as "min-max"
    pub age_range: String,
    #[serde(default)]
    pub experience_level: Option<String>,
}

/// Candidate attributes used for matching
///
/// Constructed per request and never persisted. Age arrives as text and is
/// parsed defensively by the scoring layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub age: String,
    pub education: String,
    pub skills: Vec<String>,
    pub sectors: Vec<String>,
    pub location: String,
}

/// Per-factor scores for a single (candidate, posting) pair
///
/// Computed once per posting and shared by the score composer and the
/// explanation builder, so the displayed reason can never drift from the
/// score it explains.
#[derive(Debug, Clone)]
pub struct FactorScores {
    pub skill: f64,
    pub sector: f64,
    pub location: f64,
    pub education: f64,
    pub age: f64,
    /// Posting skills (original casing) with an exact case-insensitive
    /// counterpart in the candidate's skill set. Semantic near-matches are
    /// deliberately excluded here even though they contribute to the score.
    pub matched_skills: Vec<String>,
}

/// Human-readable "why this matched" payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReason {
    pub skills: Vec<String>,
    pub sector: Option<String>,
    pub location: Option<String>,
}

/// Scored posting returned by the recommendation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub sector: String,
    pub skills: Vec<String>,
    pub location: String,
    pub duration: String,
    pub stipend: String,
    pub description: String,
    pub requirements: Vec<String>,
    /// Total weighted score scaled to 0-100, rounded to one decimal place
    pub match_score: f64,
    pub match_reason: MatchReason,
}

/// Catalog-wide statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_internships: usize,
    pub sectors: Vec<String>,
    pub locations: Vec<String>,
    /// Mean of the first embedded integer of each stipend string; postings
    /// with no extractable digits are excluded from sum and denominator.
    pub avg_stipend: f64,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

/// Scoring weights for the five match factors
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skill: f64,
    pub sector: f64,
    pub location: f64,
    pub education: f64,
    pub age: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.35,
            sector: 0.25,
            location: 0.20,
            education: 0.15,
            age: 0.05,
        }
    }
}

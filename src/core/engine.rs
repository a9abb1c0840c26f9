use std::collections::BTreeSet;
use std::sync::Arc;

use crate::core::affinity::{age_score, AffinityTables};
use crate::core::scoring::{build_match_reason, compose_total_score, display_score, INCLUSION_THRESHOLD};
use crate::core::semantic::SimilarityModel;
use crate::core::skills::calculate_skill_score;
use crate::models::{CandidateProfile, CatalogStats, FactorScores, Posting, ScoredPosting, ScoringWeights};
use crate::services::CatalogStore;

/// Recommendation engine facade
///
/// Stateless per request: the catalog and the optional similarity model are
/// read-only and shared freely across workers, so concurrent requests need
/// no coordination. All scoring is a pure, idempotent computation over the
/// profile and the catalog; malformed profile fields degrade to neutral
/// factor scores instead of failing the request.
pub struct RecommendationEngine {
    catalog: Arc<CatalogStore>,
    tables: AffinityTables,
    weights: ScoringWeights,
    model: Option<Arc<dyn SimilarityModel>>,
}

impl RecommendationEngine {
    pub fn new(
        catalog: Arc<CatalogStore>,
        model: Option<Arc<dyn SimilarityModel>>,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            catalog,
            tables: AffinityTables::default(),
            weights,
            model,
        }
    }

    pub fn with_default_weights(
        catalog: Arc<CatalogStore>,
        model: Option<Arc<dyn SimilarityModel>>,
    ) -> Self {
        Self::new(catalog, model, ScoringWeights::default())
    }

    /// Whether a similarity model is available for semantic skill matching
    pub fn semantic_enabled(&self) -> bool {
        self.model.is_some()
    }

    /// Score the whole catalog against a profile and return the top_k
    /// qualifying postings, best first
    ///
    /// Postings qualify only with a raw total strictly above the inclusion
    /// threshold. The sort is stable, so equal totals keep catalog insertion
    /// order. `top_k <= 0` yields an empty result, not an error.
    pub fn recommend(&self, profile: &CandidateProfile, top_k: i64) -> Vec<ScoredPosting> {
        if top_k <= 0 {
            return Vec::new();
        }

        let mut results: Vec<ScoredPosting> = self
            .catalog
            .postings()
            .iter()
            .filter_map(|posting| {
                let scores = self.score_posting(profile, posting);
                let total = compose_total_score(&scores, &self.weights);

                if total > INCLUSION_THRESHOLD {
                    let match_reason = build_match_reason(posting, &scores);
                    Some(ScoredPosting {
                        id: posting.id.clone(),
                        title: posting.title.clone(),
                        company: posting.company.clone(),
                        sector: posting.sector.clone(),
                        skills: posting.skills.clone(),
                        location: posting.location.clone(),
                        duration: posting.duration.clone(),
                        stipend: posting.stipend.clone(),
                        description: posting.description.clone(),
                        requirements: posting.requirements.clone(),
                        match_score: display_score(total),
                        match_reason,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable sort by score descending; ties keep insertion order
        results.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(top_k as usize);

        results
    }

    /// Full catalog dump, no filtering
    pub fn list_all(&self) -> &[Posting] {
        self.catalog.postings()
    }

    /// Look up a single posting by id
    pub fn get(&self, id: &str) -> Option<&Posting> {
        self.catalog.get(id)
    }

    /// Catalog-wide statistics
    pub fn stats(&self) -> CatalogStats {
        let postings = self.catalog.postings();

        let sectors: BTreeSet<&str> = postings.iter().map(|p| p.sector.as_str()).collect();
        let locations: BTreeSet<&str> = postings.iter().map(|p| p.location.as_str()).collect();

        let amounts: Vec<u64> = postings
            .iter()
            .filter_map(|p| first_integer(&p.stipend))
            .collect();
        let avg_stipend = if amounts.is_empty() {
            0.0
        } else {
            amounts.iter().sum::<u64>() as f64 / amounts.len() as f64
        };

        CatalogStats {
            total_internships: postings.len(),
            sectors: sectors.into_iter().map(String::from).collect(),
            locations: locations.into_iter().map(String::from).collect(),
            avg_stipend,
            last_updated: chrono::Utc::now(),
        }
    }

    fn score_posting(&self, profile: &CandidateProfile, posting: &Posting) -> FactorScores {
        let (skill, matched_skills) =
            calculate_skill_score(&profile.skills, &posting.skills, self.model.as_deref());

        FactorScores {
            skill,
            sector: self.tables.sector_score(&profile.sectors, &posting.sector),
            location: self.tables.location_score(&profile.location, &posting.location),
            education: self
                .tables
                .education_score(&profile.education, &posting.education_level),
            age: age_score(&profile.age, &posting.age_range),
            matched_skills,
        }
    }
}

/// First maximal digit run in a string, e.g. "₹15,000/month" -> 15
fn first_integer(text: &str) -> Option<u64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

// Core algorithm exports
pub mod affinity;
pub mod engine;
pub mod scoring;
pub mod semantic;
pub mod skills;

pub use affinity::{age_score, AffinityTables, NEUTRAL_SCORE};
pub use engine::RecommendationEngine;
pub use scoring::{build_match_reason, compose_total_score, display_score, INCLUSION_THRESHOLD};
pub use semantic::{EmbeddingModel, SimilarityError, SimilarityModel};
pub use skills::{calculate_skill_score, SEMANTIC_MATCH_THRESHOLD};

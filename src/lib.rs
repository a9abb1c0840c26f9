//! Setu Algo - internship recommendation service for YuvaSetu
//!
//! This library provides the rule-based matching engine used by the
//! YuvaSetu internship portal. It scores every catalog posting against a
//! candidate profile on five factors (skills, sector, location, education,
//! age), combines them into one weighted total, and returns a ranked,
//! explainable top-K subset.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{EmbeddingModel, RecommendationEngine, SimilarityModel};
pub use crate::models::{CandidateProfile, CatalogStats, MatchReason, Posting, ScoredPosting, ScoringWeights};
pub use crate::services::{CatalogError, CatalogStore};

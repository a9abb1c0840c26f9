// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateProfile, CatalogStats, FactorScores, MatchReason, Posting, ScoredPosting, ScoringWeights};
pub use requests::{ProfilePayload, RecommendRequest};
pub use responses::{ErrorResponse, HealthResponse, InternshipsResponse, RecommendResponse};

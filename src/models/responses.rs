use serde::{Deserialize, Serialize};

use crate::models::domain::{Posting, ScoredPosting};

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<ScoredPosting>,
    pub total_matches: usize,
    pub processing_time_ms: f64,
}

/// Response for the full catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternshipsResponse {
    pub internships: Vec<Posting>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Whether a similarity model was loaded at startup
    pub semantic_matching: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::CandidateProfile;

/// Request to get recommendations for a candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(nested)]
    pub profile: ProfilePayload,
    #[serde(alias = "topK", default = "default_top_k")]
    pub top_k: i64,
}

fn default_top_k() -> i64 {
    5
}

/// Candidate profile as it arrives on the wire
///
/// All five fields are required; empty strings are accepted and scored with
/// neutral fallbacks rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfilePayload {
    pub age: String,
    pub education: String,
    #[validate(length(max = 100, message = "too many skills"))]
    pub skills: Vec<String>,
    #[validate(length(max = 50, message = "too many sector preferences"))]
    pub sectors: Vec<String>,
    pub location: String,
}

impl From<ProfilePayload> for CandidateProfile {
    fn from(payload: ProfilePayload) -> Self {
        CandidateProfile {
            age: payload.age,
            education: payload.education,
            skills: payload.skills,
            sectors: payload.sectors,
            location: payload.location,
        }
    }
}

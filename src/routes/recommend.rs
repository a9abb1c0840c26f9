use std::sync::Arc;
use std::time::Instant;

use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::RecommendationEngine;
use crate::models::{
    CandidateProfile, ErrorResponse, HealthResponse, InternshipsResponse, RecommendRequest,
    RecommendResponse,
};

/// Server-side cap on how many recommendations one request can ask for
const MAX_TOP_K: i64 = 50;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend))
        .route("/internships", web::get().to(list_internships))
        .route("/internships/{id}", web::get().to(get_internship))
        .route("/stats", web::get().to(stats));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        semantic_matching: state.engine.semantic_enabled(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommendation endpoint
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "profile": {
///     "age": "22",
///     "education": "Graduate",
///     "skills": ["Python"],
///     "sectors": ["Technology"],
///     "location": "Mumbai, Maharashtra"
///   },
///   "top_k": 5
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let top_k = req.top_k.min(MAX_TOP_K);
    let profile: CandidateProfile = req.into_inner().profile.into();

    tracing::debug!(
        "Recommending for profile: {} skills, {} sector preferences, top_k {}",
        profile.skills.len(),
        profile.sectors.len(),
        top_k
    );

    let started = Instant::now();
    let recommendations = state.engine.recommend(&profile, top_k);
    let processing_time_ms = started.elapsed().as_secs_f64() * 1000.0;

    tracing::info!(
        "Returning {} recommendations in {:.2}ms",
        recommendations.len(),
        processing_time_ms
    );

    HttpResponse::Ok().json(RecommendResponse {
        total_matches: recommendations.len(),
        recommendations,
        processing_time_ms,
    })
}

/// Full catalog listing
///
/// GET /api/v1/internships
async fn list_internships(state: web::Data<AppState>) -> impl Responder {
    let internships = state.engine.list_all().to_vec();

    HttpResponse::Ok().json(InternshipsResponse {
        total: internships.len(),
        internships,
    })
}

/// Single posting lookup
///
/// GET /api/v1/internships/{id}
async fn get_internship(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match state.engine.get(&id) {
        Some(posting) => HttpResponse::Ok().json(posting),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Internship not found".to_string(),
            message: format!("No internship with id '{}'", id),
            status_code: 404,
        }),
    }
}

/// Catalog statistics
///
/// GET /api/v1/stats
async fn stats(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.engine.stats())
}

#[cfg(test)]
mod tests {
    use crate::models::HealthResponse;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            semantic_matching: false,
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
        assert!(!response.semantic_matching);
    }
}

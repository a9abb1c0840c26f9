mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use crate::config::Settings;
use crate::core::{EmbeddingModel, RecommendationEngine, SimilarityModel};
use crate::models::ScoringWeights;
use crate::routes::recommend::AppState;
use crate::services::CatalogStore;
use std::sync::Arc;
use tracing::{error, info, warn};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors (missing profile fields land here)
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Setu Algo recommendation service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Load the posting catalog. Unreadable or invalid catalog data is fatal:
    // the engine does not run without it.
    let catalog = Arc::new(
        CatalogStore::load(&settings.catalog.path).unwrap_or_else(|e| {
            error!("Failed to load catalog from {}: {}", settings.catalog.path, e);
            panic!("Catalog error: {}", e);
        }),
    );

    info!(
        "Catalog loaded: {} postings from {}",
        catalog.len(),
        settings.catalog.path
    );

    // Load the optional similarity model. Absence degrades semantic skill
    // scoring to zero; it is never fatal.
    let model: Option<Arc<dyn SimilarityModel>> = match &settings.similarity.embeddings_path {
        Some(path) => match EmbeddingModel::load(path) {
            Ok(m) => {
                info!("Similarity model loaded: {} terms from {}", m.vocabulary_size(), path);
                Some(Arc::new(m))
            }
            Err(e) => {
                warn!("Failed to load similarity model from {} ({}), using lexical matching only", path, e);
                None
            }
        },
        None => {
            info!("No similarity model configured, using lexical matching only");
            None
        }
    };

    let engine = Arc::new(RecommendationEngine::new(
        catalog,
        model,
        ScoringWeights::default(),
    ));

    info!("Recommendation engine initialized");

    // Build application state
    let app_state = AppState { engine };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

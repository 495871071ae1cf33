use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    CreatorMatchRequest, ErrorResponse, FindMatchesResponse, HealthResponse, SponsorMatchRequest,
};
use crate::core::Matcher;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub default_limit: usize,
    pub max_limit: usize,
}

impl AppState {
    pub fn new(matcher: Matcher, default_limit: usize, max_limit: usize) -> Self {
        Self {
            matcher,
            default_limit,
            max_limit,
        }
    }

    /// Apply the configured default and cap to a requested limit
    pub fn effective_limit(&self, requested: Option<u16>) -> usize {
        requested
            .map(usize::from)
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/sponsor", web::post().to(find_matches_for_sponsor))
        .route("/matches/creator", web::post().to(find_matches_for_creator));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn scoring_error(err: actix_web::error::BlockingError) -> HttpResponse {
    tracing::error!("Scoring task failed: {}", err);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Scoring failed".to_string(),
        message: err.to_string(),
        status_code: 500,
    })
}

/// Rank creators for a sponsor
///
/// POST /api/v1/matches/sponsor
///
/// Request body:
/// ```json
/// {
///   "sponsor": { "id": "string", "budgetRange": {"min": 0, "max": 0}, ... },
///   "creators": [ { "id": "string", "type": "YOUTUBER", "pricing": {...}, ... } ],
///   "limit": 10
/// }
/// ```
async fn find_matches_for_sponsor(
    state: web::Data<AppState>,
    req: web::Json<SponsorMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for sponsor match request: {}", errors);
        return validation_error(errors);
    }

    let SponsorMatchRequest { sponsor, creators, limit } = req.into_inner();
    let limit = state.effective_limit(limit);
    let total_candidates = creators.len();

    tracing::info!(
        "Finding creators for sponsor: {}, candidates: {}, limit: {}",
        sponsor.id,
        total_candidates,
        limit
    );

    // Scoring is CPU-bound; keep it off the async workers
    let matcher = state.matcher.clone();
    let result = web::block(move || matcher.find_matches_for_sponsor(&sponsor, &creators, limit)).await;

    match result {
        Ok(matches) => HttpResponse::Ok().json(FindMatchesResponse {
            matches,
            total_candidates,
        }),
        Err(e) => scoring_error(e),
    }
}

/// Rank sponsors for a creator
///
/// POST /api/v1/matches/creator
///
/// Request body:
/// ```json
/// {
///   "creator": { "id": "string", ... },
///   "sponsors": [ { "id": "string", ... } ],
///   "limit": 10
/// }
/// ```
async fn find_matches_for_creator(
    state: web::Data<AppState>,
    req: web::Json<CreatorMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for creator match request: {}", errors);
        return validation_error(errors);
    }

    let CreatorMatchRequest { creator, sponsors, limit } = req.into_inner();
    let limit = state.effective_limit(limit);
    let total_candidates = sponsors.len();

    tracing::info!(
        "Finding sponsors for creator: {}, candidates: {}, limit: {}",
        creator.id,
        total_candidates,
        limit
    );

    let matcher = state.matcher.clone();
    let result = web::block(move || matcher.find_matches_for_creator(&creator, &sponsors, limit)).await;

    match result {
        Ok(matches) => HttpResponse::Ok().json(FindMatchesResponse {
            matches,
            total_candidates,
        }),
        Err(e) => scoring_error(e),
    }
}

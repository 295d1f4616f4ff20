//! ARIA Candidate Invite Service.
//!
//! REST API for the candidate-invite token lifecycle of the ARIA recruiting
//! platform: staff issue single-use-intended, time-limited invites against
//! interviews; unauthenticated candidates use the invite URL to view the
//! interview portal, upload a resume, and start an AI voice interview through
//! the external voice-call provider.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Staff Authentication**: API key with SHA-256 hashing
//! - **Candidate Access**: hashed invite tokens, validated per request
//! - **Format**: JSON requests/responses (uploads as raw bytes)

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the application router.
///
/// Two route groups:
/// - **Staff routes** require a valid API key (auth middleware) and manage
///   interviews, interviewers, candidates, and invite issuance.
/// - **Candidate routes** are public; every request is gated by the invite
///   token carried in the URL or body instead of an account credential.
pub fn router(state: AppState) -> Router {
    // Staff routes (API key required)
    let staff_routes = Router::new()
        .route(
            "/api/v1/interviews",
            post(handlers::interviews::create_interview),
        )
        .route(
            "/api/v1/interviews/{id}",
            get(handlers::interviews::get_interview),
        )
        .route(
            "/api/v1/interviews/{id}/invite",
            post(handlers::invites::create_invite),
        )
        .route(
            "/api/v1/interviews/{id}/invites",
            get(handlers::invites::list_invites),
        )
        .route(
            "/api/v1/interviewers",
            post(handlers::interviewers::create_interviewer)
                .get(handlers::interviewers::list_interviewers),
        )
        .route(
            "/api/v1/candidates",
            post(handlers::candidates::create_candidate).get(handlers::candidates::list_candidates),
        )
        // Apply authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    // Candidate routes (no account; gated by the invite token itself).
    // The portal is a browser client on another origin, hence CORS.
    let candidate_routes = Router::new()
        .route(
            "/api/v1/candidate/invites/{invite_id}",
            get(handlers::candidate::get_invite),
        )
        .route(
            "/api/v1/candidate/invites/{invite_id}/call",
            post(handlers::candidate::start_call),
        )
        .route(
            "/api/v1/candidate/invites/{invite_id}/upload",
            post(handlers::candidate::upload_resume)
                // Raise the framework body cap above the application limit so
                // the handler, not the extractor, decides oversized uploads
                // near the boundary
                .layer(DefaultBodyLimit::max(
                    handlers::candidate::MAX_UPLOAD_BYTES + 16 * 1024,
                )),
        )
        .layer(CorsLayer::permissive());

    Router::new()
        // Public routes (no authentication required)
        .route("/health", get(handlers::health::health_check))
        .merge(staff_routes)
        .merge(candidate_routes)
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share pool and config with all handlers via State extraction
        .with_state(state)
}

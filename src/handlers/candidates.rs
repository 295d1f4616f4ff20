//! Candidate record management HTTP handlers.
//!
//! - POST /api/v1/candidates - Create a candidate record
//! - GET /api/v1/candidates - List the organization's candidates

use crate::{
    error::AppError,
    middleware::auth::AuthContext,
    models::candidate::{Candidate, CreateCandidateRequest},
    state::AppState,
};
use axum::{Extension, Json, extract::State, http::StatusCode};

/// Create a candidate record in the caller's organization.
pub async fn create_candidate(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateCandidateRequest>,
) -> Result<(StatusCode, Json<Candidate>), AppError> {
    if !auth.role.can_manage_interviews() {
        return Err(AppError::Forbidden);
    }

    let candidate = sqlx::query_as::<_, Candidate>(
        r#"
        INSERT INTO candidates (org_id, name, email)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(&auth.org_id)
    .bind(&request.name)
    .bind(&request.email)
    .fetch_one(&state.pool)
    .await?;

    Ok((StatusCode::CREATED, Json(candidate)))
}

/// List the organization's candidate records, newest first.
pub async fn list_candidates(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<Candidate>>, AppError> {
    let candidates = sqlx::query_as::<_, Candidate>(
        "SELECT * FROM candidates WHERE org_id = $1 ORDER BY created_at DESC",
    )
    .bind(&auth.org_id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(candidates))
}

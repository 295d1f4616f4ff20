//! Interview management HTTP handlers.
//!
//! This module implements the interview-related API endpoints:
//! - POST /api/v1/interviews - Create new interview
//! - GET /api/v1/interviews/:id - Get interview by ID

use crate::{
    error::AppError,
    middleware::auth::AuthContext,
    models::{
        interview::{CreateInterviewRequest, Interview},
        user::Role,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// Create a new interview in the caller's organization.
///
/// # Endpoint
///
/// `POST /api/v1/interviews`
///
/// # Request Body
///
/// ```json
/// {
///   "candidate_id": "550e8400-...",   // optional
///   "interviewer_id": "660e8400-...", // optional
///   "mode": "voice"                   // optional, defaults to "voice"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the created interview
/// - **Error (403)**: caller's role cannot manage interviews
pub async fn create_interview(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateInterviewRequest>,
) -> Result<(StatusCode, Json<Interview>), AppError> {
    if !auth.role.can_manage_interviews() {
        return Err(AppError::Forbidden);
    }

    let interview = sqlx::query_as::<_, Interview>(
        r#"
        INSERT INTO interviews (org_id, candidate_id, interviewer_id, mode)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    // Interviews live in the issuing actor's organization
    .bind(&auth.org_id)
    .bind(request.candidate_id)
    .bind(request.interviewer_id)
    .bind(&request.mode)
    .fetch_one(&state.pool)
    .await?;

    Ok((StatusCode::CREATED, Json(interview)))
}

/// Get a specific interview by ID.
///
/// # Security
///
/// Returns 404 if the interview doesn't exist OR belongs to another
/// organization (prevents leaking existence of other tenants' interviews).
/// Masters see every organization.
pub async fn get_interview(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(interview_id): Path<Uuid>,
) -> Result<Json<Interview>, AppError> {
    let interview = sqlx::query_as::<_, Interview>("SELECT * FROM interviews WHERE id = $1")
        .bind(interview_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::InterviewNotFound)?;

    if auth.role != Role::Master && interview.org_id != auth.org_id {
        return Err(AppError::InterviewNotFound);
    }

    Ok(Json(interview))
}

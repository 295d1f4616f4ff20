//! Interviewer (voice agent) management HTTP handlers.
//!
//! - POST /api/v1/interviewers - Register an interviewer
//! - GET /api/v1/interviewers - List interviewers visible to the caller

use crate::{
    error::AppError,
    middleware::auth::AuthContext,
    models::interviewer::{CreateInterviewerRequest, Interviewer},
    state::AppState,
};
use axum::{Extension, Json, extract::State, http::StatusCode};

/// Register a new interviewer in the caller's organization.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Sophia",
///   "description": "Technical screening agent",
///   "agent_id": "agent_sophia_01"
/// }
/// ```
pub async fn create_interviewer(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateInterviewerRequest>,
) -> Result<(StatusCode, Json<Interviewer>), AppError> {
    if !auth.role.can_manage_interviews() {
        return Err(AppError::Forbidden);
    }

    let interviewer = sqlx::query_as::<_, Interviewer>(
        r#"
        INSERT INTO interviewers (org_id, name, description, agent_id)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&auth.org_id)
    .bind(&request.name)
    .bind(&request.description)
    .bind(&request.agent_id)
    .fetch_one(&state.pool)
    .await?;

    Ok((StatusCode::CREATED, Json(interviewer)))
}

/// List interviewers visible to the caller: the organization's own plus
/// shared agents (NULL org), newest first.
pub async fn list_interviewers(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<Interviewer>>, AppError> {
    let interviewers = sqlx::query_as::<_, Interviewer>(
        r#"
        SELECT * FROM interviewers
        WHERE org_id = $1 OR org_id IS NULL
        ORDER BY created_at DESC
        "#,
    )
    .bind(&auth.org_id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(interviewers))
}

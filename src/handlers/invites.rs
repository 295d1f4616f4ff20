//! Staff invite issuance HTTP handlers.
//!
//! This module implements the staff-facing invite endpoints:
//! - POST /api/v1/interviews/:id/invite - Issue an invite for an interview
//! - GET /api/v1/interviews/:id/invites - List invites issued for an interview

use crate::{
    error::AppError,
    middleware::auth::{self, AuthContext},
    models::{
        candidate::Candidate,
        interview::Interview,
        invite::{CreateInviteRequest, InviteResponse, IssuedInviteResponse},
    },
    services::invite_service::{self, CreateInviteParams},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// Issue a candidate invite for an interview.
///
/// # Endpoint
///
/// `POST /api/v1/interviews/:id/invite`
///
/// # Authentication
///
/// Requires a valid staff API key; the actor must be allowed to issue invites
/// for the interview's organization (see [`auth::can_issue_invite`]).
///
/// # Request Body
///
/// ```json
/// {
///   "candidate_email": "ada@example.com",   // optional
///   "candidate_name": "Ada Lovelace",       // optional
///   "expires_at": "2026-01-01T00:00:00Z"    // optional, defaults to now + 48h
/// }
/// ```
///
/// Contact fields left out are resolved from the interview's candidate record
/// when one is linked.
///
/// # Response
///
/// - **Success (201 Created)**: invite id, shareable URL, expiry
/// - **Error (404)**: interview does not exist
/// - **Error (403)**: actor lacks privilege over the interview
///
/// The URL is the only place the plaintext token ever appears.
pub async fn create_invite(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(interview_id): Path<Uuid>,
    Json(request): Json<CreateInviteRequest>,
) -> Result<(StatusCode, Json<IssuedInviteResponse>), AppError> {
    let interview = sqlx::query_as::<_, Interview>("SELECT * FROM interviews WHERE id = $1")
        .bind(interview_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::InterviewNotFound)?;

    if !auth::can_issue_invite(&auth, &interview.org_id) {
        return Err(AppError::Forbidden);
    }

    // Fill missing contact details from the interview's candidate record
    let mut candidate_email = request.candidate_email;
    let mut candidate_name = request.candidate_name;
    if candidate_email.is_none() || candidate_name.is_none() {
        if let Some(candidate_id) = interview.candidate_id {
            let candidate =
                sqlx::query_as::<_, Candidate>("SELECT * FROM candidates WHERE id = $1")
                    .bind(candidate_id)
                    .fetch_optional(&state.pool)
                    .await?;

            if let Some(candidate) = candidate {
                candidate_email = candidate_email.or(candidate.email);
                candidate_name = candidate_name.or(candidate.name);
            }
        }
    }

    let issued = invite_service::create_invite(
        &state.pool,
        &state.config.base_url,
        CreateInviteParams {
            org_id: interview.org_id.clone(),
            interview_id: interview.id,
            candidate_email: candidate_email.clone(),
            candidate_name: candidate_name.clone(),
            created_by: auth.user_id,
            expires_at: request.expires_at,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(IssuedInviteResponse {
            invite_id: issued.invite_id,
            url: issued.url,
            expires_at: issued.expires_at,
            candidate_email,
            candidate_name,
        }),
    ))
}

/// List invites issued for an interview.
///
/// # Endpoint
///
/// `GET /api/v1/interviews/:id/invites`
///
/// # Security
///
/// Same privilege predicate as issuance. Responses carry the public invite
/// projection only; token digests never leave the store.
pub async fn list_invites(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(interview_id): Path<Uuid>,
) -> Result<Json<Vec<InviteResponse>>, AppError> {
    let interview = sqlx::query_as::<_, Interview>("SELECT * FROM interviews WHERE id = $1")
        .bind(interview_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::InterviewNotFound)?;

    if !auth::can_issue_invite(&auth, &interview.org_id) {
        return Err(AppError::Forbidden);
    }

    let invites = invite_service::list_invites_for_interview(&state.pool, interview.id).await?;

    Ok(Json(invites.into_iter().map(Into::into).collect()))
}

//! Candidate-facing HTTP handlers.
//!
//! These endpoints require no account; every request is gated by the invite
//! token instead. Each gated action re-runs validation before its effect, so
//! no action can be authorized by a stale or previously-rejected token:
//! - GET  /api/v1/candidate/invites/:invite_id        - Validate and render portal data
//! - POST /api/v1/candidate/invites/:invite_id/upload - Upload a resume
//! - POST /api/v1/candidate/invites/:invite_id/call   - Start the voice interview

use crate::{
    error::AppError,
    models::{
        interview::Interview,
        interviewer::Interviewer,
        invite::{CandidateInvite, InviteDetailsResponse},
        upload::{CandidateUpload, UploadResponse},
    },
    services::{call_service, invite_service},
    state::AppState,
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

/// Maximum accepted resume size: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Query parameters carrying the invite token.
#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub token: String,
}

/// Query parameters for the upload endpoint.
#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub token: String,
    pub file_name: Option<String>,
}

/// Request body for starting the voice interview.
#[derive(Debug, Deserialize)]
pub struct StartCallRequest {
    pub token: String,
}

/// Response body for a started call.
///
/// ```json
/// {
///   "call_id": "call_6b2a...",
///   "access_token": "eyJh...",
///   "expires_at": "2025-09-01T12:34:56Z"
/// }
/// ```
#[derive(Debug, serde::Serialize)]
pub struct StartCallResponse {
    pub call_id: String,
    pub access_token: Option<String>,
    pub expires_at: Option<String>,
}

/// Check the upload size constraints before anything touches the store.
fn check_payload_size(size: usize) -> Result<(), AppError> {
    if size == 0 {
        return Err(AppError::EmptyPayload);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(AppError::PayloadTooLarge);
    }
    Ok(())
}

/// Validate an invite and return the data the candidate portal renders.
///
/// # Endpoint
///
/// `GET /api/v1/candidate/invites/:invite_id?token=...`
///
/// # Behavior
///
/// Read-only: repeated calls never alter invite status. Joins the interview
/// and interviewer the invite unlocks so the portal can greet the candidate
/// and show who will run the interview.
///
/// # Errors
///
/// - **404**: no invite with this id
/// - **401**: token digest mismatch
/// - **410**: invite expired
pub async fn get_invite(
    State(state): State<AppState>,
    Path(invite_id): Path<Uuid>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<InviteDetailsResponse>, AppError> {
    let invite = invite_service::validate_invite(&state.pool, invite_id, &query.token).await?;

    let interview = sqlx::query_as::<_, Interview>("SELECT * FROM interviews WHERE id = $1")
        .bind(invite.interview_id)
        .fetch_optional(&state.pool)
        .await?;

    let interviewer = match interview.as_ref().and_then(|i| i.interviewer_id) {
        Some(interviewer_id) => {
            sqlx::query_as::<_, Interviewer>("SELECT * FROM interviewers WHERE id = $1")
                .bind(interviewer_id)
                .fetch_optional(&state.pool)
                .await?
        }
        None => None,
    };

    Ok(Json(InviteDetailsResponse {
        valid: true,
        invite: invite.into(),
        interview: interview.map(Into::into),
        interviewer: interviewer.map(Into::into),
    }))
}

/// Upload a resume against a validated invite.
///
/// # Endpoint
///
/// `POST /api/v1/candidate/invites/:invite_id/upload?token=...&file_name=...`
///
/// The file travels as the raw request body; its content type is taken from
/// the `Content-Type` header.
///
/// # Constraints
///
/// - Maximum 5 MiB (**413**)
/// - Empty payloads rejected (**400**)
///
/// Size checks run before validation touches the store, and a rejected
/// payload creates no record. A successful upload does not transition invite
/// status.
pub async fn upload_resume(
    State(state): State<AppState>,
    Path(invite_id): Path<Uuid>,
    Query(query): Query<UploadQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    check_payload_size(body.len())?;

    let invite = invite_service::validate_invite(&state.pool, invite_id, &query.token).await?;

    let file_name = query.file_name.unwrap_or_else(|| "resume".to_string());
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let upload = sqlx::query_as::<_, CandidateUpload>(
        r#"
        INSERT INTO candidate_uploads (
            invite_id,
            interview_id,
            org_id,
            file_name,
            content_type,
            size_bytes,
            content,
            token_hash
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(invite.id)
    .bind(invite.interview_id)
    .bind(&invite.org_id)
    .bind(&file_name)
    .bind(&content_type)
    .bind(body.len() as i64)
    .bind(body.as_ref())
    .bind(invite_service::hash_token(&query.token))
    .fetch_one(&state.pool)
    .await?;

    Ok((StatusCode::CREATED, Json(upload.into())))
}

/// Start the voice interview for a validated invite.
///
/// # Endpoint
///
/// `POST /api/v1/candidate/invites/:invite_id/call` with `{"token": "..."}`
///
/// # Process
///
/// 1. Re-validate the invite
/// 2. Resolve the interview's interviewer, falling back to the configured
///    default agent (creating and assigning a shared interviewer row when the
///    interview has none)
/// 3. Request a web-call session from the voice-call provider
/// 4. Mark the interview in progress (`started_at` set once)
/// 5. Record invite consumption with the call id
///
/// Steps 4-5 are bookkeeping on a session that already exists upstream;
/// their failures are logged and do not fail the request.
///
/// # Errors
///
/// - **404**: invite or interview absent
/// - **401 / 410**: bad token / expired invite
/// - **400**: no interviewer assigned and no default agent configured
/// - **502**: provider request failed
pub async fn start_call(
    State(state): State<AppState>,
    Path(invite_id): Path<Uuid>,
    Json(request): Json<StartCallRequest>,
) -> Result<Json<StartCallResponse>, AppError> {
    let invite = invite_service::validate_invite(&state.pool, invite_id, &request.token).await?;

    let interview = sqlx::query_as::<_, Interview>("SELECT * FROM interviews WHERE id = $1")
        .bind(invite.interview_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::InterviewNotFound)?;

    let interviewer = resolve_interviewer(&state, &interview).await?;

    let metadata = json!({
        "candidate_invite_id": invite.id,
        "interview_id": interview.id,
        "org_id": invite.org_id,
        "candidate_name": invite.candidate_name,
        "candidate_email": invite.candidate_email,
        "source": "candidate-portal",
    });

    let session = call_service::create_web_call(&state.config, &interviewer.agent_id, metadata).await?;

    // Some provider responses omit the call id; mint one so the interview and
    // consumption records still correlate
    let call_id = session
        .call_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    mark_call_started(&state, &invite, &interview, &call_id).await;

    Ok(Json(StartCallResponse {
        call_id,
        access_token: session.access_token,
        expires_at: session.expires_at,
    }))
}

/// Resolve the interviewer for an interview, assigning a default when absent.
///
/// Prefers the interview's own assignment. Otherwise falls back to the
/// configured default agent: reuse an existing shared interviewer row for
/// that agent or create one, then assign it to the interview.
async fn resolve_interviewer(
    state: &AppState,
    interview: &Interview,
) -> Result<Interviewer, AppError> {
    if let Some(interviewer_id) = interview.interviewer_id {
        let existing =
            sqlx::query_as::<_, Interviewer>("SELECT * FROM interviewers WHERE id = $1")
                .bind(interviewer_id)
                .fetch_optional(&state.pool)
                .await?;

        if let Some(interviewer) = existing {
            return Ok(interviewer);
        }
        // Dangling assignment; fall through to the default agent
    }

    let Some(agent_id) = state.config.default_agent_id.clone() else {
        return Err(AppError::InvalidRequest(
            "Interview has no interviewer assigned and no default agent is configured".to_string(),
        ));
    };

    let interviewer = match sqlx::query_as::<_, Interviewer>(
        "SELECT * FROM interviewers WHERE agent_id = $1 AND org_id IS NULL",
    )
    .bind(&agent_id)
    .fetch_optional(&state.pool)
    .await?
    {
        Some(existing) => existing,
        None => {
            sqlx::query_as::<_, Interviewer>(
                r#"
                INSERT INTO interviewers (org_id, name, description, agent_id)
                VALUES (NULL, 'Default voice agent', 'Auto-created default agent link', $1)
                RETURNING *
                "#,
            )
            .bind(&agent_id)
            .fetch_one(&state.pool)
            .await?
        }
    };

    if let Err(e) = sqlx::query(
        "UPDATE interviews SET interviewer_id = $2, updated_at = NOW() WHERE id = $1",
    )
    .bind(interview.id)
    .bind(interviewer.id)
    .execute(&state.pool)
    .await
    {
        tracing::warn!(
            "Failed to assign default interviewer to interview {}: {:?}",
            interview.id,
            e
        );
    }

    Ok(interviewer)
}

/// Best-effort bookkeeping after a session was created upstream: mark the
/// interview in progress and record invite consumption.
async fn mark_call_started(
    state: &AppState,
    invite: &CandidateInvite,
    interview: &Interview,
    call_id: &str,
) {
    if let Err(e) = sqlx::query(
        r#"
        UPDATE interviews
        SET status = 'in_progress',
            started_at = COALESCE(started_at, NOW()),
            candidate_invite_id = $2,
            updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(interview.id)
    .bind(invite.id)
    .execute(&state.pool)
    .await
    {
        tracing::warn!("Failed to mark interview {} started: {:?}", interview.id, e);
    }

    let usage = json!({ "action": "call_started", "call_id": call_id });
    if let Err(e) = invite_service::mark_invite_used(&state.pool, invite.id, usage).await {
        tracing::warn!(
            "Failed to record invite consumption for {}: {:?}",
            invite.id,
            e
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_size_rules() {
        assert!(matches!(
            check_payload_size(0),
            Err(AppError::EmptyPayload)
        ));
        assert!(check_payload_size(1).is_ok());
        assert!(check_payload_size(MAX_UPLOAD_BYTES).is_ok());
        assert!(matches!(
            check_payload_size(MAX_UPLOAD_BYTES + 1),
            Err(AppError::PayloadTooLarge)
        ));
        assert!(matches!(
            check_payload_size(6 * 1024 * 1024),
            Err(AppError::PayloadTooLarge)
        ));
    }
}

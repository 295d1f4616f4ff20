//! Candidate invite models and API request/response types.
//!
//! An invite is a single-use-intended, time-limited credential letting an
//! unauthenticated candidate access one interview's upload/call actions. The
//! invite row stores only the SHA-256 digest of the secret token; the
//! plaintext token exists exactly once, inside the invite URL returned at
//! creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{interview::Interview, interviewer::Interviewer};

/// Invite lifecycle state.
///
/// Stored as the PostgreSQL enum `invite_status`. The only transition is
/// `pending -> used`; there is no path back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "invite_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    Pending,
    Used,
}

/// Represents a candidate invite record from the database.
///
/// # Database Table
///
/// Maps to the `candidate_invites` table.
///
/// # Token Storage
///
/// `token_hash` is the SHA-256 digest (64 hex characters) of the invite
/// token. This struct intentionally does not implement `Serialize`: the
/// digest must never cross the HTTP boundary, so every response goes through
/// [`InviteResponse`], which omits it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CandidateInvite {
    /// Public identifier, embedded in the invite URL path; not a secret
    pub id: Uuid,

    /// Organization that owns the interview this invite unlocks
    pub org_id: String,

    /// Interview this invite unlocks
    pub interview_id: Uuid,

    /// Optional display metadata, may be filled in later if unknown at creation
    pub candidate_email: Option<String>,
    pub candidate_name: Option<String>,

    /// SHA-256 digest of the secret token; the only token material ever stored
    pub token_hash: String,

    /// Lifecycle state (`pending` until consumed)
    pub status: InviteStatus,

    /// Absolute timestamp after which validation fails regardless of the token
    pub expires_at: DateTime<Utc>,

    /// Set by the first consumption, never cleared
    pub used_at: Option<DateTime<Utc>>,

    /// Staff user who issued the invite
    pub created_by: Uuid,

    /// Free-form data merged in at consumption time (e.g. the call id)
    pub metadata: Option<serde_json::Value>,

    /// Timestamp when this invite was created
    pub created_at: DateTime<Utc>,
}

/// Request body for issuing an invite against an interview.
///
/// # JSON Example
///
/// ```json
/// {
///   "candidate_email": "ada@example.com",
///   "candidate_name": "Ada Lovelace",
///   "expires_at": "2026-01-01T00:00:00Z"
/// }
/// ```
///
/// All fields are optional: contact details fall back to the interview's
/// candidate record, and the expiry defaults to 48 hours from creation.
#[derive(Debug, Deserialize, Default)]
pub struct CreateInviteRequest {
    pub candidate_email: Option<String>,
    pub candidate_name: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Response body for invite issuance.
///
/// The `url` carries the plaintext token as its sole query parameter. This is
/// the only time the token leaves the service; it cannot be retrieved again.
///
/// # JSON Example
///
/// ```json
/// {
///   "invite_id": "550e8400-e29b-41d4-a716-446655440000",
///   "url": "http://localhost:3000/candidate/550e8400-...?token=ab12...",
///   "expires_at": "2025-09-03T10:00:00Z",
///   "candidate_email": "ada@example.com",
///   "candidate_name": "Ada Lovelace"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct IssuedInviteResponse {
    pub invite_id: Uuid,
    pub url: String,
    pub expires_at: DateTime<Utc>,
    pub candidate_email: Option<String>,
    pub candidate_name: Option<String>,
}

/// Response body for invite reads (listing, validation).
///
/// This is the public projection of [`CandidateInvite`]: everything except
/// the token digest.
#[derive(Debug, Serialize)]
pub struct InviteResponse {
    pub id: Uuid,
    pub org_id: String,
    pub interview_id: Uuid,
    pub candidate_email: Option<String>,
    pub candidate_name: Option<String>,
    pub status: InviteStatus,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Convert database CandidateInvite to API InviteResponse.
///
/// This transformation removes the `token_hash` and `created_by` fields.
impl From<CandidateInvite> for InviteResponse {
    fn from(invite: CandidateInvite) -> Self {
        Self {
            id: invite.id,
            org_id: invite.org_id,
            interview_id: invite.interview_id,
            candidate_email: invite.candidate_email,
            candidate_name: invite.candidate_name,
            status: invite.status,
            expires_at: invite.expires_at,
            used_at: invite.used_at,
            created_at: invite.created_at,
        }
    }
}

/// Interview summary joined into the candidate-facing validation response.
#[derive(Debug, Serialize)]
pub struct InterviewSummary {
    pub id: Uuid,
    pub mode: String,
    pub status: String,
    pub interviewer_id: Option<Uuid>,
}

impl From<Interview> for InterviewSummary {
    fn from(interview: Interview) -> Self {
        Self {
            id: interview.id,
            mode: interview.mode,
            status: interview.status,
            interviewer_id: interview.interviewer_id,
        }
    }
}

/// Interviewer summary joined into the candidate-facing validation response.
#[derive(Debug, Serialize)]
pub struct InterviewerSummary {
    pub id: Uuid,
    pub name: String,
    pub agent_id: String,
}

impl From<Interviewer> for InterviewerSummary {
    fn from(interviewer: Interviewer) -> Self {
        Self {
            id: interviewer.id,
            name: interviewer.name,
            agent_id: interviewer.agent_id,
        }
    }
}

/// Response body for the candidate-facing validation endpoint.
///
/// # JSON Example
///
/// ```json
/// {
///   "valid": true,
///   "invite": { "id": "...", "status": "pending", "expires_at": "..." },
///   "interview": { "id": "...", "mode": "voice", "status": "scheduled" },
///   "interviewer": { "id": "...", "name": "Sophia", "agent_id": "agent_..." }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct InviteDetailsResponse {
    pub valid: bool,
    pub invite: InviteResponse,
    pub interview: Option<InterviewSummary>,
    pub interviewer: Option<InterviewerSummary>,
}

//! Interview data models and API request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an interview record from the database.
///
/// # Database Table
///
/// Maps to the `interviews` table. Each interview belongs to one organization
/// and optionally references a candidate record and an interviewer (voice
/// agent). `candidate_invite_id` is filled in by the call-start flow with the
/// invite that started the interview.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Interview {
    /// Unique identifier for this interview
    pub id: Uuid,

    /// Organization that owns this interview
    ///
    /// Staff queries always filter by `org_id` so one organization cannot see
    /// another's interviews.
    pub org_id: String,

    /// Candidate being interviewed, if already on file
    pub candidate_id: Option<Uuid>,

    /// Assigned interviewer (voice agent), if any
    pub interviewer_id: Option<Uuid>,

    /// Interview mode (currently always "voice")
    pub mode: String,

    /// Lifecycle status: "scheduled", "in_progress", "completed"
    pub status: String,

    /// Set once, the first time a candidate starts the call
    pub started_at: Option<DateTime<Utc>>,

    /// Invite that started this interview
    pub candidate_invite_id: Option<Uuid>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a new interview.
#[derive(Debug, Deserialize)]
pub struct CreateInterviewRequest {
    /// Candidate record to link, if known
    pub candidate_id: Option<Uuid>,

    /// Interviewer to assign up front; the call-start flow can also assign a
    /// default one later
    pub interviewer_id: Option<Uuid>,

    /// Interview mode (defaults to "voice")
    #[serde(default = "default_mode")]
    pub mode: String,
}

/// Default interview mode when not specified in request.
fn default_mode() -> String {
    "voice".to_string()
}

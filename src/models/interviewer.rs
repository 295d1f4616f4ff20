//! Interviewer (voice agent) data models.
//!
//! An interviewer row links a display name to an agent reference at the
//! external voice-call provider. Rows with a NULL `org_id` are shared agents
//! available to every organization; the call-start flow auto-creates one for
//! the configured default agent when an interview has no interviewer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an interviewer record from the database.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Interviewer {
    pub id: Uuid,

    /// Owning organization; NULL marks a shared agent
    pub org_id: Option<String>,

    pub name: String,
    pub description: Option<String>,

    /// Agent reference at the voice-call provider
    pub agent_id: String,

    pub created_at: DateTime<Utc>,
}

/// Request body for registering a new interviewer.
#[derive(Debug, Deserialize)]
pub struct CreateInterviewerRequest {
    pub name: String,
    pub description: Option<String>,
    pub agent_id: String,
}

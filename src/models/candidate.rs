//! Candidate record data models.
//!
//! Candidate rows hold contact metadata only. Invite issuance falls back to
//! them when the caller does not supply an email/name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a candidate record from the database.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Candidate {
    pub id: Uuid,
    pub org_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a candidate record.
#[derive(Debug, Deserialize)]
pub struct CreateCandidateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

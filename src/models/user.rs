//! Staff user model for authentication and authorization.
//!
//! Staff users authenticate with an API key; the key is stored in the database
//! as a SHA-256 hash. Their role and organization scope every authorization
//! decision in the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Staff role within an organization.
///
/// Stored as the PostgreSQL enum `user_role`.
///
/// - `Master`: platform operator, not bound to a single organization
/// - `CompanyAdmin`: administers one organization
/// - `Recruiter`: day-to-day recruiting work within one organization
/// - `Candidate`: a person being interviewed; never issues invites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Master,
    CompanyAdmin,
    Recruiter,
    Candidate,
}

impl Role {
    /// Whether this role may create and manage interviews, interviewers,
    /// and candidate records within its own organization.
    pub fn can_manage_interviews(self) -> bool {
        matches!(self, Role::Master | Role::CompanyAdmin | Role::Recruiter)
    }
}

/// Represents a staff user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table. The `api_key_hash` column holds the SHA-256
/// digest (64 hex characters) of the user's API key; the plaintext key is
/// never stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StaffUser {
    /// Unique identifier for this user
    pub id: Uuid,

    /// Organization the user belongs to
    pub org_id: String,

    /// Login / contact email, unique across the platform
    pub email: String,

    /// Optional human-readable name
    pub display_name: Option<String>,

    /// Role used by the authorization predicates
    pub role: Role,

    /// SHA-256 hash of the user's API key (64 hex characters)
    pub api_key_hash: String,

    /// Whether this user may currently authenticate
    ///
    /// Inactive users are rejected during authentication. This provides a way
    /// to revoke access without deleting the record.
    pub is_active: bool,

    /// Timestamp when this user was created
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interview_management_roles() {
        assert!(Role::Master.can_manage_interviews());
        assert!(Role::CompanyAdmin.can_manage_interviews());
        assert!(Role::Recruiter.can_manage_interviews());
        assert!(!Role::Candidate.can_manage_interviews());
    }
}

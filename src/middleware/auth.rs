//! Staff API key authentication middleware.
//!
//! This middleware intercepts every staff request to:
//! 1. Extract the API key from the Authorization header
//! 2. Hash it and verify it exists in the database
//! 3. Inject the request-scoped identity into the request
//! 4. Reject unauthorized requests with HTTP 401
//!
//! Candidate-facing routes do not pass through here; they are gated by the
//! invite token instead.

use crate::{error::AppError, models::user::{Role, StaffUser}, state::AppState};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Request-scoped identity attached to authenticated staff requests.
///
/// This struct is inserted into the request's extension map and can be
/// extracted by route handlers to know who made the request. Authorization
/// decisions take it as an explicit argument; nothing reads identity from
/// ambient state.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// ID of the authenticated staff user
    pub user_id: Uuid,

    /// Organization the user belongs to (tenant scoping)
    pub org_id: String,

    /// The user's role within that organization
    pub role: Role,
}

/// Authorization predicate for invite issuance.
///
/// One place decides whether an actor may issue (or list) invites against an
/// interview, instead of role-name comparisons scattered across handlers:
///
/// - `master` operates across every organization
/// - `company_admin` and `recruiter` only within their own organization
/// - `candidate` never issues invites
pub fn can_issue_invite(auth: &AuthContext, interview_org_id: &str) -> bool {
    match auth.role {
        Role::Master => true,
        Role::CompanyAdmin | Role::Recruiter => auth.org_id == interview_org_id,
        Role::Candidate => false,
    }
}

/// Staff API key authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: Bearer <key>` header from request
/// 2. Hash the `<key>` using SHA-256
/// 3. Query database for matching hash where `is_active = true`
/// 4. If found: inject `AuthContext` into request, call next handler
/// 5. If not found: return 401 Unauthorized error
///
/// # Headers
///
/// Expected header format:
/// ```text
/// Authorization: Bearer abc123xyz
/// ```
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Step 1: Extract Authorization header
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    // Step 2: Extract Bearer token
    // Expected format: "Bearer <api_key>"
    let api_key = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    // Step 3: Hash the API key using SHA-256
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());

    let key_hash = hex::encode(hasher.finalize());

    // Step 4: Lookup hashed key in database
    let user = sqlx::query_as::<_, StaffUser>(
        "SELECT id, org_id, email, display_name, role, api_key_hash, is_active, created_at
         FROM users
         WHERE api_key_hash = $1 AND is_active = true",
    )
    .bind(&key_hash)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::Unauthorized)?;

    // Step 5: Create the request-scoped identity
    let auth_context = AuthContext {
        user_id: user.id,
        org_id: user.org_id,
        role: user.role,
    };

    // Step 6: Inject context into request extensions
    // Route handlers can now extract this using Extension<AuthContext>
    request.extensions_mut().insert(auth_context);

    // Step 7: Call the next middleware/handler
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(role: Role, org: &str) -> AuthContext {
        AuthContext {
            user_id: Uuid::new_v4(),
            org_id: org.to_string(),
            role,
        }
    }

    #[test]
    fn master_issues_across_orgs() {
        assert!(can_issue_invite(&ctx(Role::Master, "org_master"), "org_a"));
        assert!(can_issue_invite(&ctx(Role::Master, "org_master"), "org_b"));
    }

    #[test]
    fn recruiter_and_admin_are_org_scoped() {
        assert!(can_issue_invite(&ctx(Role::Recruiter, "org_a"), "org_a"));
        assert!(!can_issue_invite(&ctx(Role::Recruiter, "org_a"), "org_b"));
        assert!(can_issue_invite(&ctx(Role::CompanyAdmin, "org_a"), "org_a"));
        assert!(!can_issue_invite(&ctx(Role::CompanyAdmin, "org_a"), "org_b"));
    }

    #[test]
    fn candidates_never_issue() {
        assert!(!can_issue_invite(&ctx(Role::Candidate, "org_a"), "org_a"));
    }
}

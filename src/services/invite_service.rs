//! Invite service - Core logic for the candidate invite token lifecycle.
//!
//! This service handles:
//! - Token generation and hashing
//! - Invite issuance (the only moment the plaintext token exists)
//! - Validation (read-only, repeatable)
//! - Consumption (atomic `pending -> used` transition)
//!
//! # Security Model
//!
//! The invite id is public and path-embedded; the token is the sole secret.
//! Only the SHA-256 digest of the token is persisted, so the store by itself
//! is insufficient to forge valid invite URLs. Digest comparison is constant
//! time.

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use url::Url;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::invite::{CandidateInvite, InviteStatus},
};

/// Entropy of the invite token in bytes. Hex-encoded to 64 characters.
const TOKEN_BYTES: usize = 32;

/// Default invite lifetime when the issuer does not set an explicit expiry.
const DEFAULT_EXPIRATION_HOURS: i64 = 48;

/// Parameters for issuing a new invite.
#[derive(Debug, Clone)]
pub struct CreateInviteParams {
    pub org_id: String,
    pub interview_id: Uuid,
    pub candidate_email: Option<String>,
    pub candidate_name: Option<String>,
    pub created_by: Uuid,
    /// Explicit expiry; defaults to now + 48h when None
    pub expires_at: Option<DateTime<Utc>>,
}

/// A freshly issued invite.
///
/// Carries the plaintext token and the shareable URL embedding it. Neither is
/// recoverable after this value is dropped; the store keeps only the digest.
#[derive(Debug)]
pub struct IssuedInvite {
    pub invite_id: Uuid,
    pub token: String,
    pub url: String,
    pub expires_at: DateTime<Utc>,
}

/// Generate a cryptographically secure random invite token.
///
/// # Output
///
/// 64 hex characters (32 random bytes)
pub fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::random();
    hex::encode(bytes)
}

/// Compute the SHA-256 digest of a token, hex encoded.
///
/// This is the only representation of the token that ever reaches the store.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compare two hex digests in constant time.
///
/// A byte-wise early-exit comparison would leak how many leading bytes match
/// through response timing.
fn digests_match(stored: &str, presented: &str) -> bool {
    subtle::ConstantTimeEq::ct_eq(stored.as_bytes(), presented.as_bytes()).into()
}

/// Default expiry timestamp: 48 hours from now.
pub fn default_expires_at() -> DateTime<Utc> {
    Utc::now() + Duration::hours(DEFAULT_EXPIRATION_HOURS)
}

/// Build the shareable candidate URL for an invite.
///
/// # Format
///
/// `{base_url}/candidate/{invite_id}?token={plaintext_token}`
///
/// The id is path-embedded and not secret; the token is the sole secret and
/// travels only as the query parameter.
pub fn build_invite_url(
    base_url: &str,
    invite_id: Uuid,
    token: &str,
) -> Result<String, url::ParseError> {
    let mut url = Url::parse(base_url)?;
    url.set_path(&format!("candidate/{invite_id}"));
    url.query_pairs_mut().append_pair("token", token);
    Ok(url.to_string())
}

/// Issue a new invite against an interview.
///
/// # Process
///
/// 1. Generate a 32-byte random token (64 hex chars)
/// 2. Compute its SHA-256 digest
/// 3. Persist the record with `status = pending` and the derived expiry
/// 4. Build the shareable URL embedding id and plaintext token
///
/// The caller is responsible for having already authorized the issuing actor
/// and verified the interview exists.
pub async fn create_invite(
    pool: &DbPool,
    base_url: &str,
    params: CreateInviteParams,
) -> Result<IssuedInvite, AppError> {
    let token = generate_token();
    let token_hash = hash_token(&token);
    let expires_at = params.expires_at.unwrap_or_else(default_expires_at);

    let invite = sqlx::query_as::<_, CandidateInvite>(
        r#"
        INSERT INTO candidate_invites (
            org_id,
            interview_id,
            candidate_email,
            candidate_name,
            token_hash,
            status,
            expires_at,
            created_by
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(&params.org_id)
    .bind(params.interview_id)
    .bind(&params.candidate_email)
    .bind(&params.candidate_name)
    .bind(&token_hash)
    .bind(InviteStatus::Pending)
    .bind(expires_at)
    .bind(params.created_by)
    .fetch_one(pool)
    .await?;

    let url = build_invite_url(base_url, invite.id, &token)?;

    Ok(IssuedInvite {
        invite_id: invite.id,
        token,
        url,
        expires_at: invite.expires_at,
    })
}

/// Validate a candidate-presented token against an invite.
///
/// # Process
///
/// 1. Look up the record by id (`InviteNotFound` if absent)
/// 2. Compare the digest of the presented token against the stored digest in
///    constant time (`InvalidToken` on mismatch)
/// 3. Reject when `expires_at` is past (`InviteExpired`)
///
/// Validation is read-only and idempotent: it may be called repeatedly (once
/// to render the portal, again to authorize an upload, again to authorize a
/// call) without altering `status`.
pub async fn validate_invite(
    pool: &DbPool,
    invite_id: Uuid,
    token: &str,
) -> Result<CandidateInvite, AppError> {
    let invite =
        sqlx::query_as::<_, CandidateInvite>("SELECT * FROM candidate_invites WHERE id = $1")
            .bind(invite_id)
            .fetch_optional(pool)
            .await?
            .ok_or(AppError::InviteNotFound)?;

    let presented = hash_token(token);
    if !digests_match(&invite.token_hash, &presented) {
        return Err(AppError::InvalidToken);
    }

    if invite.expires_at < Utc::now() {
        return Err(AppError::InviteExpired);
    }

    Ok(invite)
}

/// Mark an invite as used, merging metadata about the consuming action.
///
/// # Concurrency
///
/// The transition is an atomic conditional update (update-where-status-pending),
/// so N concurrent attempts produce exactly one `pending -> used` transition.
/// The boolean in the return value reports whether this call performed it.
///
/// # Idempotence
///
/// Calling again on an already-used invite re-applies the terminal state:
/// `used_at` keeps its original value and the new metadata is merged over the
/// existing JSONB object (later keys win, earlier distinct keys survive).
///
/// Must only be invoked after a successful validation in the same logical
/// request.
pub async fn mark_invite_used(
    pool: &DbPool,
    invite_id: Uuid,
    metadata: serde_json::Value,
) -> Result<(CandidateInvite, bool), AppError> {
    let transitioned = sqlx::query_as::<_, CandidateInvite>(
        r#"
        UPDATE candidate_invites
        SET status = $2,
            used_at = NOW(),
            metadata = COALESCE(metadata, '{}'::jsonb) || $3
        WHERE id = $1 AND status = $4
        RETURNING *
        "#,
    )
    .bind(invite_id)
    .bind(InviteStatus::Used)
    .bind(&metadata)
    .bind(InviteStatus::Pending)
    .fetch_optional(pool)
    .await?;

    if let Some(invite) = transitioned {
        return Ok((invite, true));
    }

    // Already used: merge the new metadata, keep the original used_at
    let invite = sqlx::query_as::<_, CandidateInvite>(
        r#"
        UPDATE candidate_invites
        SET metadata = COALESCE(metadata, '{}'::jsonb) || $2
        WHERE id = $1 AND status = $3
        RETURNING *
        "#,
    )
    .bind(invite_id)
    .bind(&metadata)
    .bind(InviteStatus::Used)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::InviteNotFound)?;

    Ok((invite, false))
}

/// List invites issued against an interview, newest first.
pub async fn list_invites_for_interview(
    pool: &DbPool,
    interview_id: Uuid,
) -> Result<Vec<CandidateInvite>, AppError> {
    let invites = sqlx::query_as::<_, CandidateInvite>(
        "SELECT * FROM candidate_invites WHERE interview_id = $1 ORDER BY created_at DESC",
    )
    .bind(interview_id)
    .fetch_all(pool)
    .await?;

    Ok(invites)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_64_hex_chars() {
        let token = generate_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }

    #[test]
    fn digest_is_deterministic_and_hides_token() {
        let token = generate_token();
        let digest = hash_token(&token);
        assert_eq!(digest, hash_token(&token));
        assert_eq!(digest.len(), 64);
        assert_ne!(digest, token);
    }

    #[test]
    fn digest_comparison() {
        let digest = hash_token("some-token");
        assert!(digests_match(&digest, &hash_token("some-token")));
        assert!(!digests_match(&digest, &hash_token("wrong")));
        assert!(!digests_match(&digest, ""));
    }

    #[test]
    fn default_expiry_is_48_hours_out() {
        let delta = default_expires_at() - Utc::now();
        let drift = delta - Duration::hours(48);
        assert!(drift.num_milliseconds().abs() < 1_000);
    }

    #[test]
    fn invite_url_embeds_id_in_path_and_token_in_query() {
        let invite_id = Uuid::new_v4();
        let token = generate_token();
        let url = build_invite_url("http://localhost:3000", invite_id, &token).unwrap();

        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.path(), format!("/candidate/{invite_id}"));

        let (key, value) = parsed.query_pairs().next().unwrap();
        assert_eq!(key, "token");
        assert_eq!(value, token);
        assert_eq!(value.len(), 64);
    }

    #[test]
    fn invite_url_rejects_garbage_base() {
        assert!(build_invite_url("not a url", Uuid::new_v4(), "t").is_err());
    }
}

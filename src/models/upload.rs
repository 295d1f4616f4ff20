//! Resume upload models.
//!
//! File content is persisted as an opaque blob next to the invite and
//! interview it was uploaded for. The digest of the presenting token is kept
//! for audit; the content itself is never echoed back over HTTP.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Represents a stored resume upload from the database.
///
/// # Database Table
///
/// Maps to the `candidate_uploads` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CandidateUpload {
    pub id: Uuid,
    pub invite_id: Uuid,
    pub interview_id: Option<Uuid>,
    pub org_id: Option<String>,
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: i64,
    pub content: Vec<u8>,

    /// Digest of the token that authorized this upload
    pub token_hash: String,

    pub uploaded_at: DateTime<Utc>,
}

/// Response body for a successful upload.
///
/// # JSON Example
///
/// ```json
/// {
///   "upload_id": "550e8400-e29b-41d4-a716-446655440000",
///   "file_name": "resume.pdf",
///   "size_bytes": 48213
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub upload_id: Uuid,
    pub file_name: String,
    pub size_bytes: i64,
}

/// Convert a stored upload to its API response.
///
/// Drops the content blob and the token digest.
impl From<CandidateUpload> for UploadResponse {
    fn from(upload: CandidateUpload) -> Self {
        Self {
            upload_id: upload.id,
            file_name: upload.file_name,
            size_bytes: upload.size_bytes,
        }
    }
}

//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the request/response types derived from them.

/// Candidate contact records
pub mod candidate;
/// Interview entities
pub mod interview;
/// Interviewer (voice agent) entities
pub mod interviewer;
/// Candidate invite token records
pub mod invite;
/// Resume uploads
pub mod upload;
/// Staff users and roles
pub mod user;

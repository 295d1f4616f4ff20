//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Performs business logic (database queries, validation)
//! 3. Returns HTTP response (JSON, status code)

/// Candidate-facing, token-gated endpoints
pub mod candidate;
/// Candidate record management
pub mod candidates;
/// Health check
pub mod health;
/// Interviewer management
pub mod interviewers;
/// Interview management
pub mod interviews;
/// Staff invite issuance
pub mod invites;

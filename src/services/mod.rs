//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle the invite token lifecycle and the voice-call provider client.

pub mod call_service;
pub mod invite_service;

//! Voice-call provider client.
//!
//! The service consumes exactly one provider operation: create a web-call
//! session for a given agent. Everything else about the provider's protocol
//! (agent management, transcripts, billing) lives outside this codebase.

use serde::{Deserialize, Serialize};

use crate::{config::Config, error::AppError};

/// Request body for the provider's create-web-call operation.
#[derive(Debug, Serialize)]
struct CreateWebCallRequest<'a> {
    agent_id: &'a str,
    metadata: serde_json::Value,
}

/// Session handle returned by the voice-call provider.
///
/// Provider responses have drifted between snake_case and camelCase field
/// names; aliases accept both. Missing fields are tolerated and left for the
/// caller to default.
#[derive(Debug, Clone, Deserialize)]
pub struct WebCallSession {
    #[serde(default, alias = "callId")]
    pub call_id: Option<String>,

    #[serde(default, alias = "accessToken")]
    pub access_token: Option<String>,

    #[serde(default, alias = "expiresAt")]
    pub expires_at: Option<String>,
}

/// Request a web-call session from the voice-call provider.
///
/// # Process
///
/// 1. POST `{VOICE_API_URL}/v2/create-web-call` with the agent reference and
///    invite/interview metadata
/// 2. Authenticate with the configured bearer key
/// 3. Reject non-2xx responses and malformed bodies as `UpstreamProvider`
///
/// # Timeout
///
/// 10 seconds per request (prevents hanging the candidate's browser on a slow
/// provider).
pub async fn create_web_call(
    config: &Config,
    agent_id: &str,
    metadata: serde_json::Value,
) -> Result<WebCallSession, AppError> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .map_err(|e| AppError::UpstreamProvider(format!("HTTP client error: {e}")))?;

    let url = format!(
        "{}/v2/create-web-call",
        config.voice_api_url.trim_end_matches('/')
    );

    let response = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", config.voice_api_key))
        .json(&CreateWebCallRequest { agent_id, metadata })
        .send()
        .await
        .map_err(|e| AppError::UpstreamProvider(format!("request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(AppError::UpstreamProvider(format!(
            "provider returned {}",
            response.status()
        )));
    }

    response
        .json::<WebCallSession>()
        .await
        .map_err(|e| AppError::UpstreamProvider(format!("invalid provider response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_accepts_both_field_spellings() {
        let snake: WebCallSession =
            serde_json::from_str(r#"{"call_id":"call_1","access_token":"tok"}"#).unwrap();
        assert_eq!(snake.call_id.as_deref(), Some("call_1"));
        assert_eq!(snake.access_token.as_deref(), Some("tok"));

        let camel: WebCallSession =
            serde_json::from_str(r#"{"callId":"call_2","accessToken":"tok2","expiresAt":"soon"}"#)
                .unwrap();
        assert_eq!(camel.call_id.as_deref(), Some("call_2"));
        assert_eq!(camel.expires_at.as_deref(), Some("soon"));
    }

    #[test]
    fn session_tolerates_missing_fields() {
        let empty: WebCallSession = serde_json::from_str("{}").unwrap();
        assert!(empty.call_id.is_none());
        assert!(empty.access_token.is_none());
        assert!(empty.expires_at.is_none());
    }
}

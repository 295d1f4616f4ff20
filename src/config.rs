//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `BASE_URL` (optional): public base URL used when building candidate invite
///   links, defaults to `http://localhost:3000`
/// - `VOICE_API_URL` (optional): voice-call provider API root, defaults to the
///   hosted provider endpoint
/// - `VOICE_API_KEY` (optional): bearer credential for the voice-call provider
/// - `DEFAULT_AGENT_ID` (optional): fallback voice-agent reference used when an
///   interview has no interviewer assigned
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_voice_api_url")]
    pub voice_api_url: String,

    #[serde(default)]
    pub voice_api_key: String,

    #[serde(default)]
    pub default_agent_id: Option<String>,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

/// Default public base URL for invite links.
fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

/// Default voice-call provider API root.
fn default_voice_api_url() -> String {
    "https://api.retellai.com".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DATABASE_URL)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: database_url -> DATABASE_URL
        envy::from_env::<Config>()
    }
}

use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_COMPLETION_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_COMPLETION_MODEL: &str = "llama-3.3-70b-versatile";
const DEFAULT_QUESTION_COUNT: usize = 3;
const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub completion_api_url: String,
    pub completion_model: String,
    /// Number of technical questions requested per profile submission.
    pub question_count: usize,
    /// Idle time after which a session is treated as abandoned.
    pub session_ttl: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a fixed map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        Ok(Config {
            groq_api_key: require("GROQ_API_KEY")?,
            completion_api_url: lookup("COMPLETION_API_URL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_API_URL.to_string()),
            completion_model: lookup("COMPLETION_MODEL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()),
            question_count: match lookup("QUESTION_COUNT") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("QUESTION_COUNT must be a non-negative integer")?,
                None => DEFAULT_QUESTION_COUNT,
            },
            session_ttl: Duration::from_secs(match lookup("SESSION_TTL_SECS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .context("SESSION_TTL_SECS must be a non-negative integer")?,
                None => DEFAULT_SESSION_TTL_SECS,
            }),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

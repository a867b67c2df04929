use anyhow::{bail, Context, Result};

/// Application configuration loaded once from environment variables.
/// Immutable after startup; passed by reference to whoever needs it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Required unless `mock_llm` is set.
    pub anthropic_api_key: Option<String>,
    pub claude_model: String,
    pub max_tokens: u32,
    /// Outbound provider call budget, in seconds.
    pub api_timeout_secs: f64,
    /// Serve canned responses instead of calling the provider.
    pub mock_llm: bool,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            claude_model: std::env::var("CLAUDE_MODEL")
                .unwrap_or_else(|_| "claude-sonnet-4-5-20250929".to_string()),
            max_tokens: parse_env("MAX_TOKENS", 1024)?,
            api_timeout_secs: parse_env("API_TIMEOUT", 60.0)?,
            mock_llm: parse_env("MOCK_LLM", false)?,
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        };

        if !config.mock_llm && config.anthropic_api_key.is_none() {
            bail!(
                "ANTHROPIC_API_KEY environment variable is required when MOCK_LLM is false. \
                 Please set it in your .env file or environment."
            );
        }

        // Duration::from_secs_f64 panics on negative or non-finite input,
        // so reject those here with a readable error instead.
        if !config.api_timeout_secs.is_finite() || config.api_timeout_secs <= 0.0 {
            bail!(
                "API_TIMEOUT must be a positive, finite number of seconds (got {})",
                config.api_timeout_secs
            );
        }

        Ok(config)
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

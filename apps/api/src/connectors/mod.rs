//! Provider connectors — the single seam to the external LLM.
//!
//! No other module talks to the Anthropic API. The extraction service
//! holds an `Arc<dyn JobExtractor>` and is unaware of which variant is
//! behind it; the live/mock choice happens once, at startup, from config.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::job::UsageInfo;

pub mod claude;
pub mod mock;
pub mod prompts;

/// Failures at the provider boundary.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("provider call timed out after {timeout_secs}s")]
    Timeout { timeout_secs: f64 },

    #[error("provider rejected credentials (status {status})")]
    Auth { status: u16 },

    #[error("provider returned malformed response: {0}")]
    MalformedResponse(String),

    #[error("provider error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP transport error: {0}")]
    Http(#[source] reqwest::Error),
}

/// Raw tool-call payload returned by the provider, before any mapping or
/// validation. `fields` is the tool input object exactly as the provider
/// produced it.
#[derive(Debug, Clone)]
pub struct RawExtraction {
    pub fields: Value,
    pub model: String,
    pub usage: UsageInfo,
}

/// Capability contract for job-posting extraction.
///
/// One method is the whole surface: text in, raw structured payload out.
/// Implementations hold no per-request mutable state, so a single
/// instance is shared across concurrent requests.
#[async_trait]
pub trait JobExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<RawExtraction, ConnectorError>;
}

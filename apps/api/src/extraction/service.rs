//! Extraction service — orchestrates one connector call per request.
//!
//! Pipeline: delegate to the connector, map the raw payload into a
//! `JobPosting`, derive confidence, assemble the response. A connector
//! failure is surfaced immediately — retry decisions belong to callers.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::connectors::{ConnectorError, JobExtractor};
use crate::extraction::confidence;
use crate::models::job::{JobPosting, UsageInfo};
use crate::models::request::ExtractionRequest;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("connector failure: {0}")]
    Connector(#[from] ConnectorError),

    #[error("extracted payload failed validation: {0}")]
    Validation(String),
}

/// Final extraction result returned to the HTTP layer.
#[derive(Debug, Clone, Serialize)]
pub struct JobExtractionResponse {
    pub job: JobPosting,
    /// Derived completeness score in [0, 1].
    pub confidence: f32,
    /// Raw tool-call arguments, kept for debugging.
    pub raw_response: String,
    pub model: String,
    pub usage: UsageInfo,
}

/// Orchestrates extraction over whichever connector was configured.
/// Stateless apart from the shared connector handle.
#[derive(Clone)]
pub struct ExtractionService {
    connector: Arc<dyn JobExtractor>,
}

impl ExtractionService {
    pub fn new(connector: Arc<dyn JobExtractor>) -> Self {
        Self { connector }
    }

    pub async fn extract_job(
        &self,
        request: &ExtractionRequest,
    ) -> Result<JobExtractionResponse, ExtractionError> {
        let raw = self.connector.extract(request.text()).await?;

        let job: JobPosting = serde_json::from_value(raw.fields.clone())
            .map_err(|e| ExtractionError::Validation(e.to_string()))?;

        let confidence = confidence::score(&job);
        debug!(confidence, model = %raw.model, "extraction mapped");

        Ok(JobExtractionResponse {
            job,
            confidence,
            raw_response: raw.fields.to_string(),
            model: raw.model,
            usage: raw.usage,
        })
    }
}

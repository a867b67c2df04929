//! Axum route handlers for the Extraction API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extraction::service::JobExtractionResponse;
use crate::models::request::ExtractionRequest;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractJobRequest {
    pub text: String,
}

/// POST /api/v1/extract/job
///
/// Extracts structured job posting data from unstructured text.
/// Input validation happens here, before any provider call is made.
pub async fn handle_extract_job(
    State(state): State<AppState>,
    Json(body): Json<ExtractJobRequest>,
) -> Result<Json<JobExtractionResponse>, AppError> {
    let request =
        ExtractionRequest::new(body.text).map_err(|e| AppError::Validation(e.to_string()))?;

    let response = state.extraction.extract_job(&request).await?;

    Ok(Json(response))
}

//! Mock connector for tests and `MOCK_LLM` environments.
//!
//! Returns the same canned payload on every call, no network I/O.
//! Identical contract to the live connector — callers cannot tell them
//! apart.

use serde_json::{json, Value};

use crate::connectors::{ConnectorError, JobExtractor, RawExtraction};
use crate::models::job::UsageInfo;

pub const MOCK_MODEL: &str = "mock-model";

/// Canned tool-call payload: a Senior Python Developer posting at
/// TechCorp, Berlin. Responsibilities are deliberately left empty so the
/// derived confidence stays below 1.0.
pub fn mock_fields() -> Value {
    json!({
        "job_title": "Senior Python Developer",
        "company": "TechCorp",
        "location": "Berlin, Germany",
        "work_location": "hybrid",
        "employment_type": "full_time",
        "experience_level": "senior",
        "salary": {"min": 70000, "max": 90000, "currency": "EUR"},
        "requirements": [
            "5+ years Python experience",
            "Experience with FastAPI or Django",
            "Strong understanding of REST APIs",
            "Knowledge of PostgreSQL"
        ],
        "nice_to_have": [
            "Experience with Docker/Kubernetes",
            "Cloud platform experience (AWS/GCP)"
        ],
        "responsibilities": [],
        "benefits": [
            "Competitive salary (70,000 - 90,000)",
            "30 days vacation",
            "Remote work flexibility",
            "Learning budget"
        ],
        "application_url": "https://techcorp.com/careers/python-dev",
        "application_deadline": null,
        "posted_date": null
    })
}

#[derive(Debug, Clone, Default)]
pub struct MockConnector;

impl MockConnector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl JobExtractor for MockConnector {
    async fn extract(&self, _text: &str) -> Result<RawExtraction, ConnectorError> {
        Ok(RawExtraction {
            fields: mock_fields(),
            model: MOCK_MODEL.to_string(),
            usage: UsageInfo {
                input_tokens: 100,
                output_tokens: 200,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_is_deterministic_across_calls() {
        let connector = MockConnector::new();
        let first = connector.extract("anything").await.unwrap();
        let second = connector.extract("something else entirely").await.unwrap();

        assert_eq!(first.fields, second.fields);
        assert_eq!(first.model, second.model);
        assert_eq!(first.usage, second.usage);
    }

    #[tokio::test]
    async fn test_mock_payload_parses_as_job_posting() {
        let connector = MockConnector::new();
        let raw = connector.extract("anything").await.unwrap();

        let job: crate::models::job::JobPosting = serde_json::from_value(raw.fields).unwrap();
        assert_eq!(job.job_title, "Senior Python Developer");
        assert_eq!(job.company, "TechCorp");
        assert_eq!(job.requirements.len(), 4);
        assert!(job.responsibilities.is_empty());
    }
}

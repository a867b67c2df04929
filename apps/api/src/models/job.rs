//! Structured job-posting domain model.
//!
//! Field names and enum wire values match the tool schema in
//! `connectors::prompts` exactly — the mapping step does no fuzzy
//! reconciliation, so any drift here breaks extraction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

/// Remote/hybrid/on-site work arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkLocation {
    Remote,
    Hybrid,
    OnSite,
}

/// Type of employment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Temporary,
    Internship,
    Freelance,
}

/// Required experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

/// Salary range as stated in the posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// ISO 4217 currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "EUR".to_string()
}

/// Provider token accounting, passed through for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageInfo {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Structured job posting extracted from free text.
///
/// `job_title` and `company` are required; everything else is optional
/// because the source text may simply not mention it. Deserialization
/// fails on a missing required field or an out-of-enum value — that is
/// the validation step, nothing downstream re-checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_title: String,
    pub company: String,

    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub work_location: Option<WorkLocation>,
    #[serde(default)]
    pub employment_type: Option<EmploymentType>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub salary: Option<SalaryRange>,

    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub nice_to_have: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,

    #[serde(default)]
    pub application_url: Option<Url>,
    /// YYYY-MM-DD, when the posting states one.
    #[serde(default)]
    pub application_deadline: Option<NaiveDate>,
    #[serde(default)]
    pub posted_date: Option<NaiveDate>,
}

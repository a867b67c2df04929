//! Confidence scoring for extraction results.
//!
//! Confidence is always recomputed from the fields the provider actually
//! populated, never taken from the provider itself. Required fields weigh
//! more than optional ones; the score is the normalized weighted sum,
//! so a fully populated posting scores exactly 1.0.

use crate::models::job::JobPosting;

const REQUIRED_FIELD_WEIGHT: f32 = 3.0;
const OPTIONAL_FIELD_WEIGHT: f32 = 1.0;

/// The two required fields plus the nine optional fields that count
/// toward the score (list fields count when non-empty; application URL
/// and dates are metadata and do not count).
const REQUIRED_FIELDS: f32 = 2.0;
const OPTIONAL_FIELDS: f32 = 9.0;

/// Derives a confidence score in [0, 1] from the populated-field set.
pub fn score(job: &JobPosting) -> f32 {
    // Required fields are always present after validation, but count them
    // from the actual data so the formula stays honest.
    let required_populated = [!job.job_title.is_empty(), !job.company.is_empty()]
        .into_iter()
        .filter(|&p| p)
        .count() as f32;

    let optional_populated = [
        job.location.is_some(),
        job.work_location.is_some(),
        job.employment_type.is_some(),
        job.experience_level.is_some(),
        job.salary.is_some(),
        !job.requirements.is_empty(),
        !job.nice_to_have.is_empty(),
        !job.responsibilities.is_empty(),
        !job.benefits.is_empty(),
    ]
    .into_iter()
    .filter(|&p| p)
    .count() as f32;

    let max = REQUIRED_FIELDS * REQUIRED_FIELD_WEIGHT + OPTIONAL_FIELDS * OPTIONAL_FIELD_WEIGHT;
    let sum =
        required_populated * REQUIRED_FIELD_WEIGHT + optional_populated * OPTIONAL_FIELD_WEIGHT;

    (sum / max).clamp(0.0, 1.0)
}

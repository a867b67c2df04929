// Prompt text and tool schema for job-posting extraction.
// The schema must mirror `models::job::JobPosting` field-for-field: the
// mapping step does no fuzzy reconciliation.

use serde_json::{json, Value};

/// Name of the extraction tool the model is forced to call.
pub const EXTRACTION_TOOL_NAME: &str = "extract_job_posting";

/// User-message preamble. The posting text is appended after it.
pub const EXTRACTION_INSTRUCTION: &str = "Extract the job posting information from the \
    following text. Be thorough in extracting all mentioned skills, requirements, \
    and benefits.";

/// Builds the tool specification sent with every extraction call.
pub fn job_extraction_tool() -> Value {
    json!({
        "name": EXTRACTION_TOOL_NAME,
        "description": "Extract structured job posting information from text",
        "input_schema": {
            "type": "object",
            "properties": {
                "job_title": {"type": "string", "description": "Job title/position"},
                "company": {"type": "string", "description": "Company name"},
                "location": {
                    "type": ["string", "null"],
                    "description": "Location (city, state, country)"
                },
                "work_location": {
                    "type": ["string", "null"],
                    "enum": ["remote", "hybrid", "on_site", null],
                    "description": "Remote/hybrid/on-site work arrangement"
                },
                "employment_type": {
                    "type": ["string", "null"],
                    "enum": [
                        "full_time",
                        "part_time",
                        "contract",
                        "temporary",
                        "internship",
                        "freelance",
                        null
                    ],
                    "description": "Type of employment"
                },
                "experience_level": {
                    "type": ["string", "null"],
                    "enum": ["entry", "mid", "senior", "lead", null],
                    "description": "Required experience level"
                },
                "salary": {
                    "type": ["object", "null"],
                    "properties": {
                        "min": {"type": ["integer", "null"]},
                        "max": {"type": ["integer", "null"]},
                        "currency": {"type": "string", "default": "EUR"}
                    },
                    "description": "Salary range information"
                },
                "requirements": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Required skills/qualifications"
                },
                "nice_to_have": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Preferred/nice-to-have skills"
                },
                "responsibilities": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Key job responsibilities"
                },
                "benefits": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Benefits offered"
                },
                "application_url": {
                    "type": ["string", "null"],
                    "description": "URL to apply"
                },
                "application_deadline": {
                    "type": ["string", "null"],
                    "description": "Deadline in YYYY-MM-DD format"
                },
                "posted_date": {
                    "type": ["string", "null"],
                    "description": "Posting date in YYYY-MM-DD format"
                }
            },
            "required": ["job_title", "company"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_name_matches_schema() {
        let tool = job_extraction_tool();
        assert_eq!(tool["name"], EXTRACTION_TOOL_NAME);
    }

    #[test]
    fn test_required_fields_are_title_and_company() {
        let tool = job_extraction_tool();
        let required = tool["input_schema"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 2);
        assert!(required.contains(&serde_json::json!("job_title")));
        assert!(required.contains(&serde_json::json!("company")));
    }

    #[test]
    fn test_employment_type_enum_matches_model_wire_values() {
        let tool = job_extraction_tool();
        let values = tool["input_schema"]["properties"]["employment_type"]["enum"]
            .as_array()
            .unwrap();
        for value in values.iter().filter(|v| !v.is_null()) {
            // Every schema value must round-trip through the model enum.
            let parsed: Result<crate::models::job::EmploymentType, _> =
                serde_json::from_value(value.clone());
            assert!(parsed.is_ok(), "schema value {value} not accepted by model");
        }
    }

    #[test]
    fn test_schema_covers_every_model_field() {
        let tool = job_extraction_tool();
        let properties = tool["input_schema"]["properties"].as_object().unwrap();
        for field in [
            "job_title",
            "company",
            "location",
            "work_location",
            "employment_type",
            "experience_level",
            "salary",
            "requirements",
            "nice_to_have",
            "responsibilities",
            "benefits",
            "application_url",
            "application_deadline",
            "posted_date",
        ] {
            assert!(properties.contains_key(field), "schema missing {field}");
        }
    }
}

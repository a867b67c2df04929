//! Validated extraction request.
//!
//! Validation happens once, at construction. Everything downstream — the
//! service, the connectors — takes an `ExtractionRequest` and trusts it.

use thiserror::Error;

/// Hard cap on posting length. Anything longer would burn tokens without
/// improving extraction, so it is rejected up front.
pub const MAX_TEXT_CHARS: usize = 50_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("text cannot be empty or contain only whitespace")]
    EmptyText,

    #[error("text too long ({len} chars, maximum is {MAX_TEXT_CHARS})")]
    TextTooLong { len: usize },
}

/// A job-posting text that has passed input validation.
///
/// The field is private so the invariant (non-empty, bounded) cannot be
/// broken after construction.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    text: String,
}

impl ExtractionRequest {
    pub fn new(text: String) -> Result<Self, RequestError> {
        if text.trim().is_empty() {
            return Err(RequestError::EmptyText);
        }
        if text.len() > MAX_TEXT_CHARS {
            return Err(RequestError::TextTooLong { len: text.len() });
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_text_is_accepted() {
        let request = ExtractionRequest::new("Senior Rust Engineer at Acme".to_string()).unwrap();
        assert_eq!(request.text(), "Senior Rust Engineer at Acme");
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert_eq!(
            ExtractionRequest::new(String::new()).unwrap_err(),
            RequestError::EmptyText
        );
    }

    #[test]
    fn test_whitespace_only_text_is_rejected() {
        assert_eq!(
            ExtractionRequest::new("   \n\t  ".to_string()).unwrap_err(),
            RequestError::EmptyText
        );
    }

    #[test]
    fn test_over_limit_text_is_rejected() {
        let text = "x".repeat(MAX_TEXT_CHARS + 1);
        assert_eq!(
            ExtractionRequest::new(text).unwrap_err(),
            RequestError::TextTooLong {
                len: MAX_TEXT_CHARS + 1
            }
        );
    }

    #[test]
    fn test_text_at_limit_is_accepted() {
        let text = "x".repeat(MAX_TEXT_CHARS);
        assert!(ExtractionRequest::new(text).is_ok());
    }

    #[test]
    fn test_original_text_is_preserved_verbatim() {
        let text = "  Senior Rust Engineer\n  Acme GmbH  ".to_string();
        let request = ExtractionRequest::new(text.clone()).unwrap();
        assert_eq!(request.text(), text);
    }
}

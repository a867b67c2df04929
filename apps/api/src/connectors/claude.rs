//! Live Claude connector.
//!
//! Wraps the Anthropic Messages API with the tool-use protocol: every
//! call carries the `extract_job_posting` tool and forces the model to
//! answer through it, so the response is structured arguments rather
//! than free text. One bounded call per request — no retries.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::connectors::prompts::{
    job_extraction_tool, EXTRACTION_INSTRUCTION, EXTRACTION_TOOL_NAME,
};
use crate::connectors::{ConnectorError, JobExtractor, RawExtraction};
use crate::models::job::UsageInfo;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    tools: Vec<Value>,
    tool_choice: ToolChoice<'a>,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct ToolChoice<'a> {
    #[serde(rename = "type")]
    choice_type: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    model: String,
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    /// Tool-call arguments, present on `tool_use` blocks.
    input: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Connector performing real network calls to the Anthropic API.
#[derive(Clone)]
pub struct ClaudeConnector {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    timeout_secs: f64,
}

impl ClaudeConnector {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let api_key = config
            .anthropic_api_key
            .clone()
            .ok_or_else(|| anyhow::anyhow!("ANTHROPIC_API_KEY is required for the live connector"))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs_f64(config.api_timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: ANTHROPIC_API_URL.to_string(),
            api_key,
            model: config.claude_model.clone(),
            max_tokens: config.max_tokens,
            timeout_secs: config.api_timeout_secs,
        })
    }

    /// Point the connector at a local server standing in for the API.
    #[cfg(test)]
    fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn map_transport_error(&self, error: reqwest::Error) -> ConnectorError {
        if error.is_timeout() {
            ConnectorError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            ConnectorError::Http(error)
        }
    }

    /// Classifies a failure while reading or decoding the response body.
    /// The client's total timeout also covers body read, so the deadline
    /// can fire here; only genuine decode failures are malformed.
    fn map_body_error(&self, error: reqwest::Error) -> ConnectorError {
        if error.is_timeout() {
            self.map_transport_error(error)
        } else {
            ConnectorError::MalformedResponse(error.to_string())
        }
    }
}

/// Classifies a non-success provider status. The body is Anthropic's
/// `{"error": {"message": ...}}` envelope when the API produced it.
fn map_status_error(status: StatusCode, body: &str) -> ConnectorError {
    let message = serde_json::from_str::<AnthropicError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ConnectorError::Auth {
            status: status.as_u16(),
        },
        _ => ConnectorError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

/// Pulls the tool-call arguments out of a parsed response. The model may
/// emit other block kinds (text, thinking) around the tool_use block.
fn tool_input(response: &MessagesResponse) -> Result<Value, ConnectorError> {
    let block = response
        .content
        .iter()
        .find(|b| b.block_type == "tool_use")
        .ok_or_else(|| {
            ConnectorError::MalformedResponse("no tool_use block in response".to_string())
        })?;

    match &block.input {
        Some(input) if input.is_object() => Ok(input.clone()),
        Some(input) => Err(ConnectorError::MalformedResponse(format!(
            "tool input is not an object: {input}"
        ))),
        None => Err(ConnectorError::MalformedResponse(
            "tool_use block has no input".to_string(),
        )),
    }
}

#[async_trait::async_trait]
impl JobExtractor for ClaudeConnector {
    async fn extract(&self, text: &str) -> Result<RawExtraction, ConnectorError> {
        let request_body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            tools: vec![job_extraction_tool()],
            tool_choice: ToolChoice {
                choice_type: "tool",
                name: EXTRACTION_TOOL_NAME,
            },
            messages: vec![Message {
                role: "user",
                content: format!("{EXTRACTION_INSTRUCTION}\n\n{text}"),
            }],
        };

        let response = self
            .client
            .post(self.base_url.as_str())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &body));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| self.map_body_error(e))?;

        debug!(
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            model = %parsed.model,
            "extraction call succeeded"
        );

        let fields = tool_input(&parsed)?;

        Ok(RawExtraction {
            fields,
            model: parsed.model,
            usage: UsageInfo {
                input_tokens: parsed.usage.input_tokens,
                output_tokens: parsed.usage.output_tokens,
            },
        })
    }
}

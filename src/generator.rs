use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::prompt::GenerationPayload;

/// Boundary between the pure request pipeline and the hosted model. Handlers
/// only see this trait, so the envelope contract is testable without a live
/// AWS dependency.
#[async_trait]
pub trait BlogGenerator: Send + Sync {
    async fn generate(&self, payload: &GenerationPayload) -> Result<String>;
}

/// Production generator invoking a Bedrock model with the configured
/// guardrail bound to every call. Whether the guardrail intercepted the
/// prompt is invisible at this layer: a blocked request still resolves to
/// the refusal text the service put in the content block.
pub struct BedrockGenerator {
    client: Client,
    model_id: String,
    guardrail_identifier: String,
    guardrail_version: String,
}

impl BedrockGenerator {
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        BedrockGenerator {
            client: Client::new(&sdk_config),
            model_id: config.model_id.clone(),
            guardrail_identifier: config.guardrail_identifier.clone(),
            guardrail_version: config.guardrail_version.clone(),
        }
    }
}

#[async_trait]
impl BlogGenerator for BedrockGenerator {
    #[tracing::instrument(level = "info", skip(self, payload))]
    async fn generate(&self, payload: &GenerationPayload) -> Result<String> {
        let body = serde_json::to_vec(payload)?;
        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .guardrail_identifier(&self.guardrail_identifier)
            .guardrail_version(&self.guardrail_version)
            .send()
            .await
            .map_err(|err| anyhow!("Model invocation failed: {}", DisplayErrorContext(err)))?;

        extract_blog_text(&response.body.into_inner())
    }
}

// Nova returns the generated text (or the guardrail refusal) at
// output.message.content[0].text.
fn extract_blog_text(raw: &[u8]) -> Result<String> {
    let response: ModelResponse =
        serde_json::from_slice(raw).context("Malformed model response body")?;
    let block = response
        .output
        .message
        .content
        .into_iter()
        .next()
        .context("Model response contained no content blocks")?;
    Ok(block.text)
}

#[derive(Deserialize, Debug)]
struct ModelResponse {
    output: ModelOutput,
}

#[derive(Deserialize, Debug)]
struct ModelOutput {
    message: ModelMessage,
}

#[derive(Deserialize, Debug)]
struct ModelMessage {
    content: Vec<ModelContent>,
}

#[derive(Deserialize, Debug)]
struct ModelContent {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_the_first_content_block() {
        let raw = br#"{
            "output": {
                "message": {
                    "role": "assistant",
                    "content": [
                        {"text": "<h1>First</h1>"},
                        {"text": "<p>ignored</p>"}
                    ]
                }
            },
            "stopReason": "end_turn",
            "usage": {"inputTokens": 42, "outputTokens": 99}
        }"#;
        assert_eq!(extract_blog_text(raw).unwrap(), "<h1>First</h1>");
    }

    #[test]
    fn empty_content_list_is_an_error() {
        let raw = br#"{"output": {"message": {"content": []}}}"#;
        let err = extract_blog_text(raw).unwrap_err();
        assert!(err.to_string().contains("no content blocks"));
    }

    #[test]
    fn non_json_body_is_an_error() {
        let err = extract_blog_text(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(err.to_string().contains("Malformed model response body"));
    }

    #[test]
    fn missing_output_path_is_an_error() {
        let raw = br#"{"result": "nothing like the expected shape"}"#;
        assert!(extract_blog_text(raw).is_err());
    }
}

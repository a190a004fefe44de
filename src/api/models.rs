use serde::{Deserialize, Serialize};

use crate::prompt::{DEFAULT_TONE, DEFAULT_TOPIC};

/// Inbound request body. Both fields are optional; absent keys fall back to
/// the stock topic and tone instead of failing the request.
#[derive(Deserialize, Debug)]
pub struct BlogRequest {
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_tone")]
    pub tone: String,
}

impl BlogRequest {
    /// An absent body counts as an empty object; a malformed one is an error.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let body = if body.is_empty() {
            b"{}".as_slice()
        } else {
            body
        };
        serde_json::from_slice(body)
    }
}

fn default_topic() -> String {
    DEFAULT_TOPIC.to_string()
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

#[derive(Serialize, Debug)]
pub struct BlogResponse {
    pub blog_post: String,
}

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

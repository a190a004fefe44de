use serde::Serialize;

pub const DEFAULT_TOPIC: &str = "Cloud Computing";
pub const DEFAULT_TONE: &str = "Professional";

/// Token cap keeps a single post at roughly 200 words of output.
const MAX_NEW_TOKENS: u32 = 300;
const TEMPERATURE: f64 = 0.7;

const SYSTEM_PROMPT: &str = "You are an expert technical content writer. \
     Output HTML formatted content directly without markdown code blocks.";

fn user_message(topic: &str, tone: &str) -> String {
    format!(
        "Write a short blog post about: \"{topic}\".\n\
         Tone: {tone}\n\
         Format: Use HTML tags (<h1>, <h2>, <p>, <ul>, <li>) for structure. \
         Do not include <html> or <body> tags.\n\
         Length: Short and concise, approximately 100 words.\n\
         Include a catchy title in an <h1> tag."
    )
}

#[derive(Serialize, Debug)]
pub struct InferenceConfig {
    pub max_new_tokens: u32,
    pub temperature: f64,
}

#[derive(Serialize, Debug)]
pub struct SystemBlock {
    pub text: String,
}

#[derive(Serialize, Debug)]
pub struct ContentBlock {
    pub text: String,
}

#[derive(Serialize, Debug)]
pub struct Message {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

/// Request body for a single model invocation. Built fresh per request and
/// fully determined by the topic and tone.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerationPayload {
    pub inference_config: InferenceConfig,
    pub system: Vec<SystemBlock>,
    pub messages: Vec<Message>,
}

impl GenerationPayload {
    pub fn new(topic: &str, tone: &str) -> Self {
        GenerationPayload {
            inference_config: InferenceConfig {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
            },
            system: vec![SystemBlock {
                text: SYSTEM_PROMPT.to_string(),
            }],
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![ContentBlock {
                    text: user_message(topic, tone),
                }],
            }],
        }
    }
}

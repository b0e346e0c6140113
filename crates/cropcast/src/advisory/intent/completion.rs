use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::super::domain::{ConversationTurn, Speaker};
use super::HISTORY_WINDOW;
use crate::config::CompletionConfig;

/// Fixed system instruction sent ahead of every completion request.
pub const SYSTEM_PROMPT: &str = "You are an expert agricultural advisor and farming consultant \
with decades of experience in sustainable agriculture.\n\n\
Your expertise includes:\n\
- Crop cultivation and variety selection\n\
- Soil health and fertility management\n\
- Integrated pest and disease management\n\
- Water management and irrigation systems\n\
- Sustainable farming practices\n\
- Agricultural economics and market trends\n\
- Climate-smart agriculture\n\
- Precision farming technologies\n\n\
Provide detailed, practical, and actionable farming advice. Always include:\n\
- Specific recommendations with measurements when possible\n\
- Regional considerations and timing\n\
- Sustainable and environmentally friendly practices\n\
- Cost-effective solutions for small and large farms\n\
- Safety considerations for pesticide and fertilizer use\n\n\
Format your responses with clear headings, bullet points, and emojis for easy reading.\n\
Prioritize evidence-based recommendations and mention when farmers should consult local \
extension services.";

/// One message of a completion transcript in the wire role/content shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Failure calling the external text service. Every variant is recovered
/// locally by the intent router's keyword fallback.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion service is not configured")]
    NotConfigured,
    #[error("completion request failed: {0}")]
    Http(String),
    #[error("completion service returned status {status}: {body}")]
    Service { status: u16, body: String },
    #[error("completion response was malformed: {0}")]
    MalformedResponse(String),
}

/// Boundary to an external text-completion backend.
pub trait CompletionGateway: Send + Sync {
    fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
        max_tokens: u32,
        temperature: f64,
    ) -> Result<String, CompletionError>;
}

/// Blocking client for an OpenAI-compatible `/chat/completions` endpoint.
/// Every request runs under the configured timeout so a stalled backend can
/// only delay, never wedge, the calling request.
pub struct OpenAiCompletionClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiCompletionClient {
    pub fn from_config(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(CompletionError::NotConfigured)?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| CompletionError::Http(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
        })
    }
}

impl CompletionGateway for OpenAiCompletionClient {
    fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
        max_tokens: u32,
        temperature: f64,
    ) -> Result<String, CompletionError> {
        let mut transcript = Vec::with_capacity(messages.len() + 1);
        transcript.push(ChatMessage {
            role: "system".to_string(),
            content: system_prompt.to_string(),
        });
        transcript.extend(messages.iter().cloned());

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: transcript,
            max_tokens,
            temperature,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .map_err(|err| CompletionError::Http(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| String::new());
            return Err(CompletionError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatCompletionResponse = response
            .json()
            .map_err(|err| CompletionError::MalformedResponse(err.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::MalformedResponse("empty choices".to_string()))
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatMessage,
}

/// Build the completion transcript: the trailing window of conversation
/// turns followed by the current message.
pub(crate) fn build_transcript(history: &[ConversationTurn], message: &str) -> Vec<ChatMessage> {
    let skip = history.len().saturating_sub(HISTORY_WINDOW);
    let mut transcript: Vec<ChatMessage> = history[skip..]
        .iter()
        .map(|turn| ChatMessage {
            role: match turn.speaker {
                Speaker::User => "user".to_string(),
                Speaker::Assistant => "assistant".to_string(),
            },
            content: turn.text.clone(),
        })
        .collect();

    transcript.push(ChatMessage {
        role: "user".to_string(),
        content: message.to_string(),
    });

    transcript
}

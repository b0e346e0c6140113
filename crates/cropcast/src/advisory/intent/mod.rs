pub mod completion;
mod rules;
mod templates;

pub use completion::{
    ChatMessage, CompletionError, CompletionGateway, OpenAiCompletionClient, SYSTEM_PROMPT,
};

use std::sync::Arc;

use super::domain::ConversationTurn;
use crate::config::CompletionConfig;
use tracing::warn;

/// Number of trailing conversation turns forwarded to the completion prompt.
pub const HISTORY_WINDOW: usize = 5;

/// Deterministic keyword router over the two-level topic hierarchy.
///
/// Total function: every message resolves to exactly one template, with the
/// capability-summary fallback as the terminal branch.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntentRouter;

impl IntentRouter {
    pub fn new() -> Self {
        Self
    }

    pub fn respond(&self, message: &str) -> String {
        match rules::match_template(message) {
            Some(template) => template.to_string(),
            None => templates::fallback_response(message),
        }
    }
}

/// Strategy producing one advisory response for a message plus history.
pub trait AdvisoryResponder: Send + Sync {
    fn respond(
        &self,
        message: &str,
        history: &[ConversationTurn],
    ) -> Result<String, CompletionError>;
}

/// Baseline strategy: the keyword hierarchy. Ignores history and never fails.
#[derive(Debug, Default)]
pub struct KeywordResponder {
    router: IntentRouter,
}

impl KeywordResponder {
    pub fn new() -> Self {
        Self {
            router: IntentRouter::new(),
        }
    }

    fn answer(&self, message: &str) -> String {
        self.router.respond(message)
    }
}

impl AdvisoryResponder for KeywordResponder {
    fn respond(
        &self,
        message: &str,
        _history: &[ConversationTurn],
    ) -> Result<String, CompletionError> {
        Ok(self.answer(message))
    }
}

/// Enhancement strategy delegating to an external completion backend.
pub struct CompletionResponder<C> {
    gateway: Arc<C>,
    max_tokens: u32,
    temperature: f64,
}

impl<C> CompletionResponder<C> {
    pub fn new(gateway: Arc<C>, max_tokens: u32, temperature: f64) -> Self {
        Self {
            gateway,
            max_tokens,
            temperature,
        }
    }
}

impl<C> AdvisoryResponder for CompletionResponder<C>
where
    C: CompletionGateway,
{
    fn respond(
        &self,
        message: &str,
        history: &[ConversationTurn],
    ) -> Result<String, CompletionError> {
        let transcript = completion::build_transcript(history, message);
        self.gateway
            .complete(SYSTEM_PROMPT, &transcript, self.max_tokens, self.temperature)
    }
}

/// Decorator catching any failure of the primary strategy and delegating to
/// the keyword baseline, which itself cannot fail.
pub struct FallbackResponder {
    primary: Option<Box<dyn AdvisoryResponder>>,
    baseline: KeywordResponder,
}

impl FallbackResponder {
    pub fn keyword_only() -> Self {
        Self {
            primary: None,
            baseline: KeywordResponder::new(),
        }
    }

    pub fn with_primary(primary: Box<dyn AdvisoryResponder>) -> Self {
        Self {
            primary: Some(primary),
            baseline: KeywordResponder::new(),
        }
    }

    /// Infallible response: the primary's answer when it succeeds, the
    /// keyword baseline's otherwise.
    pub fn reply(&self, message: &str, history: &[ConversationTurn]) -> String {
        if let Some(primary) = &self.primary {
            match primary.respond(message, history) {
                Ok(text) => return text,
                Err(err) => {
                    warn!(error = %err, "completion service failed, answering from keyword hierarchy");
                }
            }
        }

        self.baseline.answer(message)
    }
}

impl AdvisoryResponder for FallbackResponder {
    fn respond(
        &self,
        message: &str,
        history: &[ConversationTurn],
    ) -> Result<String, CompletionError> {
        Ok(self.reply(message, history))
    }
}

/// Chat facade guaranteeing a response for every non-empty message.
pub struct ChatService {
    responder: FallbackResponder,
}

impl ChatService {
    pub fn keyword_only() -> Self {
        Self {
            responder: FallbackResponder::keyword_only(),
        }
    }

    pub fn with_responder(responder: FallbackResponder) -> Self {
        Self { responder }
    }

    /// Build from configuration: completion-backed when a usable API key is
    /// present, keyword-only otherwise (including when the HTTP client
    /// itself cannot be constructed).
    pub fn from_config(config: &CompletionConfig) -> Self {
        if !config.is_enabled() {
            return Self::keyword_only();
        }

        match OpenAiCompletionClient::from_config(config) {
            Ok(client) => {
                let primary = CompletionResponder::new(
                    Arc::new(client),
                    config.max_tokens,
                    config.temperature,
                );
                Self::with_responder(FallbackResponder::with_primary(Box::new(primary)))
            }
            Err(err) => {
                warn!(error = %err, "completion client unavailable, chat runs keyword-only");
                Self::keyword_only()
            }
        }
    }

    pub fn reply(&self, message: &str, history: &[ConversationTurn]) -> String {
        self.responder.reply(message, history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingGateway;

    impl CompletionGateway for FailingGateway {
        fn complete(
            &self,
            _system_prompt: &str,
            _messages: &[ChatMessage],
            _max_tokens: u32,
            _temperature: f64,
        ) -> Result<String, CompletionError> {
            Err(CompletionError::Service {
                status: 503,
                body: "upstream unavailable".to_string(),
            })
        }
    }

    struct EchoGateway;

    impl CompletionGateway for EchoGateway {
        fn complete(
            &self,
            _system_prompt: &str,
            messages: &[ChatMessage],
            _max_tokens: u32,
            _temperature: f64,
        ) -> Result<String, CompletionError> {
            Ok(format!(
                "model saw {} message(s)",
                messages.len()
            ))
        }
    }

    #[test]
    fn keyword_router_is_total() {
        let router = IntentRouter::new();
        let response = router.respond("tell me about quinoa");
        assert!(response.contains("quinoa"));
        assert!(response.contains("wheat"));
    }

    #[test]
    fn completion_failure_falls_back_to_keyword_template() {
        let primary = CompletionResponder::new(Arc::new(FailingGateway), 800, 0.3);
        let service = ChatService::with_responder(FallbackResponder::with_primary(Box::new(primary)));

        let response = service.reply("corn fertilizer", &[]);
        assert!(response.contains("Corn Fertilization"));
    }

    #[test]
    fn successful_completion_wins_over_keywords() {
        let primary = CompletionResponder::new(Arc::new(EchoGateway), 800, 0.3);
        let service = ChatService::with_responder(FallbackResponder::with_primary(Box::new(primary)));

        let response = service.reply("corn fertilizer", &[]);
        assert_eq!(response, "model saw 1 message(s)");
    }
}

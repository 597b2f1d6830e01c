//! Anthropic messages adapter.
//!
//! The system prompt is a top-level `system` field rather than a turn.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::settings::ANTHROPIC_API_VERSION;
use crate::{
    ChatRequest, Envelope, ProviderAdapter, ProviderError, ProviderId, ProviderSettings, Role,
};

pub const ANTHROPIC_VERSION_HEADER: &str = "anthropic-version";

#[derive(Debug, Clone)]
pub struct AnthropicAdapter {
    settings: ProviderSettings,
    system_prompt: String,
}

impl AnthropicAdapter {
    pub fn new(settings: ProviderSettings, system_prompt: impl Into<String>) -> Self {
        Self {
            settings,
            system_prompt: system_prompt.into(),
        }
    }
}

impl ProviderAdapter for AnthropicAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Anthropic
    }

    fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    fn build_envelope(
        &self,
        request: &ChatRequest,
        secret: &str,
    ) -> Result<Envelope, ProviderError> {
        let messages = request
            .turns()
            .map(|(role, content)| AnthropicApiMessage {
                role: match role {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                },
                content,
            })
            .collect();

        let api_request = AnthropicApiRequest {
            model: &self.settings.model,
            max_tokens: self.settings.generation.max_tokens,
            messages,
            system: &self.system_prompt,
            temperature: self.settings.generation.temperature,
        };
        let body = serde_json::to_value(&api_request)
            .map_err(|err| ProviderError::invalid_request(err.to_string()))?;

        Ok(Envelope::new(self.settings.endpoint("messages"), body)
            .with_bearer_auth(secret)
            .with_header(ANTHROPIC_VERSION_HEADER, ANTHROPIC_API_VERSION))
    }

    fn parse_response(&self, body: &str) -> Option<String> {
        let parsed = serde_json::from_str::<AnthropicApiResponse>(body).ok()?;
        let first = parsed.content.into_iter().next()?;
        serde_json::from_value::<AnthropicApiContentBlock>(first)
            .ok()?
            .text
    }
}

#[derive(Debug, Serialize)]
struct AnthropicApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<AnthropicApiMessage<'a>>,
    system: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Debug, Serialize)]
struct AnthropicApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnthropicApiResponse {
    #[serde(default)]
    content: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct AnthropicApiContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::AnthropicAdapter;
    use crate::{
        ChatRequest, ConversationTurn, DEFAULT_SYSTEM_PROMPT, ProviderAdapter, ProviderId,
        ProviderSettings,
    };

    fn adapter() -> AnthropicAdapter {
        AnthropicAdapter::new(
            ProviderSettings::defaults_for(ProviderId::Anthropic),
            DEFAULT_SYSTEM_PROMPT,
        )
    }

    #[test]
    fn envelope_places_system_prompt_outside_messages() {
        let request = ChatRequest::new(
            "how are you?",
            vec![
                ConversationTurn::user("hi"),
                ConversationTurn::assistant("hello"),
            ],
        );
        let envelope = adapter()
            .build_envelope(&request, "sk-ant-test")
            .expect("envelope should build");

        assert_eq!(envelope.url, "https://api.anthropic.com/v1/messages");
        assert_eq!(envelope.header("authorization"), Some("Bearer sk-ant-test"));
        assert_eq!(envelope.header("anthropic-version"), Some("2023-06-01"));
        assert_eq!(
            envelope.body,
            json!({
                "model": "claude-3-5-haiku-20241022",
                "max_tokens": 1000,
                "messages": [
                    {"role": "user", "content": "hi"},
                    {"role": "assistant", "content": "hello"},
                    {"role": "user", "content": "how are you?"},
                ],
                "system": DEFAULT_SYSTEM_PROMPT,
            })
        );
    }

    #[test]
    fn parse_response_reads_first_content_block() {
        let body = r#"{"id":"msg_1","type":"message","content":[{"type":"text","text":"Doing great."}]}"#;
        assert_eq!(
            adapter().parse_response(body).as_deref(),
            Some("Doing great.")
        );
    }

    #[test]
    fn parse_response_returns_none_for_missing_path() {
        let adapter = adapter();
        assert_eq!(adapter.parse_response(r#"{"content":[]}"#), None);
        assert_eq!(
            adapter.parse_response(r#"{"content":[{"type":"tool_use"}]}"#),
            None
        );
        assert_eq!(adapter.parse_response("not json"), None);
    }
}

//! OpenAI chat-completions adapter.
//!
//! The system prompt leads the flat `messages` list and the key travels as a bearer token.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    ChatRequest, Envelope, ProviderAdapter, ProviderError, ProviderId, ProviderSettings, Role,
};

#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    settings: ProviderSettings,
    system_prompt: String,
}

impl OpenAiAdapter {
    pub fn new(settings: ProviderSettings, system_prompt: impl Into<String>) -> Self {
        Self {
            settings,
            system_prompt: system_prompt.into(),
        }
    }
}

impl ProviderAdapter for OpenAiAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::OpenAi
    }

    fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    fn build_envelope(
        &self,
        request: &ChatRequest,
        secret: &str,
    ) -> Result<Envelope, ProviderError> {
        let mut messages = Vec::with_capacity(request.turn_count() + 1);
        messages.push(OpenAiApiMessage {
            role: "system",
            content: &self.system_prompt,
        });
        messages.extend(request.turns().map(|(role, content)| OpenAiApiMessage {
            role: role_name(role),
            content,
        }));

        let api_request = OpenAiApiRequest {
            model: &self.settings.model,
            messages,
            max_tokens: self.settings.generation.max_tokens,
            temperature: self.settings.generation.temperature,
        };
        let body = serde_json::to_value(&api_request)
            .map_err(|err| ProviderError::invalid_request(err.to_string()))?;

        Ok(Envelope::new(self.settings.endpoint("chat/completions"), body).with_bearer_auth(secret))
    }

    fn parse_response(&self, body: &str) -> Option<String> {
        let parsed = serde_json::from_str::<OpenAiApiResponse>(body).ok()?;
        let first = parsed.choices.into_iter().next()?;
        serde_json::from_value::<OpenAiApiChoice>(first)
            .ok()?
            .message?
            .content
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

#[derive(Debug, Serialize)]
struct OpenAiApiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiApiMessage<'a>>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Debug, Serialize)]
struct OpenAiApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct OpenAiApiResponse {
    #[serde(default)]
    choices: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct OpenAiApiChoice {
    #[serde(default)]
    message: Option<OpenAiApiAssistantMessage>,
}

#[derive(Debug, Deserialize)]
struct OpenAiApiAssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::OpenAiAdapter;
    use crate::{
        ChatRequest, ConversationTurn, DEFAULT_SYSTEM_PROMPT, ProviderAdapter, ProviderId,
        ProviderSettings,
    };

    fn adapter() -> OpenAiAdapter {
        OpenAiAdapter::new(
            ProviderSettings::defaults_for(ProviderId::OpenAi),
            DEFAULT_SYSTEM_PROMPT,
        )
    }

    #[test]
    fn envelope_leads_with_system_prompt_and_ends_with_new_message() {
        let request = ChatRequest::new("how are you?", vec![ConversationTurn::user("hi")]);
        let envelope = adapter()
            .build_envelope(&request, "sk-test")
            .expect("envelope should build");

        assert_eq!(envelope.url, "https://api.openai.com/v1/chat/completions");
        assert_eq!(envelope.header("Authorization"), Some("Bearer sk-test"));
        assert_eq!(
            envelope.body,
            json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": DEFAULT_SYSTEM_PROMPT},
                    {"role": "user", "content": "hi"},
                    {"role": "user", "content": "how are you?"},
                ],
                "max_tokens": 1000,
                "temperature": 0.7,
            })
        );
    }

    #[test]
    fn assistant_turns_keep_assistant_role() {
        let request = ChatRequest::new(
            "and now?",
            vec![
                ConversationTurn::user("hi"),
                ConversationTurn::assistant("hello!"),
            ],
        );
        let envelope = adapter()
            .build_envelope(&request, "sk-test")
            .expect("envelope should build");

        assert_eq!(envelope.body["messages"][2]["role"], "assistant");
        assert_eq!(envelope.body["messages"][2]["content"], "hello!");
    }

    #[test]
    fn parse_response_reads_first_choice_content() {
        let body = r#"{"id":"chatcmpl-1","choices":[{"index":0,"message":{"role":"assistant","content":"I'm well."}},{"message":{"content":"ignored"}}]}"#;
        assert_eq!(adapter().parse_response(body).as_deref(), Some("I'm well."));
    }

    #[test]
    fn parse_response_returns_none_for_missing_path() {
        let adapter = adapter();
        assert_eq!(adapter.parse_response(r#"{"choices":[]}"#), None);
        assert_eq!(adapter.parse_response(r#"{"choices":[{"message":{}}]}"#), None);
        assert_eq!(
            adapter.parse_response(r#"{"choices":[{"message":{"content":null}}]}"#),
            None
        );
        assert_eq!(adapter.parse_response("{}"), None);
    }
}

use std::sync::Mutex;
use std::time::Duration;

use pprovider::{
    ChatRequest, ConversationTurn, DEFAULT_SYSTEM_PROMPT, Envelope, GatewayHooks, HttpTransport,
    NoopGatewayHooks, ProviderError, ProviderErrorKind, ProviderFuture, ProviderId,
    ProviderRegistry, RawResponse, dispatch,
};
use serde_json::Value;

#[derive(Debug)]
struct FakeTransport {
    reply: Result<RawResponse, ProviderError>,
    captured: Mutex<Vec<Envelope>>,
}

impl FakeTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(RawResponse::new(status, body)),
            captured: Mutex::new(Vec::new()),
        }
    }

    fn failing(error: ProviderError) -> Self {
        Self {
            reply: Err(error),
            captured: Mutex::new(Vec::new()),
        }
    }

    fn last_envelope(&self) -> Envelope {
        self.captured
            .lock()
            .expect("capture lock")
            .last()
            .cloned()
            .expect("an envelope should be captured")
    }
}

impl HttpTransport for FakeTransport {
    fn post<'a>(
        &'a self,
        envelope: &'a Envelope,
    ) -> ProviderFuture<'a, Result<RawResponse, ProviderError>> {
        Box::pin(async move {
            self.captured
                .lock()
                .expect("capture lock")
                .push(envelope.clone());
            self.reply.clone()
        })
    }
}

#[derive(Debug, Default)]
struct RecordingHooks {
    events: Mutex<Vec<String>>,
}

impl GatewayHooks for RecordingHooks {
    fn on_dispatch_start(&self, provider: ProviderId, turns: usize) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("start:{provider}:{turns}"));
    }

    fn on_success(&self, provider: ProviderId, degraded: bool, _elapsed: Duration) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("success:{provider}:{degraded}"));
    }

    fn on_failure(&self, provider: ProviderId, error: &ProviderError, _elapsed: Duration) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("failure:{provider}:{:?}", error.kind));
    }
}

fn sample_request() -> ChatRequest {
    ChatRequest::new(
        "fourth",
        vec![
            ConversationTurn::user("first"),
            ConversationTurn::assistant("second"),
            ConversationTurn::user("third"),
        ],
    )
}

/// Turn texts in wire order, skipping any system entry.
fn wire_turn_texts(provider: ProviderId, body: &Value) -> Vec<String> {
    match provider {
        ProviderId::OpenAi => body["messages"]
            .as_array()
            .expect("messages array")
            .iter()
            .filter(|message| message["role"] != "system")
            .map(|message| message["content"].as_str().unwrap_or_default().to_string())
            .collect(),
        ProviderId::Anthropic => body["messages"]
            .as_array()
            .expect("messages array")
            .iter()
            .map(|message| message["content"].as_str().unwrap_or_default().to_string())
            .collect(),
        ProviderId::Gemini => body["contents"]
            .as_array()
            .expect("contents array")
            .iter()
            .map(|content| {
                content["parts"][0]["text"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string()
            })
            .collect(),
    }
}

#[tokio::test]
async fn every_provider_keeps_history_order_and_appends_new_message_last() {
    let registry = ProviderRegistry::with_defaults(DEFAULT_SYSTEM_PROMPT);

    for provider in ProviderId::ALL {
        let adapter = registry.get(provider).expect("adapter registered");
        let transport = FakeTransport::replying(200, "{}");

        dispatch(
            adapter.as_ref(),
            &transport,
            &NoopGatewayHooks,
            &sample_request(),
            "sk-test",
        )
        .await
        .expect("dispatch should succeed");

        let envelope = transport.last_envelope();
        assert_eq!(
            wire_turn_texts(provider, &envelope.body),
            vec!["first", "second", "third", "fourth"],
            "{provider}"
        );
    }
}

#[tokio::test]
async fn system_prompt_placement_differs_per_provider() {
    let registry = ProviderRegistry::with_defaults("Be brief.");

    let openai = FakeTransport::replying(200, "{}");
    let adapter = registry.get(ProviderId::OpenAi).expect("openai");
    dispatch(adapter.as_ref(), &openai, &NoopGatewayHooks, &sample_request(), "k")
        .await
        .expect("dispatch should succeed");
    let body = openai.last_envelope().body;
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], "Be brief.");

    let anthropic = FakeTransport::replying(200, "{}");
    let adapter = registry.get(ProviderId::Anthropic).expect("anthropic");
    dispatch(adapter.as_ref(), &anthropic, &NoopGatewayHooks, &sample_request(), "k")
        .await
        .expect("dispatch should succeed");
    let body = anthropic.last_envelope().body;
    assert_eq!(body["system"], "Be brief.");
    assert_eq!(body["messages"][0]["content"], "first");

    let gemini = FakeTransport::replying(200, "{}");
    let adapter = registry.get(ProviderId::Gemini).expect("gemini");
    dispatch(adapter.as_ref(), &gemini, &NoopGatewayHooks, &sample_request(), "k")
        .await
        .expect("dispatch should succeed");
    let body = gemini.last_envelope().body;
    assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be brief.");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "first");
}

#[tokio::test]
async fn transport_failure_is_reported_with_provider_name_and_hooks_fire() {
    let registry = ProviderRegistry::with_defaults(DEFAULT_SYSTEM_PROMPT);
    let adapter = registry.get(ProviderId::Gemini).expect("gemini");
    let transport = FakeTransport::failing(ProviderError::transport("connection refused"));
    let hooks = RecordingHooks::default();

    let error = dispatch(adapter.as_ref(), &transport, &hooks, &sample_request(), "k")
        .await
        .expect_err("transport failure should surface");

    assert_eq!(error.kind, ProviderErrorKind::Transport);
    assert_eq!(error.message, "Gemini request failed: connection refused");
    assert_eq!(
        *hooks.events.lock().expect("events lock"),
        vec!["start:gemini:4".to_string(), "failure:gemini:Transport".to_string()]
    );
}

#[tokio::test]
async fn degraded_success_is_reported_to_hooks() {
    let registry = ProviderRegistry::with_defaults(DEFAULT_SYSTEM_PROMPT);
    let adapter = registry.get(ProviderId::Anthropic).expect("anthropic");
    let transport = FakeTransport::replying(200, r#"{"content":[]}"#);
    let hooks = RecordingHooks::default();

    let parsed = dispatch(adapter.as_ref(), &transport, &hooks, &sample_request(), "k")
        .await
        .expect("2xx should not fail");

    assert!(parsed.degraded);
    assert_eq!(parsed.text, "No response received");
    assert_eq!(
        *hooks.events.lock().expect("events lock"),
        vec![
            "start:anthropic:4".to_string(),
            "success:anthropic:true".to_string()
        ]
    );
}

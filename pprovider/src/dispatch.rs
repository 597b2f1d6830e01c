//! Single linear pass: build envelope, send it, normalize the reply.

use std::time::Instant;

use crate::{
    ChatRequest, GatewayHooks, HttpTransport, ParsedResponse, ProviderAdapter, ProviderError,
    normalize_response, normalize_transport_error,
};

pub async fn dispatch(
    adapter: &dyn ProviderAdapter,
    transport: &dyn HttpTransport,
    hooks: &dyn GatewayHooks,
    request: &ChatRequest,
    secret: &str,
) -> Result<ParsedResponse, ProviderError> {
    let provider = adapter.id();
    let started = Instant::now();
    hooks.on_dispatch_start(provider, request.turn_count());

    let outcome = send_envelope(adapter, transport, request, secret).await;
    let elapsed = started.elapsed();

    match &outcome {
        Ok(parsed) => {
            tracing::info!(
                provider = %provider,
                degraded = parsed.degraded,
                elapsed_ms = elapsed.as_millis() as u64,
                "chat request succeeded"
            );
            hooks.on_success(provider, parsed.degraded, elapsed);
        }
        Err(error) => {
            tracing::warn!(
                provider = %provider,
                error_kind = ?error.kind,
                status = error.status,
                elapsed_ms = elapsed.as_millis() as u64,
                error = %error,
                "chat request failed"
            );
            hooks.on_failure(provider, error, elapsed);
        }
    }

    outcome
}

async fn send_envelope(
    adapter: &dyn ProviderAdapter,
    transport: &dyn HttpTransport,
    request: &ChatRequest,
    secret: &str,
) -> Result<ParsedResponse, ProviderError> {
    let envelope = adapter.build_envelope(request, secret)?;
    tracing::debug!(
        provider = %adapter.id(),
        endpoint = envelope.redacted_url(),
        turns = request.turn_count(),
        "dispatching chat request"
    );

    let response = transport
        .post(&envelope)
        .await
        .map_err(|error| normalize_transport_error(adapter.id(), error))?;

    normalize_response(adapter, &response)
}

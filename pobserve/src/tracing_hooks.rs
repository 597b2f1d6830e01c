//! Tracing-based observability hooks for gateway dispatches.
//!
//! ```rust
//! use pobserve::TracingObservabilityHooks;
//! use pprovider::GatewayHooks;
//!
//! fn accepts_gateway_hooks(_hooks: &dyn GatewayHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_gateway_hooks(&hooks);
//! ```

use std::time::Duration;

use pprovider::{GatewayHooks, ProviderError, ProviderId};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl GatewayHooks for TracingObservabilityHooks {
    fn on_dispatch_start(&self, provider: ProviderId, turns: usize) {
        tracing::info!(
            phase = "gateway",
            event = "dispatch_start",
            provider = %provider,
            turns
        );
    }

    fn on_success(&self, provider: ProviderId, degraded: bool, elapsed: Duration) {
        tracing::info!(
            phase = "gateway",
            event = "success",
            provider = %provider,
            degraded,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_failure(&self, provider: ProviderId, error: &ProviderError, elapsed: Duration) {
        tracing::error!(
            phase = "gateway",
            event = "failure",
            provider = %provider,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            status = error.status,
            error = %error
        );
    }
}

//! Metrics-based observability hooks for gateway dispatches.
//!
//! ```rust
//! use pobserve::MetricsObservabilityHooks;
//! use pprovider::GatewayHooks;
//!
//! fn accepts_gateway_hooks(_hooks: &dyn GatewayHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_gateway_hooks(&hooks);
//! ```

use std::time::Duration;

use pprovider::{GatewayHooks, ProviderError, ProviderId};

pub const DISPATCH_TOTAL: &str = "parley_gateway_dispatch_total";
pub const SUCCESS_TOTAL: &str = "parley_gateway_success_total";
pub const DEGRADED_TOTAL: &str = "parley_gateway_degraded_total";
pub const FAILURE_TOTAL: &str = "parley_gateway_failure_total";
pub const LATENCY_SECONDS: &str = "parley_gateway_latency_seconds";

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl GatewayHooks for MetricsObservabilityHooks {
    fn on_dispatch_start(&self, provider: ProviderId, _turns: usize) {
        metrics::counter!(DISPATCH_TOTAL, "provider" => provider.as_str()).increment(1);
    }

    fn on_success(&self, provider: ProviderId, degraded: bool, elapsed: Duration) {
        metrics::counter!(SUCCESS_TOTAL, "provider" => provider.as_str()).increment(1);
        if degraded {
            metrics::counter!(DEGRADED_TOTAL, "provider" => provider.as_str()).increment(1);
        }
        metrics::histogram!(
            LATENCY_SECONDS,
            "provider" => provider.as_str(),
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_failure(&self, provider: ProviderId, error: &ProviderError, elapsed: Duration) {
        metrics::counter!(
            FAILURE_TOTAL,
            "provider" => provider.as_str(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            LATENCY_SECONDS,
            "provider" => provider.as_str(),
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}

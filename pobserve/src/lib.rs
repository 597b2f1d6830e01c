//! Production-friendly observability hooks for gateway dispatches.
//!
//! ```rust
//! use pobserve::{MetricsObservabilityHooks, SafeGatewayHooks, TracingObservabilityHooks};
//!
//! let _hooks = SafeGatewayHooks::new(TracingObservabilityHooks);
//! let _metrics = MetricsObservabilityHooks;
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::{
    DEGRADED_TOTAL, DISPATCH_TOTAL, FAILURE_TOTAL, LATENCY_SECONDS, MetricsObservabilityHooks,
    SUCCESS_TOTAL,
};
pub use safe_hooks::SafeGatewayHooks;
pub use tracing_hooks::TracingObservabilityHooks;

pub mod prelude {
    pub use crate::{MetricsObservabilityHooks, SafeGatewayHooks, TracingObservabilityHooks};
}

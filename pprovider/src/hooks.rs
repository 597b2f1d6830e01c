//! Operational hook contracts invoked around each dispatch.

use std::time::Duration;

use crate::{ProviderError, ProviderId};

pub trait GatewayHooks: Send + Sync {
    fn on_dispatch_start(&self, _provider: ProviderId, _turns: usize) {}

    fn on_success(&self, _provider: ProviderId, _degraded: bool, _elapsed: Duration) {}

    fn on_failure(&self, _provider: ProviderId, _error: &ProviderError, _elapsed: Duration) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopGatewayHooks;

impl GatewayHooks for NoopGatewayHooks {}

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use pprovider::{GatewayHooks, ProviderError, ProviderId};

/// Runs the inner hooks and discards any panic they raise.
#[derive(Debug, Clone, Default)]
pub struct SafeGatewayHooks<H> {
    inner: H,
}

impl<H> SafeGatewayHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H> GatewayHooks for SafeGatewayHooks<H>
where
    H: GatewayHooks,
{
    fn on_dispatch_start(&self, provider: ProviderId, turns: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_dispatch_start(provider, turns)
        }));
    }

    fn on_success(&self, provider: ProviderId, degraded: bool, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_success(provider, degraded, elapsed)
        }));
    }

    fn on_failure(&self, provider: ProviderId, error: &ProviderError, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_failure(provider, error, elapsed)
        }));
    }
}

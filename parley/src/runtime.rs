//! Runtime wiring from [`GatewayConfig`] to a ready [`Gateway`].

use std::sync::Arc;

use pobserve::{MetricsObservabilityHooks, SafeGatewayHooks};
use pprovider::{GatewayHooks, HttpTransport, ProviderRegistry, ReqwestTransport};
use reqwest::Client;

use crate::{Gateway, GatewayConfig, GatewayError};

/// Builds a gateway over reqwest and reloads any persisted credential.
pub fn build_gateway(config: GatewayConfig) -> Result<Gateway, GatewayError> {
    let transport = Arc::new(ReqwestTransport::new(http_client(&config)?));
    let hooks = Arc::new(SafeGatewayHooks::new(MetricsObservabilityHooks));
    build_gateway_with(config, transport, hooks)
}

/// Same as [`build_gateway`] with caller-supplied transport and hooks.
pub fn build_gateway_with(
    config: GatewayConfig,
    transport: Arc<dyn HttpTransport>,
    hooks: Arc<dyn GatewayHooks>,
) -> Result<Gateway, GatewayError> {
    let storage = pstore::create_key_value_store(config.storage_config())?;
    let registry = ProviderRegistry::with_settings(
        &config.system_prompt,
        config.provider_settings.iter().cloned(),
    );

    let gateway = Gateway::builder(transport)
        .storage(storage)
        .registry(registry)
        .hooks(hooks)
        .build();

    let restored = gateway.load_credential()?;
    tracing::debug!(
        restored,
        persistent = config.storage_root.is_some(),
        "gateway initialized"
    );
    Ok(gateway)
}

fn http_client(config: &GatewayConfig) -> Result<Client, GatewayError> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|err| GatewayError::configuration(err.to_string()))
}

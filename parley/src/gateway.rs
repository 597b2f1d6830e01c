//! The gateway service: credential gate, adapter selection, and one dispatch per call.

use std::sync::Arc;

use pprovider::{
    ChatRequest, ChatResult, ConversationTurn, GatewayHooks, HttpTransport, NoopGatewayHooks,
    ProviderError, ProviderId, ProviderRegistry, dispatch,
};
use pstore::{CredentialStore, InMemoryKeyValueStore, KeyValueStore, SecretString};

use crate::GatewayError;
use crate::util::parse_provider_id;

pub struct GatewayBuilder {
    transport: Arc<dyn HttpTransport>,
    storage: Arc<dyn KeyValueStore>,
    registry: Option<ProviderRegistry>,
    system_prompt: String,
    hooks: Arc<dyn GatewayHooks>,
}

impl GatewayBuilder {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            storage: Arc::new(InMemoryKeyValueStore::new()),
            registry: None,
            system_prompt: pprovider::DEFAULT_SYSTEM_PROMPT.to_string(),
            hooks: Arc::new(NoopGatewayHooks),
        }
    }

    pub fn storage(mut self, storage: Arc<dyn KeyValueStore>) -> Self {
        self.storage = storage;
        self
    }

    /// Uses `registry` as-is; the system prompt setting is then ignored.
    pub fn registry(mut self, registry: ProviderRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn GatewayHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn build(self) -> Gateway {
        let registry = self
            .registry
            .unwrap_or_else(|| ProviderRegistry::with_defaults(&self.system_prompt));

        Gateway {
            inner: Arc::new(GatewayInner {
                credentials: CredentialStore::new(self.storage),
                registry,
                transport: self.transport,
                hooks: self.hooks,
            }),
        }
    }
}

struct GatewayInner {
    credentials: CredentialStore,
    registry: ProviderRegistry,
    transport: Arc<dyn HttpTransport>,
    hooks: Arc<dyn GatewayHooks>,
}

/// Cheap to clone; clones share the credential and transport.
#[derive(Clone)]
pub struct Gateway {
    inner: Arc<GatewayInner>,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("credentials", &self.inner.credentials)
            .field("providers", &self.inner.registry.len())
            .field("transport", &self.inner.transport)
            .finish()
    }
}

impl Gateway {
    pub fn builder(transport: Arc<dyn HttpTransport>) -> GatewayBuilder {
        GatewayBuilder::new(transport)
    }

    /// Stores `secret` for the provider named by `provider_id`, replacing any prior credential.
    pub fn submit_credential(
        &self,
        secret: impl Into<String>,
        provider_id: &str,
    ) -> Result<ProviderId, GatewayError> {
        let provider = parse_provider_id(provider_id)
            .ok_or_else(|| GatewayError::invalid_provider(provider_id))?;
        self.inner.credentials.set(secret, provider)?;
        Ok(provider)
    }

    pub fn has_credential(&self) -> bool {
        self.inner.credentials.has().unwrap_or(false)
    }

    pub fn active_provider(&self) -> Option<ProviderId> {
        self.inner.credentials.active_provider().ok().flatten()
    }

    /// Reloads the credential from durable storage.
    pub fn load_credential(&self) -> Result<bool, GatewayError> {
        Ok(self.inner.credentials.load()?)
    }

    pub fn clear_credential(&self) -> Result<(), GatewayError> {
        Ok(self.inner.credentials.clear()?)
    }

    /// Sends `new_message` after `history` to the active provider.
    ///
    /// Never fails: every error is folded into [`ChatResult::Failure`].
    pub async fn send(
        &self,
        new_message: impl Into<String>,
        history: &[ConversationTurn],
    ) -> ChatResult {
        let request = ChatRequest::new(new_message, history.to_vec());
        self.send_request(&request).await
    }

    pub async fn send_request(&self, request: &ChatRequest) -> ChatResult {
        ChatResult::from(self.try_send(request).await)
    }

    async fn try_send(&self, request: &ChatRequest) -> Result<String, ProviderError> {
        let (provider, secret) = self.active_credential()?;

        let adapter = self.inner.registry.get(provider).ok_or_else(|| {
            ProviderError::invalid_request(format!(
                "no adapter registered for {}",
                provider.display_name()
            ))
        })?;

        let parsed = dispatch(
            adapter.as_ref(),
            self.inner.transport.as_ref(),
            self.inner.hooks.as_ref(),
            request,
            secret.expose(),
        )
        .await?;

        Ok(parsed.text)
    }

    fn active_credential(&self) -> Result<(ProviderId, SecretString), ProviderError> {
        let credential = self
            .inner
            .credentials
            .with_secret(|provider, secret| (provider, SecretString::new(secret)))
            .map_err(|error| ProviderError::invalid_request(error.message))?;

        credential.ok_or_else(|| {
            tracing::warn!("chat request rejected: no credential configured");
            ProviderError::credential_missing()
        })
    }
}

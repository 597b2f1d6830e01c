//! Adapter registry and the factory that selects an adapter by provider id.
//!
//! ```rust
//! use pprovider::{DEFAULT_SYSTEM_PROMPT, ProviderId, ProviderRegistry};
//!
//! let registry = ProviderRegistry::with_defaults(DEFAULT_SYSTEM_PROMPT);
//! assert_eq!(registry.len(), 3);
//! assert!(registry.contains(ProviderId::Gemini));
//! ```

use std::sync::Arc;

use pcommon::Registry;

use crate::adapters::{AnthropicAdapter, GeminiAdapter, OpenAiAdapter};
use crate::{ProviderAdapter, ProviderId, ProviderSettings};

/// Builds the adapter implementation for `settings.provider`.
pub fn adapter_for(
    settings: ProviderSettings,
    system_prompt: impl Into<String>,
) -> Arc<dyn ProviderAdapter> {
    match settings.provider {
        ProviderId::OpenAi => Arc::new(OpenAiAdapter::new(settings, system_prompt)),
        ProviderId::Anthropic => Arc::new(AnthropicAdapter::new(settings, system_prompt)),
        ProviderId::Gemini => Arc::new(GeminiAdapter::new(settings, system_prompt)),
    }
}

#[derive(Default, Clone)]
pub struct ProviderRegistry {
    adapters: Registry<ProviderId, Arc<dyn ProviderAdapter>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every provider with its default settings.
    pub fn with_defaults(system_prompt: &str) -> Self {
        Self::with_settings(system_prompt, std::iter::empty())
    }

    /// Registers every provider, replacing defaults with any matching `overrides`.
    pub fn with_settings(
        system_prompt: &str,
        overrides: impl IntoIterator<Item = ProviderSettings>,
    ) -> Self {
        let mut registry = Self::new();
        for provider in ProviderId::ALL {
            registry.register_arc(adapter_for(
                ProviderSettings::defaults_for(provider),
                system_prompt,
            ));
        }
        for settings in overrides {
            registry.register_arc(adapter_for(settings, system_prompt));
        }
        registry
    }

    pub fn register_arc(&mut self, adapter: Arc<dyn ProviderAdapter>) {
        self.adapters.insert(adapter.id(), adapter);
    }

    pub fn get(&self, provider_id: ProviderId) -> Option<Arc<dyn ProviderAdapter>> {
        self.adapters.get(&provider_id).cloned()
    }

    pub fn contains(&self, provider_id: ProviderId) -> bool {
        self.adapters.contains_key(&provider_id)
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_SYSTEM_PROMPT;

    #[test]
    fn factory_selects_adapter_by_provider() {
        for provider in ProviderId::ALL {
            let adapter = adapter_for(ProviderSettings::defaults_for(provider), "prompt");
            assert_eq!(adapter.id(), provider);
        }
    }

    #[test]
    fn overrides_replace_default_settings() {
        let registry = ProviderRegistry::with_settings(
            DEFAULT_SYSTEM_PROMPT,
            [ProviderSettings::defaults_for(ProviderId::OpenAi).with_model("gpt-4o")],
        );

        assert_eq!(registry.len(), 3);
        let openai = registry.get(ProviderId::OpenAi).expect("openai registered");
        assert_eq!(openai.settings().model, "gpt-4o");
        let gemini = registry.get(ProviderId::Gemini).expect("gemini registered");
        assert_eq!(gemini.settings().model, "gemini-1.5-flash");
    }

    #[test]
    fn empty_registry_has_no_adapters() {
        let registry = ProviderRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get(ProviderId::Anthropic).is_none());
    }
}

//! Construction-time configuration for [`Gateway`](crate::Gateway).

use std::path::PathBuf;
use std::time::Duration;

use pprovider::{DEFAULT_SYSTEM_PROMPT, ProviderSettings};
use pstore::StorageConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    /// Directory for `credentials.json`; `None` keeps credentials in memory only.
    pub storage_root: Option<PathBuf>,
    /// Bound applied to every outbound request. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub system_prompt: String,
    pub provider_settings: Vec<ProviderSettings>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            storage_root: None,
            timeout: None,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            provider_settings: Vec::new(),
        }
    }
}

impl GatewayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_storage_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.storage_root = Some(root.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    /// Replaces the defaults of `settings.provider`; a later call for the same provider wins.
    pub fn with_provider_settings(mut self, settings: ProviderSettings) -> Self {
        self.provider_settings.push(settings);
        self
    }

    pub fn storage_config(&self) -> StorageConfig {
        match &self.storage_root {
            Some(root) => StorageConfig::Filesystem { root: root.clone() },
            None => StorageConfig::InMemory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pprovider::ProviderId;

    #[test]
    fn defaults_use_memory_storage_and_no_timeout() {
        let config = GatewayConfig::new();

        assert_eq!(config.storage_config(), StorageConfig::InMemory);
        assert_eq!(config.timeout, None);
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
    }

    #[test]
    fn builder_methods_apply_overrides() {
        let config = GatewayConfig::new()
            .with_storage_root("/tmp/parley")
            .with_timeout(Duration::from_secs(30))
            .with_provider_settings(
                ProviderSettings::defaults_for(ProviderId::Gemini).with_model("gemini-2.0-flash"),
            );

        assert_eq!(
            config.storage_config(),
            StorageConfig::Filesystem {
                root: PathBuf::from("/tmp/parley")
            }
        );
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.provider_settings.len(), 1);
    }
}

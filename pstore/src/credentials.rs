//! The single active credential, mirrored between memory and durable storage.

use std::sync::{Arc, Mutex, MutexGuard};

use pprovider::ProviderId;

use crate::backend::KeyValueStore;
use crate::error::{StoreError, StoreErrorKind};
use crate::secret::SecretString;

pub const API_KEY_STORAGE_KEY: &str = "ai_api_key";
pub const PROVIDER_STORAGE_KEY: &str = "ai_provider";

#[derive(Debug)]
struct ActiveCredential {
    provider: ProviderId,
    secret: SecretString,
}

/// Holds at most one `(provider, secret)` pair.
///
/// Memory is only populated with a complete pair: partial or unrecognized
/// persisted state loads as absent.
#[derive(Debug)]
pub struct CredentialStore {
    storage: Arc<dyn KeyValueStore>,
    active: Mutex<Option<ActiveCredential>>,
}

impl CredentialStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            active: Mutex::new(None),
        }
    }

    /// Persists and activates `secret` for `provider`, replacing any prior pair.
    pub fn set(&self, secret: impl Into<String>, provider: ProviderId) -> Result<(), StoreError> {
        let secret = SecretString::new(secret);
        if secret.is_empty() {
            return Err(StoreError::invalid_request("api key must not be empty"));
        }

        let mut active = self.active()?;
        self.persist_pair(secret.expose(), provider)?;
        *active = Some(ActiveCredential { provider, secret });

        tracing::info!(provider = %provider, "credential stored");
        Ok(())
    }

    /// Reloads the pair from durable storage. Returns whether a complete pair was found.
    pub fn load(&self) -> Result<bool, StoreError> {
        let mut active = self.active()?;
        let (secret, provider) = match self.read_pair() {
            Ok(pair) => pair,
            Err(error) if error.kind == StoreErrorKind::Storage => {
                tracing::warn!(error = %error, "ignoring unreadable stored credential");
                *active = None;
                return Ok(false);
            }
            Err(error) => return Err(error),
        };

        if secret.is_empty() || provider.is_empty() {
            *active = None;
            return Ok(false);
        }

        match provider.parse::<ProviderId>() {
            Ok(provider) => {
                tracing::debug!(provider = %provider, "credential loaded from storage");
                *active = Some(ActiveCredential {
                    provider,
                    secret: SecretString::new(secret),
                });
                Ok(true)
            }
            Err(_) => {
                tracing::warn!(
                    provider = provider.as_str(),
                    "ignoring stored credential with unrecognized provider"
                );
                *active = None;
                Ok(false)
            }
        }
    }

    pub fn has(&self) -> Result<bool, StoreError> {
        Ok(self.active()?.is_some())
    }

    /// Empties memory and removes both keys from durable storage.
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut active = self.active()?;
        *active = None;
        self.storage.remove(API_KEY_STORAGE_KEY)?;
        self.storage.remove(PROVIDER_STORAGE_KEY)?;
        tracing::info!("credential cleared");
        Ok(())
    }

    pub fn active_provider(&self) -> Result<Option<ProviderId>, StoreError> {
        Ok(self.active()?.as_ref().map(|credential| credential.provider))
    }

    /// Runs `f` with the active provider and a borrowed secret, if one is held.
    pub fn with_secret<R>(
        &self,
        f: impl FnOnce(ProviderId, &str) -> R,
    ) -> Result<Option<R>, StoreError> {
        let active = self.active()?;
        Ok(active
            .as_ref()
            .map(|credential| f(credential.provider, credential.secret.expose())))
    }

    fn read_pair(&self) -> Result<(String, String), StoreError> {
        let secret = self.storage.get(API_KEY_STORAGE_KEY)?.unwrap_or_default();
        let provider = self.storage.get(PROVIDER_STORAGE_KEY)?.unwrap_or_default();
        Ok((secret, provider))
    }

    /// Writes both keys, restoring the previous pair if the second write fails.
    fn persist_pair(&self, secret: &str, provider: ProviderId) -> Result<(), StoreError> {
        let previous_secret = self.storage.get(API_KEY_STORAGE_KEY).ok().flatten();
        let previous_provider = self.storage.get(PROVIDER_STORAGE_KEY).ok().flatten();

        self.storage.set(API_KEY_STORAGE_KEY, secret)?;
        if let Err(error) = self.storage.set(PROVIDER_STORAGE_KEY, provider.as_str()) {
            self.restore_pair(previous_secret.as_deref(), previous_provider.as_deref());
            return Err(error);
        }
        Ok(())
    }

    fn restore_pair(&self, secret: Option<&str>, provider: Option<&str>) {
        let restored = self
            .restore_key(API_KEY_STORAGE_KEY, secret)
            .and_then(|()| self.restore_key(PROVIDER_STORAGE_KEY, provider));

        if let Err(error) = restored {
            tracing::warn!(error = %error, "credential rollback failed; removing stored pair");
            let _ = self.storage.remove(API_KEY_STORAGE_KEY);
            let _ = self.storage.remove(PROVIDER_STORAGE_KEY);
        }
    }

    fn restore_key(&self, key: &str, value: Option<&str>) -> Result<(), StoreError> {
        match value {
            Some(value) => self.storage.set(key, value),
            None => self.storage.remove(key),
        }
    }

    fn active(&self) -> Result<MutexGuard<'_, Option<ActiveCredential>>, StoreError> {
        self.active
            .lock()
            .map_err(|_| StoreError::other("credential store lock poisoned"))
    }
}

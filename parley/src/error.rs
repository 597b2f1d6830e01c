//! Facade-level errors raised while configuring the gateway or managing credentials.

use pprovider::ProviderError;
use pstore::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    InvalidProvider,
    InvalidCredential,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?}: {message}")]
pub struct GatewayError {
    pub kind: GatewayErrorKind,
    pub message: String,
}

impl GatewayError {
    pub fn new(kind: GatewayErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_provider(value: &str) -> Self {
        Self::new(
            GatewayErrorKind::InvalidProvider,
            format!("unknown provider '{value}'"),
        )
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Configuration, message)
    }
}

impl From<StoreError> for GatewayError {
    fn from(error: StoreError) -> Self {
        let kind = match error.kind {
            pstore::StoreErrorKind::InvalidRequest => GatewayErrorKind::InvalidCredential,
            pstore::StoreErrorKind::Storage | pstore::StoreErrorKind::Other => {
                GatewayErrorKind::Storage
            }
        };
        Self::new(kind, error.message)
    }
}

impl From<ProviderError> for GatewayError {
    fn from(error: ProviderError) -> Self {
        Self::configuration(error.message)
    }
}

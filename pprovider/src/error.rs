//! Shared provider error kinds and error value helpers.
//!
//! ```rust
//! use pprovider::{ProviderError, ProviderErrorKind};
//!
//! let upstream = ProviderError::upstream(401, "Incorrect API key provided");
//! assert_eq!(upstream.kind, ProviderErrorKind::Upstream);
//! assert_eq!(upstream.status, Some(401));
//!
//! let missing = ProviderError::credential_missing();
//! assert_eq!(missing.message, "No API credentials configured");
//! ```

use thiserror::Error;

pub const CREDENTIAL_MISSING_MESSAGE: &str = "No API credentials configured";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    CredentialMissing,
    InvalidRequest,
    Transport,
    Upstream,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?}: {message}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
    pub status: Option<u16>,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn credential_missing() -> Self {
        Self::new(ProviderErrorKind::CredentialMissing, CREDENTIAL_MISSING_MESSAGE)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::InvalidRequest, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Transport, message)
    }

    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Upstream,
            message: message.into(),
            status: Some(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helper_builders_assign_expected_kinds() {
        assert_eq!(
            ProviderError::invalid_request("bad").kind,
            ProviderErrorKind::InvalidRequest
        );
        assert_eq!(
            ProviderError::transport("connection refused").kind,
            ProviderErrorKind::Transport
        );
        assert_eq!(ProviderError::transport("x").status, None);
        assert_eq!(
            ProviderError::credential_missing().kind,
            ProviderErrorKind::CredentialMissing
        );
    }

    #[test]
    fn display_includes_kind_and_message() {
        let error = ProviderError::upstream(500, "Gemini API error: 500");
        assert_eq!(error.to_string(), "Upstream: Gemini API error: 500");
    }
}

//! Response parsing and error normalization into the gateway's single result shape.
//!
//! ```rust
//! use pprovider::{
//!     DEFAULT_SYSTEM_PROMPT, NO_RESPONSE_TEXT, ProviderId, ProviderSettings, RawResponse,
//!     adapter_for, normalize_response,
//! };
//!
//! let adapter = adapter_for(ProviderSettings::defaults_for(ProviderId::OpenAi), DEFAULT_SYSTEM_PROMPT);
//!
//! let reply = normalize_response(adapter.as_ref(), &RawResponse::new(200, "{}"))
//!     .expect("2xx is never a failure");
//! assert!(reply.degraded);
//! assert_eq!(reply.text, NO_RESPONSE_TEXT);
//!
//! let error = normalize_response(adapter.as_ref(), &RawResponse::new(502, "<html>"))
//!     .expect_err("5xx is a failure");
//! assert_eq!(error.message, "OpenAI API error: 502");
//! ```

use crate::{ProviderAdapter, ProviderError, ProviderId, RawResponse};

pub const NO_RESPONSE_TEXT: &str = "No response received";

/// Assistant text from a 2xx reply; `degraded` marks the placeholder fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    pub text: String,
    pub degraded: bool,
}

impl ParsedResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            degraded: false,
        }
    }

    pub fn no_response() -> Self {
        Self {
            text: NO_RESPONSE_TEXT.to_string(),
            degraded: true,
        }
    }
}

pub fn normalize_response(
    adapter: &dyn ProviderAdapter,
    response: &RawResponse,
) -> Result<ParsedResponse, ProviderError> {
    if !response.is_success() {
        return Err(normalize_upstream_error(adapter, response));
    }

    Ok(adapter
        .parse_response(&response.body)
        .map_or_else(ParsedResponse::no_response, ParsedResponse::text))
}

pub fn normalize_upstream_error(
    adapter: &dyn ProviderAdapter,
    response: &RawResponse,
) -> ProviderError {
    let message = adapter
        .extract_error_message(&response.body)
        .unwrap_or_else(|| {
            format!(
                "{} API error: {}",
                adapter.id().display_name(),
                response.status
            )
        });

    ProviderError::upstream(response.status, message)
}

pub fn normalize_transport_error(provider: ProviderId, error: ProviderError) -> ProviderError {
    ProviderError {
        message: format!(
            "{} request failed: {}",
            provider.display_name(),
            error.message
        ),
        ..error
    }
}

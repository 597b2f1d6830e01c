use serde::Deserialize;

use crate::{ChatRequest, Envelope, ProviderError, ProviderId, ProviderSettings};

/// One upstream vendor: builds its envelope and reads its response shapes.
pub trait ProviderAdapter: Send + Sync {
    fn id(&self) -> ProviderId;

    fn settings(&self) -> &ProviderSettings;

    fn build_envelope(&self, request: &ChatRequest, secret: &str)
    -> Result<Envelope, ProviderError>;

    /// Assistant text at the vendor's success path, `None` when the path is absent.
    fn parse_response(&self, body: &str) -> Option<String>;

    /// Vendor error message nested at `error.message`.
    fn extract_error_message(&self, body: &str) -> Option<String> {
        extract_nested_error_message(body)
    }
}

pub(crate) fn extract_nested_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ApiErrorEnvelope>(body).ok()?;
    parsed.error?.message
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::extract_nested_error_message;

    #[test]
    fn nested_error_message_is_extracted() {
        let body = r#"{"error":{"message":"Invalid API key","type":"invalid_request_error"}}"#;
        assert_eq!(
            extract_nested_error_message(body).as_deref(),
            Some("Invalid API key")
        );
    }

    #[test]
    fn missing_or_unparseable_error_bodies_yield_none() {
        assert_eq!(extract_nested_error_message("<html>bad gateway</html>"), None);
        assert_eq!(extract_nested_error_message(r#"{"error":"flat"}"#), None);
        assert_eq!(extract_nested_error_message(r#"{"error":{}}"#), None);
        assert_eq!(extract_nested_error_message(""), None);
    }
}

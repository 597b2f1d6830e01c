//! Fully provider-specific outbound request produced by an adapter.

use std::collections::BTreeMap;
use std::fmt::Formatter;

use serde_json::Value;

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone, PartialEq)]
pub struct Envelope {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

impl Envelope {
    pub fn new(url: impl Into<String>, body: Value) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(
            CONTENT_TYPE_HEADER.to_string(),
            "application/json".to_string(),
        );

        Self {
            url: url.into(),
            headers,
            body,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_bearer_auth(self, secret: &str) -> Self {
        self.with_header(AUTHORIZATION_HEADER, format!("Bearer {secret}"))
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// URL with the query string dropped, safe for logs.
    pub fn redacted_url(&self) -> &str {
        self.url
            .split_once('?')
            .map_or(self.url.as_str(), |(path, _)| path)
    }
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let headers = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case(AUTHORIZATION_HEADER) {
                    (name.as_str(), "[REDACTED]")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect::<BTreeMap<_, _>>();

        f.debug_struct("Envelope")
            .field("url", &self.redacted_url())
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Envelope;

    #[test]
    fn new_envelope_declares_json_content_type() {
        let envelope = Envelope::new("https://example.test/v1", json!({}));
        assert_eq!(envelope.header("content-type"), Some("application/json"));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let envelope = Envelope::new("https://example.test/v1?key=secret-123", json!({}))
            .with_bearer_auth("sk-secret");
        let rendered = format!("{envelope:?}");

        assert!(!rendered.contains("sk-secret"));
        assert!(!rendered.contains("secret-123"));
        assert!(rendered.contains("[REDACTED]"));
        assert_eq!(envelope.redacted_url(), "https://example.test/v1");
        assert_eq!(envelope.header("authorization"), Some("Bearer sk-secret"));
    }
}

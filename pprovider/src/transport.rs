//! Transport trait and reqwest-based HTTP implementation.

use crate::{Envelope, ProviderError};

pub use pcommon::BoxFuture as ProviderFuture;

/// Raw upstream reply; status codes are left for the normalizer to interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    fn post<'a>(
        &'a self,
        envelope: &'a Envelope,
    ) -> ProviderFuture<'a, Result<RawResponse, ProviderError>>;
}

#[cfg(feature = "reqwest-transport")]
pub use reqwest_transport::ReqwestTransport;

#[cfg(feature = "reqwest-transport")]
mod reqwest_transport {
    use reqwest::Client;

    use super::{HttpTransport, ProviderFuture, RawResponse};
    use crate::{Envelope, ProviderError};

    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        pub fn new(client: Client) -> Self {
            Self { client }
        }
    }

    impl HttpTransport for ReqwestTransport {
        fn post<'a>(
            &'a self,
            envelope: &'a Envelope,
        ) -> ProviderFuture<'a, Result<RawResponse, ProviderError>> {
            Box::pin(async move {
                let mut builder = self.client.post(&envelope.url);
                for (name, value) in &envelope.headers {
                    builder = builder.header(name, value);
                }

                let response = builder
                    .json(&envelope.body)
                    .send()
                    .await
                    .map_err(map_send_error)?;

                let status = response.status().as_u16();
                let body = response
                    .text()
                    .await
                    .map_err(|err| ProviderError::transport(err.without_url().to_string()))?;

                Ok(RawResponse { status, body })
            })
        }
    }

    // Gemini carries the key in the query string, so the URL never reaches the message.
    fn map_send_error(err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::transport("request timed out")
        } else {
            ProviderError::transport(err.without_url().to_string())
        }
    }
}

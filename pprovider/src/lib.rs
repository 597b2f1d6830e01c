//! Provider adapters, transport, and response normalization for the parley gateway.
//!
//! Each upstream vendor is one [`ProviderAdapter`]; [`dispatch`] runs a single call
//! through build, send, and normalize.

pub mod adapters;
mod dispatch;
mod envelope;
mod error;
mod hooks;
mod normalize;
mod provider;
mod registry;
mod settings;
mod transport;
mod types;

pub mod prelude;

pub use dispatch::dispatch;
pub use envelope::{AUTHORIZATION_HEADER, CONTENT_TYPE_HEADER, Envelope};
pub use error::{CREDENTIAL_MISSING_MESSAGE, ProviderError, ProviderErrorKind};
pub use hooks::{GatewayHooks, NoopGatewayHooks};
pub use normalize::{
    NO_RESPONSE_TEXT, ParsedResponse, normalize_response, normalize_transport_error,
    normalize_upstream_error,
};
pub use provider::ProviderAdapter;
pub use registry::{ProviderRegistry, adapter_for};
pub use settings::{ANTHROPIC_API_VERSION, DEFAULT_SYSTEM_PROMPT, ProviderSettings};
#[cfg(feature = "reqwest-transport")]
pub use transport::ReqwestTransport;
pub use transport::{HttpTransport, ProviderFuture, RawResponse};
pub use types::{ChatRequest, ChatResult, ConversationTurn, ProviderId, Role};

pub use pcommon::GenerationSettings;

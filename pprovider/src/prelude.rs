//! Common `pprovider` imports for downstream crates.

pub use crate::{
    ChatRequest, ChatResult, ConversationTurn, Envelope, GatewayHooks, HttpTransport,
    NoopGatewayHooks, ProviderAdapter, ProviderError, ProviderErrorKind, ProviderId,
    ProviderRegistry, ProviderSettings, RawResponse, Role, dispatch,
};
pub use pcommon::{BoxFuture, GenerationSettings};

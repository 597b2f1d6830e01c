//! Common imports for most parley applications.

pub use crate::{
    assistant_turn, build_gateway, build_gateway_with, chat_request, parse_provider_id,
    user_turn,
};
pub use crate::{pl_history, pl_turn};
pub use crate::{
    ChatRequest, ChatResult, ConversationTurn, Gateway, GatewayBuilder, GatewayConfig,
    GatewayError, GatewayErrorKind, GatewayHooks, HttpTransport, KeyValueStore, ProviderError,
    ProviderId, ProviderSettings, RawResponse, Role,
};

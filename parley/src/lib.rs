//! Unified facade over the parley workspace crates.
//!
//! A [`Gateway`] holds one active provider credential and turns a conversation plus a
//! new message into a single [`ChatResult`], whichever vendor is configured.
//!
//! ```rust,no_run
//! use parley::{GatewayConfig, build_gateway, pl_history};
//!
//! # async fn run() -> Result<(), parley::GatewayError> {
//! let gateway = build_gateway(GatewayConfig::new().with_storage_root(".parley"))?;
//! gateway.submit_credential("sk-...", "openai")?;
//!
//! let history = pl_history![user => "hi", assistant => "Hello!"];
//! match gateway.send("how are you?", &history).await {
//!     parley::ChatResult::Success { text } => println!("{text}"),
//!     parley::ChatResult::Failure { message } => eprintln!("{message}"),
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod gateway;
mod macros;

pub mod prelude;
pub mod runtime;
pub mod util;

pub use pcommon;
pub use pobserve;
pub use pprovider;
pub use pstore;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayErrorKind};
pub use gateway::{Gateway, GatewayBuilder};
pub use pcommon::{BoxFuture, GenerationSettings};
pub use pobserve::{MetricsObservabilityHooks, SafeGatewayHooks, TracingObservabilityHooks};
pub use pprovider::{
    ChatRequest, ChatResult, ConversationTurn, DEFAULT_SYSTEM_PROMPT, Envelope, GatewayHooks,
    HttpTransport, NO_RESPONSE_TEXT, NoopGatewayHooks, ProviderError, ProviderErrorKind,
    ProviderFuture, ProviderId, ProviderRegistry, ProviderSettings, RawResponse,
    ReqwestTransport, Role,
};
pub use pstore::{
    CredentialStore, FilesystemKeyValueStore, InMemoryKeyValueStore, KeyValueStore,
    StorageConfig, StoreError, StoreErrorKind,
};

pub use runtime::{build_gateway, build_gateway_with};
pub use util::{assistant_turn, chat_request, parse_provider_id, user_turn};

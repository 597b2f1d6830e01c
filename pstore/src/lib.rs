//! Credential persistence: key-value storage backends and the active credential store.

mod backend;
mod backends;
mod credentials;
mod error;
mod secret;

pub mod prelude {
    pub use crate::{
        CredentialStore, FilesystemKeyValueStore, InMemoryKeyValueStore, KeyValueStore,
        SecretString, StorageConfig, StoreError, StoreErrorKind, create_key_value_store,
    };
}

pub use backend::{InMemoryKeyValueStore, KeyValueStore, StorageConfig, create_key_value_store};
pub use backends::FilesystemKeyValueStore;
pub use credentials::{API_KEY_STORAGE_KEY, CredentialStore, PROVIDER_STORAGE_KEY};
pub use error::{StoreError, StoreErrorKind};
pub use secret::SecretString;

//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use pcommon::{GenerationSettings, Registry};
//!
//! let settings = GenerationSettings::new(1000).with_temperature(0.7);
//! let mut registry = Registry::new();
//! registry.insert("openai".to_string(), settings);
//!
//! assert_eq!(registry.get("openai").map(|s| s.max_tokens), Some(1000));
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use pcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod model {
    //! Fixed generation limits baked into outbound requests.
    //!
    //! ```rust
    //! use pcommon::GenerationSettings;
    //!
    //! let settings = GenerationSettings::new(512).with_temperature(0.2);
    //!
    //! assert_eq!(settings.max_tokens, 512);
    //! assert_eq!(settings.temperature, Some(0.2));
    //! assert_eq!(GenerationSettings::new(512).temperature, None);
    //! ```

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct GenerationSettings {
        pub max_tokens: u32,
        pub temperature: Option<f64>,
    }

    impl GenerationSettings {
        pub fn new(max_tokens: u32) -> Self {
            Self {
                max_tokens,
                temperature: None,
            }
        }

        pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
            self.max_tokens = max_tokens;
            self
        }

        pub fn with_temperature(mut self, temperature: f64) -> Self {
            self.temperature = Some(temperature);
            self
        }

        pub fn without_temperature(mut self) -> Self {
            self.temperature = None;
            self
        }
    }
}

pub mod registry {
    //! Generic registry map wrapper used by runtime registries.
    //!
    //! ```rust
    //! use pcommon::Registry;
    //!
    //! let mut registry = Registry::new();
    //! registry.insert("alpha".to_string(), 1_u32);
    //!
    //! assert_eq!(registry.get("alpha"), Some(&1));
    //! assert!(registry.contains_key("alpha"));
    //! ```

    use std::borrow::Borrow;
    use std::collections::HashMap;
    use std::hash::Hash;

    #[derive(Debug, Clone)]
    pub struct Registry<K, V> {
        items: HashMap<K, V>,
    }

    impl<K, V> Default for Registry<K, V>
    where
        K: Eq + Hash,
    {
        fn default() -> Self {
            Self {
                items: HashMap::new(),
            }
        }
    }

    impl<K, V> Registry<K, V>
    where
        K: Eq + Hash,
    {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(&mut self, key: K, value: V) -> Option<V> {
            self.items.insert(key, value)
        }

        pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.get(key)
        }

        pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.remove(key)
        }

        pub fn contains_key<Q>(&self, key: &Q) -> bool
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.contains_key(key)
        }

        pub fn keys(&self) -> impl Iterator<Item = &K> {
            self.items.keys()
        }

        pub fn len(&self) -> usize {
            self.items.len()
        }

        pub fn is_empty(&self) -> bool {
            self.items.is_empty()
        }
    }
}

pub use future::BoxFuture;
pub use model::GenerationSettings;
pub use registry::Registry;

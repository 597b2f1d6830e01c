//! Build-time constants for each upstream vendor.
//!
//! ```rust
//! use pprovider::{ProviderId, ProviderSettings};
//!
//! let settings = ProviderSettings::defaults_for(ProviderId::OpenAi);
//! assert_eq!(settings.model, "gpt-4o-mini");
//! assert_eq!(settings.generation.max_tokens, 1000);
//! ```

use pcommon::GenerationSettings;

use crate::ProviderId;

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant. Be concise, friendly, and informative.";

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";

pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";
pub const ANTHROPIC_DEFAULT_MODEL: &str = "claude-3-5-haiku-20241022";
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-1.5-flash";

pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    pub provider: ProviderId,
    pub base_url: String,
    pub model: String,
    pub generation: GenerationSettings,
}

impl ProviderSettings {
    pub fn defaults_for(provider: ProviderId) -> Self {
        let limits = GenerationSettings::new(DEFAULT_MAX_TOKENS);
        let (base_url, model, generation) = match provider {
            ProviderId::OpenAi => (
                OPENAI_BASE_URL,
                OPENAI_DEFAULT_MODEL,
                limits.with_temperature(DEFAULT_TEMPERATURE),
            ),
            // Anthropic requests carry no temperature.
            ProviderId::Anthropic => (ANTHROPIC_BASE_URL, ANTHROPIC_DEFAULT_MODEL, limits),
            ProviderId::Gemini => (
                GEMINI_BASE_URL,
                GEMINI_DEFAULT_MODEL,
                limits.with_temperature(DEFAULT_TEMPERATURE),
            ),
        };

        Self {
            provider,
            base_url: base_url.to_string(),
            model: model.to_string(),
            generation,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_generation(mut self, generation: GenerationSettings) -> Self {
        self.generation = generation;
        self
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

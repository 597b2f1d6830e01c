//! Canonical conversation types shared by every provider adapter.
//!
//! ```rust
//! use pprovider::{ChatRequest, ChatResult, ConversationTurn, ProviderId};
//!
//! let request = ChatRequest::new("how are you?", vec![ConversationTurn::user("hi")]);
//! assert_eq!(request.turn_count(), 2);
//!
//! let provider: ProviderId = "gemini".parse().expect("known provider id");
//! assert_eq!(provider.display_name(), "Gemini");
//!
//! let result = ChatResult::success("");
//! assert!(result.is_success());
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenAi,
    Anthropic,
    Gemini,
}

impl ProviderId {
    pub const ALL: [ProviderId; 3] = [Self::OpenAi, Self::Anthropic, Self::Gemini];

    /// Stable literal used for persistence and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Gemini => "gemini",
        }
    }

    /// Vendor name used in user-facing error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Anthropic => "Anthropic",
            Self::Gemini => "Gemini",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = ProviderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str() == value)
            .ok_or_else(|| ProviderError::invalid_request(format!("unknown provider id '{value}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub role: Role,
    pub text: String,
}

impl ConversationTurn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }
}

/// Vendor-neutral input for a single gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub new_message: String,
    pub history: Vec<ConversationTurn>,
}

impl ChatRequest {
    pub fn new(new_message: impl Into<String>, history: Vec<ConversationTurn>) -> Self {
        Self {
            new_message: new_message.into(),
            history,
        }
    }

    /// Prior turns followed by the new message as a trailing user turn.
    pub fn turns(&self) -> impl Iterator<Item = (Role, &str)> {
        self.history
            .iter()
            .map(|turn| (turn.role, turn.text.as_str()))
            .chain(std::iter::once((Role::User, self.new_message.as_str())))
    }

    pub fn turn_count(&self) -> usize {
        self.history.len() + 1
    }
}

/// Single normalized outcome of a gateway call.
///
/// Branch on the variant: an empty `text` is still a successful reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatResult {
    Success { text: String },
    Failure { message: String },
}

impl ChatResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Success { text } => Some(text.as_str()),
            Self::Failure { .. } => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message.as_str()),
        }
    }

    /// True when a failure message carries the 401 marker, so callers can re-prompt
    /// for a credential.
    pub fn is_authentication_failure(&self) -> bool {
        self.failure_message()
            .is_some_and(|message| message.contains("401"))
    }
}

impl From<Result<String, ProviderError>> for ChatResult {
    fn from(value: Result<String, ProviderError>) -> Self {
        match value {
            Ok(text) => Self::Success { text },
            Err(error) => Self::Failure {
                message: error.message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProviderErrorKind;

    #[test]
    fn provider_id_literals_are_stable() {
        assert_eq!(ProviderId::OpenAi.to_string(), "openai");
        assert_eq!(ProviderId::Anthropic.to_string(), "anthropic");
        assert_eq!(ProviderId::Gemini.to_string(), "gemini");

        for provider in ProviderId::ALL {
            assert_eq!(provider.as_str().parse::<ProviderId>(), Ok(provider));
        }
    }

    #[test]
    fn provider_id_parse_is_strict() {
        let err = "OpenAI".parse::<ProviderId>().expect_err("display name is not an id");
        assert_eq!(err.kind, ProviderErrorKind::InvalidRequest);
        assert!("".parse::<ProviderId>().is_err());
    }

    #[test]
    fn turns_append_new_message_after_history() {
        let request = ChatRequest::new(
            "third",
            vec![ConversationTurn::user("first"), ConversationTurn::assistant("second")],
        );

        let turns = request.turns().collect::<Vec<_>>();
        assert_eq!(
            turns,
            vec![
                (Role::User, "first"),
                (Role::Assistant, "second"),
                (Role::User, "third"),
            ]
        );
        assert_eq!(request.turn_count(), 3);
    }

    #[test]
    fn chat_result_variants_are_exclusive() {
        let empty = ChatResult::success("");
        assert!(empty.is_success());
        assert_eq!(empty.text(), Some(""));
        assert_eq!(empty.failure_message(), None);

        let failed = ChatResult::failure("OpenAI API error: 401");
        assert!(!failed.is_success());
        assert_eq!(failed.text(), None);
        assert!(failed.is_authentication_failure());
        assert!(!ChatResult::failure("OpenAI API error: 500").is_authentication_failure());
    }

    #[test]
    fn chat_result_from_provider_result_keeps_only_the_message() {
        let result = ChatResult::from(Err::<String, _>(ProviderError::upstream(
            429,
            "Rate limit reached",
        )));
        assert_eq!(result, ChatResult::failure("Rate limit reached"));
    }
}

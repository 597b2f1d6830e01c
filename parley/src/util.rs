//! Small convenience constructors for common types.

use crate::{ChatRequest, ConversationTurn, ProviderId};

pub fn user_turn(text: impl Into<String>) -> ConversationTurn {
    ConversationTurn::user(text)
}

pub fn assistant_turn(text: impl Into<String>) -> ConversationTurn {
    ConversationTurn::assistant(text)
}

pub fn chat_request(
    new_message: impl Into<String>,
    history: impl IntoIterator<Item = ConversationTurn>,
) -> ChatRequest {
    ChatRequest::new(new_message, history.into_iter().collect())
}

/// Parses a provider id leniently: case-insensitive, surrounding whitespace ignored,
/// with vendor aliases.
pub fn parse_provider_id(value: &str) -> Option<ProviderId> {
    match value.trim().to_ascii_lowercase().as_str() {
        "openai" => Some(ProviderId::OpenAi),
        "anthropic" | "claude" => Some(ProviderId::Anthropic),
        "gemini" | "google" => Some(ProviderId::Gemini),
        _ => None,
    }
}

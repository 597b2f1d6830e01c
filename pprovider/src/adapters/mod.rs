mod anthropic;
mod gemini;
mod openai;

pub use anthropic::{ANTHROPIC_VERSION_HEADER, AnthropicAdapter};
pub use gemini::GeminiAdapter;
pub use openai::OpenAiAdapter;

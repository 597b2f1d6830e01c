//! Gemini generateContent adapter.
//!
//! The key is passed as a `key` query parameter and assistant turns are renamed to `model`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::{
    ChatRequest, Envelope, ProviderAdapter, ProviderError, ProviderId, ProviderSettings, Role,
};

#[derive(Debug, Clone)]
pub struct GeminiAdapter {
    settings: ProviderSettings,
    system_prompt: String,
}

impl GeminiAdapter {
    pub fn new(settings: ProviderSettings, system_prompt: impl Into<String>) -> Self {
        Self {
            settings,
            system_prompt: system_prompt.into(),
        }
    }

    fn endpoint_with_key(&self, secret: &str) -> Result<String, ProviderError> {
        let endpoint = self
            .settings
            .endpoint(&format!("models/{}:generateContent", self.settings.model));
        let mut url = Url::parse(&endpoint).map_err(|err| {
            ProviderError::invalid_request(format!("invalid Gemini endpoint: {err}"))
        })?;
        url.query_pairs_mut().append_pair("key", secret);
        Ok(url.into())
    }
}

impl ProviderAdapter for GeminiAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    fn build_envelope(
        &self,
        request: &ChatRequest,
        secret: &str,
    ) -> Result<Envelope, ProviderError> {
        let contents = request
            .turns()
            .map(|(role, text)| GeminiApiContent {
                role: match role {
                    Role::User => "user",
                    Role::Assistant => "model",
                },
                parts: vec![GeminiApiPart { text }],
            })
            .collect();

        let api_request = GeminiApiRequest {
            contents,
            generation_config: GeminiApiGenerationConfig {
                max_output_tokens: self.settings.generation.max_tokens,
                temperature: self.settings.generation.temperature,
            },
            system_instruction: GeminiApiSystemInstruction {
                parts: vec![GeminiApiPart {
                    text: &self.system_prompt,
                }],
            },
        };
        let body = serde_json::to_value(&api_request)
            .map_err(|err| ProviderError::invalid_request(err.to_string()))?;

        Ok(Envelope::new(self.endpoint_with_key(secret)?, body))
    }

    fn parse_response(&self, body: &str) -> Option<String> {
        let parsed = serde_json::from_str::<GeminiApiResponse>(body).ok()?;
        let first = parsed.candidates.into_iter().next()?;
        let content = serde_json::from_value::<GeminiApiCandidate>(first)
            .ok()?
            .content?;
        let part = content.parts.into_iter().next()?;
        serde_json::from_value::<GeminiApiCandidatePart>(part)
            .ok()?
            .text
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiApiRequest<'a> {
    contents: Vec<GeminiApiContent<'a>>,
    generation_config: GeminiApiGenerationConfig,
    system_instruction: GeminiApiSystemInstruction<'a>,
}

#[derive(Debug, Serialize)]
struct GeminiApiContent<'a> {
    role: &'static str,
    parts: Vec<GeminiApiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiApiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiApiGenerationConfig {
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Debug, Serialize)]
struct GeminiApiSystemInstruction<'a> {
    parts: Vec<GeminiApiPart<'a>>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiResponse {
    #[serde(default)]
    candidates: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiCandidate {
    #[serde(default)]
    content: Option<GeminiApiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiCandidateContent {
    #[serde(default)]
    parts: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiCandidatePart {
    #[serde(default)]
    text: Option<String>,
}

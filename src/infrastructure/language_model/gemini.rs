//! Gemini API language model adapter

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::application::ports::{Generation, LanguageModel, LanguageModelError, ModelInfo};
use crate::domain::config::DEFAULT_GEMINI_MODEL;
use crate::domain::improvement::ImprovePrompt;

/// Gemini API base URL
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Page size used when listing models
const MODELS_PAGE_SIZE: u32 = 100;

/// Candidate finish reasons that mean the output was withheld
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

// Request types for Gemini API

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

// Response types for Gemini API

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<RemoteModel>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteModel {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Gemini API client
pub struct GeminiClient {
    api_key: SecretString,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key and the default model
    pub fn new(api_key: SecretString) -> Self {
        Self::with_model(api_key, DEFAULT_GEMINI_MODEL)
    }

    /// Create a new Gemini client with a custom model
    pub fn with_model(api_key: SecretString, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured HTTP client (timeouts, proxies)
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Point the client at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the generateContent URL
    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Build the models listing URL
    fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }

    /// Build the request body
    fn build_request(prompt: &ImprovePrompt, temperature: f32) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![TextPart {
                    text: prompt.content().to_string(),
                }],
            }],
            generation_config: GenerationConfig { temperature },
        }
    }

    /// Turn a parsed response into a generation outcome
    fn interpret(response: GenerateContentResponse) -> Result<Generation, LanguageModelError> {
        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Ok(Generation::Blocked(reason));
        }

        let candidate = response
            .candidates
            .and_then(|c| c.into_iter().next())
            .ok_or(LanguageModelError::EmptyResponse)?;

        if let Some(reason) = candidate.finish_reason.as_deref() {
            if BLOCKING_FINISH_REASONS.contains(&reason) {
                return Ok(Generation::Blocked(reason.to_string()));
            }
        }

        let text: String = candidate
            .content
            .and_then(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.trim().is_empty() {
            return Err(LanguageModelError::EmptyResponse);
        }

        Ok(Generation::Text(text))
    }

    /// Map a non-success HTTP response to an error
    async fn error_from_response(response: reqwest::Response) -> LanguageModelError {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return LanguageModelError::InvalidApiKey;
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return LanguageModelError::RateLimited;
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);

        LanguageModelError::ApiError(format!("HTTP {}: {}", status, message))
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn generate(
        &self,
        prompt: &ImprovePrompt,
        temperature: f32,
    ) -> Result<Generation, LanguageModelError> {
        let body = Self::build_request(prompt, temperature);

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", self.api_key.expose_secret())])
            .json(&body)
            .send()
            .await
            .map_err(|e| LanguageModelError::RequestFailed(e.without_url().to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LanguageModelError::ParseError(e.without_url().to_string()))?;

        Self::interpret(response)
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, LanguageModelError> {
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(self.models_url())
                .query(&[("key", self.api_key.expose_secret())])
                .query(&[("pageSize", MODELS_PAGE_SIZE)]);
            if let Some(token) = page_token.as_deref() {
                request = request.query(&[("pageToken", token)]);
            }

            let response = request
                .send()
                .await
                .map_err(|e| LanguageModelError::RequestFailed(e.without_url().to_string()))?;

            if !response.status().is_success() {
                return Err(Self::error_from_response(response).await);
            }

            let page: ListModelsResponse = response
                .json()
                .await
                .map_err(|e| LanguageModelError::ParseError(e.without_url().to_string()))?;

            models.extend(page.models.into_iter().map(|m| ModelInfo {
                name: m.name,
                supported_generation_methods: m.supported_generation_methods,
            }));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::improvement::UserText;

    fn client() -> GeminiClient {
        GeminiClient::new(SecretString::from("test-key"))
    }

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn build_request_sets_temperature_and_prompt() {
        let prompt = ImprovePrompt::build(&UserText::new("hello").unwrap());
        let request = GeminiClient::build_request(&prompt, 0.0);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["generationConfig"]["temperature"], 0.0);
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], prompt.content());
    }

    #[test]
    fn generate_url_contains_model() {
        let url = client().generate_url();
        assert!(url.ends_with("/models/gemini-2.0-flash:generateContent"));
        assert!(!url.contains("test-key"));
    }

    #[test]
    fn custom_model_and_base_url() {
        let client = GeminiClient::with_model(SecretString::from("k"), "custom-model")
            .with_base_url("http://localhost:1234/");
        assert_eq!(
            client.generate_url(),
            "http://localhost:1234/models/custom-model:generateContent"
        );
    }

    #[test]
    fn interpret_joins_text_parts() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hello "},{"text":"world."}]},"finishReason":"STOP"}]}"#,
        );
        assert_eq!(
            GeminiClient::interpret(response).unwrap(),
            Generation::Text("Hello world.".to_string())
        );
    }

    #[test]
    fn interpret_prompt_block() {
        let response = parse(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        assert_eq!(
            GeminiClient::interpret(response).unwrap(),
            Generation::Blocked("SAFETY".to_string())
        );
    }

    #[test]
    fn interpret_candidate_block() {
        let response = parse(r#"{"candidates":[{"finishReason":"PROHIBITED_CONTENT"}]}"#);
        assert_eq!(
            GeminiClient::interpret(response).unwrap(),
            Generation::Blocked("PROHIBITED_CONTENT".to_string())
        );
    }

    #[test]
    fn interpret_empty_response() {
        let response = parse(r#"{}"#);
        assert!(matches!(
            GeminiClient::interpret(response),
            Err(LanguageModelError::EmptyResponse)
        ));
    }

    #[test]
    fn interpret_keeps_surrounding_whitespace() {
        let response = parse(r#"{"candidates":[{"content":{"parts":[{"text":"Hello.\n"}]}}]}"#);
        assert_eq!(
            GeminiClient::interpret(response).unwrap(),
            Generation::Text("Hello.\n".to_string())
        );
    }

    #[test]
    fn interpret_whitespace_only_is_empty() {
        let response = parse(r#"{"candidates":[{"content":{"parts":[{"text":" \n "}]}}]}"#);
        assert!(matches!(
            GeminiClient::interpret(response),
            Err(LanguageModelError::EmptyResponse)
        ));
    }
}

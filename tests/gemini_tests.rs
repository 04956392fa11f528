//! Gemini adapter tests against a mock server

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dadam_api::application::ports::{Generation, LanguageModel, LanguageModelError};
use dadam_api::domain::improvement::{ImprovePrompt, UserText};
use dadam_api::infrastructure::GeminiClient;

const GENERATE_PATH: &str = "/models/gemini-2.0-flash:generateContent";

fn client(server: &MockServer) -> GeminiClient {
    GeminiClient::with_model(SecretString::from("test-key"), "gemini-2.0-flash")
        .with_base_url(server.uri())
}

fn prompt(text: &str) -> ImprovePrompt {
    ImprovePrompt::build(&UserText::new(text).unwrap())
}

#[tokio::test]
async fn generate_returns_model_text_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "temperature": 0.0 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "  This is better.\n" }] },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).generate(&prompt("this better"), 0.0).await;

    assert_eq!(
        result.unwrap(),
        Generation::Text("  This is better.\n".to_string())
    );
}

#[tokio::test]
async fn generate_sends_prompt_text() {
    let server = MockServer::start().await;
    let expected = prompt("hello world");
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": expected.content() }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Hello, world." }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).generate(&expected, 0.0).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn prompt_block_reason_is_blocked() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let result = client(&server).generate(&prompt("text"), 0.0).await;

    assert_eq!(result.unwrap(), Generation::Blocked("SAFETY".to_string()));
}

#[tokio::test]
async fn safety_finish_reason_is_blocked() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "finishReason": "RECITATION" }]
        })))
        .mount(&server)
        .await;

    let result = client(&server).generate(&prompt("text"), 0.0).await;

    assert_eq!(result.unwrap(), Generation::Blocked("RECITATION".to_string()));
}

#[tokio::test]
async fn no_candidates_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let result = client(&server).generate(&prompt("text"), 0.0).await;

    assert!(matches!(result, Err(LanguageModelError::EmptyResponse)));
}

#[tokio::test]
async fn unauthorized_is_invalid_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = client(&server).generate(&prompt("text"), 0.0).await;

    assert!(matches!(result, Err(LanguageModelError::InvalidApiKey)));
}

#[tokio::test]
async fn rate_limit_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let result = client(&server).generate(&prompt("text"), 0.0).await;

    assert!(matches!(result, Err(LanguageModelError::RateLimited)));
}

#[tokio::test]
async fn api_error_message_is_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": 500, "message": "Internal error encountered." }
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .generate(&prompt("text"), 0.0)
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("Internal error encountered."));
    assert!(!message.contains("test-key"));
}

#[tokio::test]
async fn list_models_follows_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{
                "name": "models/text-embedding-004",
                "supportedGenerationMethods": ["embedContent"]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{
                "name": "models/gemini-2.0-flash",
                "supportedGenerationMethods": ["generateContent", "countTokens"]
            }],
            "nextPageToken": "page-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let models = client(&server).list_models().await.unwrap();

    let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["models/gemini-2.0-flash", "models/text-embedding-004"]);
    assert!(models[0].supports_generation());
    assert!(!models[1].supports_generation());
}

#[tokio::test]
async fn list_models_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client(&server).list_models().await;

    assert!(matches!(result, Err(LanguageModelError::InvalidApiKey)));
}

use mockito::Matcher;
use reqwest::Client;
use serde_json::json;
use smart_companion::config::{AiBackend, CompletionConfig};
use smart_companion::error::{ClientError, EMPTY_COMPLETION_PLACEHOLDER};
use smart_companion::services::CompletionClient;

const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

fn gemini_client(base_url: String) -> CompletionClient {
    CompletionClient::new(
        Client::new(),
        CompletionConfig {
            backend: AiBackend::Gemini,
            base_url,
            api_key: "g-key".to_string(),
            model: "gemini-1.5-flash".to_string(),
            max_tokens: 64,
        },
    )
}

#[tokio::test]
async fn gemini_backend_returns_first_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", "g-key")
        .match_body(Matcher::Json(json!({
            "contents": [{"parts": [{"text": "hello"}]}],
            "generationConfig": {"maxOutputTokens": 64}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{"content": {"parts": [{"text": "hi "}, {"text": "there"}], "role": "model"}}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = gemini_client(server.url());
    assert_eq!(client.backend(), AiBackend::Gemini);
    assert_eq!(client.complete("hello").await.unwrap(), "hi there");
    mock.assert_async().await;
}

#[tokio::test]
async fn gemini_without_candidates_yields_placeholder() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
        .create_async()
        .await;

    let text = gemini_client(server.url()).complete("hello").await.unwrap();
    assert_eq!(text, EMPTY_COMPLETION_PLACEHOLDER);
}

#[tokio::test]
async fn gemini_rejection_is_a_server_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(400)
        .with_body(r#"{"error":{"message":"API key not valid"}}"#)
        .create_async()
        .await;

    let err = gemini_client(server.url()).complete("hello").await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert!(matches!(err, ClientError::Server { ref body, .. } if body.contains("API key not valid")));
}

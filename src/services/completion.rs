//! Клиент генеративного API для экрана чата.
//!
//! Поддерживаются два бэкенда с одинаковым контрактом `complete(prompt)`:
//! 1.  **OpenAI completions**: `POST /v1/completions` с Bearer-ключом.
//! 2.  **Gemini**: `POST /v1beta/models/{model}:generateContent` с ключом в заголовке.
//!
//! Каждый вызов независим: история чата в бэкенд не передаётся, повторов и
//! стриминга нет. Успешный ответ без текста превращается в заглушку, а не в ошибку.

use reqwest::Client;
use tracing::{info, warn};

use crate::config::{AiBackend, CompletionConfig};
use crate::error::{ClientResult, EMPTY_COMPLETION_PLACEHOLDER};
use crate::models::completion::{
    CompletionRequest, CompletionResponse, GenerateContentRequest, GenerateContentResponse,
};
use crate::services::http::{join_url, send_json};

#[derive(Clone)]
pub struct CompletionClient {
    http_client: Client,
    config: CompletionConfig,
}

impl CompletionClient {
    pub fn new(http_client: Client, config: CompletionConfig) -> Self {
        if config.api_key.is_empty() {
            // Не падаем: бэкенд сам отклонит запрос, и это уйдёт в журнал как ошибка
            warn!("Completion API key is empty; requests will be rejected by {}", config.base_url);
        }
        Self { http_client, config }
    }

    pub fn backend(&self) -> AiBackend {
        self.config.backend
    }

    /// Отправляет промпт и возвращает текст первого кандидата.
    pub async fn complete(&self, prompt: &str) -> ClientResult<String> {
        info!(
            "Requesting completion: backend={:?}, model={}, prompt_len={}",
            self.config.backend,
            self.config.model,
            prompt.len()
        );

        let text = match self.config.backend {
            AiBackend::OpenAi => self.complete_openai(prompt).await?,
            AiBackend::Gemini => self.complete_gemini(prompt).await?,
        };

        Ok(text.unwrap_or_else(|| {
            warn!("Completion response had no usable text");
            EMPTY_COMPLETION_PLACEHOLDER.to_string()
        }))
    }

    async fn complete_openai(&self, prompt: &str) -> ClientResult<Option<String>> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            max_tokens: self.config.max_tokens,
        };

        let response: CompletionResponse = send_json(
            self.http_client
                .post(join_url(&self.config.base_url, "v1/completions"))
                .bearer_auth(&self.config.api_key)
                .json(&request),
        )
        .await?;

        Ok(response.into_first_text())
    }

    async fn complete_gemini(&self, prompt: &str) -> ClientResult<Option<String>> {
        let request = GenerateContentRequest::from_prompt(prompt, self.config.max_tokens);
        let path = format!("v1beta/models/{}:generateContent", self.config.model);

        let response: GenerateContentResponse = send_json(
            self.http_client
                .post(join_url(&self.config.base_url, &path))
                .header("x-goog-api-key", &self.config.api_key)
                .json(&request),
        )
        .await?;

        Ok(response.into_first_text())
    }
}

//! Общий HTTP/JSON-помощник для исходящих запросов.
//!
//! Один `reqwest::Client` создаётся в `AppState::new` и передаётся в каждый
//! клиент через конструктор. Здесь же сводится разбор ответа: транспорт,
//! статус, JSON. Повторов нет: любая ошибка окончательна для своего запроса.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tokio::time::Duration;
use tracing::{debug, error, warn};

use crate::config::HttpConfig;
use crate::error::{ClientError, ClientResult};

/// Создаёт HTTP-клиент по настройкам приложения.
pub fn build_http_client(config: &HttpConfig) -> ClientResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(ClientError::from)
}

/// Склеивает базовый URL и путь, не удваивая слэш.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Отправляет запрос и разбирает тело успешного ответа как `T`.
pub async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
    let response = request.send().await.map_err(|e| {
        error!("Request failed before a response arrived: {}", e);
        ClientError::from(e)
    })?;

    let status = response.status();
    let url = response.url().clone();
    debug!("{} answered {}", url, status);

    if !status.is_success() {
        // Тело ошибки может и не прочитаться - тогда показываем только статус
        let body = response.text().await.unwrap_or_default();
        warn!("Unsuccessful response from {}: {} {}", url, status, body);
        return Err(ClientError::Server { status: status.as_u16(), body });
    }

    let bytes = response.bytes().await.map_err(|e| {
        error!("Failed to read response body from {}: {}", url, e);
        ClientError::from(e)
    })?;

    decode_json(&bytes)
}

pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> ClientResult<T> {
    serde_json::from_slice(bytes).map_err(|e| {
        error!("Failed to decode response body: {}", e);
        ClientError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(join_url("http://a/", "/events.json"), "http://a/events.json");
        assert_eq!(join_url("http://a", "v1/completions"), "http://a/v1/completions");
    }

    #[test]
    fn decode_json_maps_to_parse_error() {
        let err = decode_json::<Vec<String>>(b"<html>").unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }
}

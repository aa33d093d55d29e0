use reqwest::Client;
use tracing::{debug, info};

use crate::error::ClientResult;
use crate::models::Event;
use crate::services::http::{decode_json, join_url, send_json};

/// Клиент ленты событий: один GET без параметров и авторизации.
#[derive(Clone)]
pub struct EventFeedClient {
    http_client: Client,
    base_url: String,
}

impl EventFeedClient {
    pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
        Self { http_client, base_url: base_url.into() }
    }

    pub fn events_url(&self) -> String {
        join_url(&self.base_url, "events.json")
    }

    /// Загружает всю ленту. Порядок событий сохраняется как в ответе.
    pub async fn fetch_events(&self) -> ClientResult<Vec<Event>> {
        let url = self.events_url();
        debug!("Fetching events from {}", url);

        // Пустой узел базы отдаётся как `null`
        let events: Option<Vec<Event>> = send_json(self.http_client.get(&url)).await?;
        let events = events.unwrap_or_default();

        info!("Loaded {} events", events.len());
        Ok(events)
    }
}

/// Разбирает тело ленты так же, как `fetch_events`.
pub fn decode_events(body: &[u8]) -> ClientResult<Vec<Event>> {
    let events: Option<Vec<Event>> = decode_json(body)?;
    Ok(events.unwrap_or_default())
}

pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod navigation;
pub mod screens;
pub mod services;
pub mod state;

use std::sync::Arc;

use crate::controllers::{ChatController, EventsController};
use crate::error::ClientResult;
use crate::services::{http::build_http_client, CompletionClient, EventFeedClient};

// Shared state для всего приложения
pub struct AppState {
    pub config: config::Config,
    pub events: EventsController,
    pub chat: ChatController,
}

impl AppState {
    /// Собирает клиентов и контроллеры. HTTP-клиент один на всё приложение
    /// и передаётся в сервисы через конструктор.
    pub fn new(config: config::Config) -> ClientResult<Arc<Self>> {
        let http_client = build_http_client(&config.http)?;

        let feed = EventFeedClient::new(http_client.clone(), config.event_feed.base_url.clone());
        let completion = CompletionClient::new(http_client, config.completion.clone());

        Ok(Arc::new(Self {
            events: EventsController::new(feed),
            chat: ChatController::new(completion),
            config,
        }))
    }
}

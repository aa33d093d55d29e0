use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::models::EventsState;
use crate::services::EventFeedClient;
use crate::state::Store;

/// Владелец состояния экрана событий.
///
/// Каждый `refresh` получает номер поколения. Публикуется только ответ
/// самого свежего запроса: устаревшие и пришедшие после `detach` отбрасываются.
pub struct EventsController {
    client: EventFeedClient,
    store: Store<EventsState>,
    generation: AtomicU64,
}

impl EventsController {
    pub fn new(client: EventFeedClient) -> Self {
        Self {
            client,
            store: Store::default(),
            generation: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> EventsState {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<EventsState> {
        self.store.subscribe()
    }

    /// Перезагружает ленту. Возвращает `true`, если результат попал в состояние.
    pub async fn refresh(&self) -> bool {
        let mut generation = 0;
        self.store.update(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            state.loading = true;
        });

        let result = self.client.fetch_events().await;

        let published = self.store.update_if(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            state.loading = false;
            match result {
                Ok(events) => {
                    // Список заменяется целиком, без слияния
                    state.events = events;
                    state.error = None;
                }
                Err(e) => {
                    state.error = Some(e.to_string());
                }
            }
            true
        });

        if published {
            info!("Events state updated (generation {})", generation);
        } else {
            warn!("Dropping superseded events response (generation {})", generation);
        }
        published
    }

    /// Экран закрыт: ответы запросов в полёте больше не нужны.
    pub fn detach(&self) {
        self.store.update(|state| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            state.loading = false;
        });
    }
}

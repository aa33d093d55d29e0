use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::error::{ClientError, ClientResult};
use crate::models::{Author, ChatEntry, ChatInput, ChatState};
use crate::services::CompletionClient;
use crate::state::Store;

/// Владелец журнала обмена на экране чата.
///
/// Журнал только растёт: записи не удаляются и не правятся, пока жив экран.
pub struct ChatController {
    client: CompletionClient,
    store: Store<ChatState>,
    session: AtomicU64,
}

impl ChatController {
    pub fn new(client: CompletionClient) -> Self {
        Self {
            client,
            store: Store::default(),
            session: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> ChatState {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ChatState> {
        self.store.subscribe()
    }

    /// Отправляет промпт и дописывает ответ (или текст ошибки) в журнал.
    ///
    /// Пустой ввод отклоняется до сетевого вызова и журнал не трогает.
    pub async fn submit(&self, prompt: &str) -> ClientResult<String> {
        let input = ChatInput { prompt: prompt.to_string() };
        if input.validate().is_err() {
            debug!("Ignoring blank prompt");
            return Err(ClientError::BlankPrompt);
        }

        let mut session = 0;
        self.store.update(|state| {
            session = self.session.load(Ordering::SeqCst);
            state.entries.push(ChatEntry::new(Author::User, input.prompt.as_str()));
            state.pending += 1;
        });

        let result = self.client.complete(&input.prompt).await;

        let entry = match &result {
            Ok(text) => ChatEntry::new(Author::Assistant, text.as_str()),
            Err(e) => ChatEntry::new(Author::Error, e.to_string()),
        };

        let appended = self.store.update_if(|state| {
            if self.session.load(Ordering::SeqCst) != session {
                return false;
            }
            state.pending = state.pending.saturating_sub(1);
            state.entries.push(entry);
            true
        });

        if appended {
            info!("Chat exchange recorded ({} entries)", self.state().entries.len());
        } else {
            warn!("Chat screen was closed; dropping late completion");
        }
        result
    }

    /// Экран чата закрыт: журнал живёт только вместе с экраном.
    pub fn detach(&self) {
        self.store.update(|state| {
            self.session.fetch_add(1, Ordering::SeqCst);
            *state = ChatState::default();
        });
    }
}

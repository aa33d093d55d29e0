use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
    Error,
}

/// Одна строка журнала обмена.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatEntry {
    pub id: Uuid,
    pub author: Author,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl ChatEntry {
    pub fn new(author: Author, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            text: text.into(),
            at: Utc::now(),
        }
    }
}

/// Журнал обмена живёт только в памяти, пока открыт экран чата.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
    /// Сколько запросов ещё ждут ответа.
    pub pending: usize,
}

impl ChatState {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.text.as_str())
    }
}

/// Ввод пользователя до отправки в бэкенд.
#[derive(Debug, Validate)]
pub struct ChatInput {
    #[validate(custom(function = "validate_not_blank"))]
    pub prompt: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

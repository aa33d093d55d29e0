use serde::{Deserialize, Serialize};

pub const UNTITLED_EVENT: &str = "Untitled";

/// Запись из ленты событий. Все поля необязательные: лента ничего не гарантирует.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Event {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED_EVENT)
    }

    /// Только события с непустым id можно открыть в деталях.
    pub fn has_id(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// Состояние экрана списка событий.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventsState {
    pub events: Vec<Event>,
    pub error: Option<String>,
    pub loading: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_unknown_fields_are_tolerated() {
        let event: Event =
            serde_json::from_str(r#"{"id":"7","imageUrl":"https://x/y.png","capacity":120}"#).unwrap();
        assert_eq!(event.id.as_deref(), Some("7"));
        assert_eq!(event.image_url.as_deref(), Some("https://x/y.png"));
        assert_eq!(event.title, None);
        assert_eq!(event.display_title(), UNTITLED_EVENT);
    }

    #[test]
    fn explicit_nulls_become_none() {
        let event: Event = serde_json::from_str(r#"{"id":null,"title":"Gala"}"#).unwrap();
        assert_eq!(event.id, None);
        assert!(!event.has_id());
        assert_eq!(event.display_title(), "Gala");
    }

    #[test]
    fn empty_id_cannot_be_opened() {
        let event = Event { id: Some(String::new()), ..Default::default() };
        assert!(!event.has_id());
    }
}

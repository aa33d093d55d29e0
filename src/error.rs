use thiserror::Error;

/// Текст, который показываем вместо ответа, если бэкенд вернул пустой список кандидатов.
pub const EMPTY_COMPLETION_PLACEHOLDER: &str = "The assistant returned no usable text.";

/// Ошибки HTTP-клиентов (лента событий и чат).
///
/// `Display` каждого варианта уже пригоден для показа пользователю:
/// контроллеры превращают ошибку в строку и кладут её в состояние экрана.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// DNS, соединение, таймаут или обрыв при чтении тела.
    #[error("Network error: {0}")]
    Transport(String),

    /// Сервер ответил не-2xx.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// Тело ответа не разобралось как ожидаемый JSON.
    #[error("Malformed response: {0}")]
    Parse(String),

    /// Пустой ввод отсекается до любого сетевого вызова.
    #[error("Prompt must not be blank")]
    BlankPrompt,
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest::Error несёт URL и причину, этого достаточно для экрана
        ClientError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Parse(e.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_message_carries_status_and_body() {
        let err = ClientError::Server { status: 401, body: "invalid api key".to_string() };
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "Server error (401): invalid api key");
    }

    #[test]
    fn parse_error_from_serde() {
        let err: ClientError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, ClientError::Parse(_)));
        assert_eq!(err.status(), None);
    }
}

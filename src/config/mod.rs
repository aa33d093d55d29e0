use serde::Deserialize;
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Ключ API, зашитый при сборке (`SMART_COMPANION_API_KEY=... cargo build`).
/// Если переменной не было, ключ пустой и бэкенд просто отклонит запрос.
const BUILD_TIME_API_KEY: &str = match option_env!("SMART_COMPANION_API_KEY") {
    Some(key) => key,
    None => "",
};

pub const DEFAULT_EVENT_FEED_URL: &str =
    "https://isen-smart-companion-default-rtdb.europe-west1.firebasedatabase.app";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo-instruct";
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_MAX_TOKENS: u32 = 150;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("AI_BACKEND must be 'openai' or 'gemini', got '{0}'")]
    UnknownBackend(String),
}

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub http: HttpConfig,
    pub event_feed: EventFeedConfig,
    pub completion: CompletionConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

// Общий HTTP-клиент
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

// Лента событий
#[derive(Debug, Clone, Deserialize)]
pub struct EventFeedConfig {
    pub base_url: String,
}

/// Какой генеративный бэкенд обслуживает чат.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiBackend {
    OpenAi,
    Gemini,
}

impl AiBackend {
    pub fn default_base_url(self) -> &'static str {
        match self {
            AiBackend::OpenAi => DEFAULT_OPENAI_URL,
            AiBackend::Gemini => DEFAULT_GEMINI_URL,
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            AiBackend::OpenAi => DEFAULT_OPENAI_MODEL,
            AiBackend::Gemini => DEFAULT_GEMINI_MODEL,
        }
    }
}

impl FromStr for AiBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(AiBackend::OpenAi),
            "gemini" => Ok(AiBackend::Gemini),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

// Настройки генеративного API
#[derive(Clone, Deserialize)]
pub struct CompletionConfig {
    pub backend: AiBackend,
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
}

// Ключ не должен попадать в логи
impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("backend", &self.backend)
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "<empty>" } else { "<redacted>" })
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Собирает конфиг из произвольного источника переменных.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let backend: AiBackend = var("AI_BACKEND", "openai").parse()?;

        Ok(Config {
            app: AppConfig {
                environment: var("ENVIRONMENT", "development"),
                rust_log: var("RUST_LOG", "smart_companion=info"),
            },
            http: HttpConfig {
                timeout_seconds: parse_number("HTTP_TIMEOUT_SECONDS", var("HTTP_TIMEOUT_SECONDS", "30"))?,
                user_agent: var(
                    "HTTP_USER_AGENT",
                    concat!("smart-companion/", env!("CARGO_PKG_VERSION")),
                ),
            },
            event_feed: EventFeedConfig {
                base_url: var("EVENT_FEED_URL", DEFAULT_EVENT_FEED_URL),
            },
            completion: CompletionConfig {
                backend,
                base_url: var("AI_BASE_URL", backend.default_base_url()),
                api_key: var("AI_API_KEY", BUILD_TIME_API_KEY),
                model: var("AI_MODEL", backend.default_model()),
                max_tokens: parse_number("AI_MAX_TOKENS", var("AI_MAX_TOKENS", &DEFAULT_MAX_TOKENS.to_string()))?,
            },
        })
    }
}

fn parse_number<T: FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { name, value })
}

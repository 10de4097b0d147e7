use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub app_title: String,
    pub notice_config: NoticeConfig,
}

/// Auto-dismiss delays for the notice stack, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeConfig {
    pub success_timeout_ms: u32,
    pub error_timeout_ms: u32,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            success_timeout_ms: 3000,
            error_timeout_ms: 5000,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            app_title: "Interview Portal".to_string(),
            notice_config: NoticeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            app_title: option_env!("APP_TITLE")
                .map(str::to_string)
                .unwrap_or(defaults.app_title),
            notice_config: NoticeConfig {
                success_timeout_ms: option_env!("NOTICE_SUCCESS_TIMEOUT_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.notice_config.success_timeout_ms),
                error_timeout_ms: option_env!("NOTICE_ERROR_TIMEOUT_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.notice_config.error_timeout_ms),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Log level handed to `wasm_logger` at startup
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

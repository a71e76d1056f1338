use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

/// Distinguishes runtime behavior for different stages of the host app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the wizard host.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub api: ApiConfig,
    pub telemetry: TelemetryConfig,
    pub submission: SubmissionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let base_url_raw =
            env::var("API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        let base_url = Url::parse(&base_url_raw).map_err(|source| ConfigError::InvalidBaseUrl {
            value: base_url_raw,
            source,
        })?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let redirect_delay_ms = env::var("REDIRECT_DELAY_MS")
            .unwrap_or_else(|_| "1500".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidRedirectDelay)?;

        Ok(Self {
            environment,
            api: ApiConfig { base_url },
            telemetry: TelemetryConfig { log_level },
            submission: SubmissionConfig { redirect_delay_ms },
        })
    }
}

/// Where the listings backend lives.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Submission pipeline tuning.
#[derive(Debug, Clone)]
pub struct SubmissionConfig {
    pub redirect_delay_ms: u64,
}

impl SubmissionConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBaseUrl {
        value: String,
        source: url::ParseError,
    },
    InvalidRedirectDelay,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl { value, .. } => {
                write!(f, "API_BASE_URL '{}' is not a valid URL", value)
            }
            ConfigError::InvalidRedirectDelay => {
                write!(f, "REDIRECT_DELAY_MS must be a whole number of milliseconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidBaseUrl { source, .. } => Some(source),
            ConfigError::InvalidRedirectDelay => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("API_BASE_URL");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("REDIRECT_DELAY_MS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.api.base_url.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(
            config.submission.redirect_delay(),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("API_BASE_URL", "not a url");
        let result = AppConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_redirect_delay() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("REDIRECT_DELAY_MS", "soon");
        let result = AppConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidRedirectDelay)));
        reset_env();
    }
}

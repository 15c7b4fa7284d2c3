//! CLI configuration.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use larek_client::ApiUrls;
use serde::{Deserialize, Serialize};

/// Environment variable overriding `api.origin`.
pub const ORIGIN_ENV: &str = "API_ORIGIN";
/// Environment variable overriding `logging.level`.
pub const LOG_ENV: &str = "LAREK_LOG";

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LarekConfig {
    /// Shop API location.
    #[serde(default)]
    pub api: ApiConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LarekConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply `API_ORIGIN` and `LAREK_LOG` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by variable name. Empty values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(origin) = present(ORIGIN_ENV) {
            self.api.origin = origin;
        }
        if let Some(level) = present(LOG_ENV) {
            self.logging.level = level;
        }
        self
    }

    /// API and CDN base URLs.
    pub fn urls(&self) -> ApiUrls {
        ApiUrls::new(&self.api.origin, &self.api.api_path, &self.api.cdn_path)
    }
}

/// Shop API location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the shop.
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Path of the JSON API under the origin.
    #[serde(default = "default_api_path")]
    pub api_path: String,

    /// Path of product images under the origin.
    #[serde(default = "default_cdn_path")]
    pub cdn_path: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_origin() -> String {
    "https://larek-api.nomoreparties.co".to_string()
}

fn default_api_path() -> String {
    larek_client::DEFAULT_API_PATH.to_string()
}

fn default_cdn_path() -> String {
    larek_client::DEFAULT_CDN_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            api_path: default_api_path(),
            cdn_path: default_cdn_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level or filter directive. `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            )),
        }
    }
}

/// Generate a default larek.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Web-larek storefront configuration

[api]
# Overridden by the {origin_env} environment variable.
origin = "{origin}"
api_path = "{api_path}"
cdn_path = "{cdn_path}"
timeout_secs = {timeout}

[logging]
# Overridden by {log_env}; RUST_LOG wins over both.
level = "info"
# compact | pretty | json
format = "compact"
"#,
        origin_env = ORIGIN_ENV,
        log_env = LOG_ENV,
        origin = default_origin(),
        api_path = default_api_path(),
        cdn_path = default_cdn_path(),
        timeout = default_timeout_secs(),
    )
}

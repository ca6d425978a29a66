//! Server configuration
//!
//! Configuration is assembled once at startup from, in increasing priority:
//! 1. Built-in defaults
//! 2. An optional TOML file (`config.toml`, or the path in `POKEDEX_CONFIG`)
//! 3. `POKEDEX__*` environment variables (e.g. `POKEDEX__SERVER__PORT=8080`)
//! 4. The deployment variables `ES_CONNECTION_URL`, `ES_INDEX` and `STAGE`
//!
//! A `.env` file in the working directory is loaded first when present.
//! The resulting value is immutable and shared through `AppState`.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::{Error, Result};

const ENV_PREFIX: &str = "POKEDEX";
const CONFIG_PATH_ENV: &str = "POKEDEX_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Deployment stages accepted for `STAGE` / `logging.deployment_environment`.
pub const STAGES: [&str; 3] = ["development", "staging", "production"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub elasticsearch: ElasticsearchConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. Empty disables CORS headers.
    pub cors_origins: Vec<String>,
    pub max_request_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: Vec::new(),
            max_request_body_size: 64 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticsearchConfig {
    /// Base URL of the cluster, e.g. `http://elasticsearch:9200`
    pub url: String,
    pub index: String,
    pub timeout_seconds: u64,
}

impl Default for ElasticsearchConfig {
    fn default() -> Self {
        Self {
            url: "http://elasticsearch:9200".to_string(),
            index: "pokemon".to_string(),
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Highest National Pokédex Number served by number lookups and `/pokemon`.
    pub max_pokedex_number: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_pokedex_number: 1025,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for this service's targets when `RUST_LOG` is unset
    pub level: String,
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,
    pub file_rotation: FileRotation,
    pub opentelemetry_enabled: bool,
    pub otlp_endpoint: String,
    pub otlp_timeout_seconds: u64,
    pub trace_sample_ratio: f64,
    pub service_name: String,
    pub service_version: Option<String>,
    pub deployment_environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_enabled: false,
            file_directory: "logs".to_string(),
            file_prefix: "pokedex-server".to_string(),
            file_rotation: FileRotation::Daily,
            opentelemetry_enabled: false,
            otlp_endpoint: "http://localhost:4317".to_string(),
            otlp_timeout_seconds: 10,
            trace_sample_ratio: 1.0,
            service_name: "pokedex-server".to_string(),
            service_version: None,
            deployment_environment: "development".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRotation {
    Minutely,
    Hourly,
    Daily,
    Never,
}

impl Config {
    /// Load configuration from the file named by `POKEDEX_CONFIG` (or
    /// `config.toml`) and the environment.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Load configuration using `path` as the optional config file.
    pub fn load_from(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(
                config::File::with_name(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            )
            .set_override_option("elasticsearch.url", std::env::var("ES_CONNECTION_URL").ok())?
            .set_override_option("elasticsearch.index", std::env::var("ES_INDEX").ok())?
            .set_override_option(
                "logging.deployment_environment",
                std::env::var("STAGE").ok(),
            )?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Check values that deserialization cannot.
    pub fn validate(&self) -> Result<()> {
        let es = &self.elasticsearch;
        url::Url::parse(&es.url).map_err(|e| {
            Error::Config(format!("elasticsearch.url '{}' is not a valid URL: {e}", es.url))
        })?;
        if es.index.trim().is_empty() {
            return Err(Error::Config("elasticsearch.index must not be empty".into()));
        }
        if es.timeout_seconds == 0 {
            return Err(Error::Config(
                "elasticsearch.timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.search.max_pokedex_number < 1 {
            return Err(Error::Config(
                "search.max_pokedex_number must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.logging.trace_sample_ratio) {
            return Err(Error::Config(
                "logging.trace_sample_ratio must be within [0, 1]".into(),
            ));
        }
        if !STAGES.contains(&self.logging.deployment_environment.as_str()) {
            return Err(Error::Config(format!(
                "STAGE={} is an invalid value (expected one of {})",
                self.logging.deployment_environment,
                STAGES.join(", ")
            )));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> std::result::Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

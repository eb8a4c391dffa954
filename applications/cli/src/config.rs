//! Application configuration
use anyhow::{bail, Context, Result};
use config::{Config, ConfigBuilder, Environment, File};
use dropbeat_client::{
    ClientConfig, DEFAULT_API_VERSION, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
use dropbeat_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "dropbeat.toml";

/// Log filter used when neither `RUST_LOG` nor `log.filter` is set.
pub const DEFAULT_LOG_FILTER: &str = "dropbeat=info,dropbeat_playback=info,dropbeat_client=info";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        default_server()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins over it
    #[serde(default)]
    pub filter: Option<String>,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(File::from(path.to_path_buf()).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(File::from(default_path));
                }
            }
        }

        // Override with environment variables (DROPBEAT_SERVER__URL, ...)
        settings = settings.add_source(environment());

        Self::from_builder(settings)
    }

    fn from_builder(settings: ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        settings
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.url.trim().is_empty() {
            bail!("Server URL is required (set server.url or DROPBEAT_SERVER__URL)");
        }
        if self.server.timeout_secs == 0 || self.server.connect_timeout_secs == 0 {
            bail!("Server timeouts must be greater than zero");
        }

        Ok(())
    }

    /// Settings for the HTTP client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.server.url.clone())
            .with_api_version(self.server.api_version.clone())
            .with_timeouts(self.server.timeout_secs, self.server.connect_timeout_secs)
    }

    /// Effective log filter (before `RUST_LOG` is consulted)
    pub fn log_filter(&self) -> &str {
        self.log.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("DROPBEAT")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        url: String::new(),
        api_version: default_api_version(),
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

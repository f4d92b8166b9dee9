use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct JotboardConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

/// Limits enforced by the note store.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of notes held at once.
    pub capacity: usize,
    /// Titles are cut to this many characters before escaping.
    pub title_max_chars: usize,
    /// Content is cut to this many characters; it is never escaped.
    pub content_max_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            log_level: "info".into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: 5,
            title_max_chars: 250,
            content_max_chars: 20_000,
        }
    }
}

/// Returns `~/.jotboard/`, or a relative `.jotboard` when no home directory is known.
pub fn default_jotboard_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".jotboard"))
        .unwrap_or_else(|| PathBuf::from(".jotboard"))
}

/// Returns the default config file path: `~/.jotboard/config.toml`
pub fn default_config_path() -> PathBuf {
    default_jotboard_dir().join("config.toml")
}

impl JotboardConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            JotboardConfig::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    /// (JOTBOARD_HOST, JOTBOARD_PORT, JOTBOARD_LOG_LEVEL, JOTBOARD_CAPACITY).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("JOTBOARD_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("JOTBOARD_PORT") {
            match val.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!(value = %val, "ignoring unparseable JOTBOARD_PORT"),
            }
        }
        if let Ok(val) = std::env::var("JOTBOARD_LOG_LEVEL") {
            self.server.log_level = val;
        }
        if let Ok(val) = std::env::var("JOTBOARD_CAPACITY") {
            match val.parse() {
                Ok(capacity) => self.store.capacity = capacity,
                Err(_) => warn!(value = %val, "ignoring unparseable JOTBOARD_CAPACITY"),
            }
        }
    }

    /// Reject settings the store cannot operate with.
    pub fn validate(&self) -> Result<()> {
        if self.store.capacity == 0 {
            bail!("store.capacity must be at least 1");
        }
        Ok(())
    }

    /// `host:port` string for the HTTP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

//! Application configuration

pub mod file;
pub mod prompts;

use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::SessionLimits;

pub use file::SettingsFile;

/// Which flavour of the assistant to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    #[default]
    Classic,
    /// Frosted theme plus the motivational-quote rule
    Glass,
}

impl FromStr for Edition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(Edition::Classic),
            "glass" => Ok(Edition::Glass),
            other => Err(ConfigError::Validation(format!("unknown edition: {other}"))),
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edition::Classic => f.write_str("classic"),
            Edition::Glass => f.write_str("glass"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub edition: Edition,
    pub reply_delay_ms: u64,
    pub system_prompt: String,
    pub session_idle_secs: u64,
    pub max_sessions: usize,
}

impl Config {
    /// Build the configuration from the optional settings file named by
    /// `OFFLINE_ASSISTANT_CONFIG`, then apply environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings = match env::var("OFFLINE_ASSISTANT_CONFIG") {
            Ok(path) => SettingsFile::from_file(Path::new(&path))?,
            Err(_) => SettingsFile::default(),
        };

        Self::resolve(settings, |key| env::var(key).ok())
    }

    /// Merge file settings with overrides looked up through `var`.
    fn resolve(
        settings: SettingsFile,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let edition: Edition = var("ASSISTANT_EDITION")
            .unwrap_or(settings.assistant.edition)
            .parse()?;

        let port = match var("PORT") {
            Some(p) => p
                .parse()
                .map_err(|_| ConfigError::Validation(format!("invalid PORT: {p}")))?,
            None => settings.server.port,
        };

        let reply_delay_ms = match var("REPLY_DELAY_MS") {
            Some(ms) => ms
                .parse()
                .map_err(|_| ConfigError::Validation(format!("invalid REPLY_DELAY_MS: {ms}")))?,
            None => settings.assistant.reply_delay_ms,
        };

        let session_idle_secs = match var("SESSION_IDLE_SECS") {
            Some(secs) => secs.parse().map_err(|_| {
                ConfigError::Validation(format!("invalid SESSION_IDLE_SECS: {secs}"))
            })?,
            None => settings.sessions.idle_timeout_secs,
        };
        if session_idle_secs == 0 {
            return Err(ConfigError::Validation(
                "session idle timeout must be at least 1 second".into(),
            ));
        }

        let max_sessions = match var("MAX_SESSIONS") {
            Some(n) => n
                .parse()
                .map_err(|_| ConfigError::Validation(format!("invalid MAX_SESSIONS: {n}")))?,
            None => settings.sessions.max_sessions,
        };
        if max_sessions == 0 {
            return Err(ConfigError::Validation(
                "max_sessions must be at least 1".into(),
            ));
        }

        let system_prompt = settings
            .assistant
            .system_prompt
            .unwrap_or_else(|| prompts::system_prompt(edition).to_string());

        Ok(Self {
            host: var("HOST").unwrap_or(settings.server.host),
            port,
            edition,
            reply_delay_ms,
            system_prompt,
            session_idle_secs,
            max_sessions,
        })
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn session_limits(&self) -> SessionLimits {
        SessionLimits {
            idle_timeout: Duration::from_secs(self.session_idle_secs),
            max_sessions: self.max_sessions,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let edition = Edition::default();
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
            edition,
            reply_delay_ms: 800,
            system_prompt: prompts::system_prompt(edition).to_string(),
            session_idle_secs: 30 * 60,
            max_sessions: 1000,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

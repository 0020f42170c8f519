//! Settings loaded from an optional TOML file
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [assistant]
//! edition = "glass"
//! reply_delay_ms = 0
//! system_prompt = "You are a terse assistant."
//!
//! [sessions]
//! idle_timeout_secs = 600
//! max_sessions = 200
//! ```
//!
//! Every key is optional; missing keys fall back to the built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ConfigError;

/// Root of the settings file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    /// Listener settings
    #[serde(default)]
    pub server: ServerSection,

    /// Assistant behaviour
    #[serde(default)]
    pub assistant: AssistantSection,

    /// Session retention
    #[serde(default)]
    pub sessions: SessionsSection,
}

impl SettingsFile {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let settings: SettingsFile = toml::from_str(content)?;
        Ok(settings)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantSection {
    /// "classic" or "glass"
    #[serde(default = "default_edition")]
    pub edition: String,

    /// Artificial "thinking" pause before each reply
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Overrides the edition's built-in system prompt
    #[serde(default)]
    pub system_prompt: Option<String>,
}

fn default_edition() -> String {
    "classic".to_string()
}

fn default_reply_delay_ms() -> u64 {
    800
}

impl Default for AssistantSection {
    fn default() -> Self {
        Self {
            edition: default_edition(),
            reply_delay_ms: default_reply_delay_ms(),
            system_prompt: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsSection {
    /// Sessions untouched for this long are dropped
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,

    /// Upper bound on live sessions; the least recently used goes first
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

fn default_idle_timeout_secs() -> u64 {
    30 * 60
}

fn default_max_sessions() -> usize {
    1000
}

impl Default for SessionsSection {
    fn default() -> Self {
        Self {
            idle_timeout_secs: default_idle_timeout_secs(),
            max_sessions: default_max_sessions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_settings() {
        let settings = SettingsFile::from_str(
            r#"
[server]
host = "0.0.0.0"
port = 8080

[assistant]
edition = "glass"
reply_delay_ms = 0
system_prompt = "Be brief."

[sessions]
idle_timeout_secs = 60
max_sessions = 5
"#,
        )
        .unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.assistant.edition, "glass");
        assert_eq!(settings.assistant.reply_delay_ms, 0);
        assert_eq!(settings.assistant.system_prompt.as_deref(), Some("Be brief."));
        assert_eq!(settings.sessions.idle_timeout_secs, 60);
        assert_eq!(settings.sessions.max_sessions, 5);
    }

    #[test]
    fn test_empty_settings_use_defaults() {
        let settings = SettingsFile::from_str("").unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.assistant.edition, "classic");
        assert_eq!(settings.assistant.reply_delay_ms, 800);
        assert!(settings.assistant.system_prompt.is_none());
        assert_eq!(settings.sessions.idle_timeout_secs, 1800);
        assert_eq!(settings.sessions.max_sessions, 1000);
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = SettingsFile::from_str("[server\nport = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}

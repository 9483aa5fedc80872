//! Jukebox settings
//!
//! Settings are layered: struct defaults, then an optional config file, then
//! `JUKEBOX_*` environment variables (`JUKEBOX_QUEUE_SIZE=41` sets
//! `queue.size`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigurationError;

const ENV_PREFIX: &str = "JUKEBOX";

/// Catalog repository settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscographySettings {
    /// Location of the catalog, e.g. `file:///srv/catalog.json`
    pub url: String,
    pub username: String,
    pub secret: String,
}

/// Playback queue settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueSettings {
    pub url: String,
    /// Maximum number of queued tracks
    pub size: usize,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            url: "mem://in-memory-queue".to_string(),
            size: 200,
        }
    }
}

/// Playback engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub url: String,
    /// Poll interval in milliseconds while a track is playing
    pub tick: u64,
    /// Milliseconds to wait before polling an empty queue again
    pub backoff: u64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            url: "local://test-player".to_string(),
            tick: 1000,
            backoff: 2000,
        }
    }
}

/// Credit ledger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditSettings {
    pub url: String,
}

impl Default for CreditSettings {
    fn default() -> Self {
        Self {
            url: "mem://in-memory-store".to_string(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub host: String,
    pub port: u16,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 80,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    /// Filter directive understood by `EnvFilter`, e.g. `info` or `jukebox=debug`
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Configuration options for the jukebox
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub discography: DiscographySettings,
    pub queue: QueueSettings,
    pub player: PlayerSettings,
    pub credit: CreditSettings,
    pub http: HttpSettings,
    pub logger: LoggerSettings,
}

impl Settings {
    /// Load settings from an optional file and the process environment
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigurationError> {
        Self::load_from(file, None)
    }

    /// Load settings with an explicit environment map instead of the process
    /// environment
    pub fn load_from(
        file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigurationError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = file {
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator("_")
                .try_parsing(true)
                .source(env),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Basic sanity checks on loaded values
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.queue.size == 0 {
            return Err(ConfigurationError::Invalid(
                "queue.size must be >= 1".to_string(),
            ));
        }
        if self.player.tick == 0 || self.player.backoff == 0 {
            return Err(ConfigurationError::Invalid(
                "player intervals must be >= 1ms".to_string(),
            ));
        }
        Ok(())
    }

    /// Socket address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http.host, self.http.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.discography.url, "");
        assert_eq!(settings.discography.username, "");
        assert_eq!(settings.discography.secret, "");
        assert_eq!(settings.queue.url, "mem://in-memory-queue");
        assert_eq!(settings.queue.size, 200);
        assert_eq!(settings.player.url, "local://test-player");
        assert_eq!(settings.credit.url, "mem://in-memory-store");
        assert_eq!(settings.http.port, 80);
        assert_eq!(settings.http.host, "127.0.0.1");
        assert_eq!(settings.logger.level, "info");
    }

    #[test]
    fn test_empty_environment_keeps_defaults() {
        let settings = Settings::load_from(None, env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_environment_overrides() {
        let settings = Settings::load_from(
            None,
            env(&[
                ("JUKEBOX_DISCOGRAPHY_URL", "disc-url"),
                ("JUKEBOX_DISCOGRAPHY_USERNAME", "disc-user"),
                ("JUKEBOX_DISCOGRAPHY_SECRET", "disc-secret"),
                ("JUKEBOX_QUEUE_URL", "queue-url"),
                ("JUKEBOX_QUEUE_SIZE", "41"),
                ("JUKEBOX_PLAYER_URL", "player-url"),
                ("JUKEBOX_HTTP_PORT", "118"),
                ("JUKEBOX_HTTP_HOST", "http-host"),
                ("JUKEBOX_CREDIT_URL", "credit-url"),
                ("UNRELATED_VAR", "ignored"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.discography.url, "disc-url");
        assert_eq!(settings.discography.username, "disc-user");
        assert_eq!(settings.discography.secret, "disc-secret");
        assert_eq!(settings.queue.url, "queue-url");
        assert_eq!(settings.queue.size, 41);
        assert_eq!(settings.player.url, "player-url");
        assert_eq!(settings.http.port, 118);
        assert_eq!(settings.http.host, "http-host");
        assert_eq!(settings.credit.url, "credit-url");
        assert_eq!(settings.bind_addr(), "http-host:118");
    }

    #[test]
    fn test_file_then_environment() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[queue]\nsize = 5\n\n[http]\nport = 8080\n\n[logger]\nformat = \"json\""
        )
        .unwrap();

        let settings =
            Settings::load_from(Some(file.path()), env(&[("JUKEBOX_HTTP_PORT", "9000")])).unwrap();
        assert_eq!(settings.queue.size, 5);
        assert_eq!(settings.queue.url, "mem://in-memory-queue");
        assert_eq!(settings.http.port, 9000);
        assert_eq!(settings.logger.format, LogFormat::Json);
    }

    #[test]
    fn test_zero_queue_size_is_rejected() {
        let result = Settings::load_from(None, env(&[("JUKEBOX_QUEUE_SIZE", "0")]));
        assert!(matches!(result, Err(ConfigurationError::Invalid(_))));
    }
}

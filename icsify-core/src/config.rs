//! User configuration at ~/.config/icsify/config.toml.
//!
//! Values can be overridden with `ICSIFY_*` environment variables, e.g.
//! `ICSIFY_DEFAULT_TIMEZONE=Europe/Berlin` or `ICSIFY_SERVER__PORT=8080`.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IcsifyError, IcsifyResult};

static DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4097;

/// Zone used when neither the caller, the config, nor the system names one.
pub const FALLBACK_TIMEZONE: &str = "UTC";

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct IcsifyConfig {
    /// Timezone attached to generated events when the caller gives none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_timezone: Option<String>,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Settings for `icsify-server`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port`, ready for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl IcsifyConfig {
    pub fn config_path() -> IcsifyResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| IcsifyError::Config("Could not determine config directory".into()))?
            .join("icsify");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, creating a commented default file first if
    /// there is none.
    pub fn load() -> IcsifyResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from `path` (which may be missing) plus the environment.
    pub fn load_from(path: &Path) -> IcsifyResult<Self> {
        debug!(path = %path.display(), "Loading config");

        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("ICSIFY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| IcsifyError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| IcsifyError::Config(e.to_string()))
    }

    /// Save to ~/.config/icsify/config.toml
    pub fn save(&self) -> IcsifyResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> IcsifyResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| IcsifyError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| IcsifyError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> IcsifyResult<()> {
        let contents = format!(
            "\
# icsify configuration

# Timezone attached to generated events (defaults to the system timezone):
# default_timezone = \"America/Los_Angeles\"

# [server]
# host = \"{DEFAULT_HOST}\"
# port = {DEFAULT_PORT}
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                IcsifyError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| IcsifyError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// The timezone to use when a caller doesn't give one: the configured
    /// default, else the system zone, else UTC.
    pub fn timezone(&self) -> String {
        self.default_timezone
            .clone()
            .filter(|tz| !tz.trim().is_empty())
            .or_else(|| iana_time_zone::get_timezone().ok())
            .unwrap_or_else(|| FALLBACK_TIMEZONE.to_string())
    }
}

/// Whether `name` is a zone in the IANA database.
///
/// Only used for warnings: TZIDs are written to calendar files verbatim.
pub fn is_known_timezone(name: &str) -> bool {
    name.parse::<chrono_tz::Tz>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = IcsifyConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.server.bind_addr(), "127.0.0.1:4097");
    }

    #[test]
    fn test_default_file_is_all_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        IcsifyConfig::create_default_config(&path).unwrap();
        let config = IcsifyConfig::load_from(&path).unwrap();

        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = IcsifyConfig {
            default_timezone: Some("Europe/Berlin".to_string()),
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
        };
        config.save_to(&path).unwrap();

        let loaded = IcsifyConfig::load_from(&path).unwrap();
        assert_eq!(loaded.default_timezone.as_deref(), Some("Europe/Berlin"));
        assert_eq!(loaded.server.bind_addr(), "0.0.0.0:8080");
        assert_eq!(loaded.timezone(), "Europe/Berlin");
    }

    #[test]
    fn test_blank_default_timezone_falls_back() {
        let config = IcsifyConfig {
            default_timezone: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(!config.timezone().trim().is_empty());
    }

    #[test]
    fn test_known_timezones() {
        assert!(is_known_timezone("America/Los_Angeles"));
        assert!(is_known_timezone("UTC"));
        assert!(!is_known_timezone("Mars/Olympus_Mons"));
    }
}

//
//  cloudfoundry-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loading, saving and accessing the `cf` CLI settings, stored as TOML in a
//! platform-specific directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/cf/config.toml`
//! - **macOS**: `~/Library/Application Support/cf/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\cf\config.toml`
//!
//! Setting `CF_CONFIG` to a file path overrides the location.
//!
//! ## Example Configuration File
//!
//! ```toml
//! api = "https://api.example.com"
//! token = "eyJhbGciOi..."
//! skip_ssl_validation = false
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cloudfoundry_client::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("api", "https://api.example.com".to_string());
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::auth::Credential;

/// API root used when none is configured.
pub const DEFAULT_API: &str = "https://api.run.pivotal.io";

/// Environment variable that overrides the configuration file path.
pub const CONFIG_ENV: &str = "CF_CONFIG";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &["api", "token", "username", "password", "skip_ssl_validation"];

/// Configuration for the `cf` CLI.
///
/// All fields use `#[serde(default)]`, so a partial file is valid.
///
/// ```rust
/// use cloudfoundry_client::config::{Config, DEFAULT_API};
///
/// let config = Config::default();
/// assert_eq!(config.api, DEFAULT_API);
/// assert!(config.credential().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root URL of the Cloud Controller API.
    pub api: String,

    /// Bearer token sent as `Authorization: bearer <token>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Username for basic authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Password for basic authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Accept invalid TLS certificates. Only for development foundations.
    pub skip_ssl_validation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: DEFAULT_API.to_string(),
            token: None,
            username: None,
            password: None,
            skip_ssl_validation: false,
        }
    }
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are returned.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or is not valid TOML.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if config_exists(path) {
            let content = read_config_file(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Writes the configuration to `path` as pretty TOML, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// The credential to send, if any.
    ///
    /// A token wins over basic credentials; basic credentials need both
    /// username and password.
    pub fn credential(&self) -> Option<Credential> {
        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            return Some(Credential::bearer(token));
        }

        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(Credential::basic(username, password)),
            _ => None,
        }
    }

    /// Gets a configuration value by key.
    ///
    /// Returns `None` for unknown keys and unset optional values.
    ///
    /// ```rust
    /// use cloudfoundry_client::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.get("skip_ssl_validation"), Some("false".to_string()));
    /// assert_eq!(config.get("token"), None);
    /// assert_eq!(config.get("unknown_key"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api" => Some(self.api.clone()),
            "token" => self.token.clone(),
            "username" => self.username.clone(),
            "password" => self.password.clone(),
            "skip_ssl_validation" => Some(self.skip_ssl_validation.to_string()),
            _ => None,
        }
    }

    /// Sets a configuration value by key.
    ///
    /// Returns `false` for an unknown key or a value that does not parse.
    /// Changes are only persisted when [`Config::save`] is called.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match key {
            "api" => {
                self.api = value;
                true
            }
            "token" => {
                self.token = Some(value);
                true
            }
            "username" => {
                self.username = Some(value);
                true
            }
            "password" => {
                self.password = Some(value);
                true
            }
            "skip_ssl_validation" => match value.parse() {
                Ok(skip) => {
                    self.skip_ssl_validation = skip;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        assert!(config.set("api", "https://api.example.com".to_string()));
        assert!(config.set("token", "secret".to_string()));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api, "https://api.example.com");
        assert_eq!(loaded.token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "skip_ssl_validation = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api, DEFAULT_API);
        assert!(config.skip_ssl_validation);
    }

    #[test]
    fn test_set_rejects_bad_bool_and_unknown_key() {
        let mut config = Config::default();
        assert!(!config.set("skip_ssl_validation", "maybe".to_string()));
        assert!(!config.set("editor", "vim".to_string()));
    }

    #[test]
    fn test_token_wins_over_basic() {
        let config = Config {
            token: Some("t".to_string()),
            username: Some("u".to_string()),
            password: Some("p".to_string()),
            ..Default::default()
        };
        assert_eq!(config.credential(), Some(Credential::bearer("t")));
    }

    #[test]
    fn test_basic_needs_both_parts() {
        let config = Config {
            username: Some("u".to_string()),
            ..Default::default()
        };
        assert!(config.credential().is_none());

        let config = Config {
            password: Some("p".to_string()),
            ..config
        };
        assert_eq!(config.credential(), Some(Credential::basic("u", "p")));
    }
}

//! User configuration
//!
//! Read from `config.toml` in the platform config directory
//! (e.g. `~/.config/splitbill/config.toml`), or from an explicit path.
//! Every key is optional:
//!
//! ```toml
//! avatar_base_url = "https://i.pravatar.cc/48"
//! log_file = "/tmp/splitbill.log"
//!
//! [[friends]]
//! id = "118836"
//! name = "Clark"
//! image = "https://i.pravatar.cc/48?u=118836"
//! balance = -7
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::ledger::{self, Ledger, LedgerError, RandomIds};
use crate::model::Friend;

const APP_DIR: &str = "splitbill";
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("friend {0} has an empty name")]
    EmptyFriendName(String),

    #[error("invalid seed friends: {0}")]
    Seed(#[from] LedgerError),
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Initial value of the image field in the add-friend form
    pub avatar_base_url: String,
    /// Where to write logs (no logging when unset)
    pub log_file: Option<PathBuf>,
    /// Seed friends (the built-in three when unset)
    pub friends: Option<Vec<Friend>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            avatar_base_url: ledger::DEFAULT_AVATAR_URL.to_string(),
            log_file: None,
            friends: None,
        }
    }
}

impl Config {
    /// Build the startup ledger from the configured (or default) seed friends
    pub fn build_ledger(&self) -> Result<Ledger, ConfigError> {
        let Some(friends) = &self.friends else {
            return Ok(Ledger::new());
        };

        if let Some(friend) = friends.iter().find(|f| f.name.trim().is_empty()) {
            return Err(ConfigError::EmptyFriendName(friend.id.to_string()));
        }
        Ok(Ledger::with_friends(friends.clone(), RandomIds)?)
    }
}

/// Default config path (`<config_dir>/splitbill/config.toml`)
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load configuration
///
/// An explicit path must exist. Without one, the default path is used if
/// present, otherwise defaults apply.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }

    match default_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

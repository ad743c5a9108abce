//! # Global Configuration
//!
//! Handles the global user configuration stored at `~/.config/todomark/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, collections::BTreeMap, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::StatusEntry;
use crate::constants::{
    DEFAULT_LEAD_TOKENS, DEFAULT_LOG_LEVEL, DEFAULT_STATUSES, GLOBAL_CONFIG_DIR,
    GLOBAL_CONFIG_FILENAME,
};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/todomark/config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Log level filter (e.g. "warn", "debug", "todomark=trace")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Directory for rotated log files (stderr when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,

    /// Lead tokens that make a line eligible (replaces the defaults)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_tokens: Option<Vec<String>>,

    /// Status overrides and additions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<StatusEntry>,

    /// Key bindings for the interactive editor (key -> status name)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub keys: BTreeMap<String, String>,
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/todomark/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(GLOBAL_CONFIG_FILENAME))
    }

    /// Returns the path to the global config directory (~/.config/todomark)
    pub fn dir() -> Option<PathBuf> {
        Self::home().map(|home| home.join(".config").join(GLOBAL_CONFIG_DIR))
    }

    /// Returns the home directory, honoring the test override.
    pub fn home() -> Option<PathBuf> {
        get_home_override().or_else(dirs::home_dir)
    }

    /// Loads the global config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }

    /// Creates the global config with default values and comments.
    /// Used by `todomark setup`. Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, default_config_text())
            .with_context(|| format!("Failed to write global config: {}", path.display()))?;
        Ok(true)
    }
}

/// The commented config written by `todomark setup`.
///
/// Every option is shown; only the ones with a meaningful value are active.
fn default_config_text() -> String {
    let lead_tokens = DEFAULT_LEAD_TOKENS
        .iter()
        .map(|t| format!("\"{t}\""))
        .collect::<Vec<_>>()
        .join(", ");

    let statuses = DEFAULT_STATUSES
        .iter()
        .map(|(name, literal, icon, highlight)| {
            format!("#   {name:<10} literal \"{literal}\"  icon {icon}  highlight {highlight}")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r##"# todomark Global Configuration
# Location: ~/.config/todomark/config
# A .todomark file in a project directory overrides these settings.

# Log level: error, warn, info, debug, trace (or a module spec like "todomark=debug").
log_level = "{DEFAULT_LOG_LEVEL}"

# Directory for rotated log files. Logs go to stderr when unset.
# log_dir = "/tmp/todomark-logs"

# Line prefixes that make a line eligible for a status marker.
# Longer tokens are always tried before their prefixes.
lead_tokens = [{lead_tokens}]

# Built-in statuses:
{statuses}
#
# Override a status by name (any field may be omitted), or add a new one:
# [[statuses]]
# name = "done"
# icon = "[x]"
#
# [[statuses]]
# name = "blocked"
# literal = "#"
# icon = "⛔"
# highlight = "TodoBlocked"

# Key bindings for `todomark edit` (single character -> status name).
# Keys i, s, q, j and k are reserved by the editor.
[keys]
# "x" = "done"
"##
    )
}

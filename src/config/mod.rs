//! # Configuration
//!
//! Merged configuration system combining global (~/.config/todomark/config)
//! and project (.todomark) settings. Project values override global ones,
//! and both layer on top of the built-in defaults.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;
pub mod project;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

pub use self::{
    global::{set_home_override, GlobalConfig},
    project::ProjectConfig,
};
use crate::{
    classify::Classifier,
    constants::{DEFAULT_LEAD_TOKENS, DEFAULT_LOG_LEVEL},
    session::Keymap,
    status::{StatusKind, StatusRegistry},
};

/// Highlight group given to configured statuses that name none.
const CUSTOM_HIGHLIGHT: &str = "TodoCustom";

/// A `[[statuses]]` entry: overrides the status of the same name, or adds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub name: String,

    /// Marker character (required for new statuses)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

impl StatusEntry {
    /// Returns `registry` with this entry applied.
    fn apply_to(&self, registry: &StatusRegistry) -> Result<StatusRegistry> {
        let existing = registry.by_name(&self.name);

        let literal = match (&self.literal, existing) {
            (Some(text), _) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => bail!(
                        "Status '{}' has literal \"{text}\"; it must be exactly one character",
                        self.name
                    ),
                }
            }
            (None, Some(kind)) => kind.literal,
            (None, None) => bail!("New status '{}' needs a literal", self.name),
        };

        let kind = StatusKind::new(
            existing.map_or_else(|| self.name.clone(), |k| k.name.clone()),
            literal,
            self.icon
                .clone()
                .or_else(|| existing.map(|k| k.icon.clone()))
                .unwrap_or_else(|| literal.to_string()),
            self.highlight
                .clone()
                .or_else(|| existing.map(|k| k.highlight.clone()))
                .unwrap_or_else(|| CUSTOM_HIGHLIGHT.to_string()),
        );

        Ok(registry.with_status(kind)?)
    }
}

/// Merged configuration with project settings overriding global
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,

    /// Project configuration (default when no .todomark was found)
    pub project: ProjectConfig,

    /// Directory holding the .todomark file, if any
    pub project_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from both global and project sources
    pub fn load() -> Result<Self> {
        let global = GlobalConfig::load()?;

        let project_root = ProjectConfig::find_project_root();
        let project = match &project_root {
            Some(root) => ProjectConfig::load(root)?,
            None => ProjectConfig::default(),
        };

        Ok(Self {
            global,
            project,
            project_root,
        })
    }

    /// Returns the effective log level
    pub fn log_level(&self) -> &str {
        self.global.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Returns the log directory, if logging to files
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.global.log_dir.as_ref().map(PathBuf::from)
    }

    /// Returns the effective lead tokens (project overrides global)
    pub fn lead_tokens(&self) -> Vec<String> {
        self.project
            .lead_tokens
            .clone()
            .or_else(|| self.global.lead_tokens.clone())
            .unwrap_or_else(|| DEFAULT_LEAD_TOKENS.iter().map(ToString::to_string).collect())
    }

    /// Builds the status registry: built-ins, then global, then project entries
    pub fn registry(&self) -> Result<StatusRegistry> {
        let mut registry = StatusRegistry::builtin();
        for entry in self.global.statuses.iter().chain(&self.project.statuses) {
            registry = entry
                .apply_to(&registry)
                .context("Invalid [[statuses]] entry in configuration")?;
        }
        Ok(registry)
    }

    /// Builds the classifier for `registry`
    pub fn classifier(&self, registry: &StatusRegistry) -> Result<Classifier> {
        Classifier::new(self.lead_tokens(), registry).context("Failed to build line classifier")
    }

    /// Builds the registry and classifier together
    pub fn markers(&self) -> Result<(StatusRegistry, Classifier)> {
        let registry = self.registry()?;
        let classifier = self.classifier(&registry)?;
        Ok((registry, classifier))
    }

    /// Builds the editor keymap. Bindings to unknown statuses are dropped
    /// with a warning.
    pub fn keymap(&self, registry: &StatusRegistry) -> Result<Keymap> {
        let mut keymap = Keymap::default();
        for (key, status) in self.global.keys.iter().chain(&self.project.keys) {
            keymap
                .bind(key, status)
                .context("Invalid [keys] entry in configuration")?;
        }
        for key in keymap.retain_known(registry) {
            warn!("ignoring key binding '{key}': unknown status");
        }
        Ok(keymap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, literal: Option<&str>, icon: Option<&str>) -> StatusEntry {
        StatusEntry {
            name: name.to_string(),
            literal: literal.map(String::from),
            icon: icon.map(String::from),
            highlight: None,
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level(), DEFAULT_LOG_LEVEL);
        assert_eq!(config.lead_tokens().len(), DEFAULT_LEAD_TOKENS.len());
        assert_eq!(config.registry().unwrap(), StatusRegistry::builtin());
    }

    #[test]
    fn test_project_lead_tokens_override_global() {
        let mut config = Config::default();
        config.global.lead_tokens = Some(vec!["+".to_string()]);
        assert_eq!(config.lead_tokens(), ["+"]);

        config.project.lead_tokens = Some(vec!["*".to_string()]);
        assert_eq!(config.lead_tokens(), ["*"]);
    }

    #[test]
    fn test_entry_overrides_icon_only() {
        let mut config = Config::default();
        config.global.statuses = vec![entry("Done", None, Some("[x]"))];

        let registry = config.registry().unwrap();
        let done = registry.resolve("done").unwrap();
        assert_eq!(done.name, "done");
        assert_eq!(done.literal, 'x');
        assert_eq!(done.icon, "[x]");
        assert_eq!(done.highlight, "TodoDone");
    }

    #[test]
    fn test_project_entry_applies_after_global() {
        let mut config = Config::default();
        config.global.statuses = vec![entry("done", None, Some("G"))];
        config.project.statuses = vec![entry("done", None, Some("P"))];
        assert_eq!(config.registry().unwrap().resolve("done").unwrap().icon, "P");
    }

    #[test]
    fn test_new_status_needs_literal() {
        let mut config = Config::default();
        config.global.statuses = vec![entry("blocked", None, None)];
        assert!(config.registry().is_err());

        config.global.statuses = vec![entry("blocked", Some("#"), None)];
        let registry = config.registry().unwrap();
        let blocked = registry.resolve("blocked").unwrap();
        assert_eq!(blocked.icon, "#");
        assert_eq!(blocked.highlight, CUSTOM_HIGHLIGHT);
    }

    #[test]
    fn test_multichar_literal_rejected() {
        let mut config = Config::default();
        config.global.statuses = vec![entry("blocked", Some("##"), None)];
        assert!(config.registry().is_err());
    }

    #[test]
    fn test_colliding_literal_rejected() {
        let mut config = Config::default();
        config.global.statuses = vec![entry("blocked", Some("x"), None)];
        let err = config.registry().unwrap_err();
        assert!(format!("{err:#}").contains("share the literal"));
    }

    #[test]
    fn test_keymap_layers() {
        let mut config = Config::default();
        config.global.keys.insert("x".to_string(), "done".to_string());
        config.project.keys.insert("x".to_string(), "cancelled".to_string());
        config.project.keys.insert("z".to_string(), "nonexistent".to_string());

        let keymap = config.keymap(&StatusRegistry::builtin()).unwrap();
        assert_eq!(keymap.status_for('x'), Some("cancelled"));
        assert_eq!(keymap.status_for('z'), None);
    }

    #[test]
    fn test_keymap_rejects_reserved() {
        let mut config = Config::default();
        config.global.keys.insert("q".to_string(), "done".to_string());
        assert!(config.keymap(&StatusRegistry::builtin()).is_err());
    }
}

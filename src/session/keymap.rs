//! Key bindings from single characters to status names.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::collections::BTreeMap;

use anyhow::{bail, Result};

use crate::{
    constants::{DEFAULT_KEYS, RESERVED_KEYS},
    status::StatusRegistry,
};

/// Maps key characters to the status they set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: BTreeMap<char, String>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            bindings: DEFAULT_KEYS
                .iter()
                .map(|&(key, name)| (key, name.to_string()))
                .collect(),
        }
    }
}

impl Keymap {
    /// Adds or replaces a binding. Keys are single characters and may not
    /// shadow the editor's own commands.
    pub fn bind(&mut self, key: &str, status: &str) -> Result<()> {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            bail!("Key binding '{key}' must be a single character");
        };
        if RESERVED_KEYS.contains(&c) {
            bail!("Key '{c}' is reserved by the editor");
        }
        self.bindings.insert(c, status.to_string());
        Ok(())
    }

    /// Removes bindings whose status is not registered, returning their keys.
    pub fn retain_known(&mut self, registry: &StatusRegistry) -> Vec<char> {
        let unknown: Vec<char> = self
            .bindings
            .iter()
            .filter(|(_, name)| registry.by_name(name).is_none())
            .map(|(key, _)| *key)
            .collect();
        for key in &unknown {
            self.bindings.remove(key);
        }
        unknown
    }

    /// Status name bound to `key`.
    pub fn status_for(&self, key: char) -> Option<&str> {
        self.bindings.get(&key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.bindings.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

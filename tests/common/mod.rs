//! # Test Harness
//!
//! Each test gets a scratch home directory and a scratch project directory.
//! The global config is redirected through the library's home override, so
//! the real `~/.config/todomark` is never read or written.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use tempfile::TempDir;
use todomark::{
    constants::{GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME, PROJECT_CONFIG_FILE},
    set_home_override, Classifier, StatusRegistry,
};

/// Serializes tests that touch the process working directory.
static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Scratch home and project directories for one test.
///
/// The working directory is the project directory until the value is dropped.
pub struct TestEnv {
    home: TempDir,
    project: TempDir,
    previous_cwd: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl TestEnv {
    pub fn new() -> Self {
        // A panicking test poisons the lock; the directories it guards are per-test anyway.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let home = TempDir::new().expect("scratch home");
        let project = TempDir::new().expect("scratch project");
        let previous_cwd = env::current_dir().expect("current dir");

        set_home_override(Some(home.path().to_path_buf()));
        env::set_current_dir(project.path()).expect("enter scratch project");

        Self {
            home,
            project,
            previous_cwd,
            _lock: lock,
        }
    }

    pub fn home_path(&self) -> &Path {
        self.home.path()
    }

    pub fn project_path(&self) -> &Path {
        self.project.path()
    }

    /// `<home>/.config/todomark/config`
    pub fn global_config_path(&self) -> PathBuf {
        self.home
            .path()
            .join(".config")
            .join(GLOBAL_CONFIG_DIR)
            .join(GLOBAL_CONFIG_FILENAME)
    }

    /// `<project>/.todomark`
    pub fn project_config_path(&self) -> PathBuf {
        self.project.path().join(PROJECT_CONFIG_FILE)
    }

    pub fn write_global_config(&self, toml: &str) {
        let path = self.global_config_path();
        write_creating_parents(&path, toml);
    }

    pub fn write_project_config(&self, toml: &str) {
        write_creating_parents(&self.project_config_path(), toml);
    }

    /// Global config text, or an empty string when none was written.
    pub fn read_global_config(&self) -> String {
        fs::read_to_string(self.global_config_path()).unwrap_or_default()
    }

    /// Writes `relative` below the project directory and returns its path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project.path().join(relative);
        write_creating_parents(&path, content);
        path
    }

    pub fn read_file(&self, relative: &str) -> String {
        let path = self.project.path().join(relative);
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous_cwd);
        set_home_override(None);
    }
}

fn write_creating_parents(path: &Path, content: &str) {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).unwrap_or_else(|e| panic!("mkdir {}: {e}", dir.display()));
    }
    fs::write(path, content).unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
}

// =============================================================================
// Marker Helpers
// =============================================================================

/// Built-in registry with a classifier over the default lead tokens.
pub fn default_markers() -> (StatusRegistry, Classifier) {
    let registry = StatusRegistry::builtin();
    let classifier = Classifier::with_default_leads(&registry).expect("default classifier");
    (registry, classifier)
}

/// A small checklist used across tests.
pub const CHECKLIST: &str = "\
# (>) Release 1.0

Some prose that is not a todo.

- (x) write parser
- (-) write tests
-  ( !) padded marker
- no marker yet
## Notes
";

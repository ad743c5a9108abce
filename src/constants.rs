//! # Constants
//!
//! Centralized constants for magic values used throughout todomark.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Line Format
// =============================================================================

/// Lead tokens that make a line eligible for a marker, longest first.
pub const DEFAULT_LEAD_TOKENS: &[&str] = &["######", "#####", "####", "###", "##", "#", "-"];

/// Opening delimiter of a status marker.
pub const MARKER_OPEN: char = '(';

/// Closing delimiter of a status marker.
pub const MARKER_CLOSE: char = ')';

/// Separator placed between the lead token and a freshly inserted marker.
pub const MARKER_SEPARATOR: char = ' ';

// =============================================================================
// Status Defaults
// =============================================================================

/// Built-in statuses: (name, literal, icon, highlight group).
pub const DEFAULT_STATUSES: &[(&str, char, &str, &str)] = &[
    ("undone", ' ', "☐", "TodoUndone"),
    ("pending", '-', "◐", "TodoPending"),
    ("done", 'x', "✔", "TodoDone"),
    ("on_hold", '=', "⏸", "TodoOnHold"),
    ("cancelled", '_', "✘", "TodoCancelled"),
    ("important", '!', "⚠", "TodoImportant"),
    ("recurring", '+', "↻", "TodoRecurring"),
    ("ambiguous", '?', "?", "TodoAmbiguous"),
    ("ongoing", '>', "▶", "TodoOngoing"),
];

/// Built-in key bindings for the interactive editor: (key, status name).
pub const DEFAULT_KEYS: &[(char, &str)] = &[
    ('u', "undone"),
    ('p', "pending"),
    ('d', "done"),
    ('h', "on_hold"),
    ('c', "cancelled"),
    ('!', "important"),
    ('r', "recurring"),
    ('?', "ambiguous"),
    ('o', "ongoing"),
];

/// Keys the interactive editor uses for its own commands.
pub const RESERVED_KEYS: &[char] = &['i', 's', 'q', 'j', 'k'];

// =============================================================================
// File System
// =============================================================================

/// File extension of markdown files picked up by `list` on a directory.
pub const MARKDOWN_FILE_EXTENSION: &str = "md";

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "todomark";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

/// Project configuration file name.
pub const PROJECT_CONFIG_FILE: &str = ".todomark";

// =============================================================================
// Logging
// =============================================================================

/// Log level used when neither the CLI nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Base name of rotated log files.
pub const LOG_FILE_BASENAME: &str = "todomark";

/// Rotate the log file once it grows past this size.
pub const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Number of rotated log files to keep.
pub const MAX_LOG_FILES: usize = 3;

// =============================================================================
// Shell Completions
// =============================================================================

/// Zsh completions directory (relative to home).
pub const ZSH_COMPLETIONS_DIR: &str = ".zfunc";

/// Zsh completion file name.
pub const ZSH_COMPLETION_FILE: &str = "_todomark";

/// Bash completions directory (relative to home).
pub const BASH_COMPLETIONS_DIR: &str = ".local/share/bash-completion/completions";

/// Bash completion file name.
pub const BASH_COMPLETION_FILE: &str = "todomark";

/// Fish completions directory (relative to home).
pub const FISH_COMPLETIONS_DIR: &str = ".config/fish/completions";

/// Fish completion file name.
pub const FISH_COMPLETION_FILE: &str = "todomark.fish";

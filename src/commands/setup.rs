//! # Setup Command
//!
//! One-time setup: writes the commented global config and installs shell
//! completions for the detected (or given) shell.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Command;
use clap_complete::Shell;
use owo_colors::OwoColorize;

use super::completions::generate_to_string;
use crate::{
    config::GlobalConfig,
    constants::{
        BASH_COMPLETIONS_DIR, BASH_COMPLETION_FILE, FISH_COMPLETIONS_DIR, FISH_COMPLETION_FILE,
        ZSH_COMPLETIONS_DIR, ZSH_COMPLETION_FILE,
    },
};

/// Executes the setup command.
///
/// The `cmd` parameter should be a clone of the CLI command for generating completions.
pub fn execute(cmd: &mut Command, shell_override: Option<Shell>) -> Result<()> {
    eprintln!("{}\n", "Setting up todomark...".bold());

    setup_global_config()?;

    match shell_override.or_else(detect_shell) {
        Some(shell) => setup_completions(cmd, shell)?,
        None => eprintln!(
            "{} Could not detect your shell; run {} to install completions",
            "→".cyan(),
            "todomark setup --shell <SHELL>".green()
        ),
    }

    eprintln!("\n{} Setup complete!", "✓".green().bold());
    Ok(())
}

fn setup_global_config() -> Result<()> {
    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        eprintln!("{} Created global config: {}", "✓".green(), path.display());
    } else {
        eprintln!(
            "{} Global config already exists: {}",
            "✓".green(),
            path.display()
        );
    }

    Ok(())
}

/// Detects the login shell from `$SHELL`.
fn detect_shell() -> Option<Shell> {
    let shell_path = env::var("SHELL").ok()?;
    let name = shell_path.rsplit('/').next().unwrap_or(&shell_path);
    // Login shells may carry a leading dash (e.g. "-zsh")
    match name.strip_prefix('-').unwrap_or(name) {
        "zsh" => Some(Shell::Zsh),
        "bash" => Some(Shell::Bash),
        "fish" => Some(Shell::Fish),
        _ => None,
    }
}

fn completion_path(shell: Shell) -> Option<PathBuf> {
    let home = GlobalConfig::home()?;

    match shell {
        Shell::Zsh => Some(home.join(ZSH_COMPLETIONS_DIR).join(ZSH_COMPLETION_FILE)),
        Shell::Bash => Some(home.join(BASH_COMPLETIONS_DIR).join(BASH_COMPLETION_FILE)),
        Shell::Fish => Some(home.join(FISH_COMPLETIONS_DIR).join(FISH_COMPLETION_FILE)),
        _ => None,
    }
}

fn setup_completions(cmd: &mut Command, shell: Shell) -> Result<()> {
    let Some(install_path) = completion_path(shell) else {
        eprintln!(
            "{} Manual setup required for {shell}: run {} > <completions-file>",
            "→".cyan(),
            format!("todomark completions {shell}").green()
        );
        return Ok(());
    };

    if let Some(parent) = install_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&install_path, generate_to_string(shell, cmd))
        .with_context(|| format!("Failed to write completions: {}", install_path.display()))?;

    eprintln!(
        "{} Installed {shell} completions: {}",
        "✓".green(),
        install_path.display()
    );

    if shell == Shell::Zsh {
        eprintln!(
            "  {} Make sure ~/.zshrc contains: {}",
            "→".cyan(),
            "fpath=(~/.zfunc $fpath) && autoload -Uz compinit && compinit".dimmed()
        );
    }

    Ok(())
}

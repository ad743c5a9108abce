//! # Logging
//!
//! Starts the `flexi_logger` backend for the `log` facade. Plain commands log
//! to stderr; with a log directory, logs go to rotating files instead (the
//! interactive editor always needs this, since stderr is the screen).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;

use crate::constants::{LOG_FILE_BASENAME, MAX_LOG_FILES, MAX_LOG_FILE_SIZE_BYTES};

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error
    Stderr,
    /// Rotating files in a directory
    Directory(&'a Path),
    /// Nowhere
    Off,
}

/// Initializes logging. `RUST_LOG` takes precedence over `level`.
///
/// The returned handle must be kept alive for the lifetime of the program.
pub fn init(level: &str, target: LogTarget<'_>) -> Result<LoggerHandle> {
    let (spec, logger) = if target == LogTarget::Off {
        ("off", Logger::try_with_str("off"))
    } else {
        (level, Logger::try_with_env_or_str(level))
    };
    let logger = logger.with_context(|| format!("Invalid log level: {spec}"))?;

    let logger = match target {
        LogTarget::Stderr | LogTarget::Off => logger
            .log_to_stderr()
            .format(flexi_logger::default_format),
        LogTarget::Directory(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            logger
                .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
        }
    };

    let handle = logger.start().context("Failed to start logger")?;
    info!(
        "todomark {} started (level {spec})",
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}

// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Console and file logging.
//!
//! ```text
//! -l N        --> LogLevel --> EnvFilter --> stderr
//! --log-file  --> LogLevel --> EnvFilter --> non_blocking(file)
//!                                              |
//!                                          LogGuard (flush on drop)
//! ```

use anyhow::Context;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

/// Verbosity selected with `--log-level` / `--file-log-level`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    /// One line per org or team touched.
    #[default]
    Info,
    /// Files read and written, git steps.
    Debug,
    Trace,
    /// Trace, gix internals included.
    Dump,
}

impl LogLevel {
    /// Map the numeric CLI value (0-6).
    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        Some(match level {
            0 => Self::Off,
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            4 => Self::Debug,
            5 => Self::Trace,
            6 => Self::Dump,
            _ => return None,
        })
    }

    /// `EnvFilter` directives; gix is held at `warn` below `Dump`.
    #[must_use]
    pub const fn directives(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info,gix=warn",
            Self::Debug => "debug,gix=warn",
            Self::Trace => "trace,gix=warn",
            Self::Dump => "trace",
        }
    }
}

/// A log file and its own verbosity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    pub level: LogLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub console: LogLevel,
    pub file: Option<LogFile>,
}

/// Keeps the file writer thread alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be created.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    // stdout is reserved for command output
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(EnvFilter::new(config.console.directives()));

    let (file, guard) = match &config.file {
        Some(target) => {
            let (writer, guard) = tracing_appender::non_blocking(create_log_file(&target.path)?);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new(target.level.directives()));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(console).with(file).init();
    Ok(LogGuard { _file: guard })
}

fn create_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    File::create(path).with_context(|| format!("failed to create log file {}", path.display()))
}

#[cfg(test)]
mod tests;

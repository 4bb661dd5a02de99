//! Process hand-off to the database daemon.
//!
//! # Responsibilities
//! - Build the daemon command line from config and the rendered file path
//! - Replace the current process image, inheriting the environment
//!
//! # Design Decisions
//! - Exec failure is a typed error, not a panic
//! - The mechanism sits behind [`Handoff`] so the pipeline runs in tests

use std::ffi::OsString;
use std::io;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::config::schema::DaemonConfig;

/// The process replacement itself failed.
#[derive(Debug, Error)]
#[error("failed to exec {}: {source}", program.display())]
pub struct HandoffError {
    pub program: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Program and argument vector for the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl DaemonCommand {
    /// Configured program and args, followed by the rendered config path.
    pub fn from_config(daemon: &DaemonConfig, rendered_config: &Path) -> Self {
        let mut args: Vec<OsString> = daemon.args.iter().map(OsString::from).collect();
        args.push(rendered_config.as_os_str().to_os_string());
        Self {
            program: daemon.program.clone(),
            args,
        }
    }
}

impl std::fmt::Display for DaemonCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Transfers control to the daemon.
pub trait Handoff {
    /// Start `command` in place of the current process.
    ///
    /// A real replacement never returns `Ok`.
    fn hand_off(&mut self, command: &DaemonCommand) -> Result<(), HandoffError>;
}

/// Replaces the process image with `execvp`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecHandoff;

impl Handoff for ExecHandoff {
    fn hand_off(&mut self, command: &DaemonCommand) -> Result<(), HandoffError> {
        let source = Command::new(&command.program).args(&command.args).exec();
        Err(HandoffError {
            program: command.program.clone(),
            source,
        })
    }
}

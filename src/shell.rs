//! Shell execution facility
//!
//! Every third-party cleanup (`brew`, `npm`, `yarn`, `docker`) goes through the
//! [`Shell`] trait so the cleanup workflow can be exercised without touching
//! the real tools.

use std::path::PathBuf;
use std::process::Command;

use crate::error::{CleanError, Result};

/// Outcome of looking a tool up on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolAvailability {
    Available(PathBuf),
    Missing,
}

impl ToolAvailability {
    pub fn is_available(&self) -> bool {
        matches!(self, ToolAvailability::Available(_))
    }
}

pub trait Shell {
    /// Run `program` to completion and return its standard output.
    ///
    /// Fails when the program cannot be started or exits non-zero.
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;

    /// Look `tool` up without running it.
    fn availability(&self, tool: &str) -> ToolAvailability;

    /// Like [`Shell::run`], but never fails: errors become empty output.
    fn execute(&self, program: &str, args: &[&str], silent: bool) -> String {
        match self.run(program, args) {
            Ok(stdout) => stdout,
            Err(e) => {
                if !silent {
                    tracing::warn!("{}", e);
                }
                String::new()
            }
        }
    }
}

/// Runs real processes found on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let command = command_line(program, args);
        tracing::debug!("running `{}`", command);

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| CleanError::CommandSpawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CleanError::CommandFailed {
                command,
                status: output.status.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn availability(&self, tool: &str) -> ToolAvailability {
        match which::which(tool) {
            Ok(path) => ToolAvailability::Available(path),
            Err(_) => ToolAvailability::Missing,
        }
    }
}

/// Render a program and its arguments the way a user would type them.
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

//! clean-disk-space - reclaim disk space on a developer workstation
//!
//! Each cleanup is a [`CleanupAction`]: it finds its targets, measures them,
//! asks for confirmation when destructive, runs, and measures again. The
//! [`Runner`] executes the fixed standard or deep sequence and adds up what
//! was freed.
//!
//! # Example
//!
//! ```no_run
//! use clean_disk_space::{Mode, Prompt, Reporter, RunConfiguration, RunContext, Runner, SystemShell};
//!
//! let config = RunConfiguration::for_user(None).unwrap().with_dry_run(true);
//! let ctx = RunContext::new(&config, &SystemShell);
//! let mut runner = Runner::new(ctx, Reporter::new(std::io::stdout(), false), Prompt::stdio(false));
//! let summary = runner.run(Mode::Standard);
//! println!("{} actions", summary.results.len());
//! ```

pub mod cli;
pub mod config;
pub mod confirm;
pub mod engine;
pub mod error;
pub mod output;
pub mod shell;

#[cfg(test)]
mod test_support;

pub use config::{Mode, RunConfiguration};
pub use confirm::{Confirm, ConfirmationDecision, Prompt};
pub use engine::queries::ByteCount;
pub use engine::{CleanupAction, CleanupResult, RunContext, RunSummary, Runner};
pub use error::{CleanError, Result};
pub use output::{render_docs, write_report, Reporter};
pub use shell::{Shell, SystemShell, ToolAvailability};

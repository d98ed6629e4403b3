//! Cleanup action implementations

pub mod directory;
pub mod docker;
pub mod files;
pub mod large_files;
pub mod logs;
pub mod node_modules;
pub mod tools;

pub use directory::{DirectoryCleanup, Scope};
pub use docker::Docker;
pub use large_files::LargeFiles;
pub use logs::OldLogs;
pub use node_modules::NodeModules;
pub use tools::{CacheLocation, ToolCache};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::confirm::ConfirmationDecision;
use crate::engine::context::RunContext;
use crate::engine::queries::{measure_all, ByteCount};
use crate::error::Result;

/// How much ceremony an action needs before it may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Safety {
    /// Regenerable data; never prompts.
    AutoSafe,
    /// Destructive; asks first unless auto-confirm is on.
    NeedsConfirmation,
    /// Lists findings and never deletes.
    ReportOnly,
}

/// What an action found while checking its tool and targets.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    /// Paths measured before and after execution.
    pub targets: Vec<PathBuf>,
    /// Lines always shown to the user.
    pub notes: Vec<String>,
    /// Lines shown only in verbose mode.
    pub details: Vec<String>,
    /// Size already measured while planning, reused as the "before" size.
    pub size: Option<ByteCount>,
}

impl Plan {
    pub fn new(targets: Vec<PathBuf>) -> Self {
        Self {
            targets,
            ..Self::default()
        }
    }

    pub fn note(mut self, line: impl Into<String>) -> Self {
        self.notes.push(line.into());
        self
    }

    pub fn detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }
}

/// Why an action ended before measuring anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unavailable(pub String);

impl Unavailable {
    pub fn not_found(what: &str) -> Self {
        Unavailable(format!("{} not found", what))
    }
}

/// One step of a cleanup run.
///
/// The runner drives every action through the same sequence: plan, measure,
/// optionally confirm, execute, measure again. Implementations only supply
/// the steps.
pub trait CleanupAction {
    /// Machine-readable name used in reports (e.g. "xcode-derived-data").
    fn name(&self) -> &'static str;

    /// Heading shown when the action starts (e.g. "Emptying Trash").
    fn title(&self) -> &'static str;

    fn safety(&self) -> Safety;

    /// Completes "Would ..." in dry-run output.
    fn intent(&self) -> &'static str;

    /// Shown after a successful execution.
    fn done(&self) -> &'static str;

    fn prompt(&self) -> &'static str {
        "Proceed?"
    }

    /// Shown in red before anything else.
    fn warning(&self) -> Option<&'static str> {
        None
    }

    /// Follow-up advice shown after execution.
    fn hint(&self) -> Option<&'static str> {
        None
    }

    /// Check tools and targets. Never deletes anything.
    fn plan(&self, ctx: &RunContext<'_>) -> std::result::Result<Plan, Unavailable>;

    fn measure(&self, plan: &Plan, _ctx: &RunContext<'_>) -> ByteCount {
        measure_all(&plan.targets)
    }

    fn execute(&self, plan: &Plan, ctx: &RunContext<'_>) -> Result<()>;
}

/// Terminal state an action reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ActionOutcome {
    Unavailable { reason: String },
    Reported { findings: usize },
    Estimated,
    Declined,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupResult {
    pub name: String,
    pub outcome: ActionOutcome,
    pub decision: Option<ConfirmationDecision>,
    pub before: ByteCount,
    pub after: ByteCount,
    pub freed: ByteCount,
}

impl CleanupResult {
    /// A result that touched nothing.
    pub fn untouched(name: &str, outcome: ActionOutcome, size: ByteCount) -> Self {
        Self {
            name: name.to_string(),
            outcome,
            decision: None,
            before: size,
            after: size,
            freed: ByteCount::ZERO,
        }
    }

    pub fn completed(
        name: &str,
        decision: Option<ConfirmationDecision>,
        before: ByteCount,
        after: ByteCount,
    ) -> Self {
        Self {
            name: name.to_string(),
            outcome: ActionOutcome::Completed,
            decision,
            before,
            after,
            freed: before.freed_to(after),
        }
    }
}

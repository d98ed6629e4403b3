//! Old log file cleanup

use chrono::{Duration, Utc};

use crate::engine::actions::files::{remove_all, stale_files};
use crate::engine::actions::{CleanupAction, Plan, Safety, Unavailable};
use crate::engine::context::RunContext;
use crate::error::Result;

const LOGS_DIR: &str = "Library/Logs";
const DEFAULT_MAX_AGE_DAYS: i64 = 30;

/// Deletes `*.log` files that have not been touched for a while.
#[derive(Debug, Clone)]
pub struct OldLogs {
    max_age_days: i64,
}

impl Default for OldLogs {
    fn default() -> Self {
        Self {
            max_age_days: DEFAULT_MAX_AGE_DAYS,
        }
    }
}

impl OldLogs {
    pub fn new(max_age_days: i64) -> Self {
        Self { max_age_days }
    }
}

impl CleanupAction for OldLogs {
    fn name(&self) -> &'static str {
        "old-logs"
    }

    fn title(&self) -> &'static str {
        "Cleaning old logs"
    }

    fn safety(&self) -> Safety {
        Safety::AutoSafe
    }

    fn intent(&self) -> &'static str {
        "clean old log files"
    }

    fn done(&self) -> &'static str {
        "Old logs cleaned"
    }

    fn plan(&self, ctx: &RunContext<'_>) -> std::result::Result<Plan, Unavailable> {
        let dir = ctx.home_path(LOGS_DIR);
        if !dir.is_dir() {
            return Err(Unavailable::not_found("Logs folder"));
        }

        let cutoff = Utc::now() - Duration::days(self.max_age_days);
        let stale = stale_files(&dir, "log", cutoff);
        let count = stale.len();

        Ok(Plan::new(stale)
            .note(format!(
                "Only removing logs older than {} days",
                self.max_age_days
            ))
            .detail(format!("{} stale log files in {}", count, dir.display())))
    }

    fn execute(&self, plan: &Plan, _ctx: &RunContext<'_>) -> Result<()> {
        remove_all(plan.targets.iter().cloned())
    }
}

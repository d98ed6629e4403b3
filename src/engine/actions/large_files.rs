//! Large file finder (report only)

use walkdir::WalkDir;

use crate::engine::actions::{CleanupAction, Plan, Safety, Unavailable};
use crate::engine::context::RunContext;
use crate::engine::queries::ByteCount;
use crate::error::Result;

const SEARCH_DIRS: &[&str] = &["Downloads", "Documents"];
const ONE_GIB: u64 = 1024 * 1024 * 1024;
const MAX_RESULTS: usize = 10;

/// Lists big files so the user can decide. Never deletes anything.
#[derive(Debug, Clone)]
pub struct LargeFiles {
    threshold: ByteCount,
    limit: usize,
}

impl Default for LargeFiles {
    fn default() -> Self {
        Self {
            threshold: ByteCount(ONE_GIB),
            limit: MAX_RESULTS,
        }
    }
}

impl LargeFiles {
    pub fn new(threshold: ByteCount, limit: usize) -> Self {
        Self { threshold, limit }
    }
}

impl CleanupAction for LargeFiles {
    fn name(&self) -> &'static str {
        "large-files"
    }

    fn title(&self) -> &'static str {
        "Finding large files (>1GB)"
    }

    fn safety(&self) -> Safety {
        Safety::ReportOnly
    }

    fn intent(&self) -> &'static str {
        "list large files"
    }

    fn done(&self) -> &'static str {
        "Review and delete manually if needed"
    }

    fn plan(&self, ctx: &RunContext<'_>) -> std::result::Result<Plan, Unavailable> {
        let found: Vec<(std::path::PathBuf, ByteCount)> = SEARCH_DIRS
            .iter()
            .map(|dir| ctx.home_path(dir))
            .flat_map(|root| {
                WalkDir::new(root)
                    .follow_links(false)
                    .into_iter()
                    .filter_map(|e| e.ok())
            })
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let len = e.metadata().ok()?.len();
                (len > self.threshold.as_u64()).then(|| (e.into_path(), ByteCount(len)))
            })
            .take(self.limit)
            .collect();

        if found.is_empty() {
            return Ok(Plan::default().note("No large files found in Downloads/Documents"));
        }

        let mut plan = Plan::default().note("Large files found:");
        for (path, size) in &found {
            plan = plan.note(format!("  {} - {}", size, path.display()));
        }
        plan = plan.note("Review and delete manually if needed");
        plan.targets = found.into_iter().map(|(path, _)| path).collect();
        Ok(plan)
    }

    fn execute(&self, _plan: &Plan, _ctx: &RunContext<'_>) -> Result<()> {
        Ok(())
    }
}

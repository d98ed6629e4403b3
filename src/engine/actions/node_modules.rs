//! node_modules discovery and removal

use walkdir::WalkDir;

use crate::engine::actions::files::remove_all;
use crate::engine::actions::{CleanupAction, Plan, Safety, Unavailable};
use crate::engine::context::RunContext;
use crate::engine::queries::{measure_size, ByteCount};
use crate::error::Result;

const DEFAULT_MAX_DEPTH: usize = 4;

#[derive(Debug, Clone)]
pub struct NodeModules {
    max_depth: usize,
}

impl Default for NodeModules {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl NodeModules {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl CleanupAction for NodeModules {
    fn name(&self) -> &'static str {
        "node-modules"
    }

    fn title(&self) -> &'static str {
        "Cleaning node_modules folders"
    }

    fn safety(&self) -> Safety {
        Safety::NeedsConfirmation
    }

    fn intent(&self) -> &'static str {
        "delete these node_modules folders"
    }

    fn done(&self) -> &'static str {
        "node_modules folders deleted"
    }

    fn prompt(&self) -> &'static str {
        "Delete ALL these node_modules folders?"
    }

    fn warning(&self) -> Option<&'static str> {
        Some("This will delete node_modules in old projects")
    }

    fn hint(&self) -> Option<&'static str> {
        Some("Run \"npm install\" in projects to restore dependencies")
    }

    fn plan(&self, ctx: &RunContext<'_>) -> std::result::Result<Plan, Unavailable> {
        let mut found = Vec::new();
        let mut walker = WalkDir::new(ctx.home())
            .max_depth(self.max_depth)
            .follow_links(false)
            .into_iter();

        while let Some(entry) = walker.next() {
            let Ok(entry) = entry else { continue };
            if entry.file_type().is_dir() && entry.file_name() == "node_modules" {
                found.push(entry.into_path());
                // Nested folders go with their parent.
                walker.skip_current_dir();
            }
        }

        if found.is_empty() {
            return Err(Unavailable("No node_modules folders found".to_string()));
        }

        let sizes: Vec<ByteCount> = found.iter().map(|path| measure_size(path)).collect();
        let total: ByteCount = sizes.iter().copied().sum();

        let mut plan = Plan::new(Vec::new())
            .note(format!("Found {} node_modules folders:", found.len()))
            .note(format!("Total size: {}", total));
        for (path, size) in found.iter().zip(&sizes) {
            plan = plan.note(format!("  {} - {}", size, path.display()));
        }
        plan.targets = found;
        plan.size = Some(total);
        Ok(plan)
    }

    fn execute(&self, plan: &Plan, _ctx: &RunContext<'_>) -> Result<()> {
        remove_all(plan.targets.iter().cloned())
    }
}

//! Caches owned by a package manager and cleaned through its own CLI

use std::path::PathBuf;

use regex::Regex;

use crate::engine::actions::{CleanupAction, Plan, Safety, Unavailable};
use crate::engine::context::RunContext;
use crate::error::Result;

/// Where a tool keeps its cache.
#[derive(Debug, Clone, Copy)]
pub enum CacheLocation {
    /// Fixed path relative to the home directory.
    Home(&'static str),
    /// Path printed by running the tool with these arguments.
    Reported(&'static [&'static str]),
}

#[derive(Debug, Clone)]
pub struct ToolCache {
    name: &'static str,
    title: &'static str,
    tool: &'static str,
    label: &'static str,
    cache: CacheLocation,
    /// Arguments of a read-only run whose output mentions a reclaimable size.
    estimate: Option<&'static [&'static str]>,
    commands: &'static [&'static [&'static str]],
    intent: &'static str,
    done: &'static str,
}

impl ToolCache {
    pub fn homebrew() -> Self {
        Self {
            name: "homebrew",
            title: "Cleaning Homebrew cache",
            tool: "brew",
            label: "Homebrew",
            cache: CacheLocation::Reported(&["--cache"]),
            estimate: Some(&["cleanup", "-n"]),
            commands: &[&["cleanup", "-s"], &["autoremove"]],
            intent: "run: brew cleanup",
            done: "Homebrew cleaned",
        }
    }

    pub fn npm() -> Self {
        Self {
            name: "npm",
            title: "Cleaning npm cache",
            tool: "npm",
            label: "npm",
            cache: CacheLocation::Home(".npm"),
            estimate: None,
            commands: &[&["cache", "clean", "--force"]],
            intent: "clean npm cache",
            done: "npm cache cleaned",
        }
    }

    pub fn yarn() -> Self {
        Self {
            name: "yarn",
            title: "Cleaning Yarn cache",
            tool: "yarn",
            label: "Yarn",
            cache: CacheLocation::Reported(&["cache", "dir"]),
            estimate: None,
            commands: &[&["cache", "clean"]],
            intent: "clean Yarn cache",
            done: "Yarn cache cleaned",
        }
    }

    fn cache_dir(&self, ctx: &RunContext<'_>) -> Option<PathBuf> {
        match self.cache {
            CacheLocation::Home(relative) => Some(ctx.home_path(relative)),
            CacheLocation::Reported(args) => {
                let printed = ctx.shell.execute(self.tool, args, true);
                let path = printed.lines().next().unwrap_or("").trim();
                if path.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(path))
                }
            }
        }
    }
}

/// The last size mentioned in a tool's output, e.g. "free approximately 1.2GB".
pub fn reclaimable_size(output: &str) -> Option<String> {
    let re = Regex::new(r"[0-9]+(?:\.[0-9]+)?[KMG]B").ok()?;
    re.find_iter(output).last().map(|m| m.as_str().to_string())
}

impl CleanupAction for ToolCache {
    fn name(&self) -> &'static str {
        self.name
    }

    fn title(&self) -> &'static str {
        self.title
    }

    fn safety(&self) -> Safety {
        Safety::AutoSafe
    }

    fn intent(&self) -> &'static str {
        self.intent
    }

    fn done(&self) -> &'static str {
        self.done
    }

    fn plan(&self, ctx: &RunContext<'_>) -> std::result::Result<Plan, Unavailable> {
        if !ctx.shell.availability(self.tool).is_available() {
            return Err(Unavailable::not_found(self.label));
        }

        let targets = self.cache_dir(ctx).into_iter().collect::<Vec<_>>();
        let mut plan = Plan::new(targets);

        if let Some(args) = self.estimate {
            let preview = ctx.shell.execute(self.tool, args, true);
            if let Some(size) = reclaimable_size(&preview) {
                plan = plan.note(format!("Can free: ~{}", size));
            }
        }
        if let Some(dir) = plan.targets.first() {
            let line = format!("Cache location: {}", dir.display());
            plan = plan.detail(line);
        }

        Ok(plan)
    }

    fn execute(&self, _plan: &Plan, ctx: &RunContext<'_>) -> Result<()> {
        let mut first_failure = None;
        for args in self.commands {
            if let Err(e) = ctx.shell.run(self.tool, args) {
                first_failure.get_or_insert(e);
            }
        }
        first_failure.map_or(Ok(()), Err)
    }
}

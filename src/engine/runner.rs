//! Cleanup runner

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Mode;
use crate::confirm::Confirm;
use crate::engine::actions::{ActionOutcome, CleanupAction, CleanupResult, Safety, Unavailable};
use crate::engine::catalog::actions_for;
use crate::engine::context::RunContext;
use crate::engine::queries::{query_disk_space, ByteCount};
use crate::output::Reporter;

/// Everything one run did, in action order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub mode: Mode,
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub results: Vec<CleanupResult>,
    pub total_freed: ByteCount,
}

impl RunSummary {
    pub fn new(mode: Mode, dry_run: bool, started_at: DateTime<Utc>) -> Self {
        Self {
            mode,
            dry_run,
            started_at,
            finished_at: None,
            results: Vec::new(),
            total_freed: ByteCount::ZERO,
        }
    }

    pub fn record(&mut self, result: CleanupResult) {
        self.total_freed += result.freed;
        self.results.push(result);
    }

    pub fn finish(mut self, at: DateTime<Utc>) -> Self {
        self.finished_at = Some(at);
        self
    }

    pub fn result(&self, name: &str) -> Option<&CleanupResult> {
        self.results.iter().find(|r| r.name == name)
    }
}

/// Drives cleanup actions one after another and keeps the running total.
pub struct Runner<'a, W: Write, C: Confirm> {
    ctx: RunContext<'a>,
    reporter: Reporter<W>,
    confirm: C,
}

impl<'a, W: Write, C: Confirm> Runner<'a, W, C> {
    pub fn new(ctx: RunContext<'a>, reporter: Reporter<W>, confirm: C) -> Self {
        Self {
            ctx,
            reporter,
            confirm,
        }
    }

    pub fn into_parts(self) -> (W, C) {
        (self.reporter.into_inner(), self.confirm)
    }

    /// Run the fixed sequence for `mode`.
    pub fn run(&mut self, mode: Mode) -> RunSummary {
        let actions = actions_for(mode);
        self.run_actions(mode, &actions)
    }

    pub fn run_actions(&mut self, mode: Mode, actions: &[Box<dyn CleanupAction>]) -> RunSummary {
        let dry_run = self.ctx.dry_run();
        let mut summary = RunSummary::new(mode, dry_run, Utc::now());
        tracing::debug!("starting {} run over {} actions", mode, actions.len());

        self.reporter.banner(mode);
        if dry_run {
            self.reporter.dry_run_notice();
        }
        self.show_disk_space();

        for action in actions {
            let result = self.run_action(action.as_ref());
            summary.record(result);
        }

        self.reporter.rule();
        self.show_disk_space();

        if !dry_run && !summary.total_freed.is_zero() {
            self.reporter.total(summary.total_freed);
        }
        self.reporter.complete(mode);

        summary.finish(Utc::now())
    }

    /// Take one action from planning to its terminal state.
    pub fn run_action(&mut self, action: &dyn CleanupAction) -> CleanupResult {
        let name = action.name();
        self.reporter.section(action.title());
        if let Some(warning) = action.warning() {
            self.reporter.danger(warning);
        }

        let plan = match action.plan(&self.ctx) {
            Ok(plan) => plan,
            Err(Unavailable(reason)) => {
                tracing::debug!("{}: {}", name, reason);
                self.reporter.skipped(&reason);
                return CleanupResult::untouched(
                    name,
                    ActionOutcome::Unavailable { reason },
                    ByteCount::ZERO,
                );
            }
        };

        for note in &plan.notes {
            self.reporter.detail(note);
        }
        for detail in &plan.details {
            self.reporter.verbose(detail);
        }

        if action.safety() == Safety::ReportOnly {
            let findings = plan.targets.len();
            return CleanupResult::untouched(
                name,
                ActionOutcome::Reported { findings },
                ByteCount::ZERO,
            );
        }

        let before = plan
            .size
            .unwrap_or_else(|| action.measure(&plan, &self.ctx));
        self.reporter.current_size(before);

        if self.ctx.dry_run() {
            self.reporter.estimate(action.intent(), before);
            return CleanupResult::untouched(name, ActionOutcome::Estimated, before);
        }

        let decision = if action.safety() == Safety::NeedsConfirmation {
            let decision = self.confirm.confirm(action.prompt());
            if !decision.approved() {
                self.reporter.declined();
                let mut result = CleanupResult::untouched(name, ActionOutcome::Declined, before);
                result.decision = Some(decision);
                return result;
            }
            Some(decision)
        } else {
            None
        };

        if let Err(e) = action.execute(&plan, &self.ctx) {
            tracing::debug!("{} failed: {:?}", name, e);
            self.reporter.warning(&e.to_string());
        }

        let after = action.measure(&plan, &self.ctx);
        let result = CleanupResult::completed(name, decision, before, after);

        self.reporter.success(action.done());
        if !result.freed.is_zero() {
            self.reporter.freed(result.freed);
        }
        if let Some(hint) = action.hint() {
            self.reporter.detail(hint);
        }
        result
    }

    fn show_disk_space(&mut self) {
        let space = query_disk_space(self.ctx.home());
        self.reporter.disk_space(space.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfiguration;
    use crate::confirm::{ConfirmationDecision, Prompt};
    use crate::engine::actions::{DirectoryCleanup, Docker, ToolCache};
    use crate::test_support::FakeShell;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    type TestRunner<'a> = Runner<'a, Vec<u8>, Prompt<Cursor<String>, Vec<u8>>>;

    fn runner<'a>(config: &'a RunConfiguration, shell: &'a FakeShell, answers: &str) -> TestRunner<'a> {
        Runner::new(
            RunContext::new(config, shell),
            Reporter::new(Vec::new(), config.verbose),
            Prompt::new(config.auto_confirm, Cursor::new(answers.to_string()), Vec::new()),
        )
    }

    fn finish(runner: TestRunner<'_>) -> (String, String) {
        let (out, prompt) = runner.into_parts();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(prompt.into_output()).unwrap(),
        )
    }

    fn write_file(path: &Path, len: usize) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, vec![0u8; len]).unwrap();
    }

    #[test]
    fn test_standard_dry_run_deletes_nothing() {
        let home = TempDir::new().unwrap();
        let h = home.path();
        write_file(&h.join(".Trash/old.dmg"), 1000);
        write_file(&h.join("Library/Caches/pip/wheel.whl"), 500);
        write_file(&h.join("Library/Logs/App/app.log"), 10);
        write_file(&h.join("Library/Developer/Xcode/DerivedData/App/x.o"), 700);
        let brew_cache = h.join("Library/Caches/Homebrew");
        let yarn_cache = h.join("yarn-cache");
        let shell = FakeShell::new()
            .with_tool("brew")
            .with_tool("npm")
            .with_tool("yarn")
            .with_output("brew --cache", &brew_cache.display().to_string())
            .with_output("yarn cache dir", &yarn_cache.display().to_string());
        let config = RunConfiguration::new(h).with_dry_run(true);

        let mut runner = runner(&config, &shell, "");
        let summary = runner.run(Mode::Standard);
        let (out, prompt) = finish(runner);

        assert_eq!(out.matches("[DRY RUN] Would").count(), 7);
        assert!(!out.contains("Total space freed"));
        assert!(prompt.is_empty());
        assert_eq!(summary.total_freed, ByteCount::ZERO);
        assert_eq!(
            summary.result("trash").map(|r| &r.outcome),
            Some(&ActionOutcome::Estimated)
        );
        assert_eq!(summary.result("trash").unwrap().before, ByteCount(1000));
        for destructive in [
            "brew cleanup -s",
            "brew autoremove",
            "npm cache clean --force",
            "yarn cache clean",
        ] {
            assert!(!shell.ran(destructive), "{} ran during dry run", destructive);
        }
        assert!(h.join(".Trash/old.dmg").exists());
        assert!(h.join("Library/Developer/Xcode/DerivedData/App/x.o").exists());
    }

    #[test]
    fn test_declined_action_keeps_size() {
        let home = TempDir::new().unwrap();
        let build = home.path().join("Library/Developer/Xcode/DerivedData/App/x.o");
        write_file(&build, 700);
        let shell = FakeShell::new();
        let config = RunConfiguration::new(home.path());

        let mut runner = runner(&config, &shell, "n\n");
        let result = runner.run_action(&DirectoryCleanup::xcode_derived_data());
        let (out, prompt) = finish(runner);

        assert_eq!(result.outcome, ActionOutcome::Declined);
        assert_eq!(result.decision, Some(ConfirmationDecision::Declined));
        assert_eq!(result.before, ByteCount(700));
        assert_eq!(result.after, result.before);
        assert_eq!(result.freed, ByteCount::ZERO);
        assert!(build.exists());
        assert!(prompt.contains("Clean Xcode DerivedData?"));
        assert!(out.contains("Skipped"));
    }

    #[test]
    fn test_confirmed_action_accumulates() {
        let home = TempDir::new().unwrap();
        write_file(&home.path().join(".gradle/caches/modules-2/lib.jar"), 4096);
        let shell = FakeShell::new();
        let config = RunConfiguration::new(home.path());

        let mut runner = runner(&config, &shell, "YES\n");
        let result = runner.run_action(&DirectoryCleanup::gradle());

        assert_eq!(result.outcome, ActionOutcome::Completed);
        assert_eq!(result.decision, Some(ConfirmationDecision::Confirmed));
        assert_eq!(result.freed, ByteCount(4096));
        assert!(!home.path().join(".gradle/caches").exists());
    }

    #[test]
    fn test_deep_auto_confirm_frees_node_modules() {
        let home = TempDir::new().unwrap();
        let modules = home.path().join("code/site/node_modules");
        write_file(&modules.join("react/index.js"), 2048);
        let shell = FakeShell::new();
        let config = RunConfiguration::new(home.path()).with_auto_confirm(true);

        let mut runner = runner(&config, &shell, "");
        let summary = runner.run(Mode::Deep);
        let (out, prompt) = finish(runner);

        assert_eq!(summary.total_freed, ByteCount(2048));
        let result = summary.result("node-modules").unwrap();
        assert_eq!(result.decision, Some(ConfirmationDecision::AutoApproved));
        assert!(!modules.exists());
        assert!(prompt.is_empty());
        assert!(out.contains("Total space freed"));
        assert!(matches!(
            summary.result("docker").map(|r| &r.outcome),
            Some(ActionOutcome::Unavailable { .. })
        ));
    }

    #[test]
    fn test_missing_tool_never_prompts() {
        let home = TempDir::new().unwrap();
        let shell = FakeShell::new();
        let config = RunConfiguration::new(home.path());

        let mut runner = runner(&config, &shell, "y\n");
        let result = runner.run_action(&Docker);
        let (out, prompt) = finish(runner);

        assert_eq!(
            result.outcome,
            ActionOutcome::Unavailable {
                reason: "Docker not found".to_string()
            }
        );
        assert!(prompt.is_empty());
        assert!(shell.calls().is_empty());
        assert!(out.contains("Docker not found, skipping"));
    }

    #[test]
    fn test_execution_failure_is_a_warning() {
        let home = TempDir::new().unwrap();
        let brew_cache = home.path().join("Library/Caches/Homebrew");
        write_file(&brew_cache.join("wget.tar.gz"), 300);
        let shell = FakeShell::new()
            .with_tool("brew")
            .with_output("brew --cache", &brew_cache.display().to_string())
            .failing("brew cleanup -s");
        let config = RunConfiguration::new(home.path());

        let mut runner = runner(&config, &shell, "");
        let result = runner.run_action(&ToolCache::homebrew());
        let (out, _) = finish(runner);

        assert_eq!(result.outcome, ActionOutcome::Completed);
        assert_eq!(result.before, ByteCount(300));
        assert_eq!(result.freed, ByteCount::ZERO);
        assert!(out.contains("Warning:"));
        assert!(shell.ran("brew autoremove"));
    }

    #[test]
    fn test_summary_total_is_sum_of_freed() {
        let mut summary = RunSummary::new(Mode::Standard, false, Utc::now());
        summary.record(CleanupResult::completed("a", None, ByteCount(100), ByteCount(150)));
        summary.record(CleanupResult::completed("b", None, ByteCount(900), ByteCount(100)));
        summary.record(CleanupResult::untouched("c", ActionOutcome::Declined, ByteCount(5)));

        assert_eq!(summary.total_freed, ByteCount(800));
        assert!(summary.finish(Utc::now()).finished_at.is_some());
    }
}

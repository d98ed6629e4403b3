//! Human-readable progress output

use std::io::Write;

use colored::{ColoredString, Colorize};

use crate::config::Mode;
use crate::engine::queries::{ByteCount, DiskSpace};

const RULE_WIDTH: usize = 40;

/// Line-based, colorized progress output.
///
/// Write failures (a closed pipe, say) are ignored: losing progress output
/// must not abort a cleanup half way.
pub struct Reporter<W: Write> {
    out: W,
    verbose: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        let _ = writeln!(self.out, "{}", text);
    }

    fn boxed(&mut self, title: &str, paint: fn(ColoredString) -> ColoredString) {
        let border = "═".repeat(RULE_WIDTH);
        self.line(paint(format!("\n╔{}╗", border).normal()));
        self.line(paint(format!("║   {:<width$}║", title, width = RULE_WIDTH - 3).normal()));
        self.line(paint(format!("╚{}╝", border).normal()));
    }

    pub fn banner(&mut self, mode: Mode) {
        match mode {
            Mode::Standard => self.boxed("macOS Disk Space Cleaner", |s| s.cyan()),
            Mode::Deep => {
                self.boxed("DEEP CLEAN MODE", |s| s.red());
                self.line(
                    "\nWARNING: Deep clean includes potentially destructive operations".red(),
                );
            }
        }
    }

    pub fn dry_run_notice(&mut self) {
        self.line("\nDRY RUN MODE - No changes will be made\n".yellow());
    }

    pub fn disk_space(&mut self, space: Option<&DiskSpace>) {
        let Some(space) = space else { return };
        self.line("\nDisk Space:".bold());
        self.line(format!("  Total Capacity: {}", space.total).dimmed());
        self.line(format!("  Used: {} ({:.0}%)", space.used, space.usage_percent).dimmed());
        self.line(format!("  Available: {}", space.available).green());
    }

    pub fn section(&mut self, title: &str) {
        self.line(format!("\n{}...", title).cyan());
    }

    pub fn danger(&mut self, message: &str) {
        self.line(format!("  WARNING: {}", message).red());
    }

    pub fn detail(&mut self, message: &str) {
        self.line(format!("  {}", message).dimmed());
    }

    /// Only shown with `--verbose`.
    pub fn verbose(&mut self, message: &str) {
        if self.verbose {
            self.detail(message);
        }
    }

    pub fn current_size(&mut self, size: ByteCount) {
        self.detail(&format!("Current size: {}", size));
    }

    pub fn estimate(&mut self, intent: &str, size: ByteCount) {
        self.line(format!("  [DRY RUN] Would {}", intent).yellow());
        self.line(format!("  Would free: {}", size).yellow());
    }

    pub fn success(&mut self, message: &str) {
        self.line(format!("  ✓ {}", message).green());
    }

    pub fn freed(&mut self, size: ByteCount) {
        self.line(format!("  Freed: {}", size).green());
    }

    pub fn skipped(&mut self, reason: &str) {
        self.detail(&format!("{}, skipping", reason));
    }

    pub fn declined(&mut self) {
        self.detail("Skipped");
    }

    pub fn warning(&mut self, message: &str) {
        self.line(format!("  Warning: {}", message).yellow());
    }

    pub fn rule(&mut self) {
        self.line(format!("\n{}", "─".repeat(RULE_WIDTH)).dimmed());
    }

    pub fn total(&mut self, freed: ByteCount) {
        self.line(format!("\nTotal space freed: {}", freed).bold());
    }

    pub fn complete(&mut self, mode: Mode) {
        match mode {
            Mode::Standard => {
                self.line("\nCleanup complete!".green());
                self.line("   Run with --dry-run to preview changes".dimmed());
                self.line("   Run with --yes to skip confirmations".dimmed());
                self.line("   Run `deep` for aggressive cleanup\n".dimmed());
            }
            Mode::Deep => self.line("\nDeep cleanup complete!".green()),
        }
    }
}

//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
STANDARD CLEANUP INCLUDES:
  Trash, Homebrew cache, application caches (Safari, Chrome, VSCode, pip, yarn),
  npm & Yarn caches, old logs (>30 days), Xcode DerivedData (with confirmation),
  large file finder (report only)

DEEP CLEANUP INCLUDES (each requires confirmation):
  node_modules folders, Docker images & containers, CocoaPods cache,
  Gradle cache, Xcode Archives

EXAMPLES:
  clean-disk-space                   Run standard cleanup
  clean-disk-space --dry-run         Preview standard cleanup
  clean-disk-space deep              Run deep cleanup with confirmation
  clean-disk-space deep --dry-run    Preview deep cleanup
  clean-disk-space docs              Show detailed documentation";

#[derive(Parser, Debug)]
#[command(name = "clean-disk-space")]
#[command(author, version, about = "Safely reclaim disk space on your workstation", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<SubCommand>,

    /// Preview what would be cleaned without making changes
    #[arg(short, long, global = true)]
    pub dry_run: bool,

    /// Skip confirmation prompts (use with caution)
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    /// Show detailed output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Home directory to clean (defaults to the current user's)
    #[arg(long, global = true, env = "CLEAN_DISK_SPACE_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Write a JSON summary of the run to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubCommand {
    /// Run standard cleanup (default)
    Clean,

    /// Run deep cleanup (node_modules, Docker, CocoaPods, Gradle, Xcode Archives)
    Deep,

    /// Show detailed documentation
    #[command(alias = "doc")]
    Docs,
}

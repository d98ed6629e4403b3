//! clean-disk-space CLI - reclaim disk space safely

use std::io::IsTerminal;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use clean_disk_space::cli::{Args, SubCommand};
use clean_disk_space::{
    render_docs, write_report, Mode, Prompt, Reporter, RunConfiguration, RunContext, Runner,
    SystemShell,
};

fn main() {
    let args = Args::parse();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let mode = match args.command {
        Some(SubCommand::Docs) => {
            println!("{}", render_docs());
            return Ok(());
        }
        Some(SubCommand::Deep) => Mode::Deep,
        Some(SubCommand::Clean) | None => Mode::Standard,
    };

    let config = RunConfiguration::for_user(args.home)?
        .with_dry_run(args.dry_run)
        .with_auto_confirm(args.yes)
        .with_verbose(args.verbose);

    let ctx = RunContext::new(&config, &SystemShell);
    let reporter = Reporter::new(std::io::stdout(), config.verbose);
    let mut runner = Runner::new(ctx, reporter, Prompt::stdio(config.auto_confirm));
    let summary = runner.run(mode);

    if let Some(path) = args.report {
        write_report(&summary, &path)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }

    Ok(())
}

//! Docker system prune

use crate::engine::actions::{CleanupAction, Plan, Safety, Unavailable};
use crate::engine::context::RunContext;
use crate::engine::queries::{parse_size, ByteCount};
use crate::error::Result;

const DOCKER: &str = "docker";

#[derive(Debug, Clone, Default)]
pub struct Docker;

/// Total of the per-type sizes printed by `docker system df --format {{.Size}}`.
pub fn parse_usage(output: &str) -> ByteCount {
    output.lines().filter_map(parse_size).sum()
}

impl CleanupAction for Docker {
    fn name(&self) -> &'static str {
        "docker"
    }

    fn title(&self) -> &'static str {
        "Cleaning Docker"
    }

    fn safety(&self) -> Safety {
        Safety::NeedsConfirmation
    }

    fn intent(&self) -> &'static str {
        "clean Docker images and containers"
    }

    fn done(&self) -> &'static str {
        "Docker cleaned"
    }

    fn prompt(&self) -> &'static str {
        "Clean Docker (removes unused images/containers)?"
    }

    fn warning(&self) -> Option<&'static str> {
        Some("This removes unused Docker images/containers")
    }

    fn plan(&self, ctx: &RunContext<'_>) -> std::result::Result<Plan, Unavailable> {
        if !ctx.shell.availability(DOCKER).is_available() {
            return Err(Unavailable::not_found("Docker"));
        }

        let mut plan = Plan::default();
        if ctx.dry_run() {
            let preview = ctx.shell.execute(DOCKER, &["system", "df"], true);
            plan.notes.extend(preview.lines().map(str::to_string));
        }
        Ok(plan)
    }

    fn measure(&self, _plan: &Plan, ctx: &RunContext<'_>) -> ByteCount {
        let usage = ctx
            .shell
            .execute(DOCKER, &["system", "df", "--format", "{{.Size}}"], true);
        parse_usage(&usage)
    }

    fn execute(&self, _plan: &Plan, ctx: &RunContext<'_>) -> Result<()> {
        ctx.shell.run(DOCKER, &["system", "prune", "-af"]).map(|_| ())
    }
}

//! Per-run context handed to every cleanup action

use std::path::{Path, PathBuf};

use crate::config::RunConfiguration;
use crate::shell::Shell;

/// Everything an action may consult. Actions never mutate it; results flow
/// back to the runner as return values.
#[derive(Clone, Copy)]
pub struct RunContext<'a> {
    pub config: &'a RunConfiguration,
    pub shell: &'a dyn Shell,
}

impl<'a> RunContext<'a> {
    pub fn new(config: &'a RunConfiguration, shell: &'a dyn Shell) -> Self {
        Self { config, shell }
    }

    pub fn home(&self) -> &Path {
        self.config.home()
    }

    /// Resolve a `/`-separated path relative to the home directory.
    pub fn home_path(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.home().to_path_buf(), |path, part| path.join(part))
    }

    pub fn dry_run(&self) -> bool {
        self.config.dry_run
    }
}

impl std::fmt::Debug for RunContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunContext")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

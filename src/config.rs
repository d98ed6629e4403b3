//! Run configuration

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CleanError, Result};

/// Which fixed sequence of cleanup actions to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Standard,
    Deep,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Standard => write!(f, "standard"),
            Mode::Deep => write!(f, "deep"),
        }
    }
}

/// Options fixed for the whole of one invocation.
///
/// All flags default to `false`. The home directory is the root every
/// cleanup target is resolved against.
#[derive(Debug, Clone)]
pub struct RunConfiguration {
    /// Only measure and estimate, never delete.
    pub dry_run: bool,
    /// Treat every confirmation prompt as approved.
    pub auto_confirm: bool,
    /// Print per-path detail and echo external commands.
    pub verbose: bool,
    home: PathBuf,
}

impl RunConfiguration {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            dry_run: false,
            auto_confirm: false,
            verbose: false,
            home: home.into(),
        }
    }

    /// Build a configuration for the current user, or for `home` when given.
    pub fn for_user(home: Option<PathBuf>) -> Result<Self> {
        let home = home
            .or_else(dirs::home_dir)
            .ok_or(CleanError::HomeNotFound)?;
        Ok(Self::new(home))
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_auto_confirm(mut self, auto_confirm: bool) -> Self {
        self.auto_confirm = auto_confirm;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn home(&self) -> &Path {
        &self.home
    }
}

//! Cleanup engine: actions, the runner that drives them, and size queries

pub mod actions;
pub mod catalog;
pub mod context;
pub mod queries;
pub mod runner;

pub use actions::{ActionOutcome, CleanupAction, CleanupResult, Plan, Safety, Unavailable};
pub use context::RunContext;
pub use runner::{RunSummary, Runner};

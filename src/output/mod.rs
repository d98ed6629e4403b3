//! Output formatting module

pub mod docs;
pub mod human;
pub mod json;

pub use docs::render_docs;
pub use human::Reporter;
pub use json::{format_json, write_report};

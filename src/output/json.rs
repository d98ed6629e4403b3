//! JSON run report

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::engine::RunSummary;
use crate::error::Result;

pub fn format_json(summary: &RunSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

pub fn write_report(summary: &RunSummary, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

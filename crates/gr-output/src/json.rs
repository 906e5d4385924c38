//! JSON summary writer.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::row::RunSummary;
use crate::OutputResult;

/// Write the run summary to `path` as pretty-printed JSON.
pub fn write_summary_json(path: &Path, summary: &RunSummary) -> OutputResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), summary)?;
    Ok(())
}

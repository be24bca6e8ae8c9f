//! JSON dump of the aggregated product columns

use crate::catalog::ProductColumns;
use crate::output::traits::OutputResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the six product columns as a JSON object
pub fn write_json_columns(columns: &ProductColumns, output_path: &Path) -> OutputResult<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer(&mut writer, columns)?;
    writer.flush()?;

    tracing::info!("Wrote product columns to {}", output_path.display());
    Ok(())
}

//! JSON output writer.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records as a pretty-printed JSON array.
///
/// Nulls are written as `null`, every field is always present.
pub fn write_json(records: &[MessageRecord], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// Converts records to a JSON array string.
pub fn to_json(records: &[MessageRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

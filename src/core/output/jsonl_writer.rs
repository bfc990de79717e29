//! JSON Lines (JSONL) output writer.
//!
//! One record per line, convenient for line-oriented tools and loading
//! into dataframes incrementally.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to JSONL format.
///
/// ```jsonl
/// {"talk_date":"2023-05-01","day_name":"월요일","writer":"Alice",...}
/// ```
pub fn write_jsonl(records: &[MessageRecord], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(records: &[MessageRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(records: &[MessageRecord], writer: &mut W) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *writer, record)?;
        writeln!(writer)?;
    }
    Ok(())
}

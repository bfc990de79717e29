//! Delimited (CSV/TSV) output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::record::{COLUMNS, MessageRecord};

/// Writes records as a delimited table.
///
/// # Format
/// - Delimiter: `config.delimiter` (tab by default)
/// - Columns: see [`COLUMNS`]; no index column
/// - Nulls: empty field
/// - Booleans: `true` / `false`
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: &Path, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_delimited(records, file, config)
}

/// Converts records to a delimited string.
pub fn to_csv(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_delimited(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_delimited<W: Write>(records: &[MessageRecord], sink: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(sink);

    if config.include_header {
        writer.write_record(COLUMNS)?;
    }

    for record in records {
        writer.write_record(build_record(record))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build one row in [`COLUMNS`] order.
fn build_record(record: &MessageRecord) -> [String; 12] {
    [
        record.talk_date_string(),
        record.day_name.clone(),
        record.writer.clone(),
        record.wrote_at_hhmm().unwrap_or_default(),
        record.msg.clone().unwrap_or_default(),
        record
            .action_msg
            .map(|a| a.label().to_string())
            .unwrap_or_default(),
        record.is_talking_activity.to_string(),
        record.is_notice_action.to_string(),
        record.is_deleted_msg.to_string(),
        record.is_emoji.to_string(),
        record.is_picture.to_string(),
        record.is_search.to_string(),
    ]
}

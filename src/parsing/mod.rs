//! Transcript pipeline stages.
//!
//! Shared by the in-memory [`KakaoParser`](crate::parser::KakaoParser) and the
//! streaming [`RecordIterator`](crate::streaming::RecordIterator):
//!
//! 1. [`segment`] - physical lines to day blocks
//! 2. [`reassemble`] - day block to logical lines
//! 3. [`extract`] - logical line to [`MessageRecord`]
//! 4. [`annotate`] - placeholder flags

pub mod annotate;
pub mod extract;
pub mod grammar;
pub mod reassemble;
pub mod segment;

use tracing::debug;

use crate::error::Result;
use crate::record::MessageRecord;

pub use annotate::annotate;
pub use extract::{DayHeader, collapse_whitespace, convert_time, extract_record, parse_day_header};
pub use grammar::{LineGrammar, MessageHeader};
pub use reassemble::{LogicalLine, reassemble};
pub use segment::{DaySegment, RawLine, Segmenter, segment_days};

/// Runs stages 2-4 over one day block.
pub fn parse_segment(segment: &DaySegment, grammar: &LineGrammar) -> Result<Vec<MessageRecord>> {
    let day = parse_day_header(segment.header())?;
    let units = reassemble(segment.content(), grammar);

    let records = units
        .iter()
        .map(|unit| {
            let mut record = extract_record(unit, &day, grammar)?;
            annotate(&mut record, grammar.markers());
            Ok(record)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        date = %day.date,
        line = segment.header().number,
        lines = segment.content().len(),
        records = records.len(),
        "parsed day segment"
    );
    Ok(records)
}

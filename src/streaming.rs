//! Lazy record iterator over a transcript reader.
//!
//! Lines are read through a [`BufRead`] and handed to the day
//! [`Segmenter`]; each completed day is parsed as a whole and its records are
//! queued. Peak memory is one day of conversation instead of the whole file.
//!
//! # Example
//!
//! ```rust,no_run
//! use kakaopack::parser::KakaoParser;
//!
//! let parser = KakaoParser::new();
//! for result in parser.stream("KakaoTalk_Chat.txt".as_ref())? {
//!     let record = result?;
//!     println!("{} {}: {}", record.talk_date, record.writer, record.msg_str());
//! }
//! # Ok::<(), kakaopack::KakaopackError>(())
//! ```

use std::collections::VecDeque;
use std::io::BufRead;
use std::path::PathBuf;

use tracing::info;

use crate::config::TranscriptConfig;
use crate::error::{KakaopackError, Result};
use crate::parsing::{DaySegment, LineGrammar, Segmenter, parse_segment};
use crate::record::MessageRecord;

/// Iterator over the records of one transcript.
///
/// Yields `Err` at most once; iteration ends after the first error.
pub struct RecordIterator<R: BufRead> {
    reader: R,
    source: Option<PathBuf>,
    total_bytes: Option<u64>,
    bytes_read: u64,
    line_buffer: String,
    segmenter: Option<Segmenter>,
    grammar: LineGrammar,
    queued: VecDeque<MessageRecord>,
    segments: usize,
    records: usize,
    finished: bool,
}

impl<R: BufRead> RecordIterator<R> {
    /// Creates an iterator over `reader`.
    pub fn new(reader: R, config: &TranscriptConfig) -> Result<Self> {
        Ok(Self {
            reader,
            source: None,
            total_bytes: None,
            bytes_read: 0,
            line_buffer: String::with_capacity(4096),
            segmenter: Some(Segmenter::new(config)),
            grammar: LineGrammar::new(&config.markers)?,
            queued: VecDeque::new(),
            segments: 0,
            records: 0,
            finished: false,
        })
    }

    /// Attaches the file path (used in read errors) and its size (used for
    /// progress).
    #[must_use]
    pub fn with_source(mut self, path: impl Into<PathBuf>, total_bytes: Option<u64>) -> Self {
        self.source = Some(path.into());
        self.total_bytes = total_bytes;
        self
    }

    /// Returns approximate progress as a percentage (0.0 to 100.0).
    pub fn progress(&self) -> Option<f64> {
        match self.total_bytes {
            Some(0) | None => None,
            Some(total) => Some((self.bytes_read as f64 / total as f64) * 100.0),
        }
    }

    /// Bytes read so far.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    /// Day segments parsed so far.
    pub fn segments_parsed(&self) -> usize {
        self.segments
    }

    fn read_error(&self, err: std::io::Error) -> KakaopackError {
        match &self.source {
            Some(path) => KakaopackError::input_access(path, err),
            None => KakaopackError::Io(err),
        }
    }

    fn read_line(&mut self) -> std::io::Result<bool> {
        self.line_buffer.clear();
        let bytes = self.reader.read_line(&mut self.line_buffer)?;
        self.bytes_read += bytes as u64;
        Ok(bytes > 0)
    }

    fn queue_segment(&mut self, segment: &DaySegment) -> Result<()> {
        let records = parse_segment(segment, &self.grammar)?;
        self.segments += 1;
        self.records += records.len();
        self.queued.extend(records);
        Ok(())
    }

    /// Reads until at least one record is queued or input ends.
    fn fill(&mut self) -> Result<()> {
        while self.queued.is_empty() {
            if self.segmenter.is_none() {
                return Ok(());
            }

            let has_line = self.read_line().map_err(|e| self.read_error(e))?;
            if has_line {
                let completed = self
                    .segmenter
                    .as_mut()
                    .and_then(|segmenter| segmenter.push(&self.line_buffer));
                if let Some(segment) = completed {
                    self.queue_segment(&segment)?;
                }
                continue;
            }

            let Some(segmenter) = self.segmenter.take() else {
                return Ok(());
            };
            let lines = segmenter.lines_seen();
            if let Some(segment) = segmenter.finish() {
                self.queue_segment(&segment)?;
            }
            info!(
                lines,
                segments = self.segments,
                records = self.records,
                "finished transcript"
            );
            return Ok(());
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for RecordIterator<R> {
    type Item = Result<MessageRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(record) = self.queued.pop_front() {
            return Some(Ok(record));
        }
        if self.finished {
            return None;
        }

        if let Err(e) = self.fill() {
            self.finished = true;
            self.queued.clear();
            return Some(Err(e));
        }

        match self.queued.pop_front() {
            Some(record) => Some(Ok(record)),
            None => {
                self.finished = true;
                None
            }
        }
    }
}

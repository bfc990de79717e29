//! Splits the physical line stream into per-day blocks.
//!
//! [`Segmenter`] is push-based so the same state machine drives both the
//! in-memory parser and the streaming iterator.

use crate::config::TranscriptConfig;

/// One physical line with its 1-based position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub number: usize,
    pub text: String,
}

impl RawLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// All lines of one calendar day. The first line is the day header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySegment {
    lines: Vec<RawLine>,
}

impl DaySegment {
    /// Returns `None` for an empty line list; a segment always has a header.
    pub fn new(lines: Vec<RawLine>) -> Option<Self> {
        if lines.is_empty() {
            None
        } else {
            Some(Self { lines })
        }
    }

    pub fn header(&self) -> &RawLine {
        &self.lines[0]
    }

    /// Lines after the header.
    pub fn content(&self) -> &[RawLine] {
        &self.lines[1..]
    }

    pub fn lines(&self) -> &[RawLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Day-block state machine.
///
/// Feed physical lines with [`push`](Segmenter::push) and call
/// [`finish`](Segmenter::finish) at end of input.
#[derive(Debug)]
pub struct Segmenter {
    skip: usize,
    suffix: String,
    seen: usize,
    current: Vec<RawLine>,
}

impl Segmenter {
    pub fn new(config: &TranscriptConfig) -> Self {
        Self {
            skip: config.skipped_lines(),
            suffix: config.day_separator_suffix.clone(),
            seen: 0,
            current: Vec::new(),
        }
    }

    /// Consumes one physical line. Returns the previous day block when this
    /// line opens a new one.
    pub fn push(&mut self, line: &str) -> Option<DaySegment> {
        self.seen += 1;
        if self.seen <= self.skip {
            return None;
        }

        let line = if self.seen == 1 {
            line.strip_prefix('\u{feff}').unwrap_or(line)
        } else {
            line
        };
        let text = line.trim();

        // Empty accumulator makes the flush a no-op for a leading separator.
        let completed = if text.ends_with(self.suffix.as_str()) && !self.current.is_empty() {
            DaySegment::new(std::mem::take(&mut self.current))
        } else {
            None
        };

        self.current.push(RawLine::new(self.seen, text));
        completed
    }

    /// Flushes the last open block.
    pub fn finish(self) -> Option<DaySegment> {
        DaySegment::new(self.current)
    }

    /// Number of physical lines consumed so far, header block included.
    pub fn lines_seen(&self) -> usize {
        self.seen
    }
}

/// Segments a whole line sequence in one call.
pub fn segment_days<'a, I>(lines: I, config: &TranscriptConfig) -> Vec<DaySegment>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut segmenter = Segmenter::new(config);
    let mut segments: Vec<DaySegment> = lines
        .into_iter()
        .filter_map(|line| segmenter.push(line))
        .collect();
    segments.extend(segmenter.finish());
    segments
}

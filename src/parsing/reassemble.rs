//! Merges physical lines of one day into logical lines.
//!
//! A line opens a new unit when it starts with a `[author] [time]` header or
//! contains a system-action phrase. Everything else continues the open unit.
//! Action lines are always complete units of their own.

use super::grammar::LineGrammar;
use super::segment::RawLine;

/// One reassembled message or action line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Line number of the first physical line.
    pub number: usize,
    /// Number of physical lines merged into this unit.
    pub span: usize,
    /// Physical lines joined by single spaces, outer whitespace trimmed.
    pub text: String,
}

#[derive(Debug)]
struct OpenUnit {
    number: usize,
    span: usize,
    text: String,
}

impl OpenUnit {
    fn start(line: &RawLine) -> Self {
        Self {
            number: line.number,
            span: 1,
            text: line.text.clone(),
        }
    }

    fn append(&mut self, line: &RawLine) {
        self.text.push(' ');
        self.text.push_str(&line.text);
        self.span += 1;
    }

    fn close(self) -> Option<LogicalLine> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }
        Some(LogicalLine {
            number: self.number,
            span: self.span,
            text: text.to_string(),
        })
    }
}

/// Reassembles the content lines of one day segment (header excluded).
pub fn reassemble(lines: &[RawLine], grammar: &LineGrammar) -> Vec<LogicalLine> {
    let mut units = Vec::new();
    let mut open: Option<OpenUnit> = None;

    for line in lines {
        if grammar.is_message_header(&line.text) {
            units.extend(open.take().and_then(OpenUnit::close));
            open = Some(OpenUnit::start(line));
        } else if grammar.action_in(&line.text).is_some() {
            units.extend(open.take().and_then(OpenUnit::close));
            units.extend(OpenUnit::start(line).close());
        } else {
            match open.as_mut() {
                Some(unit) => unit.append(line),
                None => open = Some(OpenUnit::start(line)),
            }
        }
    }

    units.extend(open.and_then(OpenUnit::close));
    units
}

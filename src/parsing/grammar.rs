//! Line-level patterns shared by the reassembler and the extractor.

use regex::Regex;

use crate::config::Markers;
use crate::error::Result;
use crate::record::SystemAction;

/// `text` starts with `marker`. An empty marker never matches.
pub(crate) fn starts_with_marker(text: &str, marker: &str) -> bool {
    !marker.is_empty() && text.starts_with(marker)
}

/// `text` contains `marker`. An empty marker never matches.
pub(crate) fn contains_marker(text: &str, marker: &str) -> bool {
    !marker.is_empty() && text.contains(marker)
}

/// `text` is exactly `marker`. An empty marker never matches.
pub(crate) fn is_marker(text: &str, marker: &str) -> bool {
    !marker.is_empty() && text == marker
}

/// The `[author] [오전 9:05]` prefix of an authored message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader<'a> {
    pub author: &'a str,
    /// Time token without brackets, e.g. `오후 1:05`.
    pub time: &'a str,
    /// Everything after the time token's closing bracket, untrimmed.
    pub rest: &'a str,
}

/// Compiled matchers for one marker set.
#[derive(Debug, Clone)]
pub struct LineGrammar {
    header: Regex,
    markers: Markers,
}

impl LineGrammar {
    pub fn new(markers: &Markers) -> Result<Self> {
        // [author] [<am|pm>...]; author is the shortest bracketed run.
        let pattern = format!(
            r"^\[(?P<author>.*?)\]\s\[(?P<time>(?:{}|{})[^\]]*)\]",
            regex::escape(&markers.am),
            regex::escape(&markers.pm),
        );
        Ok(Self {
            header: Regex::new(&pattern)?,
            markers: markers.clone(),
        })
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn is_message_header(&self, line: &str) -> bool {
        self.header.is_match(line)
    }

    pub fn message_header<'a>(&self, line: &'a str) -> Option<MessageHeader<'a>> {
        let caps = self.header.captures(line)?;
        let whole = caps.get(0)?;
        Some(MessageHeader {
            author: caps.name("author")?.as_str(),
            time: caps.name("time")?.as_str(),
            rest: &line[whole.end()..],
        })
    }

    /// First action whose phrase occurs anywhere in `line`.
    ///
    /// Plain substring matching: a message body quoting one of the phrases
    /// is reported as an action too.
    pub fn action_in(&self, line: &str) -> Option<SystemAction> {
        SystemAction::ALL
            .into_iter()
            .find(|&action| contains_marker(line, self.markers.action_phrase(action)))
    }
}

//! Field extraction: day headers, time tokens and logical lines to records.

use chrono::{NaiveDate, NaiveTime};

use super::grammar::{LineGrammar, starts_with_marker};
use super::reassemble::LogicalLine;
use super::segment::RawLine;
use crate::config::Markers;
use crate::error::{KakaopackError, Result};
use crate::record::MessageRecord;

const DATE_FORMAT: &str = "%Y년 %m월 %d일";
const TIME_FORMAT: &str = "%p %I:%M";

/// Date and weekday label of one day segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHeader {
    pub date: NaiveDate,
    /// Weekday label exactly as printed, e.g. `월요일`.
    pub day_name: String,
}

impl DayHeader {
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Parses `--------------- 2023년 5월 1일 월요일 ---------------`.
///
/// The weekday label is the last whitespace-separated token; the rest must
/// match `YYYY년 M월 D일`.
pub fn parse_day_header(header: &RawLine) -> Result<DayHeader> {
    let full = header
        .text
        .trim_matches(|c: char| c == '-' || c.is_whitespace());
    let (date_part, day_name) = full.rsplit_once(char::is_whitespace).unwrap_or((full, ""));

    let date = NaiveDate::parse_from_str(date_part.trim(), DATE_FORMAT)
        .map_err(|e| KakaopackError::invalid_date(&header.text, header.number, e))?;

    Ok(DayHeader {
        date,
        day_name: day_name.to_string(),
    })
}

/// Converts a `오전 9:05` / `오후 1:05` token to a 24-hour time.
pub fn convert_time(token: &str, markers: &Markers) -> std::result::Result<NaiveTime, chrono::ParseError> {
    let token = token.trim();
    let normalized = if let Some(clock) = token.strip_prefix(markers.am.as_str()) {
        format!("AM {}", clock.trim())
    } else if let Some(clock) = token.strip_prefix(markers.pm.as_str()) {
        format!("PM {}", clock.trim())
    } else {
        token.to_string()
    };
    NaiveTime::parse_from_str(&normalized, TIME_FORMAT)
}

/// Collapses every whitespace run to one space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Classifies one logical line and extracts its fields.
///
/// Flags other than `is_notice_action` are left cleared; see
/// [`annotate`](super::annotate::annotate).
pub fn extract_record(
    line: &LogicalLine,
    day: &DayHeader,
    grammar: &LineGrammar,
) -> Result<MessageRecord> {
    let markers = grammar.markers();

    if let Some(header) = grammar.message_header(&line.text) {
        let author = header.author.trim();
        if author.is_empty() {
            return Err(KakaopackError::structure(
                day.date_string(),
                line.number,
                &line.text,
                "message header has an empty author",
            ));
        }

        let wrote_at = convert_time(header.time, markers).map_err(|e| {
            KakaopackError::invalid_time(day.date_string(), line.number, &line.text, e)
        })?;

        let body = collapse_whitespace(header.rest);
        let msg = (!body.is_empty()).then_some(body);

        let mut record = MessageRecord::message(day.date, &day.day_name, author, wrote_at, msg);
        record.is_notice_action = starts_with_marker(record.msg_str(), &markers.notice_prefix);
        return Ok(record);
    }

    let Some(action) = grammar.action_in(&line.text) else {
        return Err(KakaopackError::structure(
            day.date_string(),
            line.number,
            &line.text,
            "line is neither a message nor a system action",
        ));
    };

    let writer = if action.is_admin_event() {
        markers.admin_writer.clone()
    } else {
        let phrase = markers.action_phrase(action);
        let name = line
            .text
            .strip_suffix(phrase)
            .map(str::to_string)
            .unwrap_or_else(|| line.text.replacen(phrase, "", 1));
        let name = name.trim();
        if name.is_empty() {
            return Err(KakaopackError::structure(
                day.date_string(),
                line.number,
                &line.text,
                "membership event without a participant name",
            ));
        }
        name.to_string()
    };

    Ok(MessageRecord::action(
        day.date,
        &day.day_name,
        writer,
        action,
        collapse_whitespace(&line.text),
    ))
}

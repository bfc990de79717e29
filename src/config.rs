//! Configuration types for transcript parsing and output.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`TranscriptConfig`] - how the raw export is laid out (header block,
//!   day separator) plus the locale [`Markers`]
//! - [`Markers`] - every locale-specific literal the parser matches against
//! - [`OutputConfig`] - delimited output settings
//!
//! # Example
//!
//! ```rust
//! use kakaopack::config::TranscriptConfig;
//! use kakaopack::parser::KakaoParser;
//!
//! let config = TranscriptConfig::new().with_header(false);
//! let parser = KakaoParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

use crate::record::SystemAction;

/// Number of lines the export tool writes before the first day header.
pub const DEFAULT_HEADER_LINES: usize = 4;

/// Suffix every day-header line ends with (`... 월요일 ---------------`).
pub const DEFAULT_DAY_SEPARATOR_SUFFIX: &str = "일 ---------------";

/// Layout of a KakaoTalk transcript.
///
/// # Example
///
/// ```rust
/// use kakaopack::config::TranscriptConfig;
///
/// let config = TranscriptConfig::new()
///     .with_header(true)
///     .with_header_lines(4);
/// assert_eq!(config.skipped_lines(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Whether the file starts with the export tool's header block (default: true)
    pub has_header: bool,

    /// Size of the header block in lines (default: 4)
    pub header_lines: usize,

    /// Literal suffix that marks a day-header line
    pub day_separator_suffix: String,

    /// Locale-specific literals
    pub markers: Markers,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            has_header: true,
            header_lines: DEFAULT_HEADER_LINES,
            day_separator_suffix: DEFAULT_DAY_SEPARATOR_SUFFIX.to_string(),
            markers: Markers::default(),
        }
    }
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the input begins with a header block.
    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Sets the size of the header block.
    #[must_use]
    pub fn with_header_lines(mut self, lines: usize) -> Self {
        self.header_lines = lines;
        self
    }

    /// Sets the day-header suffix literal.
    #[must_use]
    pub fn with_day_separator_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.day_separator_suffix = suffix.into();
        self
    }

    /// Replaces the locale markers.
    #[must_use]
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Number of physical lines dropped before segmentation starts.
    pub fn skipped_lines(&self) -> usize {
        if self.has_header { self.header_lines } else { 0 }
    }
}

/// Locale-specific literals used for classification and flagging.
///
/// Matching is always exact or prefix/substring based; nothing here is
/// interpreted as a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Morning half-day marker in time tokens
    pub am: String,
    /// Afternoon half-day marker in time tokens
    pub pm: String,

    /// Writer recorded for administrator-originated events
    pub admin_writer: String,

    /// Phrase of a message hidden by the chat-room admin
    pub hidden_phrase: String,
    /// Phrase of a participant removed by the admin
    pub removed_phrase: String,
    /// Suffix of a participant leaving
    pub left_phrase: String,
    /// Suffix of a participant joining
    pub joined_phrase: String,

    /// Prefix of a pinned board notice
    pub notice_prefix: String,
    /// Prefix of a hashtag search share
    pub search_prefix: String,
    /// Body of a deleted message
    pub deleted_placeholder: String,
    /// Body of an emoticon message
    pub emoji_placeholder: String,
    /// Body of a picture message
    pub picture_placeholder: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            am: "오전".to_string(),
            pm: "오후".to_string(),
            admin_writer: "관리자".to_string(),
            hidden_phrase: "채팅방 관리자가 메시지를 가렸습니다.".to_string(),
            removed_phrase: "님을 내보냈습니다.".to_string(),
            left_phrase: "님이 나갔습니다.".to_string(),
            joined_phrase: "님이 들어왔습니다.".to_string(),
            notice_prefix: "톡게시판 '공지': ".to_string(),
            search_prefix: "샵검색: #".to_string(),
            deleted_placeholder: "삭제된 메시지입니다.".to_string(),
            emoji_placeholder: "이모티콘".to_string(),
            picture_placeholder: "사진".to_string(),
        }
    }
}

impl Markers {
    /// Creates the default Korean marker set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the phrase that identifies `action` in a line.
    pub fn action_phrase(&self, action: SystemAction) -> &str {
        match action {
            SystemAction::MessageHidden => &self.hidden_phrase,
            SystemAction::Removed => &self.removed_phrase,
            SystemAction::Left => &self.left_phrase,
            SystemAction::Joined => &self.joined_phrase,
        }
    }

    /// Sets the half-day markers.
    #[must_use]
    pub fn with_half_day_markers(mut self, am: impl Into<String>, pm: impl Into<String>) -> Self {
        self.am = am.into();
        self.pm = pm.into();
        self
    }

    /// Sets the notice prefix.
    #[must_use]
    pub fn with_notice_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.notice_prefix = prefix.into();
        self
    }

    /// Sets the hashtag-search prefix.
    #[must_use]
    pub fn with_search_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.search_prefix = prefix.into();
        self
    }
}

/// Settings for delimited output.
///
/// # Example
///
/// ```rust
/// use kakaopack::config::OutputConfig;
///
/// let config = OutputConfig::new().with_delimiter(b',');
/// assert_eq!(config.delimiter, b',');
/// assert!(config.include_header);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Field delimiter (default: tab)
    pub delimiter: u8,

    /// Write a header row naming the columns (default: true)
    pub include_header: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            include_header: true,
        }
    }
}

impl OutputConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to write the header row.
    #[must_use]
    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }
}

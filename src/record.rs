//! Normalized row type produced from a KakaoTalk transcript.
//!
//! Every logical line of the transcript becomes exactly one [`MessageRecord`]:
//! either an authored message (`is_talking_activity == true`) or a
//! [`SystemAction`] event.
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use kakaopack::record::MessageRecord;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
//! let time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
//! let record = MessageRecord::message(date, "월", "Alice", time, Some("hello".into()));
//!
//! assert!(record.is_talking_activity);
//! assert_eq!(record.wrote_at_hhmm().as_deref(), Some("09:05"));
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Column names in output order.
pub const COLUMNS: [&str; 12] = [
    "talk_date",
    "day_name",
    "writer",
    "wrote_at",
    "msg",
    "action_msg",
    "is_talking_activity",
    "is_notice_action",
    "is_deleted_msg",
    "is_emoji",
    "is_picture",
    "is_search",
];

/// Non-authored events the export records as plain lines.
///
/// Serialized with the labels the export tool itself uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemAction {
    /// A message was hidden by the chat-room admin.
    #[serde(rename = "메시지 가리기")]
    MessageHidden,
    /// A participant was removed by the admin.
    #[serde(rename = "내보내기")]
    Removed,
    /// A participant left.
    #[serde(rename = "나가기")]
    Left,
    /// A participant joined.
    #[serde(rename = "들어오기")]
    Joined,
}

impl SystemAction {
    /// Match order used when a line contains more than one phrase.
    pub const ALL: [SystemAction; 4] = [
        SystemAction::MessageHidden,
        SystemAction::Removed,
        SystemAction::Left,
        SystemAction::Joined,
    ];

    /// Label written to the `action_msg` column.
    pub fn label(self) -> &'static str {
        match self {
            SystemAction::MessageHidden => "메시지 가리기",
            SystemAction::Removed => "내보내기",
            SystemAction::Left => "나가기",
            SystemAction::Joined => "들어오기",
        }
    }

    /// Locale-independent name.
    pub fn name(self) -> &'static str {
        match self {
            SystemAction::MessageHidden => "message-hidden",
            SystemAction::Removed => "removed",
            SystemAction::Left => "left",
            SystemAction::Joined => "joined",
        }
    }

    /// Returns `true` if the event is initiated by the admin rather than
    /// the participant it concerns.
    pub fn is_admin_event(self) -> bool {
        matches!(self, SystemAction::MessageHidden | SystemAction::Removed)
    }
}

impl std::fmt::Display for SystemAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the output table.
///
/// | Field | Authored message | System action |
/// |-------|------------------|---------------|
/// | `writer` | author name | admin sentinel or participant |
/// | `wrote_at` | `HH:MM` | `None` |
/// | `msg` | body, `None` if empty | full action line |
/// | `action_msg` | `None` | the action |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Calendar day taken from the day header.
    pub talk_date: NaiveDate,

    /// Weekday label as printed in the day header.
    pub day_name: String,

    pub writer: String,

    /// 24-hour local time, authored messages only.
    #[serde(with = "hhmm")]
    pub wrote_at: Option<NaiveTime>,

    /// Body with internal whitespace collapsed.
    pub msg: Option<String>,

    pub action_msg: Option<SystemAction>,

    pub is_talking_activity: bool,
    pub is_notice_action: bool,

    // Set by the flag annotator.
    pub is_deleted_msg: bool,
    pub is_emoji: bool,
    pub is_picture: bool,
    pub is_search: bool,
}

impl MessageRecord {
    /// Creates an authored-message record with all flags cleared.
    pub fn message(
        talk_date: NaiveDate,
        day_name: impl Into<String>,
        writer: impl Into<String>,
        wrote_at: NaiveTime,
        msg: Option<String>,
    ) -> Self {
        Self {
            talk_date,
            day_name: day_name.into(),
            writer: writer.into(),
            wrote_at: Some(wrote_at),
            msg,
            action_msg: None,
            is_talking_activity: true,
            is_notice_action: false,
            is_deleted_msg: false,
            is_emoji: false,
            is_picture: false,
            is_search: false,
        }
    }

    /// Creates a system-action record with all flags cleared.
    pub fn action(
        talk_date: NaiveDate,
        day_name: impl Into<String>,
        writer: impl Into<String>,
        action: SystemAction,
        line: impl Into<String>,
    ) -> Self {
        Self {
            talk_date,
            day_name: day_name.into(),
            writer: writer.into(),
            wrote_at: None,
            msg: Some(line.into()),
            action_msg: Some(action),
            is_talking_activity: false,
            is_notice_action: false,
            is_deleted_msg: false,
            is_emoji: false,
            is_picture: false,
            is_search: false,
        }
    }

    /// `talk_date` as `YYYY-MM-DD`.
    pub fn talk_date_string(&self) -> String {
        self.talk_date.format("%Y-%m-%d").to_string()
    }

    /// `wrote_at` as `HH:MM`.
    pub fn wrote_at_hhmm(&self) -> Option<String> {
        self.wrote_at.map(|t| t.format(hhmm::FORMAT).to_string())
    }

    /// Returns the body, or `""` when it is null.
    pub fn msg_str(&self) -> &str {
        self.msg.as_deref().unwrap_or_default()
    }

    pub fn is_action(&self) -> bool {
        self.action_msg.is_some()
    }
}

/// `Option<NaiveTime>` as `"HH:MM"` or `null`.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => s.serialize_str(&t.format(FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        raw.map(|s| NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }
}

//! Summary statistics over a parsed transcript.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::record::{MessageRecord, SystemAction};

/// Counts describing one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Day segments in the input, including days without records.
    pub segments: usize,
    /// Output rows.
    pub records: usize,
    /// Authored messages.
    pub messages: usize,
    /// System-action rows per action.
    pub actions: BTreeMap<&'static str, usize>,
    /// Messages flagged as pinned notices.
    pub notices: usize,
    /// First and last day with at least one record.
    pub first_day: Option<NaiveDate>,
    pub last_day: Option<NaiveDate>,
    /// Distinct days with at least one record.
    pub days: usize,
}

impl ConversionStats {
    pub fn from_records(records: &[MessageRecord]) -> Self {
        let mut stats = Self {
            records: records.len(),
            ..Self::default()
        };
        let mut days = BTreeSet::new();

        for record in records {
            days.insert(record.talk_date);
            match record.action_msg {
                Some(action) => *stats.actions.entry(action.label()).or_default() += 1,
                None => stats.messages += 1,
            }
            if record.is_notice_action {
                stats.notices += 1;
            }
        }

        stats.first_day = days.first().copied();
        stats.last_day = days.last().copied();
        stats.days = days.len();
        stats
    }

    /// Sets the day-segment count reported by the parser.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Rows for `action`.
    pub fn action_count(&self, action: SystemAction) -> usize {
        self.actions.get(action.label()).copied().unwrap_or_default()
    }

    /// All system-action rows.
    pub fn total_actions(&self) -> usize {
        self.actions.values().sum()
    }
}

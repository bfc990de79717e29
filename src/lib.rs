//! # Kakaopack
//!
//! A Rust library for turning KakaoTalk `.txt` chat exports into normalized,
//! one-row-per-event tables.
//!
//! ## Overview
//!
//! A KakaoTalk export is a plain-text transcript grouped into days. Each day
//! starts with a dashed separator line and holds authored messages
//! (`[author] [오전 9:05] text`, possibly spanning several physical lines)
//! and membership or moderation events (`Bob님이 나갔습니다.`).
//!
//! Kakaopack parses such a transcript in four stages:
//!
//! 1. **Segmenter** - splits physical lines into day blocks
//! 2. **Line reassembler** - joins wrapped message text into logical lines
//! 3. **Record extractor** - turns each logical line into a [`MessageRecord`]
//! 4. **Flag annotator** - marks deleted, emoticon, picture and search rows
//!
//! The records are then written as a delimited table (tab-separated by
//! default), a JSON array, or JSON Lines.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kakaopack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = KakaoParser::new();
//!     let records = parser.parse("KakaoTalk_Chat.txt".as_ref())?;
//!
//!     write_csv(&records, "chat.tsv".as_ref(), &OutputConfig::new())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming
//!
//! Records can be consumed lazily, one day block at a time:
//!
//! ```rust,no_run
//! use kakaopack::parser::KakaoParser;
//!
//! for result in KakaoParser::new().stream("KakaoTalk_Chat.txt".as_ref())? {
//!     let record = result?;
//!     println!("{} {}", record.writer, record.msg_str());
//! }
//! # Ok::<(), kakaopack::KakaopackError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`KakaoParser`](parser::KakaoParser), the entry point
//! - [`streaming`] - [`RecordIterator`](streaming::RecordIterator)
//! - [`parsing`] - the four pipeline stages
//! - [`record`] - [`MessageRecord`], [`SystemAction`] and the column order
//! - [`config`] - [`TranscriptConfig`](config::TranscriptConfig),
//!   [`Markers`](config::Markers), [`OutputConfig`](config::OutputConfig)
//! - [`core`] - output writers and [`ConversionStats`](core::ConversionStats)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`convert`] - the one-shot file-to-file conversion
//! - [`error`] - [`KakaopackError`] and [`Result`]
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod convert;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod streaming;

pub use error::{KakaopackError, Result};
pub use record::{MessageRecord, SystemAction};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use kakaopack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{MessageRecord, SystemAction};

    pub use crate::error::{KakaopackError, Result};

    pub use crate::config::{Markers, OutputConfig, TranscriptConfig};

    pub use crate::parser::KakaoParser;
    pub use crate::streaming::RecordIterator;

    pub use crate::convert::{ConvertOptions, convert};
    pub use crate::core::ConversionStats;
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}

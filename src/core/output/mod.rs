//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`] - delimited table, tab by default - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> kakaopack::Result<()> {
//! use kakaopack::config::OutputConfig;
//! use kakaopack::core::output::write_csv;
//! use kakaopack::parser::KakaoParser;
//! use std::path::Path;
//!
//! let records = KakaoParser::new().parse(Path::new("KakaoTalk_Chat.txt"))?;
//! write_csv(&records, Path::new("chat.tsv"), &OutputConfig::new())?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

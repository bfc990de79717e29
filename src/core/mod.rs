//! Post-parse processing for kakaopack.
//!
//! - [`processor`] - [`ConversionStats`] over parsed records
//! - [`output`] - format writers (delimited, JSON, JSONL)

pub mod output;
pub mod processor;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};

pub use processor::ConversionStats;

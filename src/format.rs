//! Output format selection.
//!
//! Library-first format types without CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use kakaopack::format::OutputFormat;
//! use std::path::Path;
//!
//! let format = OutputFormat::from_path(Path::new("chat.tsv")).unwrap();
//! assert_eq!(format, OutputFormat::Csv);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::OutputConfig;
use crate::error::{KakaopackError, Result};
use crate::record::MessageRecord;

/// Output format for converted transcripts.
///
/// - [`Csv`](OutputFormat::Csv) - delimited table, tab-separated by default
/// - [`Json`](OutputFormat::Json) - JSON array
/// - [`Jsonl`](OutputFormat::Jsonl) - one JSON object per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Delimited table (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// `.csv`, `.tsv` and `.txt` map to the delimited format.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match ext.as_str() {
            "csv" | "tsv" | "txt" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(KakaopackError::InvalidFormat {
                input: format!(".{ext}"),
                expected: "csv, tsv, txt, json, jsonl",
            }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = KakaopackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" | "tsv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(KakaopackError::InvalidFormat {
                input: s.to_string(),
                expected: "csv, tsv, json, jsonl, ndjson",
            }),
        }
    }
}

/// Error for a format whose cargo feature is disabled.
#[allow(dead_code)]
fn feature_disabled(format: OutputFormat) -> KakaopackError {
    KakaopackError::InvalidFormat {
        input: format.to_string(),
        expected: match format {
            OutputFormat::Csv => "a build with the 'csv-output' feature",
            OutputFormat::Json | OutputFormat::Jsonl => "a build with the 'json-output' feature",
        },
    }
}

/// Writes records to a file in the specified format.
#[allow(unused_variables)]
pub fn write_to_format(
    records: &[MessageRecord],
    path: &Path,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(records, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Converts records to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    records: &[MessageRecord],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(records),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(records),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

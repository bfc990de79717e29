//! One-shot conversion: transcript file in, table file out.
//!
//! The whole transcript is parsed before the output file is created, so a
//! parse failure never leaves a partial table behind.
//!
//! # Example
//!
//! ```rust,no_run
//! use kakaopack::convert::{ConvertOptions, convert};
//!
//! let options = ConvertOptions::new("KakaoTalk_Chat.txt", "chat.tsv")
//!     .with_header(true)
//!     .with_delimiter(b'\t');
//! let stats = convert(&options)?;
//! println!("{} rows", stats.records);
//! # Ok::<(), kakaopack::KakaopackError>(())
//! ```

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::{OutputConfig, TranscriptConfig};
use crate::core::processor::ConversionStats;
use crate::error::{KakaopackError, Result};
use crate::format::{OutputFormat, write_to_format};
use crate::parser::KakaoParser;

/// Inputs of [`convert`].
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub transcript: TranscriptConfig,
    pub output_config: OutputConfig,
}

impl ConvertOptions {
    /// Default settings: header block present, tab-delimited output.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            format: OutputFormat::Csv,
            transcript: TranscriptConfig::default(),
            output_config: OutputConfig::default(),
        }
    }

    /// Sets whether the input starts with the export header block.
    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.transcript.has_header = has_header;
        self
    }

    /// Sets the field delimiter of delimited output.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.output_config.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Replaces the transcript layout (markers included).
    #[must_use]
    pub fn with_transcript(mut self, transcript: TranscriptConfig) -> Self {
        self.transcript = transcript;
        self
    }
}

/// Parses `options.input` and writes the table to `options.output`.
///
/// On a parse error nothing is written. If writing fails, the partially
/// written file is removed.
pub fn convert(options: &ConvertOptions) -> Result<ConversionStats> {
    info!(
        input = %options.input.display(),
        output = %options.output.display(),
        format = %options.format,
        "converting transcript"
    );

    let parser = KakaoParser::with_config(options.transcript.clone());
    let mut records_iter = parser.stream(&options.input)?;
    let records = records_iter.by_ref().collect::<Result<Vec<_>>>()?;
    let stats = ConversionStats::from_records(&records).with_segments(records_iter.segments_parsed());
    drop(records_iter);

    if let Err(e) = write_to_format(&records, &options.output, options.format, &options.output_config) {
        if options.output.exists() {
            if let Err(remove_err) = fs::remove_file(&options.output) {
                warn!(
                    output = %options.output.display(),
                    error = %remove_err,
                    "could not remove partial output"
                );
            }
        }
        return Err(e);
    }

    info!(records = stats.records, segments = stats.segments, "conversion finished");
    Ok(stats)
}

/// Parses a delimiter argument: one ASCII character, `\t`, or one of the
/// names `tab`, `comma`, `semicolon`, `pipe`.
///
/// The quote character and control bytes other than tab are rejected, since
/// the writer could not quote fields around them.
pub fn parse_delimiter(input: &str) -> Result<u8> {
    match input.to_lowercase().as_str() {
        "\\t" | "tab" => Ok(b'\t'),
        "comma" => Ok(b','),
        "semicolon" => Ok(b';'),
        "pipe" => Ok(b'|'),
        _ => match input.as_bytes() {
            [b'\t'] => Ok(b'\t'),
            [byte] if byte.is_ascii() && !byte.is_ascii_control() && *byte != b'"' => Ok(*byte),
            _ => Err(KakaopackError::invalid_delimiter(input)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const EXPORT: &str = "Alice 님과 카카오톡 대화
저장한 날짜 : 2023-05-03 10:00:00


--------------- 2023년 5월 1일 월요일 ---------------
[Alice] [오전 9:05] hello
there
Bob님이 나갔습니다.
";

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
        assert_eq!(parse_delimiter("TAB").unwrap(), b'\t');
        assert_eq!(parse_delimiter("\t").unwrap(), b'\t');
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter("pipe").unwrap(), b'|');
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("한").is_err());
    }

    #[test]
    fn test_parse_delimiter_rejects_quote_and_controls() {
        for bad in ["\"", "\n", "\r", "\0", "\u{7f}"] {
            let err = parse_delimiter(bad).unwrap_err();
            assert!(matches!(err, KakaopackError::InvalidDelimiter { .. }), "{:?}", bad);
        }
    }

    #[test]
    fn test_convert_writes_table() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("chat.txt");
        let output = dir.path().join("chat.tsv");
        fs::write(&input, EXPORT).unwrap();

        let stats = convert(&ConvertOptions::new(&input, &output)).unwrap();
        assert_eq!(stats.records, 2);
        assert_eq!(stats.segments, 1);
        assert_eq!(stats.messages, 1);

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(content.contains("hello there"));
    }

    #[test]
    fn test_convert_bad_date_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("chat.txt");
        let output = dir.path().join("chat.tsv");
        fs::write(&input, EXPORT.replace("5월 1일", "5월 41일")).unwrap();

        let err = convert(&ConvertOptions::new(&input, &output)).unwrap_err();
        assert!(err.is_invalid_date());
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_missing_input() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("chat.tsv");
        let err = convert(&ConvertOptions::new(dir.path().join("nope.txt"), &output)).unwrap_err();
        assert!(err.is_input_access());
        assert!(!output.exists());
    }
}

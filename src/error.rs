//! Unified error types for kakaopack.
//!
//! Every failure in the pipeline is fatal for the whole conversion: there is
//! no partial-result recovery, so each variant carries enough context (day
//! header, line number, raw text) to find the offending spot in the export.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for kakaopack operations.
pub type Result<T> = std::result::Result<T, KakaopackError>;

/// The error type for all kakaopack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KakaopackError {
    /// The input transcript could not be opened or read.
    #[error("Cannot read input {}: {source}", path.display())]
    InputAccess {
        /// Path that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An I/O error outside of input access (e.g. writing output).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A day header does not match the `YYYY년 M월 D일` grammar.
    #[error("Invalid day header at line {line}: '{header}': {source}")]
    InvalidDate {
        /// The header line as it appears in the export
        header: String,
        /// 1-based physical line number
        line: usize,
        /// The underlying chrono error
        #[source]
        source: chrono::ParseError,
    },

    /// An authored-message time token is not a valid 12-hour time.
    #[error("Invalid time in day {date}, line {line}: '{raw}': {source}")]
    InvalidTime {
        /// Date of the enclosing day segment
        date: String,
        /// 1-based physical line number where the message starts
        line: usize,
        /// The logical line that failed
        raw: String,
        /// The underlying chrono error
        #[source]
        source: chrono::ParseError,
    },

    /// A logical line has a shape the extractor cannot map to a row.
    #[error("Malformed line in day {date}, line {line}: {reason}: '{raw}'")]
    Structure {
        /// Date of the enclosing day segment
        date: String,
        /// 1-based physical line number where the unit starts
        line: usize,
        /// The logical line that failed
        raw: String,
        /// What was wrong with it
        reason: &'static str,
    },

    /// A configured marker produced an unusable line pattern.
    #[error("Invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The output delimiter is not a single ASCII character.
    #[error("Invalid delimiter '{input}'. Expected a single printable ASCII character other than '\"', 'tab', 'comma', 'semicolon' or 'pipe'")]
    InvalidDelimiter {
        /// The delimiter as given
        input: String,
    },

    /// Unknown output format.
    #[error("Unknown output format '{input}'. Expected one of: {expected}")]
    InvalidFormat {
        /// The format as given
        input: String,
        /// Accepted names
        expected: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output string was not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for KakaopackError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        KakaopackError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl KakaopackError {
    /// Creates an input access error.
    pub fn input_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        KakaopackError::InputAccess {
            path: path.into(),
            source,
        }
    }

    /// Creates a day-header parse error.
    pub fn invalid_date(header: impl Into<String>, line: usize, source: chrono::ParseError) -> Self {
        KakaopackError::InvalidDate {
            header: header.into(),
            line,
            source,
        }
    }

    /// Creates a time-token parse error.
    pub fn invalid_time(
        date: impl Into<String>,
        line: usize,
        raw: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        KakaopackError::InvalidTime {
            date: date.into(),
            line,
            raw: raw.into(),
            source,
        }
    }

    /// Creates a structural anomaly error.
    pub fn structure(
        date: impl Into<String>,
        line: usize,
        raw: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        KakaopackError::Structure {
            date: date.into(),
            line,
            raw: raw.into(),
            reason,
        }
    }

    /// Creates an invalid delimiter error.
    pub fn invalid_delimiter(input: impl Into<String>) -> Self {
        KakaopackError::InvalidDelimiter {
            input: input.into(),
        }
    }

    /// Returns `true` if the input could not be read.
    pub fn is_input_access(&self) -> bool {
        matches!(self, KakaopackError::InputAccess { .. })
    }

    /// Returns `true` if a day header failed to parse.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, KakaopackError::InvalidDate { .. })
    }

    /// Returns `true` if a time token failed to parse.
    pub fn is_invalid_time(&self) -> bool {
        matches!(self, KakaopackError::InvalidTime { .. })
    }

    /// Returns `true` if a line had an unexpected shape.
    pub fn is_structure(&self) -> bool {
        matches!(self, KakaopackError::Structure { .. })
    }

    /// Returns `true` for any error raised while parsing transcript content.
    pub fn is_parse(&self) -> bool {
        self.is_invalid_date() || self.is_invalid_time() || self.is_structure()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn chrono_err() -> chrono::ParseError {
        chrono::NaiveDate::parse_from_str("nope", "%Y-%m-%d").unwrap_err()
    }

    #[test]
    fn test_input_access_display() {
        let err = KakaopackError::input_access(
            "/missing/chat.txt",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let display = err.to_string();
        assert!(display.contains("/missing/chat.txt"));
        assert!(display.contains("file not found"));
        assert!(err.is_input_access());
        assert!(!err.is_parse());
    }

    #[test]
    fn test_invalid_date_display() {
        let err = KakaopackError::invalid_date("--- 2023년 13월 1일 월요일 ---", 5, chrono_err());
        let display = err.to_string();
        assert!(display.contains("line 5"));
        assert!(display.contains("2023년 13월 1일"));
        assert!(err.is_invalid_date());
        assert!(err.is_parse());
    }

    #[test]
    fn test_invalid_time_display() {
        let err = KakaopackError::invalid_time("2023-05-01", 7, "[A] [오전 13:99] hi", chrono_err());
        let display = err.to_string();
        assert!(display.contains("2023-05-01"));
        assert!(display.contains("[A] [오전 13:99] hi"));
        assert!(err.is_invalid_time());
    }

    #[test]
    fn test_structure_display() {
        let err = KakaopackError::structure("2023-05-01", 3, "orphan", "no author header");
        assert!(err.to_string().contains("no author header"));
        assert!(err.is_structure());
    }

    #[test]
    fn test_io_from() {
        let err: KakaopackError = io::Error::other("disk full").into();
        assert!(matches!(err, KakaopackError::Io(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KakaopackError>();
    }
}

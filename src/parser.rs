//! KakaoTalk transcript parser.
//!
//! [`KakaoParser`] is the entry point for turning an exported `.txt`
//! transcript into [`MessageRecord`]s, either all at once or lazily.
//!
//! # Example
//!
//! ```rust
//! use kakaopack::parser::KakaoParser;
//! use kakaopack::config::TranscriptConfig;
//!
//! let parser = KakaoParser::with_config(TranscriptConfig::new().with_header(false));
//! let records = parser.parse_str(
//!     "--------------- 2023년 5월 1일 월요일 ---------------\n\
//!      [Alice] [오전 9:05] hello\n\
//!      there\n",
//! )?;
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].msg.as_deref(), Some("hello there"));
//! # Ok::<(), kakaopack::KakaopackError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::TranscriptConfig;
use crate::error::{KakaopackError, Result};
use crate::record::MessageRecord;
use crate::streaming::RecordIterator;

/// Read buffer for file input.
const BUFFER_SIZE: usize = 64 * 1024;

/// Parser for KakaoTalk text exports.
#[derive(Debug, Clone, Default)]
pub struct KakaoParser {
    config: TranscriptConfig,
}

impl KakaoParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: TranscriptConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Parses a transcript file into memory.
    ///
    /// Fails on the first malformed day header, time token or line; no
    /// records are returned in that case.
    pub fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        self.stream(path)?.collect()
    }

    /// Parses transcript content already in memory.
    pub fn parse_str(&self, content: &str) -> Result<Vec<MessageRecord>> {
        self.parse_reader(content.as_bytes())
    }

    /// Parses transcript content from any buffered reader.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<MessageRecord>> {
        RecordIterator::new(reader, &self.config)?.collect()
    }

    /// Opens `path` and returns a lazy iterator over its records.
    ///
    /// The file handle is owned by the iterator and closed when it is dropped.
    pub fn stream(&self, path: &Path) -> Result<RecordIterator<BufReader<File>>> {
        let file = File::open(path).map_err(|e| KakaopackError::input_access(path, e))?;
        let total_bytes = file.metadata().ok().map(|m| m.len());
        let reader = BufReader::with_capacity(BUFFER_SIZE, file);

        Ok(RecordIterator::new(reader, &self.config)?.with_source(path, total_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EXPORT: &str = "\u{feff}Alice 님과 카카오톡 대화
저장한 날짜 : 2023-05-03 10:00:00


--------------- 2023년 5월 1일 월요일 ---------------
[Alice] [오전 9:05] hello
there
";

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(EXPORT.as_bytes()).unwrap();

        let records = KakaoParser::new().parse(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].writer, "Alice");
        assert_eq!(records[0].msg.as_deref(), Some("hello there"));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = KakaoParser::new()
            .parse(Path::new("/definitely/not/here.txt"))
            .unwrap_err();
        assert!(err.is_input_access());
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn test_parse_str_matches_parse() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(EXPORT.as_bytes()).unwrap();

        let parser = KakaoParser::new();
        assert_eq!(parser.parse(file.path()).unwrap(), parser.parse_str(EXPORT).unwrap());
    }

    #[test]
    fn test_header_block_treated_as_content_without_flag() {
        let parser = KakaoParser::with_config(TranscriptConfig::new().with_header(false));
        let err = parser.parse_str(EXPORT).unwrap_err();
        assert!(err.is_invalid_date());
    }
}

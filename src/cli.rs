//! Command-line interface definition using clap.
//!
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - clap-facing mirror of [`crate::format::OutputFormat`]

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::convert::{ConvertOptions, parse_delimiter};

/// Default output path when `-o` is not given.
pub const DEFAULT_OUTPUT: &str = "kakao_chat.tsv";

/// Convert a KakaoTalk chat export into a one-row-per-event table.
#[derive(Parser, Debug, Clone)]
#[command(name = "kakaopack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    kakaopack KakaoTalk_Chat.txt
    kakaopack chat.txt -o chat.csv -d comma
    kakaopack chat.txt --no-header -o rows.tsv
    kakaopack chat.txt -f jsonl -o chat.jsonl")]
pub struct Args {
    /// Path to the exported transcript
    pub input: PathBuf,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// The input has no export header block (title and save date)
    #[arg(long)]
    pub no_header: bool,

    /// Field delimiter: one ASCII character, \t, tab, comma, semicolon or pipe
    #[arg(short, long, default_value = "\\t", value_parser = delimiter_arg)]
    pub delimiter: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Log each parsed day to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn delimiter_arg(input: &str) -> std::result::Result<u8, String> {
    parse_delimiter(input).map_err(|e| e.to_string())
}

impl Args {
    /// Builds the conversion options these arguments describe.
    pub fn to_options(&self) -> ConvertOptions {
        ConvertOptions::new(&self.input, self.output_path())
            .with_header(!self.no_header)
            .with_delimiter(self.delimiter)
            .with_format(self.format.into())
    }

    /// The `-o` path, or the default name with the format's extension.
    pub fn output_path(&self) -> PathBuf {
        if self.output != Path::new(DEFAULT_OUTPUT) || self.format == OutputFormat::Csv {
            return self.output.clone();
        }
        let format: crate::format::OutputFormat = self.format.into();
        self.output.with_extension(format.extension())
    }
}

/// Output format options.
///
/// - [`Csv`](OutputFormat::Csv) - delimited table (tab-separated by default)
/// - [`Json`](OutputFormat::Json) - JSON array of records
/// - [`Jsonl`](OutputFormat::Jsonl) - one JSON object per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Delimited table (default)
    #[default]
    #[value(alias = "tsv")]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["kakaopack", "chat.txt"]).unwrap();
        assert_eq!(args.input, PathBuf::from("chat.txt"));
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(args.delimiter, b'\t');
        assert_eq!(args.format, OutputFormat::Csv);
        assert!(!args.no_header);
        assert!(!args.verbose);

        let options = args.to_options();
        assert!(options.transcript.has_header);
        assert_eq!(options.output_config.delimiter, b'\t');
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "kakaopack", "chat.txt", "-o", "out.jsonl", "--no-header", "-d", "comma", "-f", "ndjson", "-v",
        ])
        .unwrap();
        assert_eq!(args.delimiter, b',');
        assert_eq!(args.format, OutputFormat::Jsonl);
        assert!(args.verbose);

        let options = args.to_options();
        assert!(!options.transcript.has_header);
        assert_eq!(options.format, crate::format::OutputFormat::Jsonl);
        assert_eq!(options.output, PathBuf::from("out.jsonl"));
    }

    #[test]
    fn test_default_output_follows_format() {
        let args = Args::try_parse_from(["kakaopack", "chat.txt", "-f", "json"]).unwrap();
        assert_eq!(args.output_path(), PathBuf::from("kakao_chat.json"));

        let args = Args::try_parse_from(["kakaopack", "chat.txt"]).unwrap();
        assert_eq!(args.output_path(), PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_bad_delimiter_rejected() {
        assert!(Args::try_parse_from(["kakaopack", "chat.txt", "-d", "ab"]).is_err());
        assert!(Args::try_parse_from(["kakaopack", "chat.txt", "-d", "\""]).is_err());
    }

    #[test]
    fn test_missing_input_rejected() {
        assert!(Args::try_parse_from(["kakaopack"]).is_err());
    }

    #[test]
    fn test_format_display_and_serde() {
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
        assert_eq!(serde_json::to_string(&OutputFormat::Jsonl).unwrap(), "\"jsonl\"");
    }
}

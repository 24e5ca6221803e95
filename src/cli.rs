//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! default values and the options kept only for compatibility.

use clap::Parser;
use std::path::PathBuf;

/// Exit code for malformed or unrecognized arguments.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Hint printed after every usage error.
pub const USAGE_HINT: &str = "Please enter a valid command. Use -h for accepted arguments.";

/// Gender Stats - speaker gender statistics for extracted quotes
///
/// Reads a JSON array of genderized quotes and writes a summary with
/// the number of quotes by women, men and speakers of unknown gender.
///
/// Examples:
///   gender-stats -u article_quotes.json
///   gender-stats --file-path=article_quotes.json --naming legacy
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input JSON file containing an array of quote records
    ///
    /// Statistics are written next to it as `<name>_stats.json`.
    #[arg(short = 'u', long = "file-path", value_name = "FILE")]
    pub file_path: PathBuf,

    /// Folder of quote files (accepted but not used yet)
    #[arg(short = 'p', long = "folder-path", value_name = "DIR")]
    pub folder_path: Option<PathBuf>,

    /// Output directory (accepted but not used yet)
    #[arg(short = 's', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Accepted for compatibility, has no effect
    #[arg(short = 'f')]
    pub flag_f: bool,

    /// How the output file name is derived from the input file name
    #[arg(long, default_value = "extension", value_name = "SCHEME")]
    pub naming: NamingScheme,

    /// Enable verbose logging output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Run in quiet mode (errors only, no summary)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output file naming scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum NamingScheme {
    /// Replace a trailing `.json` with `_stats.json` (default)
    #[default]
    Extension,
    /// Drop the last five characters of the path and append `_stats.json`
    Legacy,
}

impl Args {
    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Names of accepted options that this version ignores.
    pub fn ignored_options(&self) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        if self.folder_path.is_some() {
            ignored.push("--folder-path");
        }
        if self.output_dir.is_some() {
            ignored.push("--output-dir");
        }
        if self.flag_f {
            ignored.push("-f");
        }
        ignored
    }
}

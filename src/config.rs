//! Run configuration.
//!
//! The command line is the only configuration surface: no config files
//! and no environment variables. This module resolves parsed arguments
//! into the settings a single run needs.

use crate::cli::{Args, NamingScheme};
use crate::report::output_path_for;
use std::path::PathBuf;

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Quotes file to read.
    pub input_path: PathBuf,
    /// Statistics file to write.
    pub output_path: PathBuf,
    /// Scheme used to derive `output_path`.
    pub naming: NamingScheme,
    /// Suppress the summary printed after a successful run.
    pub quiet: bool,
}

impl RunConfig {
    /// Build the run configuration from parsed arguments.
    ///
    /// Errors here are usage errors: no file has been touched yet.
    pub fn from_args(args: &Args) -> Result<Self, String> {
        let output_path = output_path_for(&args.file_path, args.naming).ok_or_else(|| {
            format!(
                "Legacy naming needs a UTF-8 file path: {}",
                args.file_path.display()
            )
        })?;

        Ok(Self {
            input_path: args.file_path.clone(),
            output_path,
            naming: args.naming,
            quiet: args.quiet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_args_default_naming() {
        let args = Args::try_parse_from(["gender-stats", "-u", "out/quotes.json"]).unwrap();
        let config = RunConfig::from_args(&args).unwrap();

        assert_eq!(config.input_path, PathBuf::from("out/quotes.json"));
        assert_eq!(config.output_path, PathBuf::from("out/quotes_stats.json"));
        assert_eq!(config.naming, NamingScheme::Extension);
        assert!(!config.quiet);
    }

    #[test]
    fn test_from_args_legacy_quiet() {
        let args = Args::try_parse_from([
            "gender-stats",
            "--file-path=quotes.jsonl",
            "--naming",
            "legacy",
            "-q",
        ])
        .unwrap();
        let config = RunConfig::from_args(&args).unwrap();

        assert_eq!(config.output_path, PathBuf::from("quotes._stats.json"));
        assert!(config.quiet);
    }

    #[cfg(unix)]
    #[test]
    fn test_from_args_legacy_rejects_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"quotes\xff.json");
        let args = Args::try_parse_from([
            OsStr::new("gender-stats"),
            OsStr::new("-u"),
            raw,
            OsStr::new("--naming"),
            OsStr::new("legacy"),
        ])
        .unwrap();

        assert!(RunConfig::from_args(&args).is_err());
    }
}

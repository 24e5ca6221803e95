//! Gender Stats - speaker gender statistics for extracted quotes
//!
//! A CLI tool that reads the output of the genderization step (a JSON
//! array of quotes) and writes the number of quotes by women, men and
//! speakers of unknown gender to `<name>_stats.json`.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (missing or unreadable input, bad JSON, write failure)
//!   2 - Usage error (unknown option, missing --file-path, bad value)

mod analysis;
mod cli;
mod config;
mod error;
mod models;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, USAGE_EXIT_CODE, USAGE_HINT};
use config::RunConfig;
use models::GenderStats;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Parse command-line arguments
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if e.exit_code() == 0 => e.exit(),
        Err(e) => usage_error(&e.to_string()),
    };

    let config = match RunConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => usage_error(&format!("error: {}\n", e)),
    };

    // Initialize logging
    init_logging(&args);

    info!("Gender Stats v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    for option in args.ignored_options() {
        warn!("Option {} is accepted but not used yet; ignoring it", option);
    }

    match run(&config) {
        Ok(stats) => {
            if !config.quiet {
                println!("\n📊 {}", analysis::summary_text(&stats));
                println!(
                    "\n✅ Statistics saved to: {}",
                    config.output_path.display()
                );
            }
        }
        Err(e) => {
            error!("Statistics failed: {}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Report a usage error and exit before any file I/O.
fn usage_error(message: &str) -> ! {
    eprint!("{}", message);
    eprintln!("{}", USAGE_HINT);
    std::process::exit(USAGE_EXIT_CODE);
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to set tracing subscriber: {}", e);
    }
}

/// Load the quotes, tally them and write the statistics file.
fn run(config: &RunConfig) -> Result<GenderStats> {
    info!("Reading quotes from {}", config.input_path.display());
    let quotes = report::load_quotes(&config.input_path)?;

    let stats = analysis::compute_stats(&quotes);
    info!(
        "Tallied {} quotes: {} women, {} men, {} unknown",
        stats.num_quotes, stats.women_speakers, stats.men_speakers, stats.unknown_speakers
    );

    let uncategorized = stats.uncategorized();
    if uncategorized > 0 {
        warn!(
            "{} quotes have no recognized speaker_gender (female, male, unknown); \
             they count toward num_quotes only",
            uncategorized
        );
    }

    debug!(
        "Writing statistics to {} ({:?} naming)",
        config.output_path.display(),
        config.naming
    );
    report::write_stats(&stats, &config.output_path).with_context(|| {
        format!(
            "No statistics written for {}",
            config.input_path.display()
        )
    })?;

    Ok(stats)
}

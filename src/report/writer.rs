//! Quote file loading and statistics output.
//!
//! Reads the genderized quotes file, derives where the statistics go,
//! and writes them atomically so a failed run leaves no output behind.

use crate::cli::NamingScheme;
use crate::error::{Result, StatsError};
use crate::models::{GenderStats, QuoteRecord};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suffix appended to the input name to build the output name.
pub const STATS_SUFFIX: &str = "_stats.json";

/// Number of characters dropped from the input path by legacy naming.
const LEGACY_TRIM_CHARS: usize = 5;

/// Load a JSON array of quote records.
pub fn load_quotes(path: &Path) -> Result<Vec<QuoteRecord>> {
    let content = std::fs::read_to_string(path).map_err(|source| StatsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let quotes: Vec<QuoteRecord> =
        serde_json::from_str(&content).map_err(|source| StatsError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Loaded {} quotes from {}", quotes.len(), path.display());
    Ok(quotes)
}

/// Derive the statistics file path for an input file.
///
/// Returns `None` only for legacy naming on a path that is not valid UTF-8.
pub fn output_path_for(input: &Path, naming: NamingScheme) -> Option<PathBuf> {
    match naming {
        NamingScheme::Extension => Some(extension_output_path(input)),
        NamingScheme::Legacy => legacy_output_path(input),
    }
}

fn extension_output_path(input: &Path) -> PathBuf {
    let is_json = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let mut name: OsString = match (is_json, input.file_stem()) {
        (true, Some(stem)) => stem.to_os_string(),
        _ => input.file_name().map(OsString::from).unwrap_or_default(),
    };
    name.push(STATS_SUFFIX);

    input.with_file_name(name)
}

fn legacy_output_path(input: &Path) -> Option<PathBuf> {
    let text = input.to_str()?;
    let keep = text.chars().count().saturating_sub(LEGACY_TRIM_CHARS);
    let prefix: String = text.chars().take(keep).collect();
    Some(PathBuf::from(prefix + STATS_SUFFIX))
}

/// Encode statistics as a compact JSON object.
pub fn encode_stats(stats: &GenderStats) -> Result<String> {
    Ok(serde_json::to_string(stats)?)
}

/// Write statistics to `path`, creating or replacing the file.
///
/// The content goes to a temporary file in the same directory first and
/// is renamed over the target only once fully written. A replaced file
/// keeps its permissions; a new one gets the umask-derived default.
pub fn write_stats(stats: &GenderStats, path: &Path) -> Result<()> {
    let json = encode_stats(stats)?;
    let write_err = |source: std::io::Error| StatsError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(dir).map_err(write_err)?;
    file.write_all(json.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    if let Ok(existing) = std::fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?;
    }
    file.persist(path).map_err(|e| write_err(e.error))?;

    debug!("Wrote statistics to {}", path.display());
    Ok(())
}

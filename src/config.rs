//! Run configuration.
//!
//! All configuration comes from command-line flags; there is no config
//! file. The [`Config`] value is built once at startup and passed by
//! reference to every component.

use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// TMDB API key.
    pub token: String,

    /// Directory whose entries are scanned and classified.
    pub src: PathBuf,

    /// Directory confirmed movies are moved into.
    pub dst: PathBuf,

    /// When true, decisions are logged but nothing is moved.
    pub dry_run: bool,
}

/// Validate configuration before any entry is touched.
///
/// A missing source or destination directory is fatal: listing a
/// nonexistent directory or moving into one would fail for every entry
/// anyway, so the run halts before it starts.
pub fn validate_config(config: &Config) -> Result<()> {
    if !config.src.is_dir() {
        anyhow::bail!("Source is not an available directory: {:?}", config.src);
    }

    if !config.dst.is_dir() {
        anyhow::bail!(
            "Destination is not an available directory: {:?}",
            config.dst
        );
    }

    Ok(())
}

//! Batch orchestration.
//!
//! Lists the source directory once, then walks the snapshot strictly in
//! order: parse the entry name, ask TMDB whether it is a movie, and either
//! move it into the destination or skip it. One entry's failure never
//! stops the batch.

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::config::{validate_config, Config};
use crate::parse::parse_name;
use crate::relocate::relocate;
use crate::tmdb::{Lookup, TmdbClient};

/// Per-run accounting, reported once the batch finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries confirmed as movies and moved (or logged, under dry run).
    pub moved: usize,
    /// Entries classified "not a movie" and left in place.
    pub skipped: usize,
    /// Entries whose move failed.
    pub failed: usize,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Run a full batch with a client for the production TMDB endpoint.
pub async fn run(config: &Config) -> Result<RunSummary> {
    let client = TmdbClient::new(config.token.clone());
    run_with_client(config, &client).await
}

/// Run a full batch against the given lookup client.
pub async fn run_with_client(config: &Config, client: &TmdbClient) -> Result<RunSummary> {
    validate_config(config)?;

    info!("Start: src {:?}, dst {:?}", config.src, config.dst);

    // Single snapshot of the source directory; entries appearing or
    // vanishing after this point are not observed.
    let names = list_entries(config).await?;
    info!("Found {} entries", names.len());

    let mut summary = RunSummary::default();

    for name in names {
        info!("Working on --- {}", name);

        let parsed = parse_name(&name);
        let verdict = match client.search_movie(&parsed.title, &parsed.year).await {
            Ok(Lookup::Movie { original_title }) => {
                info!(
                    "Confirmed {} ({}) as {:?}",
                    parsed.title, parsed.year, original_title
                );
                true
            }
            Ok(Lookup::NotMovie) => false,
            Err(e) => {
                warn!("Lookup failed for {}: {}", name, e);
                false
            }
        };

        if !verdict {
            info!("Not a movie, skipping {}", name);
            summary.skipped += 1;
            continue;
        }

        let src_path = config.src.join(&name);
        let dst_path = config.dst.join(&name);
        match relocate(&src_path, &dst_path, config.dry_run).await {
            Ok(()) => summary.moved += 1,
            Err(e) => {
                error!("{:#}", anyhow::Error::new(e));
                summary.failed += 1;
            }
        }
    }

    info!(
        moved = summary.moved,
        skipped = summary.skipped,
        failed = summary.failed,
        "Run complete"
    );

    Ok(summary)
}

/// List entry names in the source directory, in directory order.
async fn list_entries(config: &Config) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let mut entries = tokio::fs::read_dir(&config.src)
        .await
        .with_context(|| format!("Failed to list source directory {:?}", config.src))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("Failed to read entry in {:?}", config.src))?
    {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(names)
}

//! TMDB (The Movie Database) lookup client.
//!
//! Wraps the TMDB v3 `/search/movie` endpoint to answer one question per
//! directory entry: is this plausibly a movie? One GET per lookup, no
//! retries, 30-second request timeout.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Fixed browser user agent sent with every request.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/83.0.3497.92 Safari/537.36";

// ---------------------------------------------------------------------------
// TMDB API response types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SearchResponse {
    total_results: i64,
    #[serde(default)]
    results: Vec<MovieResult>,
}

#[derive(Debug, Deserialize)]
struct MovieResult {
    original_title: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Outcome of a successful search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// At least one result matched; carries the first result's canonical
    /// title for logging only.
    Movie { original_title: String },
    /// The search returned no results.
    NotMovie,
}

/// Failures that make a single lookup undecidable.
///
/// The caller treats every variant as "not a movie" and moves on to the
/// next entry; nothing here aborts a batch.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The extracted year is not four characters, so no request is made.
    #[error("Year format error: {0:?}")]
    YearFormat(String),

    /// The request itself failed (connect error, timeout).
    #[error("Search request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Search returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not the expected search payload.
    #[error("Malformed search response: {0}")]
    Payload(#[from] serde_json::Error),
}

/// TMDB search client.
pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    /// Create a client for the production TMDB endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, TMDB_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL (used by tests to point
    /// at a local mock server).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to build reqwest client");

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Classify a (title, year) pair by searching TMDB.
    ///
    /// Fails closed without a network call when `year` is not exactly four
    /// characters. Otherwise issues one GET and classifies from
    /// `total_results`: zero is [`Lookup::NotMovie`]; more than one logs an
    /// ambiguity notice but still counts as a movie, using the first
    /// result.
    pub async fn search_movie(&self, title: &str, year: &str) -> Result<Lookup, LookupError> {
        if year.len() != 4 {
            return Err(LookupError::YearFormat(year.to_string()));
        }

        let url = format!("{}/search/movie", self.base_url);
        debug!(url = %url, title = title, year = year, "TMDB search movie");
        info!("Searching {} ({})", title, year);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", title),
                ("year", year),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(LookupError::Status(resp.status()));
        }

        let body = resp.text().await?;
        let search: SearchResponse = serde_json::from_str(&body)?;

        if search.total_results == 0 {
            info!("No result when searching {}", title);
            return Ok(Lookup::NotMovie);
        }

        if search.total_results > 1 {
            info!("More than one result when searching {}", title);
        }

        let original_title = search
            .results
            .first()
            .and_then(|r| r.original_title.clone())
            .unwrap_or_default();

        info!(
            "Got movie metadata: {} ({}) ------ {}",
            title, year, original_title
        );

        Ok(Lookup::Movie { original_title })
    }
}

//! Listing fetcher - one network read per build

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use super::Listing;

/// Errors from the listings feed
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Feed request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Feed returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Feed returned invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches the listings feed
pub struct ListingFetcher {
    client: Client,
}

impl ListingFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("estatic/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Read the feed once and drop records without a title
    ///
    /// Redirects are followed; spreadsheet endpoints answer through one.
    pub async fn fetch(&self, url: &str) -> Result<Vec<Listing>, FeedError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        // Some feed hosts serve JSON as text/plain, so decode by hand
        let body = response.text().await?;
        let records: Vec<Listing> = serde_json::from_str(&body)?;

        Ok(records.into_iter().filter(Listing::has_title).collect())
    }

    /// Degraded fetch: any failure becomes a warning and zero listings
    ///
    /// The build carries on without a listings section rather than
    /// failing the whole site over feed downtime.
    pub async fn fetch_or_empty(&self, url: &str) -> Vec<Listing> {
        match self.fetch(url).await {
            Ok(listings) => {
                tracing::info!("Fetched {} listings from the feed", listings.len());
                listings
            }
            Err(e) => {
                tracing::warn!("Skipping listings for this build: {}", e);
                Vec::new()
            }
        }
    }
}

//! Build the static site

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::generator::Generator;
use crate::listings::{Listing, ListingFetcher};
use crate::Estatic;

/// Build the whole site, reading the listings feed unless told not to
pub async fn run(site: &Estatic, skip_listings: bool) -> Result<()> {
    let start = std::time::Instant::now();

    let listings = fetch_listings(site, skip_listings).await?;

    let generator = Generator::new(site);
    generator.generate(&listings)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// At most one feed read per build; failures degrade to zero listings
async fn fetch_listings(site: &Estatic, skip_listings: bool) -> Result<Vec<Listing>> {
    if skip_listings {
        tracing::info!("Skipping the listings feed on request");
        return Ok(Vec::new());
    }

    let feed_url = site.config.listings.feed_url.trim();
    if feed_url.is_empty() {
        tracing::info!("No listings feed URL configured, building without listings");
        return Ok(Vec::new());
    }

    let fetcher = ListingFetcher::new()?;
    Ok(fetcher.fetch_or_empty(feed_url).await)
}

/// Watch the content tree and config for changes and rebuild
pub async fn watch(site: &Estatic, skip_listings: bool) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    if site.content_dir.exists() {
        watcher.watch(site.content_dir.as_ref(), notify::RecursiveMode::Recursive)?;
    }

    let config_path = site.base_dir.join("estatic.yml");
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    // Debounce events
    let mut last_rebuild = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                // Only rebuild if more than 500ms since the last rebuild
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, regenerating...");
                    if let Err(e) = run(site, skip_listings).await {
                        tracing::error!("Build failed: {}", e);
                    }
                    last_rebuild = std::time::Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                // Keep waiting
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    Ok(())
}

//! List site content

use anyhow::Result;

use crate::content::ContentLoader;
use crate::helpers::{format_thousands, SlugRegistry};
use crate::listings::ListingFetcher;
use crate::Estatic;

/// List site content by type
pub async fn run(site: &Estatic, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts_by_category = load_posts(site)?;
            let total: usize = posts_by_category.values().map(Vec::len).sum();
            println!("Posts ({}):", total);
            for posts in posts_by_category.values() {
                for post in posts {
                    println!(
                        "  {} - {} [{}]",
                        post.date.format("%Y-%m-%d"),
                        post.title,
                        post.source
                    );
                }
            }
        }
        "category" | "categories" => {
            let posts_by_category = load_posts(site)?;
            println!("Categories ({}):", posts_by_category.len());
            for (category, posts) in &posts_by_category {
                println!("  {} ({})", category, posts.len());
            }
        }
        "tag" | "tags" => {
            let posts_by_category = load_posts(site)?;
            let mut tags: std::collections::HashMap<String, usize> =
                std::collections::HashMap::new();
            for post in posts_by_category.values().flatten() {
                for tag in &post.tags {
                    *tags.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        "listing" | "listings" => {
            let feed_url = site.config.listings.feed_url.trim();
            if feed_url.is_empty() {
                anyhow::bail!("No listings feed URL configured in estatic.yml");
            }

            let fetcher = ListingFetcher::new()?;
            let listings = fetcher.fetch(feed_url).await?;
            println!("Listings ({}):", listings.len());
            for listing in &listings {
                let mut line = format!("  {}", listing.title.as_deref().unwrap_or("(untitled)"));

                let place: Vec<&str> = [
                    listing.location.as_deref(),
                    listing.city.as_deref(),
                    listing.state.as_deref(),
                ]
                .into_iter()
                .flatten()
                .filter(|s| !s.trim().is_empty())
                .collect();
                if !place.is_empty() {
                    line.push_str(" - ");
                    line.push_str(&place.join(", "));
                }

                if let Some(price) = listing.price.filter(|p| *p > 0.0) {
                    line.push_str(&format!(
                        " [{} {}]",
                        site.config.listings.currency,
                        format_thousands(price.round() as i64)
                    ));
                }

                println!("{}", line);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, categories, tags, listings",
                content_type
            );
        }
    }

    Ok(())
}

fn load_posts(site: &Estatic) -> Result<indexmap::IndexMap<String, Vec<crate::content::Post>>> {
    let loader = ContentLoader::new(site);
    let mut slugs = SlugRegistry::new();
    loader.load_all(&mut slugs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_unknown_type_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("estatic.yml"), "title: Test\n").unwrap();
        let site = Estatic::new(tmp.path()).unwrap();

        let err = run(&site, "routes").await.unwrap_err();
        assert!(err.to_string().contains("Unknown type"));
    }

    #[tokio::test]
    async fn test_listings_without_feed_url_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("estatic.yml"), "title: Test\n").unwrap();
        let site = Estatic::new(tmp.path()).unwrap();

        let err = run(&site, "listings").await.unwrap_err();
        assert!(err.to_string().contains("feed URL"));
    }

    #[tokio::test]
    async fn test_posts_listing_runs_on_empty_site() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("estatic.yml"), "title: Test\n").unwrap();
        let site = Estatic::new(tmp.path()).unwrap();

        run(&site, "posts").await.unwrap();
        run(&site, "categories").await.unwrap();
        run(&site, "tags").await.unwrap();
    }
}

//! estatic: a static site generator for real-estate content sites
//!
//! Markdown articles and a remote spreadsheet listings feed become a
//! fully pre-rendered site: article and listing pages with structured
//! data, a hash-routed reading shell, a filterable projects page,
//! sitemap, robots and an Atom feed.

pub mod assets;
pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod listings;
pub mod render;
pub mod server;
pub mod sitemap;

use anyhow::Result;
use std::path::Path;

/// The site rooted at a base directory
#[derive(Clone)]
pub struct Estatic {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory
    pub content_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Estatic {
    /// Create an instance from a directory, reading estatic.yml if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("estatic.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        })
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Remove the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new article
    pub fn new_post(&self, title: &str, category: Option<&str>) -> Result<()> {
        commands::new::run(self, title, category)
    }
}

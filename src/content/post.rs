//! Post model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// An article loaded from a content-category directory
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Identifier derived from the source filename
    pub id: String,

    /// Unique URL slug derived from the title
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Last updated date
    pub updated: Option<DateTime<Local>>,

    /// Category, taken from the parent directory
    pub category: String,

    /// Normalized tags
    pub tags: Vec<String>,

    /// Short summary used in cards and page metadata
    pub summary: String,

    /// Author, defaulting to the configured organization name
    pub author: String,

    /// Cover image URL
    pub image: Option<String>,

    /// Gallery images
    pub gallery: Vec<GalleryImage>,

    /// Video identifier for an embedded player
    pub video: Option<String>,

    /// Link to an attached PDF
    pub pdf: Option<String>,

    /// Optional call-to-action shown at the end of the article
    pub cta: Option<CallToAction>,

    /// Inactive posts are skipped at build time
    pub active: bool,

    /// Raw markdown content, not carried into posts.json
    #[serde(skip_serializing)]
    pub raw: String,

    /// Rendered HTML content
    pub content: String,

    /// Source file path (relative)
    pub source: String,

    /// Full source file path
    #[serde(skip_serializing)]
    pub full_source: PathBuf,

    /// URL path (without root)
    pub path: String,

    /// Full permalink URL
    pub permalink: String,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(id: String, title: String, date: DateTime<Local>) -> Self {
        Self {
            id,
            slug: String::new(),
            title,
            date,
            updated: None,
            category: String::new(),
            tags: Vec::new(),
            summary: String::new(),
            author: String::new(),
            image: None,
            gallery: Vec::new(),
            video: None,
            pdf: None,
            cta: None,
            active: true,
            raw: String::new(),
            content: String::new(),
            source: String::new(),
            full_source: PathBuf::new(),
            path: String::new(),
            permalink: String::new(),
            extra: HashMap::new(),
        }
    }
}

/// One image in a post gallery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub image: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

/// A call-to-action link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToAction {
    pub text: String,
    pub url: String,
}

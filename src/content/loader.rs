//! Content loader - loads articles from the content directory

use anyhow::Result;
use chrono::Local;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Post};
use crate::helpers::{full_url_for, strip_html, truncate, SlugRegistry};
use crate::Estatic;

/// Loads articles from the content directory
pub struct ContentLoader<'a> {
    site: &'a Estatic,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Estatic) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load every configured category, keyed by category name
    pub fn load_all(&self, slugs: &mut SlugRegistry) -> Result<IndexMap<String, Vec<Post>>> {
        let mut by_category = IndexMap::new();

        for category in &self.site.config.categories {
            let posts = self.load_category(category, slugs)?;
            by_category.insert(category.clone(), posts);
        }

        Ok(by_category)
    }

    /// Load all posts from content/<category>, most recent first
    ///
    /// A missing directory yields an empty list. Files sharing an
    /// identifier are reduced to the one walked last; the overwrite is
    /// logged so colliding filenames do not vanish silently. Slugs are
    /// claimed only for the retained set.
    pub fn load_category(&self, category: &str, slugs: &mut SlugRegistry) -> Result<Vec<Post>> {
        let dir = self.site.content_dir.join(category);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut by_id: IndexMap<String, Post> = IndexMap::new();

        for entry in WalkDir::new(&dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                match self.load_post(path, category) {
                    Ok(post) => {
                        if !post.active {
                            tracing::debug!("Skipping inactive post {:?}", path);
                            continue;
                        }
                        if by_id.contains_key(&post.id) {
                            tracing::warn!(
                                "Duplicate post id '{}' in category '{}'; keeping {:?}",
                                post.id,
                                category,
                                path
                            );
                        }
                        by_id.insert(post.id.clone(), post);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        let mut posts: Vec<Post> = by_id.into_values().collect();

        // Claim slugs for retained posts only; a skipped draft or a
        // replaced duplicate must not reserve a published URL
        for post in &mut posts {
            post.slug = slugs.claim(&post.title);
            post.path = format!(
                "{}/{}/{}.html",
                self.site.config.articles_dir, category, post.slug
            );
            post.permalink = full_url_for(&self.site.config, &post.path);
        }

        // Sort by date descending (newest first)
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }

    /// Load a single post from a file; the slug is assigned by the caller
    fn load_post(&self, path: &Path, category: &str) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        // Get file metadata for dates
        let metadata = fs::metadata(path)?;
        let file_modified = metadata
            .modified()
            .ok()
            .map(|t| chrono::DateTime::<Local>::from(t));

        // Determine dates
        let date = fm
            .parse_date()
            .unwrap_or_else(|| file_modified.unwrap_or_else(Local::now));

        let updated = fm.parse_updated().or(file_modified);

        // Get title from front-matter or filename
        let title = fm.title.clone().unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        // The identifier comes from the filename
        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        // Calculate source path relative to the site root
        let source = path
            .strip_prefix(&self.site.base_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let content_html = self.renderer.render(body);

        let summary = match fm.summary.clone() {
            Some(s) => s,
            None => {
                let text = strip_html(&content_html);
                let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
                truncate(&text, 200, None)
            }
        };

        let author = fm
            .author
            .clone()
            .unwrap_or_else(|| self.site.config.organization.name.clone());

        let mut post = Post::new(id, title, date);
        post.updated = updated;
        post.category = category.to_string();
        post.tags = fm.normalized_tags();
        post.summary = summary;
        post.author = author;
        post.image = fm.image;
        post.gallery = fm.gallery;
        post.video = fm.video;
        post.pdf = fm.pdf;
        post.cta = fm.cta;
        post.active = fm.active;
        post.raw = body.to_string();
        post.content = content_html;
        post.source = source;
        post.full_source = path.to_path_buf();
        post.extra = fm.extra;

        Ok(post)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

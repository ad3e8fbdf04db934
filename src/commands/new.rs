//! Create a new article

use anyhow::Result;
use std::fs;

use crate::Estatic;

/// Create a new article under content/<category>/
pub fn create_article(site: &Estatic, title: &str, category: &str) -> Result<()> {
    if !site.config.categories.iter().any(|c| c == category) {
        anyhow::bail!(
            "Unknown category: {}. Available: {}",
            category,
            site.config.categories.join(", ")
        );
    }

    let target_dir = site.content_dir.join(category);
    fs::create_dir_all(&target_dir)?;

    let now = chrono::Local::now();
    let filename = format!("{}.md", slug::slugify(title));
    let file_path = target_dir.join(&filename);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        r#"---
title: {}
date: {}
tags:
summary:
---
"#,
        title,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

/// Run the new command; the category defaults to the first configured one
pub fn run(site: &Estatic, title: &str, category: Option<&str>) -> Result<()> {
    let default_category = site
        .config
        .categories
        .first()
        .map(String::as_str)
        .unwrap_or("news");
    create_article(site, title, category.unwrap_or(default_category))
}

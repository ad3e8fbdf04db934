//! Clean the output directory

use anyhow::Result;
use std::fs;

use crate::Estatic;

/// Remove the generated output tree
pub fn run(site: &Estatic) -> Result<()> {
    if site.public_dir.exists() {
        fs::remove_dir_all(&site.public_dir)?;
        tracing::info!("Deleted: {:?}", site.public_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_public_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("estatic.yml"), "title: Test\n").unwrap();
        let site = Estatic::new(tmp.path()).unwrap();

        fs::create_dir_all(site.public_dir.join("articles")).unwrap();
        fs::write(site.public_dir.join("index.html"), "<html></html>").unwrap();

        run(&site).unwrap();
        assert!(!site.public_dir.exists());

        // Cleaning again is a no-op
        run(&site).unwrap();
    }
}

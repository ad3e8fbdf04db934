//! Slug assignment with run-wide uniqueness

use std::collections::HashSet;

/// Hands out URL slugs that are unique for the lifetime of one build.
///
/// The registry spans every page kind, so an article and a listing
/// with the same title still end up at distinct paths.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    seen: HashSet<String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugify `text` and reserve a unique slug for it.
    ///
    /// The first claim of a slug gets it as-is; later claims get a
    /// numeric suffix starting at 2.
    pub fn claim(&mut self, text: &str) -> String {
        let mut base = slug::slugify(text);
        if base.is_empty() {
            base = "untitled".to_string();
        }

        if self.seen.insert(base.clone()) {
            return base;
        }

        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if self.seen.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

use std::collections::HashSet;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::{MediaItem, MediaSource};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("media not found: {0}")]
    NotFound(String),
    #[error("duplicate media id: {0}")]
    DuplicateId(String),
}

/// Immutable, ordered collection of media items.
///
/// Built once at startup and shared read-only by every request handler.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MediaItem>,
}

impl Catalog {
    /// Build a catalog, rejecting repeated ids so that lookups are unambiguous.
    pub fn new(items: Vec<MediaItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// The hardcoded sample catalog served by default.
    ///
    /// Ids are fixed literals, so this skips `new`; uniqueness is asserted by
    /// `sample_catalog_passes_validation`.
    pub fn sample() -> Self {
        Self {
            items: vec![
                MediaItem {
                    id: "movie1".into(),
                    title: "Sample Movie 1".into(),
                    thumbnail: Some("https://example.com/sample1.jpg".into()),
                    description: Some("This is a sample movie".into()),
                    sources: vec![MediaSource::new(
                        "Source 1",
                        "https://example.com/movie1.mp4",
                        "720p",
                    )],
                    metadata: string_map(&[("year", "2023"), ("genre", "Action")]),
                },
                MediaItem {
                    id: "movie2".into(),
                    title: "Sample Movie 2".into(),
                    thumbnail: Some("https://example.com/sample2.jpg".into()),
                    description: Some("This is another sample movie".into()),
                    sources: vec![MediaSource::new(
                        "Source 1",
                        "https://example.com/movie2.mp4",
                        "1080p",
                    )],
                    metadata: string_map(&[("year", "2024"), ("genre", "Comedy")]),
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every item, in insertion order.
    pub fn list_all(&self) -> &[MediaItem] {
        &self.items
    }

    /// Exact, case-sensitive id lookup.
    pub fn get_by_id(&self, media_id: &str) -> Result<&MediaItem, CatalogError> {
        self.items
            .iter()
            .find(|m| m.id == media_id)
            .ok_or_else(|| CatalogError::NotFound(media_id.to_string()))
    }

    /// Case-insensitive substring scan over titles and descriptions.
    pub fn search(&self, query: &str) -> Vec<&MediaItem> {
        let needle = query.to_lowercase();
        self.items.iter().filter(|m| m.matches(&needle)).collect()
    }
}

fn string_map(pairs: &[(&str, &str)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

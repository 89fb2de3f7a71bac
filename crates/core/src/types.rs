use serde::{Deserialize, Serialize};

/// One playable variant of a media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSource {
    pub name: String,
    pub url: String,
    pub quality: String,
    #[serde(default)]
    pub size: Option<String>,
}

impl MediaSource {
    pub fn new(name: &str, url: &str, quality: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            quality: quality.to_string(),
            size: None,
        }
    }
}

/// A streamable title in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sources: Vec<MediaSource>,
    /// Open-ended key/value pairs (year, genre, ...).
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl MediaItem {
    /// Case-insensitive substring match against title and description.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        if self.title.to_lowercase().contains(needle) {
            return true;
        }
        self.description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

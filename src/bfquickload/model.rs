use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTHOR: &str = "unknown";
pub const DEFAULT_APP_NAME: &str = "BFQuickLoad";

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

/// A stored configuration payload.
///
/// `content` is opaque to this crate; it is usually a block of flight
/// controller CLI commands but nothing here interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

/// A preset that has not been stored yet, and so has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPreset {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

impl Default for NewPreset {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            tags: Vec::new(),
            author: default_author(),
            content: String::new(),
        }
    }
}

impl NewPreset {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the id handed out by the store.
    pub fn into_preset(self, id: i64) -> Preset {
        Preset {
            id,
            name: self.name,
            description: self.description,
            tags: self.tags,
            author: self.author,
            content: self.content,
        }
    }
}

/// A named, stored query definition. Unrelated to presets apart from
/// sharing the same identity rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub id: i64,
    pub name: String,
    pub search_query: String,
    pub author: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSearchFilter {
    pub name: String,
    pub search_query: String,
    pub author: String,
    pub tags: Vec<String>,
}

impl NewSearchFilter {
    pub fn into_search_filter(self, id: i64) -> SearchFilter {
        SearchFilter {
            id,
            name: self.name,
            search_query: self.search_query,
            author: self.author,
            tags: self.tags,
        }
    }
}

/// A preset without its content payload, as shown in catalog listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetMetadata {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub author: String,
    pub tags: Vec<String>,
}

impl From<&Preset> for PresetMetadata {
    fn from(preset: &Preset) -> Self {
        Self {
            id: preset.id,
            name: preset.name.clone(),
            description: preset.description.clone(),
            author: preset.author.clone(),
            tags: preset.tags.clone(),
        }
    }
}

/// Browsable view over every preset: per-item metadata plus the distinct
/// authors and tags, both sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetsCatalog {
    pub presets_metadata: Vec<PresetMetadata>,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingInfo {
    pub app_name: String,
    pub version: String,
}

//! Business logic for each catalog operation.
//!
//! Every function here is generic over [`DataStore`](crate::store::DataStore),
//! takes plain Rust values and returns plain Rust values. Nothing in this
//! layer prints or exits.

use crate::config::CatalogConfig;
use crate::model::Preset;

pub mod catalog;
pub mod config;
pub mod ping;
pub mod presets;
pub mod search_filters;
pub mod seed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of the maintenance commands (seed, config).
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_presets: Vec<Preset>,
    pub config: Option<CatalogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_presets(mut self, presets: Vec<Preset>) -> Self {
        self.affected_presets = presets;
        self
    }

    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = Some(config);
        self
    }
}

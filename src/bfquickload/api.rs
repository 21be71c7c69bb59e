//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every caller, whether the bundled CLI or an HTTP front end.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (signed limits from the outside world become `usize`,
//!   negative ones are rejected before the store is touched)
//! - **Returns structured types**: entities on success, [`CatalogError`] otherwise
//!
//! Absent ids surface as [`CatalogError::NotFound`]; store failures
//! propagate unchanged.
//!
//! ## Generic Over DataStore
//!
//! `CatalogApi<S: DataStore>` owns its store. The store is opened by whoever
//! constructs the API and closed when the API is dropped:
//! - Production: `CatalogApi<FileStore>`
//! - Testing: `CatalogApi<InMemoryStore>`

use crate::commands;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::model::{NewPreset, NewSearchFilter, PingInfo, Preset, PresetsCatalog, SearchFilter};
use crate::store::DataStore;
use std::path::{Path, PathBuf};

/// The main API facade for catalog operations.
pub struct CatalogApi<S: DataStore> {
    store: S,
    config: CatalogConfig,
    home: PathBuf,
}

impl<S: DataStore> CatalogApi<S> {
    pub fn new(store: S, config: CatalogConfig, home: PathBuf) -> Self {
        Self {
            store,
            config,
            home,
        }
    }

    pub fn ping(&self) -> PingInfo {
        commands::ping::run(&self.config)
    }

    pub fn fetch_catalog(&self) -> Result<PresetsCatalog> {
        commands::catalog::run(&self.store, self.config.list_limit)
    }

    pub fn fetch_preset(&self, id: i64) -> Result<Preset> {
        commands::presets::get(&self.store, id)
    }

    pub fn fetch_all_presets(&self) -> Result<Vec<Preset>> {
        commands::presets::list(&self.store, self.config.list_limit)
    }

    pub fn fetch_presets(&self, limit: i64) -> Result<Vec<Preset>> {
        let limit = parse_limit(limit)?;
        commands::presets::list(&self.store, limit)
    }

    pub fn submit_preset(&mut self, preset: NewPreset) -> Result<Preset> {
        commands::presets::create(&mut self.store, preset)
    }

    pub fn fetch_search_filter(&self, id: i64) -> Result<SearchFilter> {
        commands::search_filters::get(&self.store, id)
    }

    pub fn fetch_all_search_filters(&self) -> Result<Vec<SearchFilter>> {
        commands::search_filters::list(&self.store, self.config.list_limit)
    }

    pub fn fetch_search_filters(&self, limit: i64) -> Result<Vec<SearchFilter>> {
        let limit = parse_limit(limit)?;
        commands::search_filters::list(&self.store, limit)
    }

    pub fn submit_search_filter(&mut self, filter: NewSearchFilter) -> Result<SearchFilter> {
        commands::search_filters::create(&mut self.store, filter)
    }

    pub fn seed(&mut self, source: SeedSource) -> Result<CmdResult> {
        commands::seed::run(&mut self.store, source)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.home, action)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }
}

fn parse_limit(limit: i64) -> Result<usize> {
    usize::try_from(limit).map_err(|_| {
        CatalogError::InvalidInput(format!("limit must not be negative, got {}", limit))
    })
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::seed::SeedSource;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

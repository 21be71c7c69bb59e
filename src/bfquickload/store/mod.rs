//! # Storage Layer
//!
//! This module defines the storage abstraction for the catalog. The
//! [`DataStore`] trait lets the command layer work against any backend.
//!
//! ## Contract
//!
//! Presets and search filters are two independent, identity-keyed
//! collections. For each of them a store must:
//! - return `Ok(None)` when an id is absent (absence is a result, not an error)
//! - list rows in a stable order, capped by `limit`
//! - assign ids on create: monotonically increasing, never reused
//! - apply every write atomically, so a failed create leaves nothing behind
//!
//! A backend that cannot reach its medium reports
//! [`CatalogError::StoreUnavailable`](crate::error::CatalogError) and never
//! retries on its own.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON table per collection
//! - [`memory::InMemoryStore`]: No persistence, for tests
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── presets.json          # {"next_id": N, "rows": [...]}
//! ├── search_filters.json   # {"next_id": N, "rows": [...]}
//! └── .lock                 # advisory lock target for writers
//! ```

use crate::error::{CatalogError, Result};
use crate::model::{NewPreset, NewSearchFilter, Preset, SearchFilter};
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// Cap applied when callers do not ask for a specific limit.
pub const DEFAULT_LIST_LIMIT: usize = 128;

/// Abstract interface for preset and search filter storage.
pub trait DataStore {
    fn get_preset(&self, id: i64) -> Result<Option<Preset>>;

    /// List up to `limit` presets in ascending id order.
    fn list_presets(&self, limit: usize) -> Result<Vec<Preset>>;

    /// Persist a preset and return it with its newly assigned id.
    fn create_preset(&mut self, preset: NewPreset) -> Result<Preset>;

    fn get_search_filter(&self, id: i64) -> Result<Option<SearchFilter>>;

    fn list_search_filters(&self, limit: usize) -> Result<Vec<SearchFilter>>;

    fn create_search_filter(&mut self, filter: NewSearchFilter) -> Result<SearchFilter>;
}

/// Rows that carry a store-assigned id.
pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for Preset {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for SearchFilter {
    fn id(&self) -> i64 {
        self.id
    }
}

/// One collection: its rows in id order plus the id counter.
///
/// The counter lives beside the rows so ids are never handed out twice,
/// even if rows were ever removed by hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table<T> {
    pub next_id: i64,
    pub rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl<T: Identified + Clone> Table<T> {
    pub fn get(&self, id: i64) -> Option<T> {
        self.rows.iter().find(|row| row.id() == id).cloned()
    }

    pub fn list(&self, limit: usize) -> Vec<T> {
        self.rows.iter().take(limit).cloned().collect()
    }

    /// Build a row with the next id and append it.
    ///
    /// The id handed out is always above every stored row, even when the
    /// persisted counter has fallen behind them.
    pub fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> Result<T> {
        let floor = match self.rows.iter().map(Identified::id).max() {
            Some(max) => max.checked_add(1).ok_or_else(ids_exhausted)?,
            None => 1,
        };
        let id = self.next_id.max(floor);
        if id != self.next_id {
            tracing::warn!(stored = self.next_id, used = id, "id counter behind stored rows");
        }
        let next_id = id.checked_add(1).ok_or_else(ids_exhausted)?;

        let row = build(id);
        self.rows.push(row.clone());
        self.next_id = next_id;
        Ok(row)
    }
}

fn ids_exhausted() -> CatalogError {
    CatalogError::Store("id sequence exhausted".to_string())
}

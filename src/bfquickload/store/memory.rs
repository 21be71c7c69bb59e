use super::{DataStore, Table};
use crate::error::{CatalogError, Result};
use crate::model::{NewPreset, NewSearchFilter, Preset, SearchFilter};
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    presets: Table<Preset>,
    search_filters: Table<SearchFilter>,
    simulate_unavailable: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation fail as if the backing medium were gone.
    pub fn set_simulate_unavailable(&mut self, simulate: bool) {
        self.simulate_unavailable = simulate;
    }

    fn check_available(&self) -> Result<()> {
        if self.simulate_unavailable {
            return Err(CatalogError::unavailable(
                "memory",
                io::Error::new(io::ErrorKind::NotConnected, "simulated outage"),
            ));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn get_preset(&self, id: i64) -> Result<Option<Preset>> {
        self.check_available()?;
        Ok(self.presets.get(id))
    }

    fn list_presets(&self, limit: usize) -> Result<Vec<Preset>> {
        self.check_available()?;
        Ok(self.presets.list(limit))
    }

    fn create_preset(&mut self, preset: NewPreset) -> Result<Preset> {
        self.check_available()?;
        self.presets.insert_with(|id| preset.into_preset(id))
    }

    fn get_search_filter(&self, id: i64) -> Result<Option<SearchFilter>> {
        self.check_available()?;
        Ok(self.search_filters.get(id))
    }

    fn list_search_filters(&self, limit: usize) -> Result<Vec<SearchFilter>> {
        self.check_available()?;
        Ok(self.search_filters.list(limit))
    }

    fn create_search_filter(&mut self, filter: NewSearchFilter) -> Result<SearchFilter> {
        self.check_available()?;
        self.search_filters
            .insert_with(|id| filter.into_search_filter(id))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_presets(mut self, count: usize) -> Self {
            for i in 0..count {
                let preset = NewPreset::new(format!("Preset {}", i + 1), format!("get {}", i + 1))
                    .with_tags([format!("tag-{}", i % 3)]);
                self.store.create_preset(preset).unwrap();
            }
            self
        }

        pub fn with_preset(mut self, author: &str, tags: &[&str]) -> Self {
            let preset = NewPreset::new(format!("{author} preset"), "save")
                .with_author(author)
                .with_tags(tags.iter().copied());
            self.store.create_preset(preset).unwrap();
            self
        }

        pub fn with_search_filter(mut self, name: &str, query: &str) -> Self {
            let filter = NewSearchFilter {
                name: name.to_string(),
                search_query: query.to_string(),
                author: "BFQuickLoad".to_string(),
                tags: vec!["saved".to_string()],
            };
            self.store.create_search_filter(filter).unwrap();
            self
        }
    }
}

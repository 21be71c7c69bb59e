use crate::catalog::build_catalog;
use crate::error::Result;
use crate::model::PresetsCatalog;
use crate::store::DataStore;

/// One read of up to `limit` presets, aggregated into a catalog.
pub fn run<S: DataStore>(store: &S, limit: usize) -> Result<PresetsCatalog> {
    let presets = store.list_presets(limit)?;
    let catalog = build_catalog(&presets);
    tracing::debug!(
        presets = catalog.presets_metadata.len(),
        authors = catalog.authors.len(),
        tags = catalog.tags.len(),
        "built catalog"
    );
    Ok(catalog)
}

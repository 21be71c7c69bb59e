use crate::error::{CatalogError, EntityKind, Result};
use crate::model::{NewPreset, Preset};
use crate::store::DataStore;

/// Fetch one preset; absence becomes [`CatalogError::NotFound`].
pub fn get<S: DataStore>(store: &S, id: i64) -> Result<Preset> {
    store
        .get_preset(id)?
        .ok_or_else(|| CatalogError::not_found(EntityKind::Preset, id))
}

pub fn list<S: DataStore>(store: &S, limit: usize) -> Result<Vec<Preset>> {
    let presets = store.list_presets(limit)?;
    tracing::debug!(limit, count = presets.len(), "listed presets");
    Ok(presets)
}

pub fn create<S: DataStore>(store: &mut S, preset: NewPreset) -> Result<Preset> {
    let created = store.create_preset(preset)?;
    tracing::info!(id = created.id, name = %created.name, "preset created");
    Ok(created)
}

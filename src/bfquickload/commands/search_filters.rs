use crate::error::{CatalogError, EntityKind, Result};
use crate::model::{NewSearchFilter, SearchFilter};
use crate::store::DataStore;

pub fn get<S: DataStore>(store: &S, id: i64) -> Result<SearchFilter> {
    store
        .get_search_filter(id)?
        .ok_or_else(|| CatalogError::not_found(EntityKind::SearchFilter, id))
}

pub fn list<S: DataStore>(store: &S, limit: usize) -> Result<Vec<SearchFilter>> {
    let filters = store.list_search_filters(limit)?;
    tracing::debug!(limit, count = filters.len(), "listed search filters");
    Ok(filters)
}

pub fn create<S: DataStore>(store: &mut S, filter: NewSearchFilter) -> Result<SearchFilter> {
    let created = store.create_search_filter(filter)?;
    tracing::info!(id = created.id, name = %created.name, "search filter created");
    Ok(created)
}

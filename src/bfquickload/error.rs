use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The two identity-keyed collections kept by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Preset,
    SearchFilter,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Preset => write!(f, "Preset"),
            EntityKind::SearchFilter => write!(f, "Search filter"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: i64 },

    #[error("Store unavailable at {}: {source}", .path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store is locked by another writer ({})", .path.display())]
    StoreLocked { path: PathBuf },

    #[error("Store file is corrupt ({}): {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn not_found(kind: EntityKind, id: i64) -> Self {
        CatalogError::NotFound { kind, id }
    }

    pub fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::StoreUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }

    /// True when the backing medium could not be reached or claimed.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            CatalogError::StoreUnavailable { .. } | CatalogError::StoreLocked { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

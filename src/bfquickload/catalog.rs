//! Catalog aggregation.
//!
//! [`build_catalog`] turns the flat list returned by a store into the view
//! clients browse: per-preset metadata in source order, plus every distinct
//! author and tag in ascending byte order.

use crate::model::{Preset, PresetMetadata, PresetsCatalog};
use std::collections::BTreeSet;

pub fn build_catalog(presets: &[Preset]) -> PresetsCatalog {
    let presets_metadata = presets.iter().map(PresetMetadata::from).collect();

    let authors: BTreeSet<&str> = presets.iter().map(|p| p.author.as_str()).collect();
    let tags: BTreeSet<&str> = presets
        .iter()
        .flat_map(|p| p.tags.iter().map(String::as_str))
        .collect();

    PresetsCatalog {
        presets_metadata,
        authors: authors.into_iter().map(str::to_string).collect(),
        tags: tags.into_iter().map(str::to_string).collect(),
    }
}

//! Populate a store with presets.
//!
//! Seeding either inserts the built-in starter set or the presets listed in
//! a JSON file (an array of preset objects without ids). Each insert is its
//! own atomic write: if one fails, the presets created before it remain.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::NewPreset;
use crate::store::DataStore;
use std::fs;
use std::path::{Path, PathBuf};

const BUILTIN_AUTHOR: &str = "BFQuickLoad";

#[derive(Debug, Clone)]
pub enum SeedSource {
    Builtin,
    File(PathBuf),
}

pub fn run<S: DataStore>(store: &mut S, source: SeedSource) -> Result<CmdResult> {
    let presets = match &source {
        SeedSource::Builtin => builtin_presets(),
        SeedSource::File(path) => load_seed_file(path)?,
    };

    let mut created = Vec::with_capacity(presets.len());
    for preset in presets {
        created.push(store.create_preset(preset)?);
    }
    tracing::info!(count = created.len(), ?source, "seeded presets");

    let mut result = CmdResult::default();
    if created.is_empty() {
        result.add_message(CmdMessage::warning("Seed source contained no presets"));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Seeded {} preset{}",
            created.len(),
            if created.len() == 1 { "" } else { "s" }
        )));
    }
    Ok(result.with_affected_presets(created))
}

fn load_seed_file(path: &Path) -> Result<Vec<NewPreset>> {
    let content = fs::read_to_string(path).map_err(|e| {
        CatalogError::InvalidInput(format!("cannot read seed file {}: {}", path.display(), e))
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Starter presets: everyday Betaflight CLI commands plus a few tuning
/// snippets contributed by pilots.
pub fn builtin_presets() -> Vec<NewPreset> {
    vec![
        NewPreset::new("Get Version", "version")
            .with_description("Displays the Betaflight firmware version.")
            .with_tags(["info", "diagnostics"])
            .with_author(BUILTIN_AUTHOR),
        NewPreset::new("Dump All Settings", "dump")
            .with_description("Dumps all current Betaflight settings to the CLI.")
            .with_tags(["backup", "settings"])
            .with_author(BUILTIN_AUTHOR),
        NewPreset::new("Dump Diff", "diff")
            .with_description("Dumps only settings that differ from the default values.")
            .with_tags(["backup", "settings"])
            .with_author(BUILTIN_AUTHOR),
        NewPreset::new("Save Settings", "save")
            .with_description("Saves current settings to permanent memory.")
            .with_tags(["action", "settings"])
            .with_author(BUILTIN_AUTHOR),
        NewPreset::new("Load Defaults", "defaults")
            .with_description("Loads factory default settings (requires 'save' afterwards).")
            .with_tags(["action", "settings", "defaults"])
            .with_author(BUILTIN_AUTHOR),
        NewPreset::new("Show PID Profile", "get pid_profile")
            .with_description("Displays the active PID profile settings.")
            .with_tags(["info", "tuning"])
            .with_author(BUILTIN_AUTHOR),
        NewPreset::new("Show Filter Settings", "get dterm_filter")
            .with_description("Displays all filter-related settings.")
            .with_tags(["info", "filters"])
            .with_author(BUILTIN_AUTHOR),
        NewPreset::new("Tinywhoop Throttle Expo (30.000kv)", throttle_expo(31))
            .with_description(
                "Throttle expo settings for 30.000kv Tinywhoop motors across three rate profiles.",
            )
            .with_tags(["throttle", "expo", "tinywhoop", "30000kv"])
            .with_author("Luki"),
        NewPreset::new("Tinywhoop Throttle Expo (27.000kv)", throttle_expo(35))
            .with_description(
                "Throttle expo settings for 27.000kv Tinywhoop motors across three rate profiles.",
            )
            .with_tags(["throttle", "expo", "tinywhoop", "27000kv"])
            .with_author("Luki"),
        NewPreset::new("Tinywhoop Throttle Expo (23.000kv)", throttle_expo(41))
            .with_description(
                "Throttle expo settings for 23.000kv Tinywhoop motors across three rate profiles.",
            )
            .with_tags(["throttle", "expo", "tinywhoop", "23000kv"])
            .with_author("Luki"),
    ]
}

fn throttle_expo(thr_mid: u8) -> String {
    [(0, 20), (1, 20), (2, 50)]
        .iter()
        .map(|(profile, expo)| {
            format!("# rateprofile {profile}\nset thr_mid = {thr_mid}\nset thr_expo = {expo}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

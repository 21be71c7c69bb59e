//! # CLI Layer
//!
//! This module is **one possible client** of the catalog; it is not the
//! application itself. It is the only place that:
//! - Parses arguments
//! - Writes to stdout/stderr
//! - Installs the tracing subscriber
//! - Decides the process exit status (via `main.rs`)
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Opens the store and builds the `CatalogApi`
//! - `handle_*()`: Per-command handlers that call the API and render output

use super::print::{
    print_catalog, print_config, print_full_preset, print_full_search_filter, print_json,
    print_messages, print_ping, print_presets, print_search_filters,
};
use super::setup::{Cli, Commands, CreatePresetArgs, FilterCommands, PresetCommands};
use bfquickload::api::{CatalogApi, ConfigAction, SeedSource};
use bfquickload::commands::ping;
use bfquickload::config::CatalogConfig;
use bfquickload::error::{CatalogError, Result};
use bfquickload::model::{NewPreset, NewSearchFilter};
use bfquickload::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "BFQUICKLOAD_HOME";

struct AppContext {
    api: CatalogApi<FileStore>,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Ping answers even when no data home can be found.
    if let Commands::Ping = cli.command {
        return handle_ping(resolve_home(cli.home.as_deref()), cli.json);
    }

    let home = resolve_home(cli.home.as_deref())?;
    tracing::debug!(home = %home.display(), "resolved data home");

    // Config never touches the store.
    if let Commands::Config { key, value } = &cli.command {
        return handle_config(&home, key.clone(), value.clone(), cli.json);
    }

    let mut ctx = init_context(home, cli.json)?;

    match cli.command {
        Commands::Catalog => handle_catalog(&ctx),
        Commands::Presets(cmd) => match cmd {
            PresetCommands::List { limit } => handle_list_presets(&ctx, limit),
            PresetCommands::Get { id } => handle_get_preset(&ctx, id),
            PresetCommands::Create(args) => handle_create_preset(&mut ctx, args),
        },
        Commands::Filters(cmd) => match cmd {
            FilterCommands::List { limit } => handle_list_filters(&ctx, limit),
            FilterCommands::Get { id } => handle_get_filter(&ctx, id),
            FilterCommands::Create {
                name,
                query,
                author,
                tags,
            } => handle_create_filter(
                &mut ctx,
                NewSearchFilter {
                    name,
                    search_query: query,
                    author,
                    tags,
                },
            ),
        },
        Commands::Seed { file } => handle_seed(&mut ctx, file),
        Commands::Ping | Commands::Config { .. } => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_home(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "bfquickload", "bfquickload")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            CatalogError::Config(format!(
                "could not determine a data directory; set {} or pass --home",
                HOME_ENV
            ))
        })
}

fn init_context(home: PathBuf, json: bool) -> Result<AppContext> {
    let config = CatalogConfig::load(&home)?;
    let store = FileStore::open(config.database_path(&home))?;
    let api = CatalogApi::new(store, config, home);
    Ok(AppContext { api, json })
}

fn handle_ping(home: Result<PathBuf>, json: bool) -> Result<()> {
    let info = ping::run(&ping_config(home));
    if json {
        print_json(&info)?;
    } else {
        print_ping(&info);
    }
    Ok(())
}

/// Config for ping; any failure along the way falls back to defaults.
fn ping_config(home: Result<PathBuf>) -> CatalogConfig {
    home.and_then(|home| CatalogConfig::load(&home))
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default config for ping");
            CatalogConfig::default()
        })
}

fn handle_catalog(ctx: &AppContext) -> Result<()> {
    let catalog = ctx.api.fetch_catalog()?;
    if ctx.json {
        print_json(&catalog)?;
    } else {
        print_catalog(&catalog);
    }
    Ok(())
}

fn handle_list_presets(ctx: &AppContext, limit: Option<i64>) -> Result<()> {
    let presets = match limit {
        Some(limit) => ctx.api.fetch_presets(limit)?,
        None => ctx.api.fetch_all_presets()?,
    };
    if ctx.json {
        print_json(&presets)?;
    } else {
        print_presets(&presets);
    }
    Ok(())
}

fn handle_get_preset(ctx: &AppContext, id: i64) -> Result<()> {
    let preset = ctx.api.fetch_preset(id)?;
    if ctx.json {
        print_json(&preset)?;
    } else {
        print_full_preset(&preset);
    }
    Ok(())
}

fn handle_create_preset(ctx: &mut AppContext, args: CreatePresetArgs) -> Result<()> {
    let content = match (args.content, args.content_file) {
        (Some(content), _) => content,
        (None, Some(path)) => std::fs::read_to_string(&path).map_err(|e| {
            CatalogError::InvalidInput(format!("cannot read {}: {}", path.display(), e))
        })?,
        (None, None) => String::new(),
    };
    let preset = NewPreset::new(args.name, content)
        .with_description(args.description)
        .with_author(args.author)
        .with_tags(args.tags);

    let created = ctx.api.submit_preset(preset)?;
    if ctx.json {
        print_json(&created)?;
    } else {
        print_full_preset(&created);
    }
    Ok(())
}

fn handle_list_filters(ctx: &AppContext, limit: Option<i64>) -> Result<()> {
    let filters = match limit {
        Some(limit) => ctx.api.fetch_search_filters(limit)?,
        None => ctx.api.fetch_all_search_filters()?,
    };
    if ctx.json {
        print_json(&filters)?;
    } else {
        print_search_filters(&filters);
    }
    Ok(())
}

fn handle_get_filter(ctx: &AppContext, id: i64) -> Result<()> {
    let filter = ctx.api.fetch_search_filter(id)?;
    if ctx.json {
        print_json(&filter)?;
    } else {
        print_full_search_filter(&filter);
    }
    Ok(())
}

fn handle_create_filter(ctx: &mut AppContext, filter: NewSearchFilter) -> Result<()> {
    let created = ctx.api.submit_search_filter(filter)?;
    if ctx.json {
        print_json(&created)?;
    } else {
        print_full_search_filter(&created);
    }
    Ok(())
}

fn handle_seed(ctx: &mut AppContext, file: Option<PathBuf>) -> Result<()> {
    let source = match file {
        Some(path) => SeedSource::File(path),
        None => SeedSource::Builtin,
    };
    let result = ctx.api.seed(source)?;
    if ctx.json {
        print_json(&result.affected_presets)?;
    } else {
        print_messages(&result.messages);
        print_presets(&result.affected_presets);
    }
    Ok(())
}

fn handle_config(
    home: &Path,
    key: Option<String>,
    value: Option<String>,
    json: bool,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = bfquickload::commands::config::run(home, action)?;
    match (&result.config, json) {
        (Some(config), true) => print_json(config)?,
        (Some(config), false) if result.messages.is_empty() => print_config(config),
        _ => print_messages(&result.messages),
    }
    Ok(())
}

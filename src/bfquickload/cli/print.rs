use bfquickload::api::{CmdMessage, MessageLevel};
use bfquickload::config::CatalogConfig;
use bfquickload::model::{PingInfo, Preset, PresetMetadata, PresetsCatalog, SearchFilter};
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = "--------------------------------";

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_ping(info: &PingInfo) {
    println!("{} {}", info.app_name.bold(), info.version);
}

pub(super) fn print_catalog(catalog: &PresetsCatalog) {
    print_metadata_list(&catalog.presets_metadata);
    println!();
    println!("{} {}", "Authors:".bold(), catalog.authors.join(", "));
    println!("{} {}", "Tags:".bold(), catalog.tags.join(", "));
}

pub(super) fn print_presets(presets: &[Preset]) {
    let metadata: Vec<PresetMetadata> = presets.iter().map(PresetMetadata::from).collect();
    print_metadata_list(&metadata);
}

fn print_metadata_list(items: &[PresetMetadata]) {
    if items.is_empty() {
        println!("No presets found.");
        return;
    }

    let name_width = items.iter().map(|m| m.name.width()).max().unwrap_or(0);
    let id_width = items.iter().map(|m| m.id.to_string().len()).max().unwrap_or(1);

    for meta in items {
        let idx = format!("{:>width$}.", meta.id, width = id_width);
        let padding = " ".repeat(name_width - meta.name.width());
        println!(
            "  {} {}{}  {}  {}",
            idx.yellow(),
            meta.name,
            padding,
            meta.author.dimmed(),
            format_tags(&meta.tags).cyan()
        );
    }
}

pub(super) fn print_full_preset(preset: &Preset) {
    println!(
        "{} {}",
        format!("#{}", preset.id).yellow(),
        preset.name.bold()
    );
    if !preset.description.is_empty() {
        println!("{}", preset.description);
    }
    println!("{} {}", "author:".dimmed(), preset.author);
    println!("{} {}", "tags:".dimmed(), format_tags(&preset.tags));
    println!("{}", SEPARATOR);
    println!("{}", preset.content);
}

pub(super) fn print_search_filters(filters: &[SearchFilter]) {
    if filters.is_empty() {
        println!("No search filters found.");
        return;
    }

    let name_width = filters.iter().map(|f| f.name.width()).max().unwrap_or(0);
    for filter in filters {
        let padding = " ".repeat(name_width - filter.name.width());
        println!(
            "  {} {}{}  {}  {}",
            format!("{}.", filter.id).yellow(),
            filter.name,
            padding,
            format!("\"{}\"", filter.search_query).green(),
            format_tags(&filter.tags).cyan()
        );
    }
}

pub(super) fn print_full_search_filter(filter: &SearchFilter) {
    println!(
        "{} {}",
        format!("#{}", filter.id).yellow(),
        filter.name.bold()
    );
    println!("{} {}", "query:".dimmed(), filter.search_query);
    println!("{} {}", "author:".dimmed(), filter.author);
    println!("{} {}", "tags:".dimmed(), format_tags(&filter.tags));
}

pub(super) fn print_config(config: &CatalogConfig) {
    for key in CatalogConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        String::new()
    } else {
        format!("[{}]", tags.join(", "))
    }
}

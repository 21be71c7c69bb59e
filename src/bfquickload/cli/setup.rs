use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bfquickload", bin_name = "bfquickload", version)]
#[command(about = "Catalog of reusable Betaflight presets and search filters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data home holding config.json and the store (overrides BFQUICKLOAD_HOME)
    #[arg(long, global = true, value_name = "PATH")]
    pub home: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report application name and version
    Ping,

    /// Show the preset catalog: metadata, authors and tags
    #[command(alias = "cat")]
    Catalog,

    /// Work with presets
    #[command(subcommand, alias = "p")]
    Presets(PresetCommands),

    /// Work with search filters
    #[command(subcommand, alias = "f")]
    Filters(FilterCommands),

    /// Load the starter presets, or presets from a JSON file
    Seed {
        /// JSON array of presets (ids are assigned on insert)
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (app-name, database, list-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PresetCommands {
    /// List presets
    #[command(alias = "ls")]
    List {
        /// Maximum number of presets (defaults to the configured list-limit)
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Show one preset, including its content
    #[command(alias = "v")]
    Get {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Store a new preset
    #[command(alias = "n")]
    Create(CreatePresetArgs),
}

#[derive(Args, Debug)]
pub struct CreatePresetArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "unknown")]
    pub author: String,

    /// Tag to attach (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Preset content given inline
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read preset content from a file
    #[arg(long, value_name = "PATH")]
    pub content_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum FilterCommands {
    /// List search filters
    #[command(alias = "ls")]
    List {
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Show one search filter
    #[command(alias = "v")]
    Get {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Store a new search filter
    #[command(alias = "n")]
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        query: String,

        #[arg(long)]
        author: String,

        /// Tag to attach (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
}

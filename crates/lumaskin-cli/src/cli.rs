//! CLI argument definitions for `lumaskin`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use lumaskin_catalog::PriceRange;

#[derive(Parser)]
#[command(
    name = "lumaskin",
    version,
    about = "LumaSkin catalog tool - import, search, and recommend skincare products",
    long_about = "Import skincare product files into a catalog and query it.\n\n\
                  Accepts comma, semicolon, tab, or pipe delimited text in UTF-8 or\n\
                  UTF-16 (with BOM). Column headers are matched loosely."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow row values (product names, raw cells) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a product file, replacing the catalog contents.
    Import(ImportArgs),

    /// Parse a product file and show how its columns were resolved.
    Inspect(InspectArgs),

    /// Search the catalog.
    Search(SearchArgs),

    /// Recommend catalog products for a skin condition.
    Recommend(RecommendArgs),

    /// Rank model predictions and recommend products for each.
    Analyze(AnalyzeArgs),

    /// Export the catalog as CSV.
    Export(ExportArgs),

    /// List known skin conditions and their target ingredients.
    Conditions,
}

#[derive(Args)]
pub struct StoreArg {
    /// Path to the catalog JSON file.
    #[arg(long = "store", value_name = "PATH", default_value = "catalog.json")]
    pub store: PathBuf,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Product file to import.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub store: StoreArg,

    /// Parse and report without touching the catalog.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Product file to inspect.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Number of parsed records to preview.
    #[arg(long = "preview", default_value_t = 5)]
    pub preview: usize,
}

#[derive(Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub store: StoreArg,

    /// Case-insensitive text matched against name and brand.
    #[arg(long = "query")]
    pub query: Option<String>,

    /// Exact category ("all" for any).
    #[arg(long = "category")]
    pub category: Option<String>,

    /// Skin type the product must list ("all" for any).
    #[arg(long = "skin-type")]
    pub skin_type: Option<String>,

    /// Concern the product must list ("all" for any).
    #[arg(long = "concern")]
    pub concern: Option<String>,

    /// Price bucket.
    #[arg(long = "price", value_enum, default_value = "all")]
    pub price: PriceArg,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct RecommendArgs {
    /// Condition label, e.g. acne or oily_skin.
    #[arg(value_name = "CONDITION")]
    pub condition: String,

    #[command(flatten)]
    pub store: StoreArg,

    /// Maximum products to return.
    #[arg(long = "limit", default_value_t = 3)]
    pub limit: usize,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// JSON file with model predictions (`[{label, confidence}]` or `{"predictions": [...]}`).
    #[arg(value_name = "PREDICTIONS")]
    pub predictions: PathBuf,

    #[command(flatten)]
    pub store: StoreArg,

    /// Predictions to keep, most confident first.
    #[arg(long = "top-k", default_value_t = 3)]
    pub top_k: usize,

    /// Maximum products per prediction.
    #[arg(long = "limit", default_value_t = 3)]
    pub limit: usize,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub store: StoreArg,

    /// Destination file (stdout when omitted).
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// CLI price bucket choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum PriceArg {
    All,
    #[value(name = "under-10")]
    Under10,
    #[value(name = "10-20")]
    From10To20,
    #[value(name = "over-20")]
    Over20,
}

impl From<PriceArg> for PriceRange {
    fn from(arg: PriceArg) -> Self {
        match arg {
            PriceArg::All => PriceRange::All,
            PriceArg::Under10 => PriceRange::Under10,
            PriceArg::From10To20 => PriceRange::From10To20,
            PriceArg::Over20 => PriceRange::Over20,
        }
    }
}

/// Result output format.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

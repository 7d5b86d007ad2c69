//! LumaSkin catalog CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use lumaskin_catalog::{RecommendOptions, SearchQuery, StoredProduct};
use lumaskin_cli::commands::{
    run_analyze, run_export, run_import, run_inspect, run_recommend, run_search,
};
use lumaskin_cli::logging::{LogConfig, LogFormat, init_logging};
use lumaskin_core::ImportError;
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg, SearchArgs};
use crate::summary::{
    print_analysis, print_conditions, print_import_error, print_import_summary, print_inspect,
    print_products,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli.command) {
        Ok(()) => 0,
        Err(error) => {
            tracing::error!(error = %error, "command failed");
            eprintln!("error: {error:#}");
            if let Some(import_error) = error.downcast_ref::<ImportError>() {
                print_import_error(import_error);
            }
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Import(args) => {
            let result = run_import(&args.input, &args.store.store, args.dry_run)?;
            print_import_summary(&result);
        }
        Command::Inspect(args) => {
            let result = run_inspect(&args.input)?;
            print_inspect(&result, args.preview);
        }
        Command::Search(args) => {
            let products = run_search(&args.store.store, &search_query(&args))?;
            emit_products(&products, args.format)?;
        }
        Command::Recommend(args) => {
            let options = RecommendOptions {
                limit: args.limit,
                ..RecommendOptions::default()
            };
            let products = run_recommend(&args.store.store, &args.condition, &options)?;
            emit_products(&products, args.format)?;
        }
        Command::Analyze(args) => {
            let options = RecommendOptions {
                limit: args.limit,
                top_k: args.top_k,
            };
            let reports = run_analyze(&args.store.store, &args.predictions, &options)?;
            print_analysis(&reports);
        }
        Command::Export(args) => {
            let rows = run_export(&args.store.store, args.output.as_deref(), io::stdout())?;
            if let Some(path) = &args.output {
                eprintln!("Exported {rows} product(s) to {}", path.display());
            }
        }
        Command::Conditions => print_conditions(),
    }
    Ok(())
}

fn search_query(args: &SearchArgs) -> SearchQuery {
    SearchQuery {
        text: args.query.clone(),
        category: args.category.clone(),
        skin_type: args.skin_type.clone(),
        concern: args.concern.clone(),
        price: args.price.into(),
    }
}

fn emit_products(products: &[StoredProduct], format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Table => print_products(products),
        OutputFormatArg::Json => println!("{}", serde_json::to_string_pretty(products)?),
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

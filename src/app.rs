//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - loads settings (rules, vocabulary, labels)
//! - runs the classification pipeline
//! - prints reports and writes the output files

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;

use crate::cli::{ClassifyArgs, Command, ExplainArgs, RulesArgs};
use crate::classify::ClassificationEngine;
use crate::config::Settings;
use crate::domain::Product;
use crate::error::AppError;
use crate::io::summary::{SummaryFile, write_summary_json};
use crate::taxonomy::TaxonomyIndex;

pub mod pipeline;

pub use pipeline::RunConfig;

/// Entry point for the `shelf` binary.
pub fn run() -> Result<(), AppError> {
    // `shelf -t tax.csv -p items.csv` behaves like `shelf classify ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    init_logging(cli.command.common().quiet);

    match cli.command {
        Command::Classify(args) => handle_classify(args),
        Command::Explain(args) => handle_explain(args),
        Command::Rules(args) => handle_rules(args),
    }
}

fn init_logging(quiet: bool) {
    // Logs go to stderr; stdout carries the report.
    let default_level = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let settings = Settings::load(args.common.config.as_deref())?;
    log_settings(&settings);

    let config = run_config_from_args(&args);
    let run = pipeline::run_classification(&config, &settings)?;

    crate::io::export::write_results_csv(&config.output_path, &run.results, &settings.labels)?;
    info!(path = %config.output_path.display(), rows = run.results.len(), "output saved");

    if let Some(path) = &config.summary_json {
        let file = SummaryFile::new(
            &run.summary,
            &settings.labels,
            &config.taxonomy_path,
            &config.products_path,
        );
        write_summary_json(path, &file)?;
        info!(path = %path.display(), "summary saved");
    }

    println!("{}", crate::report::format_summary(&run.summary, &settings.labels));
    let new_categories = crate::report::format_new_categories(&run.summary, &settings.vocabulary);
    if !new_categories.is_empty() {
        println!("{new_categories}");
    }
    println!("{}", crate::report::format_legend(&settings.labels));

    Ok(())
}

fn handle_explain(args: ExplainArgs) -> Result<(), AppError> {
    let settings = Settings::load(args.common.config.as_deref())?;
    log_settings(&settings);

    let entries = match &args.taxonomy {
        Some(path) => crate::io::ingest::load_taxonomy(path)?.entries,
        None => Vec::new(),
    };
    let index = TaxonomyIndex::build(&entries);
    let engine = ClassificationEngine::new(&index, &settings.rules, &settings.vocabulary);

    let product = Product {
        item_name: Some(args.name),
        domain: args.domain,
        dept: args.dept,
        group: args.group,
        ..Product::default()
    };
    let trace = engine.trace(&product);
    print!("{}", crate::report::format_trace(&trace, &settings.labels));
    Ok(())
}

fn handle_rules(args: RulesArgs) -> Result<(), AppError> {
    let settings = Settings::load(args.common.config.as_deref())?;
    log_settings(&settings);
    print!("{}", crate::report::format_rules(&settings.rules, &settings.vocabulary));
    Ok(())
}

fn log_settings(settings: &Settings) {
    match &settings.source {
        Some(path) => info!(path = %path.display(), rules = settings.rules.len(), "settings loaded"),
        None => info!(rules = settings.rules.len(), "using built-in settings"),
    }
}

pub fn run_config_from_args(args: &ClassifyArgs) -> RunConfig {
    RunConfig {
        taxonomy_path: args.taxonomy.clone(),
        products_path: args.products.clone(),
        output_path: args.output.clone(),
        summary_json: args.summary_json.clone(),
        threads: args.threads.filter(|&n| n > 0),
    }
}

/// Rewrite argv so `shelf` defaults to `shelf classify`.
///
/// Rules:
/// - `shelf`                       -> unchanged (clap prints usage)
/// - `shelf -t X -p Y ...`         -> `shelf classify -t X -p Y ...`
/// - `shelf --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "classify" | "explain" | "rules");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "classify flags".
    if arg1.starts_with('-') {
        argv.insert(1, "classify".to_string());
    }

    argv
}

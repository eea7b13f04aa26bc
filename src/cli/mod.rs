//! Command-line parsing for the product classifier.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the classification code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "shelf", version, about = "Assign products to the category taxonomy")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a product list, write the updated list and print a summary.
    Classify(ClassifyArgs),
    /// Classify a single ad-hoc item and show which step decided it.
    Explain(ExplainArgs),
    /// Print the effective keyword rule table in evaluation order.
    Rules(RulesArgs),
}

/// Options shared by every command.
#[derive(Debug, Args, Clone)]
pub struct CommonArgs {
    /// TOML settings file (vocabulary, labels, rules). Falls back to $SHELF_CONFIG.
    #[arg(long, value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Only log warnings and errors (RUST_LOG still takes precedence).
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ClassifyArgs {
    /// Reference taxonomy CSV (domain_id, domain_name, dept_id, dept_name, ...).
    #[arg(short, long, value_name = "CSV")]
    pub taxonomy: PathBuf,

    /// Product list CSV (item_id, item_name, domain, dept, group, subgroup, ...).
    #[arg(short, long, value_name = "CSV")]
    pub products: PathBuf,

    /// Where to write the classified product list.
    #[arg(short, long, value_name = "CSV", default_value = "classified_products.csv")]
    pub output: PathBuf,

    /// Also write a JSON run summary.
    #[arg(long = "summary-json", value_name = "JSON")]
    pub summary_json: Option<PathBuf>,

    /// Worker threads for classification (default: one per core).
    #[arg(long)]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args, Clone)]
pub struct ExplainArgs {
    /// Item name to classify.
    #[arg(short, long)]
    pub name: String,

    /// Reference taxonomy CSV. Without it only the keyword rules can match.
    #[arg(short, long, value_name = "CSV")]
    pub taxonomy: Option<PathBuf>,

    #[arg(long)]
    pub domain: Option<String>,

    #[arg(long)]
    pub dept: Option<String>,

    #[arg(long)]
    pub group: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args, Clone)]
pub struct RulesArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl Command {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Command::Classify(args) => &args.common,
            Command::Explain(args) => &args.common,
            Command::Rules(args) => &args.common,
        }
    }
}

//! Shared classification pipeline used by the CLI commands and the integration tests.
//!
//! taxonomy CSV -> index; product CSV -> products; classify (parallel) -> summarize
//!
//! Writing files and printing are left to the caller.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::classify::{ClassificationEngine, Summary, summarize};
use crate::config::Settings;
use crate::domain::{ClassificationResult, Product, TaxonomyEntry};
use crate::error::AppError;
use crate::io::ingest::{ProductLoad, TaxonomyLoad, load_products, load_taxonomy};
use crate::taxonomy::TaxonomyIndex;

/// Resolved options for one `shelf classify` run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub taxonomy_path: PathBuf,
    pub products_path: PathBuf,
    pub output_path: PathBuf,
    pub summary_json: Option<PathBuf>,
    /// `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub taxonomy: TaxonomyLoad,
    pub products: ProductLoad,
    pub results: Vec<ClassificationResult>,
    pub summary: Summary,
}

/// Load both inputs, classify every product and summarize.
pub fn run_classification(config: &RunConfig, settings: &Settings) -> Result<RunOutput, AppError> {
    let taxonomy = load_taxonomy(&config.taxonomy_path)?;
    info!(
        path = %config.taxonomy_path.display(),
        entries = taxonomy.entries.len(),
        discarded = taxonomy.discarded,
        "taxonomy loaded"
    );
    if taxonomy.entries.is_empty() {
        warn!("taxonomy has no usable entries; only keyword rules can classify");
    }

    let products = load_products(&config.products_path)?;
    info!(
        path = %config.products_path.display(),
        products = products.products.len(),
        row_errors = products.row_errors.len(),
        "products loaded"
    );
    if products.products.is_empty() {
        warn!(
            path = %config.products_path.display(),
            "product list has no data rows; writing an empty result"
        );
    }

    let started = Instant::now();
    let results = match config.threads {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| AppError::internal(format!("Failed to start worker pool: {e}")))?;
            pool.install(|| classify_products(&taxonomy.entries, &products.products, settings))
        }
        None => classify_products(&taxonomy.entries, &products.products, settings),
    };
    debug!(elapsed_ms = started.elapsed().as_millis() as u64, "classification finished");

    let summary = summarize(&results);
    info!(
        total = summary.total,
        new_categories = summary.new_categories.len(),
        "run summarized"
    );

    Ok(RunOutput {
        taxonomy,
        products,
        results,
        summary,
    })
}

/// Classify in-memory products against in-memory taxonomy rows.
pub fn classify_products(
    entries: &[TaxonomyEntry],
    products: &[Product],
    settings: &Settings,
) -> Vec<ClassificationResult> {
    let index = TaxonomyIndex::build(entries);
    debug!(
        dept_groups = index.dept_group_count(),
        depts = index.dept_count(),
        rules = settings.rules.len(),
        "lookups built"
    );
    ClassificationEngine::new(&index, &settings.rules, &settings.vocabulary).classify_all(products)
}

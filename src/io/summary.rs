//! Machine-readable run summary (JSON).
//!
//! The summary carries everything the console report shows, plus the status
//! colours, so a dashboard or spreadsheet macro can reproduce the triage view
//! without re-running the classification.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::classify::Summary;
use crate::config::Labels;
use crate::domain::{CategoryPath, Status};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryFile {
    pub tool: String,
    pub generated: DateTime<Local>,
    pub taxonomy: PathBuf,
    pub products: PathBuf,
    pub total: usize,
    pub statuses: Vec<StatusLine>,
    pub new_categories: Vec<CategoryPath>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusLine {
    pub status: Status,
    pub label: String,
    pub color: String,
    pub count: usize,
    pub percent: f64,
}

impl SummaryFile {
    pub fn new(summary: &Summary, labels: &Labels, taxonomy: &Path, products: &Path) -> Self {
        let statuses = Status::ALL
            .iter()
            .map(|&status| StatusLine {
                status,
                label: labels.status(status).to_string(),
                color: status.color_hex().to_string(),
                count: summary.count(status),
                percent: summary.percent(status),
            })
            .collect();

        Self {
            tool: "shelf".to_string(),
            generated: Local::now(),
            taxonomy: taxonomy.to_path_buf(),
            products: products.to_path_buf(),
            total: summary.total,
            statuses,
            new_categories: summary.new_categories.clone(),
        }
    }
}

/// Write a summary JSON file.
pub fn write_summary_json(path: &Path, summary: &SummaryFile) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::input(format!("Failed to create summary JSON '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, summary)
        .map_err(|e| AppError::input(format!("Failed to write summary JSON: {e}")))?;
    Ok(())
}

//! Export classified products to CSV.
//!
//! One row per product, in input order, with the resolved tiers and a status
//! label. The export is meant to be easy to open in a spreadsheet and filter
//! by the status column.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::Labels;
use crate::domain::ClassificationResult;
use crate::error::AppError;

/// Write results to a CSV file at `path`.
pub fn write_results_csv(
    path: &Path,
    results: &[ClassificationResult],
    labels: &Labels,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::input(format!("Failed to create output CSV '{}': {e}", path.display()))
    })?;
    write_results(file, results, labels)
}

/// Write results as CSV to any writer.
pub fn write_results<W: Write>(
    out: W,
    results: &[ClassificationResult],
    labels: &Labels,
) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);

    writer
        .write_record(&labels.headers)
        .map_err(|e| AppError::input(format!("Failed to write output CSV header: {e}")))?;

    for r in results {
        let p = &r.product;
        let row: [&str; 9] = [
            p.item_id.as_deref().unwrap_or(""),
            p.item_name.as_deref().unwrap_or(""),
            r.domain.as_deref().unwrap_or(""),
            r.dept.as_deref().unwrap_or(""),
            r.group.as_deref().unwrap_or(""),
            r.subgroup.as_deref().unwrap_or(""),
            p.supplier_id.as_deref().unwrap_or(""),
            p.supplier_name.as_deref().unwrap_or(""),
            labels.status(r.status),
        ];
        writer
            .write_record(row)
            .map_err(|e| AppError::input(format!("Failed to write output CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::input(format!("Failed to flush output CSV: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, Status};

    fn result(id: &str, status: Status, subgroup: &str) -> ClassificationResult {
        ClassificationResult {
            product: Product {
                item_id: Some(id.to_string()),
                item_name: Some(format!("item \"{id}\", large")),
                supplier_name: Some("Supplier".to_string()),
                ..Product::default()
            },
            domain: Some("Food".to_string()),
            dept: None,
            group: Some("Fruit".to_string()),
            subgroup: Some(subgroup.to_string()),
            status,
        }
    }

    #[test]
    fn writes_header_and_one_row_per_result_in_order() {
        let labels = Labels::default();
        let results = vec![
            result("B", Status::Unknown, "x"),
            result("A", Status::AutoFull, "y"),
        ];
        let mut buf = Vec::new();
        write_results(&mut buf, &results, &labels).unwrap();

        let mut reader = csv::Reader::from_reader(buf.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 9);
        assert_eq!(&headers[8], labels.headers[8].as_str());

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "B");
        assert_eq!(&rows[0][1], "item \"B\", large");
        assert_eq!(&rows[0][3], "");
        assert_eq!(&rows[0][8], labels.status(Status::Unknown));
        assert_eq!(&rows[1][0], "A");
        assert_eq!(&rows[1][5], "y");
        assert_eq!(&rows[1][8], labels.status(Status::AutoFull));
    }
}

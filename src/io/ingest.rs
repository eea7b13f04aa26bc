//! CSV ingest for the taxonomy table and the product list.
//!
//! Both files are positional: the header row is skipped and columns are read
//! by index, so header wording (and language) does not matter.
//!
//! Design goals:
//! - **Row preservation** for products: every data row becomes a `Product`,
//!   even a malformed one (reported as a `RowError`, classified as blank)
//! - **Lenient taxonomy**: rows without a domain name are discarded and counted
//! - **Separation of concerns**: no classification logic here

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::warn;

use crate::domain::{Product, TaxonomyEntry};
use crate::error::AppError;

/// A row-level problem encountered during ingest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct TaxonomyLoad {
    pub entries: Vec<TaxonomyEntry>,
    pub rows_read: usize,
    /// Rows dropped because `domain_name` was blank.
    pub discarded: usize,
    pub row_errors: Vec<RowError>,
}

#[derive(Debug, Clone)]
pub struct ProductLoad {
    pub products: Vec<Product>,
    pub row_errors: Vec<RowError>,
}

pub fn load_taxonomy(path: &Path) -> Result<TaxonomyLoad, AppError> {
    let file = open(path, "taxonomy")?;
    read_taxonomy(file)
}

pub fn load_products(path: &Path) -> Result<ProductLoad, AppError> {
    let file = open(path, "product")?;
    read_products(file)
}

/// Columns: domain_id, domain_name, dept_id, dept_name, group_id, group_name,
/// subgroup_id, subgroup_name, usage_count (unused).
pub fn read_taxonomy<R: Read>(input: R) -> Result<TaxonomyLoad, AppError> {
    let mut reader = reader(input);
    let mut entries = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;
    let mut discarded = 0usize;

    for result in reader.records() {
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                let error = row_error(&e, rows_read);
                warn!(line = error.line, error = %e, "skipping unreadable taxonomy row");
                row_errors.push(error);
                continue;
            }
        };

        let Some(domain_name) = cell(&record, 1) else {
            discarded += 1;
            continue;
        };

        entries.push(TaxonomyEntry {
            domain_id: cell(&record, 0),
            domain_name,
            dept_id: cell(&record, 2),
            dept_name: cell(&record, 3),
            group_id: cell(&record, 4),
            group_name: cell(&record, 5),
            subgroup_id: cell(&record, 6),
            subgroup_name: cell(&record, 7),
        });
    }

    Ok(TaxonomyLoad {
        entries,
        rows_read,
        discarded,
        row_errors,
    })
}

/// Columns: item_id, item_name, domain, dept, group, subgroup, supplier_id, supplier_name.
pub fn read_products<R: Read>(input: R) -> Result<ProductLoad, AppError> {
    let mut reader = reader(input);
    let mut products = Vec::new();
    let mut row_errors = Vec::new();

    for result in reader.records() {
        match result {
            Ok(record) => products.push(product_from_record(&record)),
            Err(e) => {
                let error = row_error(&e, products.len() + 1);
                warn!(line = error.line, error = %e, "unreadable product row, classifying it as blank");
                row_errors.push(error);
                products.push(Product::default());
            }
        }
    }

    Ok(ProductLoad {
        products,
        row_errors,
    })
}

fn product_from_record(record: &StringRecord) -> Product {
    Product {
        item_id: cell(record, 0),
        item_name: cell(record, 1),
        domain: cell(record, 2),
        dept: cell(record, 3),
        group: cell(record, 4),
        subgroup: cell(record, 5),
        supplier_id: cell(record, 6),
        supplier_name: cell(record, 7),
    }
}

/// Uses the reader's own position so quoted multi-line fields are counted.
/// Falls back to one line per record when the error carries no position.
fn row_error(e: &csv::Error, record_no: usize) -> RowError {
    let line = e
        .position()
        .map(|pos| pos.line() as usize)
        .unwrap_or(record_no + 1);
    RowError {
        line,
        message: e.to_string(),
    }
}

fn open(path: &Path, what: &str) -> Result<File, AppError> {
    File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open {what} CSV '{}': {e}", path.display())))
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Trimmed cell at `idx`; blank or missing cells are `None`.
fn cell(record: &StringRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_rows_without_domain_are_discarded() {
        let csv = "\
domain_id,domain_name,dept_id,dept_name,group_id,group_name,subgroup_id,subgroup_name,usage_count
1,Food,10,Produce,100,Fruit,1000,Apples,12
2,,20,Ghost,200,Nothing,2000,Here,0
,,,,,,,,
1,Food,10,Produce,101,Vegetables,,,3
";
        let load = read_taxonomy(csv.as_bytes()).unwrap();
        assert_eq!(load.rows_read, 4);
        assert_eq!(load.discarded, 2);
        assert_eq!(load.entries.len(), 2);
        assert_eq!(load.entries[0].subgroup_name.as_deref(), Some("Apples"));
        assert_eq!(load.entries[1].subgroup_name, None);
    }

    #[test]
    fn short_taxonomy_rows_are_tolerated() {
        let csv = "header\n1,Food,10,Produce\n";
        let load = read_taxonomy(csv.as_bytes()).unwrap();
        assert_eq!(load.entries.len(), 1);
        assert_eq!(load.entries[0].dept_name.as_deref(), Some("Produce"));
        assert_eq!(load.entries[0].group_name, None);
    }

    #[test]
    fn every_product_row_is_kept_in_order() {
        let csv = "\
item_id,item_name,domain,dept,group,subgroup,supplier_id,supplier_name
A1, Red Apple ,Food,Produce,Fruit,,S1,Orchard Ltd
,,,,,,,
A3,\"Nuts, mixed\",,,,,S2,Nutty
";
        let load = read_products(csv.as_bytes()).unwrap();
        assert_eq!(load.products.len(), 3);
        assert!(load.row_errors.is_empty());

        let first = &load.products[0];
        assert_eq!(first.item_name.as_deref(), Some("Red Apple"));
        assert_eq!(first.group.as_deref(), Some("Fruit"));
        assert_eq!(first.subgroup, None);

        assert_eq!(load.products[1], Product::default());
        assert_eq!(load.products[2].item_name.as_deref(), Some("Nuts, mixed"));
    }

    #[test]
    fn invalid_utf8_product_row_still_yields_a_product() {
        let mut bytes = b"h1,h2\nA1,Apple\n".to_vec();
        bytes.extend_from_slice(b"A2,\xff\xfe\n");
        bytes.extend_from_slice(b"A3,Pear\n");

        let load = read_products(bytes.as_slice()).unwrap();
        assert_eq!(load.products.len(), 3);
        assert_eq!(load.row_errors.len(), 1);
        assert_eq!(load.row_errors[0].line, 3);
        assert_eq!(load.products[1], Product::default());
        assert_eq!(load.products[2].item_name.as_deref(), Some("Pear"));
    }

    #[test]
    fn row_error_line_counts_quoted_newlines() {
        let mut bytes = b"h1,h2\nA1,\"Apple\nPie\"\n".to_vec();
        bytes.extend_from_slice(b"A2,\xff\xfe\n");

        let load = read_products(bytes.as_slice()).unwrap();
        assert_eq!(load.products.len(), 2);
        assert_eq!(load.products[0].item_name.as_deref(), Some("Apple\nPie"));
        assert_eq!(load.row_errors.len(), 1);
        assert_eq!(load.row_errors[0].line, 4);
        assert_eq!(load.row_errors[0].message.matches("CSV parse error").count(), 1);
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = load_products(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
    }
}

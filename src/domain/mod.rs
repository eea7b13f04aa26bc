//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input records (`TaxonomyEntry`, `Product`)
//! - the four-level category tuple (`CategoryPath`)
//! - classification outputs (`Status`, `ClassificationResult`)

pub mod types;

pub use types::*;

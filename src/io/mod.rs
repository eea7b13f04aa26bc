//! Input/output helpers.
//!
//! - CSV ingest for taxonomy and products (`ingest`)
//! - classified product export (CSV) (`export`)
//! - run summary (JSON) (`summary`)

pub mod export;
pub mod ingest;
pub mod summary;

pub use export::*;
pub use ingest::*;
pub use summary::*;

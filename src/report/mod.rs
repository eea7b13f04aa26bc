//! Reporting: console text built from a finished run.

pub mod format;

pub use format::*;

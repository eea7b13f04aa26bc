//! `shelf-classifier` library crate.
//!
//! The binary (`shelf`) is a thin wrapper around this library so that:
//!
//! - the classification cascade is testable without spawning processes
//! - rule sets and taxonomies can be swapped in tests
//! - file formats and printing stay out of the decision logic

pub mod app;
pub mod classify;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod rules;
pub mod taxonomy;

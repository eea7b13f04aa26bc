//! Classification: the per-item cascade and the run-level aggregation.

pub mod aggregate;
pub mod engine;

pub use aggregate::{ResultAggregator, Summary, summarize};
pub use engine::{ClassificationEngine, Step, Trace};

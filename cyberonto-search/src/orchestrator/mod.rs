//! Search orchestration: scoring, deduplication and the aggregator.
//!
//! The [`search::Aggregator`] runs the local lexical search, launches the
//! time-bounded remote query, supplements it from the fallback table,
//! merges both sets under one ranking and paginates the result.

pub mod dedup;
pub mod scoring;
pub mod search;

pub use search::{paginate, Aggregator};

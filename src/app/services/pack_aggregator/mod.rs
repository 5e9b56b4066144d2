//! Pack aggregation
//!
//! Collects parsed songs into packs and assigns each chart its batch-global
//! `idNum`. Grouping preserves first-occurrence pack order and within-pack
//! song order.

pub mod aggregator;
pub mod collection;
pub mod stats;

pub use aggregator::PackAggregator;
pub use collection::PackedCollection;
pub use stats::AggregationStats;

#[cfg(test)]
pub mod tests;

//! Stats module - top emitters aggregation

mod aggregator;

pub use aggregator::{AggregatedRecord, EmissionsAggregator};

// Domain layer - Datasets, snapshots and their bundled sample data
pub mod cache_policy;
pub mod dataset;
pub mod samples;
pub mod snapshot;

pub mod classification;
pub mod consolidation_cluster;
pub mod data_quality;

pub use classification::Classification;
pub use consolidation_cluster::ConsolidationCluster;
pub use data_quality::DataQualityWarning;

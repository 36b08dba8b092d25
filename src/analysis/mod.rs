pub mod pipeline;
pub mod aggregator;
pub mod comparator;

pub use pipeline::AnalysisPipeline;
pub use aggregator::aggregate;
pub use comparator::compare;

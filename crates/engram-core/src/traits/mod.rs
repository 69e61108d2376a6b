mod classifier;
mod scorer;
mod similarity;

pub use classifier::IClassifier;
pub use scorer::IScorer;
pub use similarity::ISimilarity;

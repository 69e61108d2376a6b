//! # engram-consolidation
//!
//! Groups near-duplicate memories and picks one survivor per group.
//!
//! Pipeline:
//! 1. Selection: active memories of the planning layer.
//! 2. Linking: every pair at or above the similarity threshold.
//! 3. Components: transitive closure of links; small groups dropped.
//! 4. Survivor: highest effective score, then oldest, then smallest id.
//!
//! Planning never mutates memories. [`apply_plan`] is the separate step that
//! writes `consolidated_into` onto the duplicates.

pub mod algorithms;
pub mod engine;
pub mod pipeline;

pub use algorithms::similarity::{cosine_similarity, EmbeddingSimilarity};
pub use engine::{ConsolidationPlanner, PlanOptions};
pub use pipeline::apply::apply_plan;
pub use pipeline::selection::select_candidates;

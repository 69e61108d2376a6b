//! Phase 2: Linking. Every candidate pair at or above the threshold.
//!
//! A pair whose similarity cannot be obtained (error or NaN) is treated as
//! below threshold. One bad comparison never aborts the pass.

use engram_core::memory::Memory;
use engram_core::traits::ISimilarity;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Outcome of comparing every candidate pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkResult {
    /// Index pairs `(i, j)`, `i < j`, into the candidate slice.
    pub links: Vec<(usize, usize)>,
    /// Pairs skipped because the similarity was an error or not finite.
    pub failed_pairs: usize,
}

enum PairOutcome {
    Linked,
    Unlinked,
    Failed,
}

fn compare(
    a: &Memory,
    b: &Memory,
    similarity: &dyn ISimilarity,
    threshold: f64,
) -> PairOutcome {
    match similarity.similarity(&a.id, &b.id) {
        Ok(s) if s.is_nan() => {
            debug!(a = %a.id, b = %b.id, "similarity is NaN; treating pair as dissimilar");
            PairOutcome::Failed
        }
        Ok(s) if s >= threshold => PairOutcome::Linked,
        Ok(_) => PairOutcome::Unlinked,
        Err(e) => {
            warn!(a = %a.id, b = %b.id, error = %e, "similarity failed; treating pair as dissimilar");
            PairOutcome::Failed
        }
    }
}

/// Compare all `n·(n-1)/2` pairs in parallel.
pub fn link_candidates(
    candidates: &[&Memory],
    similarity: &dyn ISimilarity,
    threshold: f64,
) -> LinkResult {
    let n = candidates.len();
    let outcomes: Vec<(usize, usize, PairOutcome)> = (0..n)
        .into_par_iter()
        .flat_map_iter(move |i| {
            (i + 1..n).map(move |j| {
                (i, j, compare(candidates[i], candidates[j], similarity, threshold))
            })
        })
        .collect();

    let mut result = LinkResult::default();
    for (i, j, outcome) in outcomes {
        match outcome {
            PairOutcome::Linked => result.links.push((i, j)),
            PairOutcome::Unlinked => {}
            PairOutcome::Failed => result.failed_pairs += 1,
        }
    }
    result
}

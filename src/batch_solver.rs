/*!
# Batch Solver
Scores a collection of signature pairs in parallel with a shared `DistanceEngine`.
Each pair gets its own DP context, so the only shared state is the read-only engine configuration.
Pairs that fail (e.g., cost overflow) are logged and reported, they do not stop the rest of the batch.

## Example usage
```rust
use sigdist::batch_solver::solve_pairs;
use sigdist::data_types::signature_pair::SignaturePair;
use sigdist::distance::engine::DistanceEngine;

let pairs = vec![
    SignaturePair::new(0, "same".to_string(), Some(b"abc".to_vec()), Some(b"abc".to_vec())),
    SignaturePair::new(1, "insert".to_string(), None, Some(b"abc".to_vec())),
];
let results = solve_pairs(&pairs, &DistanceEngine::default(), false);
assert_eq!(results[0].report().unwrap().distance, 0);
assert_eq!(results[1].report().unwrap().distance, 3);
```
*/
use indicatif::ParallelProgressIterator;
use log::{debug, error, trace};
use rayon::prelude::*;

use crate::data_types::pair_result::PairResult;
use crate::data_types::signature_pair::SignaturePair;
use crate::distance::engine::DistanceEngine;
use crate::util::progress_bar::get_progress_style;

/// Scores a single pair.
/// # Arguments
/// * `pair` - the two signatures to compare
/// * `engine` - shared engine configuration
pub fn solve_pair(pair: &SignaturePair, engine: &DistanceEngine) -> PairResult {
    let pair_id = pair.pair_id();
    trace!("P#{pair_id} {:?}: from_len={} to_len={}", pair.label(), pair.from_len(), pair.to_len());
    match engine.compute_report(pair.from(), pair.to()) {
        Ok(report) => {
            debug!("P#{pair_id} {:?}: {report:?}", pair.label());
            PairResult::solved(pair_id, pair.label().to_string(), report)
        },
        Err(e) => {
            error!("Error while solving pair #{pair_id} ({}): {e}", pair.label());
            PairResult::failed(pair_id, pair.label().to_string(), e.to_string())
        }
    }
}

/// Scores every pair on the rayon thread pool, returning results sorted by pair ID.
/// # Arguments
/// * `pairs` - all pairs to score
/// * `engine` - shared engine configuration
/// * `show_progress` - if true, renders a progress bar while solving
pub fn solve_pairs(pairs: &[SignaturePair], engine: &DistanceEngine, show_progress: bool) -> Vec<PairResult> {
    let mut results: Vec<PairResult> = if show_progress {
        pairs.par_iter()
            .map(|pair| solve_pair(pair, engine))
            .progress_with_style(get_progress_style())
            .collect()
    } else {
        pairs.par_iter()
            .map(|pair| solve_pair(pair, engine))
            .collect()
    };

    results.sort_by_key(|r| r.pair_id());
    results
}

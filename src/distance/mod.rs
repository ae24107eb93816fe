/*!
# Distance module
Contains the weighted edit distance engine used to score how far apart two fuzzy-hash signatures are.
The recurrence is the classic insert/delete/substitute one plus a single special case for swapping two adjacent bytes.
Only a small circular window of the DP grid is kept, so memory is bounded by the shorter input.
Once every cell in a row is above the ceiling (`MIN_DIST` by default), the engine stops and reports a value that is at least the ceiling.

## Example usage
```rust
use sigdist::distance::costs::{CostModel, CostModelBuilder};
use sigdist::distance::engine::{compute_distance, DistanceEngine, DistanceEngineBuilder};

// identical signatures are always 0 apart
let costs = CostModel::default();
assert_eq!(compute_distance(Some(b"3:AXGBicFlgVNhBGcL6wCrFQEv:AXGHsNhxLsr2C"), Some(b"3:AXGBicFlgVNhBGcL6wCrFQEv:AXGHsNhxLsr2C"), costs).unwrap(), 0);

// an absent side costs one insertion (or deletion) per byte
assert_eq!(compute_distance(None, Some(b"abc"), costs).unwrap(), 3);

// with expensive indels, a transposition beats two substitutions
let costs = CostModelBuilder::default()
    .insert_cost(10)
    .delete_cost(10)
    .build().unwrap();
assert_eq!(compute_distance(Some(b"ab"), Some(b"ba"), costs).unwrap(), 5);

// a tiny ceiling stops the sweep early for very different inputs
let engine = DistanceEngineBuilder::default()
    .ceiling(Some(5))
    .build().unwrap();
let report = engine.compute_report(Some(b"aaaaaaaaaaaa"), Some(b"bbbbbbbbbbbb")).unwrap();
assert!(report.terminated_early);
assert!(report.distance >= 5);

// no ceiling means the exact answer
let exact = DistanceEngine::exact(CostModel::default());
assert_eq!(exact.compute(Some(b"aaaaaaaaaaaa"), Some(b"bbbbbbbbbbbb")).unwrap(), 24);
```
*/
/// Per-operation cost configuration
pub mod costs;
/// The per-call DP state and circular row buffer
pub mod dp_context;
/// Entry points for computing a distance
pub mod engine;
/// The result of a computation, with instrumentation
pub mod report;

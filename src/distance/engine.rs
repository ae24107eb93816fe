use derive_builder::Builder;
use log::debug;

use crate::distance::costs::CostModel;
use crate::distance::dp_context::{radix_for, DpContext, SCRATCH_CELLS, SHORT_LEN_THRESHOLD};
use crate::distance::report::DistanceReport;

/// Default early termination ceiling; once every cell in a row is above this, the pair is "far apart"
pub const MIN_DIST: u64 = 100;

#[derive(thiserror::Error, Debug, Eq, PartialEq)]
pub enum DistanceError {
    #[error("distance for lengths {from_len} and {to_len} with maximum cost {max_cost} does not fit in 64 bits")]
    CostOverflow {
        from_len: usize,
        to_len: usize,
        max_cost: u64
    },
}

/// Weighted edit distance with adjacent transpositions, using a bounded circular row buffer.
/// Memory is proportional to the shorter input (once it is longer than the scratch threshold).
/// The engine itself is immutable; all sweep state lives in a per-call `DpContext`, so one engine can be shared across threads.
#[derive(Builder, Clone, Copy, Debug, Eq, PartialEq)]
#[builder(default)]
pub struct DistanceEngine {
    /// Costs for each edit operation
    costs: CostModel,
    /// If Some, the sweep stops once a whole row is above this value; None always computes the exact distance
    ceiling: Option<u64>,
}

impl Default for DistanceEngine {
    fn default() -> Self {
        Self {
            costs: CostModel::default(),
            ceiling: Some(MIN_DIST),
        }
    }
}

impl DistanceEngine {
    /// Engine with the given costs and the default ceiling
    pub fn new(costs: CostModel) -> Self {
        Self {
            costs,
            ..Default::default()
        }
    }

    /// Engine with the given costs and no early termination
    pub fn exact(costs: CostModel) -> Self {
        Self {
            costs,
            ceiling: None,
        }
    }

    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    pub fn ceiling(&self) -> Option<u64> {
        self.ceiling
    }

    /// Returns the weighted edit distance from `from` to `to`.
    /// Absent and empty inputs are equivalent.
    /// # Arguments
    /// * `from` - the source sequence
    /// * `to` - the target sequence
    /// # Errors
    /// * if the largest possible distance for these lengths and costs cannot be represented
    pub fn compute(&self, from: Option<&[u8]>, to: Option<&[u8]>) -> Result<u64, DistanceError> {
        Ok(self.compute_report(from, to)?.distance)
    }

    /// Same as `compute(...)`, but also reports how much of the grid was computed.
    /// # Arguments
    /// * `from` - the source sequence
    /// * `to` - the target sequence
    /// # Errors
    /// * if the largest possible distance for these lengths and costs cannot be represented
    pub fn compute_report(&self, from: Option<&[u8]>, to: Option<&[u8]>) -> Result<DistanceReport, DistanceError> {
        let from = from.filter(|s| !s.is_empty());
        let to = to.filter(|s| !s.is_empty());

        let (from, to) = match (from, to) {
            (None, None) => return Ok(DistanceReport::trivial(0, 0, 0)),
            (None, Some(to)) => {
                let distance = scaled_cost(to.len(), self.costs.insert_cost(), 0, to.len())?;
                return Ok(DistanceReport::trivial(distance, 0, to.len()));
            },
            (Some(from), None) => {
                let distance = scaled_cost(from.len(), self.costs.delete_cost(), from.len(), 0)?;
                return Ok(DistanceReport::trivial(distance, from.len(), 0));
            },
            (Some(from), Some(to)) => (from, to)
        };
        check_overflow(from.len(), to.len(), &self.costs)?;

        // make `from` short enough to fit in the scratch storage, if it's at all possible
        if from.len() > to.len() && from.len() > SHORT_LEN_THRESHOLD {
            debug!("Swapping dimensions: from_len={} to_len={}", from.len(), to.len());
            let mut report = self.sweep(to, from, self.costs.transposed());
            std::mem::swap(&mut report.from_len, &mut report.to_len);
            report.swapped = true;
            return Ok(report);
        }

        Ok(self.sweep(from, to, self.costs))
    }

    /// Picks the storage for the row buffer and runs the DP sweep.
    /// Both inputs must be non-empty.
    fn sweep(&self, from: &[u8], to: &[u8], costs: CostModel) -> DistanceReport {
        if from.len() <= SHORT_LEN_THRESHOLD {
            let mut scratch = [0u64; SCRATCH_CELLS];
            self.sweep_with(from, to, costs, &mut scratch)
        } else {
            let mut storage: Vec<u64> = vec![0; radix_for(from.len())];
            self.sweep_with(from, to, costs, &mut storage)
        }
    }

    fn sweep_with(&self, from: &[u8], to: &[u8], costs: CostModel, storage: &mut [u64]) -> DistanceReport {
        let mut context = DpContext::new(from, to, costs, storage);
        let terminated_early = context.sweep(self.ceiling);
        let distance = context.result();
        if terminated_early {
            debug!(
                "Early exit after {} of {} rows, distance >= {distance}",
                context.rows_computed(), to.len()
            );
        }

        DistanceReport {
            distance,
            from_len: from.len(),
            to_len: to.len(),
            cells_computed: context.cells_computed(),
            rows_computed: context.rows_computed(),
            terminated_early,
            swapped: false,
        }
    }
}

/// Computes the edit distance with the given costs and the default early termination ceiling.
/// # Arguments
/// * `from` - the source sequence, None is the same as empty
/// * `to` - the target sequence, None is the same as empty
/// * `costs` - per-operation costs
/// # Errors
/// * if the largest possible distance for these lengths and costs cannot be represented
pub fn compute_distance(from: Option<&[u8]>, to: Option<&[u8]>, costs: CostModel) -> Result<u64, DistanceError> {
    DistanceEngine::new(costs).compute(from, to)
}

/// `len * cost` for the trivial cases, or an overflow error
fn scaled_cost(len: usize, cost: u64, from_len: usize, to_len: usize) -> Result<u64, DistanceError> {
    (len as u64).checked_mul(cost)
        .ok_or(DistanceError::CostOverflow { from_len, to_len, max_cost: cost })
}

/// Every cell (and every candidate sum) is at most `(from_len + to_len + 1) * max_cost`, so check that bound once up front.
fn check_overflow(from_len: usize, to_len: usize, costs: &CostModel) -> Result<(), DistanceError> {
    let max_cost = costs.max_cost();
    (from_len as u64).checked_add(to_len as u64)
        .and_then(|steps| steps.checked_add(1))
        .and_then(|steps| steps.checked_mul(max_cost))
        .map(|_| ())
        .ok_or(DistanceError::CostOverflow { from_len, to_len, max_cost })
}

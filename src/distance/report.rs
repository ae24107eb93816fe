
use serde::Serialize;

/// Outcome of one distance computation, along with how much work it took.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DistanceReport {
    /// The weighted edit distance; if `terminated_early` is set, this is only a lower-bounded estimate above the ceiling
    pub distance: u64,
    /// Length of the `from` input, 0 if absent
    pub from_len: usize,
    /// Length of the `to` input, 0 if absent
    pub to_len: usize,
    /// Number of interior DP cells that were written
    pub cells_computed: u64,
    /// Number of DP rows that were written
    pub rows_computed: usize,
    /// True if the sweep stopped before the final row because every cell in a row exceeded the ceiling
    pub terminated_early: bool,
    /// True if `from` and `to` traded roles to keep the row buffer small
    pub swapped: bool,
}

impl DistanceReport {
    /// Report for an input where one or both sides are empty, so no DP work happens
    pub fn trivial(distance: u64, from_len: usize, to_len: usize) -> Self {
        Self {
            distance, from_len, to_len,
            ..Default::default()
        }
    }

    /// True if the distance is exact, i.e. the sweep ran to completion
    pub fn is_exact(&self) -> bool {
        !self.terminated_early
    }
}

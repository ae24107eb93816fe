
use serde::Serialize;
use std::ops::AddAssign;

use crate::data_types::pair_result::PairResult;

/// Aggregate statistics over a batch of pair comparisons
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BatchSummary {
    /// Every pair seen, solved or not
    pub total_pairs: u64,
    /// Pairs that produced a distance
    pub solved_pairs: u64,
    /// Pairs that failed to produce a distance
    pub error_pairs: u64,
    /// Solved pairs where the sweep stopped at the ceiling
    pub early_exit_pairs: u64,
    /// Solved pairs with distance 0
    pub exact_matches: u64,
    /// Sum of all solved distances
    pub total_distance: u64,
    /// Sum of all DP cells computed
    pub total_cells: u64,
}

impl AddAssign for BatchSummary {
    // Enables += with stats
    fn add_assign(&mut self, rhs: Self) {
        self.total_pairs += rhs.total_pairs;
        self.solved_pairs += rhs.solved_pairs;
        self.error_pairs += rhs.error_pairs;
        self.early_exit_pairs += rhs.early_exit_pairs;
        self.exact_matches += rhs.exact_matches;
        self.total_distance = self.total_distance.saturating_add(rhs.total_distance);
        self.total_cells = self.total_cells.saturating_add(rhs.total_cells);
    }
}

impl BatchSummary {
    /// Builds a summary from a collection of results
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a PairResult>) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.add_result(result);
        }
        summary
    }

    /// Summary of exactly one pair result
    pub fn from_result(result: &PairResult) -> Self {
        match result.report() {
            Some(report) => Self {
                total_pairs: 1,
                solved_pairs: 1,
                early_exit_pairs: report.terminated_early as u64,
                exact_matches: (report.distance == 0) as u64,
                total_distance: report.distance,
                total_cells: report.cells_computed,
                ..Default::default()
            },
            None => Self {
                total_pairs: 1,
                error_pairs: 1,
                ..Default::default()
            }
        }
    }

    /// Adds a single pair result into the stats
    pub fn add_result(&mut self, result: &PairResult) {
        *self += Self::from_result(result);
    }

    /// Mean distance over solved pairs, if any.
    /// Early exit distances are included as reported, so this is a lower bound when `early_exit_pairs > 0`.
    pub fn mean_distance(&self) -> Option<f64> {
        if self.solved_pairs > 0 {
            Some(self.total_distance as f64 / self.solved_pairs as f64)
        } else {
            None
        }
    }

    /// Fraction of solved pairs that stopped at the ceiling
    pub fn early_exit_fraction(&self) -> Option<f64> {
        if self.solved_pairs > 0 {
            Some(self.early_exit_pairs as f64 / self.solved_pairs as f64)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    use crate::distance::report::DistanceReport;

    fn report(distance: u64, terminated_early: bool) -> DistanceReport {
        DistanceReport {
            distance,
            from_len: 4,
            to_len: 4,
            cells_computed: 16,
            rows_computed: 4,
            terminated_early,
            swapped: false
        }
    }

    #[test]
    fn test_from_results() {
        let results = vec![
            PairResult::solved(0, "a".to_string(), report(0, false)),
            PairResult::solved(1, "b".to_string(), report(6, false)),
            PairResult::solved(2, "c".to_string(), report(120, true)),
            PairResult::failed(3, "d".to_string(), "overflow".to_string()),
        ];
        let summary = BatchSummary::from_results(results.iter());
        assert_eq!(summary, BatchSummary {
            total_pairs: 4,
            solved_pairs: 3,
            error_pairs: 1,
            early_exit_pairs: 1,
            exact_matches: 1,
            total_distance: 126,
            total_cells: 48
        });
        assert_approx_eq!(summary.mean_distance().unwrap(), 42.0);
        assert_approx_eq!(summary.early_exit_fraction().unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn test_from_result() {
        let solved = BatchSummary::from_result(&PairResult::solved(0, "a".to_string(), report(150, true)));
        assert_eq!(solved, BatchSummary {
            total_pairs: 1,
            solved_pairs: 1,
            early_exit_pairs: 1,
            total_distance: 150,
            total_cells: 16,
            ..Default::default()
        });

        let failed = BatchSummary::from_result(&PairResult::failed(1, "b".to_string(), "overflow".to_string()));
        assert_eq!(failed, BatchSummary { total_pairs: 1, error_pairs: 1, ..Default::default() });
    }

    #[test]
    fn test_empty() {
        let summary = BatchSummary::default();
        assert_eq!(summary.mean_distance(), None);
        assert_eq!(summary.early_exit_fraction(), None);
    }

    #[test]
    fn test_add_assign() {
        let mut summary = BatchSummary { total_pairs: 2, solved_pairs: 2, total_distance: 10, ..Default::default() };
        let summary2 = BatchSummary { total_pairs: 1, error_pairs: 1, ..Default::default() };
        summary += summary2;
        assert_eq!(summary.total_pairs, 3);
        assert_eq!(summary.error_pairs, 1);
        assert_approx_eq!(summary.mean_distance().unwrap(), 5.0);
    }
}


use crate::distance::report::DistanceReport;

/// Result of scoring a single `SignaturePair`
#[derive(Clone, Debug, PartialEq)]
pub struct PairResult {
    /// Matches the source pair
    pair_id: u64,
    /// Copied from the source pair for output
    label: String,
    /// The distance report, or the error message if the computation failed
    outcome: Result<DistanceReport, String>
}

impl PairResult {
    /// Constructor for a successfully scored pair
    pub fn solved(pair_id: u64, label: String, report: DistanceReport) -> Self {
        Self {
            pair_id, label,
            outcome: Ok(report)
        }
    }

    /// Constructor for a pair that could not be scored
    pub fn failed(pair_id: u64, label: String, error: String) -> Self {
        Self {
            pair_id, label,
            outcome: Err(error)
        }
    }

    pub fn pair_id(&self) -> u64 {
        self.pair_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn report(&self) -> Option<&DistanceReport> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&str> {
        self.outcome.as_ref().err().map(|e| e.as_str())
    }
}

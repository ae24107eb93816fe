
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Default cost to insert a byte of `to`
pub const DEFAULT_INSERT_COST: u64 = 1;
/// Default cost to delete a byte of `from`
pub const DEFAULT_DELETE_COST: u64 = 1;
/// Default cost to change one byte into another
pub const DEFAULT_SUBSTITUTE_COST: u64 = 3;
/// Default cost to transpose two adjacent bytes
pub const DEFAULT_SWAP_COST: u64 = 5;

/// Per-operation costs for a single distance computation.
/// Any field left unset in the builder (or missing from a JSON file) falls back to the defaults above.
#[derive(Builder, Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(default)]
#[serde(default)]
pub struct CostModel {
    /// Cost of consuming one byte of `to` without consuming `from`
    insert_cost: u64,
    /// Cost of consuming one byte of `from` without consuming `to`
    delete_cost: u64,
    /// Cost of replacing one byte of `from` with a different byte of `to`
    substitute_cost: u64,
    /// Cost of an adjacent transposition, e.g. "ab" -> "ba"
    swap_cost: u64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            insert_cost: DEFAULT_INSERT_COST,
            delete_cost: DEFAULT_DELETE_COST,
            substitute_cost: DEFAULT_SUBSTITUTE_COST,
            swap_cost: DEFAULT_SWAP_COST,
        }
    }
}

impl CostModel {
    /// Constructor
    pub fn new(insert_cost: u64, delete_cost: u64, substitute_cost: u64, swap_cost: u64) -> Self {
        Self {
            insert_cost, delete_cost, substitute_cost, swap_cost
        }
    }

    /// Every operation costs 1, which makes the engine a plain optimal-string-alignment distance
    pub fn unit() -> Self {
        Self::new(1, 1, 1, 1)
    }

    // getters
    pub fn insert_cost(&self) -> u64 {
        self.insert_cost
    }

    pub fn delete_cost(&self) -> u64 {
        self.delete_cost
    }

    pub fn substitute_cost(&self) -> u64 {
        self.substitute_cost
    }

    pub fn swap_cost(&self) -> u64 {
        self.swap_cost
    }

    /// The most expensive single operation in this model
    pub fn max_cost(&self) -> u64 {
        self.insert_cost
            .max(self.delete_cost)
            .max(self.substitute_cost)
            .max(self.swap_cost)
    }

    /// True if inserting and deleting cost the same, which makes the distance symmetric
    pub fn is_symmetric(&self) -> bool {
        self.insert_cost == self.delete_cost
    }

    /// Returns the model seen from the other side of the comparison.
    /// If `from` and `to` trade places, then every insertion becomes a deletion and vice versa.
    pub fn transposed(&self) -> Self {
        Self {
            insert_cost: self.delete_cost,
            delete_cost: self.insert_cost,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let costs = CostModel::default();
        assert_eq!(costs.insert_cost(), 1);
        assert_eq!(costs.delete_cost(), 1);
        assert_eq!(costs.substitute_cost(), 3);
        assert_eq!(costs.swap_cost(), 5);
        assert_eq!(costs.max_cost(), 5);
        assert!(costs.is_symmetric());
    }

    #[test]
    fn test_builder_partial() {
        let costs = CostModelBuilder::default()
            .delete_cost(4)
            .build().unwrap();
        assert_eq!(costs, CostModel::new(1, 4, 3, 5));
        assert!(!costs.is_symmetric());
    }

    #[test]
    fn test_transposed() {
        let costs = CostModel::new(2, 7, 3, 5);
        let flipped = costs.transposed();
        assert_eq!(flipped, CostModel::new(7, 2, 3, 5));
        assert_eq!(flipped.transposed(), costs);
    }

    #[test]
    fn test_json_missing_fields() {
        let costs: CostModel = serde_json::from_str(r#"{"substitute_cost": 2}"#).unwrap();
        assert_eq!(costs, CostModel::new(1, 1, 2, 5));

        let costs: CostModel = serde_json::from_str("{}").unwrap();
        assert_eq!(costs, CostModel::default());
    }
}

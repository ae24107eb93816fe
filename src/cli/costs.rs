
use clap::Args;
use log::{info, warn};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::core::check_optional_filename;
use crate::distance::costs::{CostModel, CostModelBuilder};
use crate::distance::engine::{DistanceEngine, DistanceEngineBuilder, MIN_DIST};
use crate::util::json_io::load_json;

/// Cost model and ceiling options shared by every subcommand.
/// Values are layered: built-in defaults, then the optional JSON file, then the individual flags.
#[derive(Args, Clone, Debug, Default, Serialize)]
pub struct CostSettings {
    /// JSON file with any of: insert_cost, delete_cost, substitute_cost, swap_cost
    #[clap(long = "cost-model")]
    #[clap(value_name = "JSON")]
    #[clap(help_heading = Some("Cost model"))]
    pub cost_model_fn: Option<PathBuf>,

    /// Cost to insert a byte of the target [default: 1]
    #[clap(long = "insert-cost")]
    #[clap(value_name = "INT")]
    #[clap(help_heading = Some("Cost model"))]
    pub insert_cost: Option<u64>,

    /// Cost to delete a byte of the source [default: 1]
    #[clap(long = "delete-cost")]
    #[clap(value_name = "INT")]
    #[clap(help_heading = Some("Cost model"))]
    pub delete_cost: Option<u64>,

    /// Cost to change one byte into another [default: 3]
    #[clap(long = "substitute-cost")]
    #[clap(value_name = "INT")]
    #[clap(help_heading = Some("Cost model"))]
    pub substitute_cost: Option<u64>,

    /// Cost to swap two adjacent bytes [default: 5]
    #[clap(long = "swap-cost")]
    #[clap(value_name = "INT")]
    #[clap(help_heading = Some("Cost model"))]
    pub swap_cost: Option<u64>,

    /// Stop computing once every cell in a DP row exceeds this distance
    #[clap(long = "ceiling")]
    #[clap(value_name = "INT")]
    #[clap(help_heading = Some("Cost model"))]
    #[clap(default_value_t = MIN_DIST)]
    pub ceiling: u64,

    /// Disables the ceiling and always computes the exact distance
    #[clap(long = "exact")]
    #[clap(conflicts_with = "ceiling")]
    #[clap(help_heading = Some("Cost model"))]
    pub exact: bool,
}

impl CostSettings {
    /// Resolves the layered cost model
    /// # Errors
    /// * if the cost file cannot be loaded
    pub fn cost_model(&self) -> anyhow::Result<CostModel> {
        let base: CostModel = match self.cost_model_fn.as_deref() {
            Some(filename) => load_json(filename)?,
            None => CostModel::default()
        };

        let costs = CostModelBuilder::default()
            .insert_cost(self.insert_cost.unwrap_or(base.insert_cost()))
            .delete_cost(self.delete_cost.unwrap_or(base.delete_cost()))
            .substitute_cost(self.substitute_cost.unwrap_or(base.substitute_cost()))
            .swap_cost(self.swap_cost.unwrap_or(base.swap_cost()))
            .build()?;
        Ok(costs)
    }

    /// The effective ceiling, None in exact mode
    pub fn effective_ceiling(&self) -> Option<u64> {
        if self.exact {
            None
        } else {
            Some(self.ceiling)
        }
    }

    /// Builds the engine described by these settings
    /// # Errors
    /// * if the cost file cannot be loaded
    pub fn build_engine(&self) -> anyhow::Result<DistanceEngine> {
        let engine = DistanceEngineBuilder::default()
            .costs(self.cost_model()?)
            .ceiling(self.effective_ceiling())
            .build()?;
        Ok(engine)
    }
}

/// Verifies the cost options and logs the resolved values
/// # Arguments
/// * `settings` - the raw cost settings from the CLI
/// # Errors
/// * if a provided cost file does not exist or fails to parse
pub fn check_cost_settings(settings: &CostSettings) -> anyhow::Result<()> {
    check_optional_filename(settings.cost_model_fn.as_deref(), "Cost model")?;
    let costs = settings.cost_model()?;

    info!("Cost model:");
    if let Some(filename) = settings.cost_model_fn.as_deref() {
        info!("\tCost file: {filename:?}");
    }
    info!("\tInsert: {}", costs.insert_cost());
    info!("\tDelete: {}", costs.delete_cost());
    info!("\tSubstitute: {}", costs.substitute_cost());
    info!("\tSwap: {}", costs.swap_cost());
    if !costs.is_symmetric() {
        warn!("Insert and delete costs differ, distance(from, to) may not equal distance(to, from)");
    }
    match settings.effective_ceiling() {
        Some(ceiling) => info!("\tCeiling: {ceiling}"),
        None => info!("\tCeiling: DISABLED (exact)")
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CostSettings {
            ceiling: MIN_DIST,
            ..Default::default()
        };
        assert_eq!(settings.cost_model().unwrap(), CostModel::default());
        assert_eq!(settings.build_engine().unwrap(), DistanceEngine::default());
    }

    #[test]
    fn test_layering() {
        // the file sets insert/delete to 10, then the flag overrides delete
        let settings = CostSettings {
            cost_model_fn: Some(PathBuf::from("test_data/costs/indel_heavy.json")),
            delete_cost: Some(4),
            swap_cost: Some(6),
            ceiling: 20,
            ..Default::default()
        };
        assert!(check_cost_settings(&settings).is_ok());
        assert_eq!(settings.cost_model().unwrap(), CostModel::new(10, 4, 3, 6));
        // asymmetric indels only warn, they are still a valid configuration
        assert!(!settings.cost_model().unwrap().is_symmetric());

        let engine = settings.build_engine().unwrap();
        assert_eq!(engine.ceiling(), Some(20));
    }

    #[test]
    fn test_exact() {
        let settings = CostSettings {
            exact: true,
            ceiling: 5,
            ..Default::default()
        };
        assert_eq!(settings.effective_ceiling(), None);
        assert_eq!(settings.build_engine().unwrap(), DistanceEngine::exact(CostModel::default()));
    }

    #[test]
    fn test_missing_cost_file() {
        let settings = CostSettings {
            cost_model_fn: Some(PathBuf::from("test_data/costs/missing.json")),
            ..Default::default()
        };
        assert!(check_cost_settings(&settings).is_err());
        assert!(settings.build_engine().is_err());
    }
}

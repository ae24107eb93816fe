
use anyhow::ensure;
use clap::Args;
use log::info;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::core::{check_required_filename, AFTER_HELP, FULL_VERSION};
use crate::cli::costs::{check_cost_settings, CostSettings};

#[derive(Args, Clone, Default, Serialize)]
#[clap(author, about,
    after_help = &**AFTER_HELP
)]
pub struct BatchSettings {
    #[clap(default_value = "")]
    #[clap(hide = true)]
    sigdist_version: String,

    /// Pair table with label, from, and to columns (TSV/CSV, optionally gzipped)
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(value_name = "TSV")]
    #[clap(help_heading = Some("Input/Output"))]
    pub input_fn: PathBuf,

    /// Output distance table (.csv is comma-delimited, otherwise tab-delimited)
    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(value_name = "TSV")]
    #[clap(help_heading = Some("Input/Output"))]
    pub output_fn: PathBuf,

    /// Optional summary statistics (JSON, optionally gzipped)
    #[clap(long = "summary")]
    #[clap(value_name = "JSON")]
    #[clap(help_heading = Some("Input/Output"))]
    pub summary_fn: Option<PathBuf>,

    /// Optional output debug folder
    #[clap(long = "output-debug")]
    #[clap(value_name = "DIR")]
    #[clap(help_heading = Some("Input/Output"))]
    pub debug_folder: Option<PathBuf>,

    #[clap(flatten)]
    pub costs: CostSettings,

    /// Number of threads to use for scoring
    #[clap(long = "threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    pub threads: usize,

    /// Enable verbose output.
    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

pub fn check_batch_settings(mut settings: BatchSettings) -> anyhow::Result<BatchSettings> {
    // hard code the version in
    settings.sigdist_version = FULL_VERSION.clone();
    info!("sigdist version: {:?}", &settings.sigdist_version);
    info!("Sub-command: batch");
    info!("Inputs:");

    check_required_filename(&settings.input_fn, "Pair table")?;
    info!("\tPair table: {:?}", &settings.input_fn);

    check_cost_settings(&settings.costs)?;

    // outputs
    ensure!(settings.output_fn != settings.input_fn, "--output must be different from --input");
    info!("Outputs:");
    info!("\tDistance table: {:?}", &settings.output_fn);
    if let Some(summary_fn) = settings.summary_fn.as_ref() {
        info!("\tSummary: {summary_fn:?}");
    }
    if let Some(debug_folder) = settings.debug_folder.as_ref() {
        info!("\tDebug folder: {debug_folder:?}");
    }

    if settings.threads == 0 {
        settings.threads = 1;
    }
    info!("Processing threads: {}", settings.threads);

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_settings() -> BatchSettings {
        BatchSettings {
            input_fn: PathBuf::from("test_data/pair_table/pairs.tsv"),
            output_fn: PathBuf::from("distances.tsv"),
            ..Default::default()
        }
    }

    #[test]
    fn test_check_batch_settings() {
        let settings = check_batch_settings(base_settings()).unwrap();
        assert_eq!(settings.threads, 1);
        assert_eq!(settings.sigdist_version, *FULL_VERSION);
    }

    #[test]
    fn test_missing_input() {
        let mut settings = base_settings();
        settings.input_fn = PathBuf::from("test_data/pair_table/nope.tsv");
        assert!(check_batch_settings(settings).is_err());
    }

    #[test]
    fn test_output_overwrites_input() {
        let mut settings = base_settings();
        settings.output_fn = settings.input_fn.clone();
        assert!(check_batch_settings(settings).is_err());
    }
}


use clap::Args;
use log::info;
use serde::Serialize;
use strum_macros::EnumString;

use crate::cli::core::{AFTER_HELP, FULL_VERSION};
use crate::cli::costs::{check_cost_settings, CostSettings};

#[derive(Clone, Copy, Default, Debug, Eq, PartialEq, strum_macros::Display, EnumString, Serialize, clap::ValueEnum)]
pub enum OutputFormat {
    /// Just the distance on a single line
    #[default]
    #[strum(ascii_case_insensitive, serialize = "text")]
    #[clap(name = "text")]
    Text,
    /// The full distance report as JSON
    #[strum(ascii_case_insensitive, serialize = "json")]
    #[clap(name = "json")]
    Json,
}

#[derive(Args, Clone, Default, Serialize)]
#[clap(author, about,
    after_help = &**AFTER_HELP
)]
pub struct CompareSettings {
    #[clap(default_value = "")]
    #[clap(hide = true)]
    sigdist_version: String,

    /// Source signature [default: absent]
    #[clap(short = 'f')]
    #[clap(long = "from")]
    #[clap(value_name = "SIGNATURE")]
    #[clap(help_heading = Some("Input/Output"))]
    pub from: Option<String>,

    /// Target signature [default: absent]
    #[clap(short = 't')]
    #[clap(long = "to")]
    #[clap(value_name = "SIGNATURE")]
    #[clap(help_heading = Some("Input/Output"))]
    pub to: Option<String>,

    /// Output format for the result
    #[clap(long = "format")]
    #[clap(value_name = "FORMAT")]
    #[clap(help_heading = Some("Input/Output"))]
    #[clap(default_value = "text")]
    pub output_format: OutputFormat,

    #[clap(flatten)]
    pub costs: CostSettings,

    /// Enable verbose output.
    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl CompareSettings {
    /// The source signature as bytes, None if absent or empty
    pub fn from_bytes(&self) -> Option<&[u8]> {
        self.from.as_deref().map(str::as_bytes).filter(|s| !s.is_empty())
    }

    /// The target signature as bytes, None if absent or empty
    pub fn to_bytes(&self) -> Option<&[u8]> {
        self.to.as_deref().map(str::as_bytes).filter(|s| !s.is_empty())
    }
}

pub fn check_compare_settings(mut settings: CompareSettings) -> anyhow::Result<CompareSettings> {
    // hard code the version in
    settings.sigdist_version = FULL_VERSION.clone();
    info!("sigdist version: {:?}", &settings.sigdist_version);
    info!("Sub-command: compare");
    info!("Inputs:");
    info!("\tFrom: {}", describe_signature(settings.from_bytes()));
    info!("\tTo: {}", describe_signature(settings.to_bytes()));

    check_cost_settings(&settings.costs)?;

    info!("Outputs:");
    info!("\tFormat: {}", settings.output_format);

    Ok(settings)
}

/// Short description of a signature for logging
fn describe_signature(signature: Option<&[u8]>) -> String {
    match signature {
        Some(s) => format!("{} bytes", s.len()),
        None => "absent".to_string()
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use crescere_growth::VelocityField;
use crescere_reference::{AgeIndicator, Sex};

/// Crescere WHO child growth standards calculator.
#[derive(Parser)]
#[command(
    name = "crescere",
    version,
    about = "WHO child growth z-scores, percentiles and velocity"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: crescere.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Z-scores, percentiles and severity for every measurement of a child.
    Zscores(ZscoresArgs),
    /// Growth rate between consecutive measurements.
    Velocity(VelocityArgs),
    /// Age in days and months between two dates.
    Age(AgeArgs),
    /// Reference curve values at a fixed z-score or percentile.
    Curve(CurveArgs),
}

/// Arguments for the `zscores` subcommand.
#[derive(clap::Args)]
pub struct ZscoresArgs {
    /// Path to the child profile TOML file.
    #[arg(long)]
    pub child: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `velocity` subcommand.
#[derive(clap::Args)]
pub struct VelocityArgs {
    /// Path to the child profile TOML file.
    #[arg(long)]
    pub child: PathBuf,

    /// Measured value to compute the rate of (weight or length).
    #[arg(long, default_value = "weight")]
    pub field: VelocityField,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `age` subcommand.
#[derive(clap::Args)]
pub struct AgeArgs {
    /// Birth date (YYYY-MM-DD or RFC 3339).
    #[arg(long)]
    pub birth: String,

    /// Measurement date (YYYY-MM-DD or RFC 3339).
    #[arg(long)]
    pub date: String,
}

/// Arguments for the `curve` subcommand.
#[derive(clap::Args)]
pub struct CurveArgs {
    /// Age-indexed indicator.
    #[arg(long, value_enum)]
    pub indicator: CurveIndicator,

    /// Sex (male or female).
    #[arg(long)]
    pub sex: Sex,

    /// Z-score of the curve.
    #[arg(long, allow_hyphen_values = true, conflicts_with = "percentile")]
    pub z: Option<f64>,

    /// Percentile of the curve (0 < p < 100), used instead of --z.
    #[arg(long)]
    pub percentile: Option<f64>,

    /// Last month to print.
    #[arg(long, default_value_t = 60)]
    pub months: u32,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Indicators that have an age-indexed curve.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CurveIndicator {
    /// Weight-for-age (kg).
    Wfa,
    /// Length/height-for-age (cm).
    Lfa,
    /// Head-circumference-for-age (cm).
    Hcfa,
}

impl From<CurveIndicator> for AgeIndicator {
    fn from(value: CurveIndicator) -> Self {
        match value {
            CurveIndicator::Wfa => AgeIndicator::WeightForAge,
            CurveIndicator::Lfa => AgeIndicator::LengthForAge,
            CurveIndicator::Hcfa => AgeIndicator::HeadCircumferenceForAge,
        }
    }
}

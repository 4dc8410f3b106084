//! Curve command: reference values at a fixed z-score by month.

use anyhow::{Context, Result, anyhow};
use crescere_age::DAYS_PER_MONTH;
use crescere_growth::{month_days, reference_curve, z_from_percentile};
use crescere_reference::AgeIndicator;
use tracing::info_span;

use crate::cli::CurveArgs;
use crate::config::{self, CrescereConfig};

/// Print the reference curve for one indicator and sex.
pub fn run(args: CurveArgs, config: &CrescereConfig) -> Result<()> {
    let indicator = AgeIndicator::from(args.indicator);
    let _cmd = info_span!("curve", %indicator, sex = %args.sex).entered();

    let z = match (args.z, args.percentile) {
        (Some(z), _) => z,
        (None, Some(p)) => z_from_percentile(p)
            .ok_or_else(|| anyhow!("percentile must be between 0 and 100, got {p}"))?,
        (None, None) => 0.0,
    };

    let refs = config::load_references(config)?;
    let points = reference_curve(&refs, indicator, args.sex, z, month_days(args.months));

    if args.json {
        let json = serde_json::to_string_pretty(&points).context("failed to serialize curve")?;
        println!("{json}");
        return Ok(());
    }

    println!("{indicator}, {}, z = {z:.3}", args.sex);
    println!("{:>6} {:>6} {:>10}", "month", "day", "value");
    for point in &points {
        let month = (f64::from(point.day) / DAYS_PER_MONTH).round();
        println!("{month:>6} {:>6} {:>10.3}", point.day, point.value);
    }
    Ok(())
}

//! Velocity command: growth rate between consecutive measurements.

use anyhow::{Context, Result};
use crescere_growth::velocity_with_age;
use tracing::{info, info_span};

use crate::cli::VelocityArgs;
use crate::config;

/// Print the growth rate of the selected field for a child profile.
pub fn run(args: VelocityArgs) -> Result<()> {
    let _cmd = info_span!("velocity", field = %args.field).entered();
    let mut child = config::load_child(&args.child)?;
    child.measurements.sort_by_key(|m| m.date);

    let observations: Vec<_> =
        velocity_with_age(&child.measurements, args.field, child.birth_date).collect();
    info!(n = observations.len(), "rates computed");

    if args.json {
        let json = serde_json::to_string_pretty(&observations)
            .context("failed to serialize velocity")?;
        println!("{json}");
        return Ok(());
    }

    let unit = args.field.rate_unit();
    println!(
        "{:<12} {:<12} {:>8} {:>8} {:>12}",
        "from", "to", "days", "mid age", unit
    );
    for o in &observations {
        println!(
            "{:<12} {:<12} {:>8} {:>8.1} {:>12.3}",
            o.observation.from_date.to_string(),
            o.observation.to_date.to_string(),
            o.observation.elapsed_days,
            o.mid_age,
            o.observation.rate_per_day
        );
    }
    Ok(())
}

//! Zscores command: z-scores, percentiles and severity for a child's history.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use crescere_age::format_age;
use crescere_growth::{ZScoreSeverity, assess, percentile_from_z};
use crescere_reference::Indicator;
use serde::Serialize;
use tracing::{info, info_span};

use crate::cli::ZscoresArgs;
use crate::config::{self, CrescereConfig};
use crate::convert;
use crate::display::{MISSING, format_percentile, format_z_score};

#[derive(Serialize)]
struct Row {
    date: NaiveDate,
    age_in_days: i64,
    age: String,
    weight: Option<f64>,
    length: Option<f64>,
    head_circ: Option<f64>,
    indicators: Vec<IndicatorRow>,
}

#[derive(Serialize)]
struct IndicatorRow {
    indicator: Indicator,
    z: Option<f64>,
    percentile: Option<f64>,
    severity: ZScoreSeverity,
}

/// Print z-scores for every measurement in the child profile.
pub fn run(args: ZscoresArgs, config: &CrescereConfig) -> Result<()> {
    let _cmd = info_span!("zscores").entered();
    let locale = convert::parse_locale(&config.display.locale)?;
    let labels = convert::age_labels(&config.display, locale);

    let child = config::load_child(&args.child)?;
    let refs = config::load_references(config)?;
    info!(
        measurements = child.measurements.len(),
        sex = %child.sex,
        "assessing child"
    );

    let rows: Vec<Row> = assess(&refs, child.birth_date, child.sex, &child.measurements)
        .into_iter()
        .map(|a| Row {
            date: a.measurement.date,
            age_in_days: a.age_in_days,
            age: format_age(a.age_in_days, &labels),
            weight: a.measurement.weight,
            length: a.measurement.length,
            head_circ: a.measurement.head_circ,
            indicators: a
                .z_scores
                .iter()
                .map(|(indicator, z)| IndicatorRow {
                    indicator,
                    z,
                    percentile: percentile_from_z(z),
                    severity: ZScoreSeverity::classify(z),
                })
                .collect(),
        })
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&rows).context("failed to serialize z-scores")?;
        println!("{json}");
        return Ok(());
    }

    if let Some(ref name) = child.name {
        println!("{name} ({}, born {})", child.sex, child.birth_date);
    }
    print!("{:<12} {:>10}", "date", "age");
    for indicator in Indicator::ALL {
        print!(" {:>16}", indicator.abbreviation());
    }
    println!();
    for row in &rows {
        print!("{:<12} {:>10}", row.date.to_string(), row.age);
        for ind in &row.indicators {
            let cell = match ind.z {
                Some(_) => format!(
                    "{} ({})",
                    format_z_score(ind.z),
                    format_percentile(ind.z, locale)
                ),
                None => MISSING.to_string(),
            };
            print!(" {cell:>16}");
        }
        println!();
    }
    Ok(())
}

//! Age command: age in days and months between two dates.

use anyhow::{Context, Result};
use crescere_age::{age_in_days_iso, format_age, months_and_days};

use crate::cli::AgeArgs;
use crate::config::CrescereConfig;
use crate::convert;

/// Print the age on `--date` of a child born on `--birth`.
pub fn run(args: AgeArgs, config: &CrescereConfig) -> Result<()> {
    let locale = convert::parse_locale(&config.display.locale)?;
    let labels = convert::age_labels(&config.display, locale);

    let days = age_in_days_iso(&args.birth, &args.date).context("failed to compute age")?;
    let formatted = format_age(days, &labels);
    if days < 0 {
        println!("{days} days ({formatted})");
    } else {
        let (months, rest) = months_and_days(days);
        println!("{days} days = {months} months + {rest} days ({formatted})");
    }
    Ok(())
}

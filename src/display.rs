//! Display strings for z-scores and percentiles.

use crescere_growth::percentile_from_z;

/// Placeholder for a missing value.
pub const MISSING: &str = "—";

/// Output language for ordinal suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Pl,
}

/// `"—"` for a missing z-score, otherwise two decimals.
pub fn format_z_score(z: Option<f64>) -> String {
    match z.filter(|z| !z.is_nan()) {
        Some(z) => format!("{z:.2}"),
        None => MISSING.to_string(),
    }
}

/// Percentile of `z` as an ordinal: `"50th"`, `"<1st"`, `">99th"` in
/// English, `"50."`, `"<1."`, `">99."` in Polish.
pub fn format_percentile(z: Option<f64>, locale: Locale) -> String {
    let Some(p) = percentile_from_z(z) else {
        return MISSING.to_string();
    };
    let (prefix, n) = if p < 1.0 {
        ("<", 1)
    } else if p > 99.0 {
        (">", 99)
    } else {
        ("", p.round() as u32)
    };
    format!("{prefix}{n}{}", ordinal_suffix(n, locale))
}

fn ordinal_suffix(n: u32, locale: Locale) -> &'static str {
    match locale {
        Locale::Pl => ".",
        Locale::En => match (n % 10, n % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_score_strings() {
        assert_eq!(format_z_score(None), "—");
        assert_eq!(format_z_score(Some(f64::NAN)), "—");
        assert_eq!(format_z_score(Some(1.2345)), "1.23");
        assert_eq!(format_z_score(Some(-2.0)), "-2.00");
    }

    #[test]
    fn english_percentiles() {
        assert_eq!(format_percentile(Some(0.0), Locale::En), "50th");
        assert_eq!(format_percentile(Some(-2.326), Locale::En), "1st");
        assert_eq!(format_percentile(Some(4.0), Locale::En), ">99th");
        assert_eq!(format_percentile(Some(-4.0), Locale::En), "<1st");
        assert_eq!(format_percentile(None, Locale::En), "—");
        assert_eq!(format_percentile(Some(f64::NAN), Locale::En), "—");
    }

    #[test]
    fn clamp_is_decided_before_rounding() {
        let z = |p| crescere_growth::z_from_percentile(p);
        assert_eq!(format_percentile(z(0.7), Locale::En), "<1st");
        assert_eq!(format_percentile(z(1.4), Locale::En), "1st");
        assert_eq!(format_percentile(z(98.6), Locale::En), "99th");
        assert_eq!(format_percentile(z(99.3), Locale::En), ">99th");
        assert_eq!(format_percentile(z(99.3), Locale::Pl), ">99.");
    }

    #[test]
    fn polish_percentiles() {
        assert_eq!(format_percentile(Some(0.0), Locale::Pl), "50.");
        assert_eq!(format_percentile(Some(4.0), Locale::Pl), ">99.");
        assert_eq!(format_percentile(Some(-4.0), Locale::Pl), "<1.");
        assert_eq!(format_percentile(None, Locale::Pl), "—");
    }

    #[test]
    fn suffixes() {
        let en = |n| ordinal_suffix(n, Locale::En);
        assert_eq!(en(1), "st");
        assert_eq!(en(2), "nd");
        assert_eq!(en(3), "rd");
        assert_eq!(en(4), "th");
        assert_eq!(en(11), "th");
        assert_eq!(en(12), "th");
        assert_eq!(en(13), "th");
        assert_eq!(en(21), "st");
        assert_eq!(en(42), "nd");
        assert_eq!(en(73), "rd");
    }
}

//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};
use crescere_age::AgeLabels;
use crescere_reference::LoaderConfig;

use crate::config::{DisplayToml, ReferenceToml};
use crate::display::Locale;

/// Parses a delimiter name (`tab`, `comma`, `semicolon`) or a single ASCII
/// character into a byte.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    match s.to_lowercase().as_str() {
        "tab" | "\t" => Ok(b'\t'),
        "comma" => Ok(b','),
        "semicolon" => Ok(b';'),
        other => match other.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => bail!("unknown delimiter: {other:?}"),
        },
    }
}

/// Builds a [`LoaderConfig`] from the TOML reference configuration.
pub fn build_loader_config(reference: &ReferenceToml) -> Result<LoaderConfig> {
    let mut cfg = LoaderConfig::default().with_delimiter(parse_delimiter(&reference.delimiter)?);
    if let Some(ref name) = reference.weight_for_age {
        cfg = cfg.with_weight_for_age(name);
    }
    if let Some(ref name) = reference.length_for_age {
        cfg = cfg.with_length_for_age(name);
    }
    if let Some(ref name) = reference.head_circumference_for_age {
        cfg = cfg.with_head_circumference_for_age(name);
    }
    if let Some(ref name) = reference.weight_for_length {
        cfg = cfg.with_weight_for_length(name);
    }
    Ok(cfg)
}

/// Parses a locale code.
pub fn parse_locale(s: &str) -> Result<Locale> {
    match s.to_lowercase().as_str() {
        "en" => Ok(Locale::En),
        "pl" => Ok(Locale::Pl),
        other => bail!("unknown locale: {other:?} (expected en or pl)"),
    }
}

/// Age labels from the config, or the locale's own labels.
pub fn age_labels(display: &DisplayToml, locale: Locale) -> AgeLabels {
    if let Some(ref labels) = display.age_labels {
        return labels.clone();
    }
    match locale {
        Locale::En => AgeLabels::default(),
        Locale::Pl => AgeLabels {
            invalid: "Nieprawidłowy".to_string(),
            ..AgeLabels::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters() {
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert_eq!(parse_delimiter("Comma").unwrap(), b',');
        assert_eq!(parse_delimiter("|").unwrap(), b'|');
        assert!(parse_delimiter("ab").is_err());
        assert!(parse_delimiter("").is_err());
    }

    #[test]
    fn loader_config_overrides() {
        let reference = ReferenceToml {
            weight_for_age: Some("wfa.csv".to_string()),
            delimiter: ",".to_string(),
            ..ReferenceToml::default()
        };
        let cfg = build_loader_config(&reference).unwrap();
        assert_eq!(cfg.weight_for_age(), "wfa.csv");
        assert_eq!(cfg.length_for_age(), "lenanthro.txt");
        assert_eq!(cfg.delimiter(), b',');
    }

    #[test]
    fn locales() {
        assert_eq!(parse_locale("EN").unwrap(), Locale::En);
        assert_eq!(parse_locale("pl").unwrap(), Locale::Pl);
        assert!(parse_locale("de").is_err());
    }

    #[test]
    fn locale_age_labels() {
        let display = DisplayToml::default();
        assert_eq!(age_labels(&display, Locale::Pl).invalid, "Nieprawidłowy");
        assert_eq!(age_labels(&display, Locale::En), AgeLabels::default());
    }
}

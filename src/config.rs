use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use crescere_age::AgeLabels;
use crescere_growth::Measurement;
use crescere_reference::{ReferenceSet, Sex};
use serde::Deserialize;
use tracing::{debug, info};

use crate::convert;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "crescere.toml";

/// Top-level Crescere configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CrescereConfig {
    /// Reference table location.
    #[serde(default)]
    pub reference: ReferenceToml,

    /// Output formatting.
    #[serde(default)]
    pub display: DisplayToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceToml {
    #[serde(default = "default_reference_dir")]
    pub dir: PathBuf,
    pub weight_for_age: Option<String>,
    pub length_for_age: Option<String>,
    pub head_circumference_for_age: Option<String>,
    pub weight_for_length: Option<String>,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for ReferenceToml {
    fn default() -> Self {
        Self {
            dir: default_reference_dir(),
            weight_for_age: None,
            length_for_age: None,
            head_circumference_for_age: None,
            weight_for_length: None,
            delimiter: default_delimiter(),
        }
    }
}

fn default_reference_dir() -> PathBuf {
    PathBuf::from("data/who")
}
fn default_delimiter() -> String {
    "tab".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub age_labels: Option<AgeLabels>,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            age_labels: None,
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

/// A child and their measurement history, as stored in a profile file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChildProfile {
    #[serde(default)]
    pub name: Option<String>,
    pub birth_date: NaiveDate,
    pub sex: Sex,
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}

/// Load the configuration from `path`, or from [`DEFAULT_CONFIG`] if it
/// exists, or fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<CrescereConfig> {
    let path = match path {
        Some(p) => p,
        None if Path::new(DEFAULT_CONFIG).exists() => Path::new(DEFAULT_CONFIG),
        None => {
            debug!("no config file, using defaults");
            return Ok(CrescereConfig::default());
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}

/// Load a child profile TOML file.
pub fn load_child(path: &Path) -> Result<ChildProfile> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read child profile: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse child profile: {}", path.display()))
}

/// Load the WHO reference tables named by the `[reference]` section.
pub fn load_references(config: &CrescereConfig) -> Result<ReferenceSet> {
    let loader = convert::build_loader_config(&config.reference)?;
    let dir = &config.reference.dir;
    info!(dir = %dir.display(), "loading reference tables");
    ReferenceSet::from_dir(dir, &loader)
        .with_context(|| format!("failed to load reference tables from {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: CrescereConfig = toml::from_str("").unwrap();
        assert_eq!(config.reference.dir, PathBuf::from("data/who"));
        assert_eq!(config.reference.delimiter, "tab");
        assert_eq!(config.display.locale, "en");
        assert!(config.display.age_labels.is_none());
    }

    #[test]
    fn full_config() {
        let config: CrescereConfig = toml::from_str(
            r#"
            [reference]
            dir = "/opt/who"
            weight_for_length = "wfl.csv"
            delimiter = ","

            [display]
            locale = "pl"

            [display.age_labels]
            invalid = "Nieprawidłowy"
            month = "m"
            day = "d"
            "#,
        )
        .unwrap();
        assert_eq!(config.reference.dir, PathBuf::from("/opt/who"));
        assert_eq!(config.reference.weight_for_length.as_deref(), Some("wfl.csv"));
        assert_eq!(config.display.locale, "pl");
        assert_eq!(config.display.age_labels.unwrap().invalid, "Nieprawidłowy");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<CrescereConfig>("[reference]\nfolder = \"x\"\n").is_err());
    }

    #[test]
    fn child_profile_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("child.toml");
        std::fs::write(
            &path,
            r#"
            name = "Ada"
            birth_date = "2024-01-01"
            sex = "female"

            [[measurements]]
            date = "2024-01-01"
            weight = 3200
            length = 49.5

            [[measurements]]
            date = "2024-02-01"
            head_circ = 36.1
            "#,
        )
        .unwrap();

        let child = load_child(&path).unwrap();
        assert_eq!(child.name.as_deref(), Some("Ada"));
        assert_eq!(child.sex, Sex::Female);
        assert_eq!(child.measurements.len(), 2);
        assert_eq!(child.measurements[0].weight, Some(3200.0));
        assert_eq!(child.measurements[1].head_circ, Some(36.1));
    }

    #[test]
    fn missing_child_file_has_context() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_child(&dir.path().join("nope.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read child profile"));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert!(load_config(Some(&dir.path().join("missing.toml"))).is_err());
    }
}

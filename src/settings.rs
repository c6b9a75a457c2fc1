use std::{fs, path::Path};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Settings {
    pub initial_capacity: usize,
    pub thresholds: Thresholds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_capacity: 5,
            thresholds: Thresholds::default(),
        }
    }
}

/// Cut-offs for the summary buckets.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Thresholds {
    pub advanced_hours: u32,
    pub intermediate_hours: u32,
    pub frequent_climber_days: u32,
    pub new_climber_days: u32,
    pub dedicated_session_hours: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            advanced_hours: 160,
            intermediate_hours: 21,
            frequent_climber_days: 80,
            new_climber_days: 10,
            dedicated_session_hours: 2.0,
        }
    }
}

impl Settings {
    pub fn from_toml(source: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Missing `path` means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let source = fs::read_to_string(path)?;
        let settings = Self::from_toml(&source).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_source_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_thresholds_keep_other_defaults() {
        let settings = Settings::from_toml(
            r#"
initial_capacity = 2

[thresholds]
advanced_hours = 100
dedicated_session_hours = 3.5
"#,
        )
        .unwrap();

        assert_eq!(settings.initial_capacity, 2);
        assert_eq!(settings.thresholds.advanced_hours, 100);
        assert_eq!(settings.thresholds.dedicated_session_hours, 3.5);
        assert_eq!(settings.thresholds.intermediate_hours, 21);
        assert_eq!(settings.thresholds.new_climber_days, 10);
    }

    #[test]
    fn load_reads_file_and_reports_bad_toml() {
        let mut good = tempfile::NamedTempFile::new().unwrap();
        writeln!(good, "[thresholds]\nfrequent_climber_days = 50").unwrap();
        let settings = Settings::load(Some(good.path())).unwrap();
        assert_eq!(settings.thresholds.frequent_climber_days, 50);

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        writeln!(bad, "initial_capacity = \"many\"").unwrap();
        assert!(matches!(
            Settings::load(Some(bad.path())),
            Err(Error::Settings { .. })
        ));

        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }
}

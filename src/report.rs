//! The persisted summary: flat `Key: value` lines, one statistic per line.

use std::{fs, path::Path};

use chrono::NaiveDateTime;

use crate::{
    error::{ReportError, ReportErrorKind, Result},
    formatting::{ClimberType, ExperienceLevel, PerformanceRating},
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const RULE: &str = "=================================";

const NAME: &str = "Name";
const TOTAL_HOURS: &str = "Total Hours";
const CLIMBING_DAYS: &str = "Climbing Days";
const AVERAGE_HOURS: &str = "Avg Hours / Session";
const EXPERIENCE_LEVEL: &str = "Experience Level";
const CLIMBER_TYPE: &str = "Climber Type";
const PERFORMANCE_RATING: &str = "Performance Rating";
const GENERATED: &str = "Generated";

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub name: String,
    pub total_hours: u32,
    pub climbing_days: u32,
    pub average_hours: f64,
    pub experience_level: ExperienceLevel,
    pub climber_type: ClimberType,
    pub performance_rating: PerformanceRating,
    pub generated: Option<NaiveDateTime>,
}

impl Report {
    pub fn render(&self) -> String {
        self.fields()
            .into_iter()
            .map(|(key, value)| format!("{key}: {value}\n"))
            .collect()
    }

    /// Console layout with keys padded to a fixed column.
    pub fn summary_table(&self) -> String {
        let mut out = format!("\n{RULE}\n       CLIMBING SUMMARY\n{RULE}\n");
        for (key, value) in self.fields() {
            out.push_str(&format!("{:<25}{value}\n", format!("{key}:")));
        }
        out.push_str(RULE);
        out.push('\n');
        out
    }

    pub fn parse(source: &str) -> std::result::Result<Self, ReportError> {
        let mut name = None;
        let mut total_hours = None;
        let mut climbing_days = None;
        let mut average_hours = None;
        let mut experience_level = None;
        let mut climber_type = None;
        let mut performance_rating = None;
        let mut generated = None;

        let mut last_line = 0;
        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            last_line = line;

            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let Some((key, value)) = raw.split_once(':') else {
                return Err(ReportError::new(
                    ReportErrorKind::MalformedLine(raw.to_string()),
                    line,
                ));
            };
            let value = value.trim();

            match key.trim() {
                NAME => name = Some(value.to_string()),
                TOTAL_HOURS => total_hours = Some(parse_value(TOTAL_HOURS, value, line)?),
                CLIMBING_DAYS => climbing_days = Some(parse_value(CLIMBING_DAYS, value, line)?),
                AVERAGE_HOURS => average_hours = Some(parse_value(AVERAGE_HOURS, value, line)?),
                EXPERIENCE_LEVEL => {
                    experience_level = Some(parse_value(EXPERIENCE_LEVEL, value, line)?)
                }
                CLIMBER_TYPE => climber_type = Some(parse_value(CLIMBER_TYPE, value, line)?),
                PERFORMANCE_RATING => {
                    performance_rating = Some(parse_value(PERFORMANCE_RATING, value, line)?)
                }
                GENERATED => {
                    let Ok(timestamp) = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
                    else {
                        return Err(invalid(GENERATED, value, line));
                    };
                    generated = Some(timestamp);
                }
                other => tracing::debug!(key = other, line, "ignoring unknown report key"),
            }
        }

        let missing = |key| ReportError::new(ReportErrorKind::MissingKey(key), last_line + 1);
        Ok(Self {
            name: name.ok_or_else(|| missing(NAME))?,
            total_hours: total_hours.ok_or_else(|| missing(TOTAL_HOURS))?,
            climbing_days: climbing_days.ok_or_else(|| missing(CLIMBING_DAYS))?,
            average_hours: average_hours.ok_or_else(|| missing(AVERAGE_HOURS))?,
            experience_level: experience_level.ok_or_else(|| missing(EXPERIENCE_LEVEL))?,
            climber_type: climber_type.ok_or_else(|| missing(CLIMBER_TYPE))?,
            performance_rating: performance_rating.ok_or_else(|| missing(PERFORMANCE_RATING))?,
            generated,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        tracing::info!(path = %path.display(), "report saved");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        let report = Self::parse(&source)?;
        tracing::info!(path = %path.display(), "report loaded");
        Ok(report)
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            (NAME, self.name.clone()),
            (TOTAL_HOURS, self.total_hours.to_string()),
            (CLIMBING_DAYS, self.climbing_days.to_string()),
            (AVERAGE_HOURS, format!("{:.1}", self.average_hours)),
            (EXPERIENCE_LEVEL, self.experience_level.to_string()),
            (CLIMBER_TYPE, self.climber_type.to_string()),
            (PERFORMANCE_RATING, self.performance_rating.to_string()),
        ];
        if let Some(generated) = self.generated {
            fields.push((GENERATED, generated.format(TIMESTAMP_FORMAT).to_string()));
        }
        fields
    }
}

fn parse_value<T: std::str::FromStr>(
    key: &'static str,
    value: &str,
    line: usize,
) -> std::result::Result<T, ReportError> {
    value.parse().map_err(|_| invalid(key, value, line))
}

fn invalid(key: &'static str, value: &str, line: usize) -> ReportError {
    ReportError::new(
        ReportErrorKind::InvalidValue {
            key,
            value: value.to_string(),
        },
        line,
    )
}

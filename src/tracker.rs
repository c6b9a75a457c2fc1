use chrono::NaiveDateTime;

use crate::{
    activity::Activity,
    error::OutOfRange,
    formatting::{
        climber_type, experience_level, performance_rating, ClimberType, ExperienceLevel,
        PerformanceRating,
    },
    manager::ActivityManager,
    report::Report,
    settings::{Settings, Thresholds},
};

/// A climber's log: the activities plus the running counters the summary is
/// derived from.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    climber_name: String,
    total_hours: u32,
    climbing_days: u32,
    thresholds: Thresholds,
    manager: ActivityManager,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            thresholds: settings.thresholds.clone(),
            manager: ActivityManager::with_capacity(settings.initial_capacity),
            ..Self::default()
        }
    }

    pub fn set_climber_name(&mut self, name: impl Into<String>) {
        self.climber_name = name.into();
    }

    pub fn set_climbing_days(&mut self, days: u32) {
        self.climbing_days = days;
    }

    pub fn climber_name(&self) -> &str {
        &self.climber_name
    }

    pub fn total_hours(&self) -> u32 {
        self.total_hours
    }

    pub fn climbing_days(&self) -> u32 {
        self.climbing_days
    }

    pub fn activities(&self) -> &ActivityManager {
        &self.manager
    }

    /// Only climb sessions feed `total_hours`, with their hours truncated.
    pub fn add_session(&mut self, activity: impl Into<Activity>) {
        let activity = activity.into();
        if let Some(climb) = activity.as_climb() {
            let hours = climb.hours.trunc().max(0.0) as u32;
            self.total_hours = self.total_hours.saturating_add(hours);
        }
        tracing::info!(
            kind = activity.type_name(),
            total_hours = self.total_hours,
            "session logged"
        );
        self.manager.add(activity);
    }

    pub fn remove_activity(&mut self, index: usize) -> Result<(), OutOfRange> {
        self.manager.remove_at(index)
    }

    pub fn clear(&mut self) {
        self.manager.clear();
    }

    pub fn activity_count(&self) -> usize {
        self.manager.len()
    }

    pub fn average_hours(&self) -> f64 {
        if self.climbing_days > 0 {
            f64::from(self.total_hours) / f64::from(self.climbing_days)
        } else {
            0.0
        }
    }

    pub fn experience_level(&self) -> ExperienceLevel {
        experience_level(self.total_hours, &self.thresholds)
    }

    pub fn climber_type(&self) -> ClimberType {
        climber_type(self.climbing_days, &self.thresholds)
    }

    pub fn performance_rating(&self) -> PerformanceRating {
        performance_rating(self.average_hours(), &self.thresholds)
    }

    pub fn summary(&self, generated: NaiveDateTime) -> Report {
        Report {
            name: self.climber_name.clone(),
            total_hours: self.total_hours,
            climbing_days: self.climbing_days,
            average_hours: self.average_hours(),
            experience_level: self.experience_level(),
            climber_type: self.climber_type(),
            performance_rating: self.performance_rating(),
            generated: Some(generated),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::activity::{ClimbSession, Difficulty, Location, TrainingSession};

    fn climb(hours: f64) -> ClimbSession {
        ClimbSession::new("Indoor", 0, Difficulty::Moderate, hours, Location::new("Indoor", true))
    }

    #[test]
    fn adds_sessions() {
        let mut tracker = Tracker::new();
        tracker.set_climber_name("Alex");
        tracker.set_climbing_days(20);
        tracker.add_session(climb(1.0));

        assert_eq!(tracker.activity_count(), 1);
        assert_eq!(tracker.climber_name(), "Alex");
    }

    #[test]
    fn only_climbs_count_toward_total_hours() {
        let mut tracker = Tracker::new();
        tracker.add_session(climb(2.9));
        tracker.add_session(TrainingSession::try_new("Hangboard", 90, Difficulty::Hard, 6).unwrap());
        tracker.add_session(climb(1.5));

        assert_eq!(tracker.total_hours(), 3);
        assert_eq!(tracker.activity_count(), 3);
    }

    #[test]
    fn remove_activity_propagates_out_of_range() {
        let mut tracker = Tracker::new();
        tracker.add_session(climb(1.0));

        assert!(tracker.remove_activity(1).is_err());
        tracker.remove_activity(0).unwrap();
        assert_eq!(tracker.activity_count(), 0);
        assert!(tracker.remove_activity(0).is_err());
    }

    #[test]
    fn total_hours_saturate_instead_of_overflowing() {
        let mut tracker = Tracker::new();
        tracker.add_session(climb(5e9));
        tracker.add_session(climb(1.0));

        assert_eq!(tracker.total_hours(), u32::MAX);
        assert_eq!(tracker.activity_count(), 2);
        assert_eq!(tracker.experience_level(), ExperienceLevel::Advanced);
    }

    #[test]
    fn removing_does_not_rewind_total_hours() {
        let mut tracker = Tracker::new();
        tracker.add_session(climb(3.0));
        tracker.remove_activity(0).unwrap();
        assert_eq!(tracker.total_hours(), 3);
    }

    #[test]
    fn statistics_are_recomputed() {
        let mut tracker = Tracker::new();
        assert_eq!(tracker.average_hours(), 0.0);
        assert_eq!(tracker.performance_rating(), PerformanceRating::Casual);

        tracker.set_climbing_days(10);
        for _ in 0..11 {
            tracker.add_session(climb(2.0));
        }

        assert_eq!(tracker.total_hours(), 22);
        assert!((tracker.average_hours() - 2.2).abs() < 1e-9);
        assert_eq!(tracker.experience_level(), ExperienceLevel::Intermediate);
        assert_eq!(tracker.climber_type(), ClimberType::Regular);
        assert_eq!(tracker.performance_rating(), PerformanceRating::HighlyDedicated);
    }

    #[test]
    fn settings_change_buckets_and_capacity() {
        let mut settings = Settings::default();
        settings.initial_capacity = 1;
        settings.thresholds.intermediate_hours = 2;

        let mut tracker = Tracker::with_settings(&settings);
        tracker.add_session(climb(1.0));
        tracker.add_session(climb(1.0));

        assert_eq!(tracker.activities().len(), 2);
        assert_eq!(tracker.experience_level(), ExperienceLevel::Intermediate);
    }

    #[test]
    fn summary_snapshots_state() {
        let mut tracker = Tracker::new();
        tracker.set_climber_name("Sam");
        tracker.set_climbing_days(4);
        tracker.add_session(climb(4.0));

        let at = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let report = tracker.summary(at);

        assert_eq!(report.name, "Sam");
        assert_eq!(report.total_hours, 4);
        assert_eq!(report.average_hours, 1.0);
        assert_eq!(report.climber_type, ClimberType::New);
        assert_eq!(report.performance_rating, PerformanceRating::ModeratelyDedicated);
        assert_eq!(report.generated, Some(at));
    }

    #[test]
    fn clear_empties_log() {
        let mut tracker = Tracker::new();
        tracker.add_session(climb(1.0));
        tracker.clear();
        assert_eq!(tracker.activity_count(), 0);
    }
}

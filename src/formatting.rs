//! Stateless labels and buckets shared by the tracker, report and menu.

use std::{fmt, str::FromStr};

use crate::{activity::Difficulty, settings::Thresholds};

pub fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Moderate => "Moderate",
        Difficulty::Hard => "Hard",
        Difficulty::Extreme => "Extreme",
    }
}

macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($label => Ok($name::$variant),)+
                    other => Err(other.to_string()),
                }
            }
        }
    };
}

labelled_enum!(ExperienceLevel {
    Beginner => "Beginner",
    Intermediate => "Intermediate",
    Advanced => "Advanced",
});

labelled_enum!(ClimberType {
    New => "New Climber",
    Regular => "Regular Climber",
    Frequent => "Frequent Climber",
});

labelled_enum!(PerformanceRating {
    Casual => "Casual",
    ModeratelyDedicated => "Moderately Dedicated",
    HighlyDedicated => "Highly Dedicated",
});

pub fn experience_level(total_hours: u32, thresholds: &Thresholds) -> ExperienceLevel {
    if total_hours >= thresholds.advanced_hours {
        ExperienceLevel::Advanced
    } else if total_hours >= thresholds.intermediate_hours {
        ExperienceLevel::Intermediate
    } else {
        ExperienceLevel::Beginner
    }
}

pub fn climber_type(climbing_days: u32, thresholds: &Thresholds) -> ClimberType {
    if climbing_days >= thresholds.frequent_climber_days {
        ClimberType::Frequent
    } else if climbing_days >= thresholds.new_climber_days {
        ClimberType::Regular
    } else {
        ClimberType::New
    }
}

pub fn performance_rating(avg_hours: f64, thresholds: &Thresholds) -> PerformanceRating {
    if avg_hours >= thresholds.dedicated_session_hours {
        PerformanceRating::HighlyDedicated
    } else if avg_hours >= 1.0 {
        PerformanceRating::ModeratelyDedicated
    } else {
        PerformanceRating::Casual
    }
}

use std::{fmt, num::NonZeroU32};

use crate::formatting::difficulty_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Difficulty {
    #[default]
    Easy = 1,
    Moderate = 2,
    Hard = 3,
    Extreme = 4,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    pub fn level(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = u8;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Moderate),
            3 => Ok(Difficulty::Hard),
            4 => Ok(Difficulty::Extreme),
            other => Err(other),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(difficulty_label(*self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub place: String,
    pub indoor: bool,
}

impl Location {
    pub fn new(place: impl Into<String>, indoor: bool) -> Self {
        Self {
            place: place.into(),
            indoor,
        }
    }

    /// `"Gym (Indoor)"` / `"Crag (Outdoor)"`.
    pub fn formatted(&self) -> String {
        let setting = if self.indoor { "Indoor" } else { "Outdoor" };
        format!("{} ({})", self.place, setting)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("", true)
    }
}

/// Fields every logged session carries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityBase {
    pub name: String,
    /// Minutes.
    pub duration: u32,
    pub difficulty: Difficulty,
}

impl ActivityBase {
    pub fn new(name: impl Into<String>, duration: u32, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            duration,
            difficulty,
        }
    }

    fn describe(&self, out: &mut impl fmt::Write) -> fmt::Result {
        writeln!(out, "Name: {}", self.name)?;
        writeln!(out, "Duration: {} minutes", self.duration)?;
        writeln!(out, "Difficulty: {}", self.difficulty)
    }
}

#[derive(Debug, Clone)]
pub struct ClimbSession {
    pub base: ActivityBase,
    pub hours: f64,
    pub location: Location,
}

impl ClimbSession {
    pub fn new(
        name: impl Into<String>,
        duration: u32,
        difficulty: Difficulty,
        hours: f64,
        location: Location,
    ) -> Self {
        Self {
            base: ActivityBase::new(name, duration, difficulty),
            hours,
            location,
        }
    }
}

/// Two climbs are the same climb when name, hours and location agree.
/// Duration and difficulty are intentionally left out of the comparison.
impl PartialEq for ClimbSession {
    fn eq(&self, other: &Self) -> bool {
        self.base.name == other.base.name
            && self.hours == other.hours
            && self.location == other.location
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSession {
    pub base: ActivityBase,
    pub reps: NonZeroU32,
}

impl TrainingSession {
    pub fn new(
        name: impl Into<String>,
        duration: u32,
        difficulty: Difficulty,
        reps: NonZeroU32,
    ) -> Self {
        Self {
            base: ActivityBase::new(name, duration, difficulty),
            reps,
        }
    }

    /// `None` when `reps` is zero.
    pub fn try_new(
        name: impl Into<String>,
        duration: u32,
        difficulty: Difficulty,
        reps: u32,
    ) -> Option<Self> {
        NonZeroU32::new(reps).map(|reps| Self::new(name, duration, difficulty, reps))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Climb,
    Training,
}

/// One logged session. `Display` gives the single-line form, [`Activity::describe`]
/// the multi-line one.
#[derive(Debug, Clone)]
pub enum Activity {
    Climb(ClimbSession),
    Training(TrainingSession),
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Activity::Climb(_) => ActivityKind::Climb,
            Activity::Training(_) => ActivityKind::Training,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Activity::Climb(_) => "Climb Session",
            Activity::Training(_) => "Training Session",
        }
    }

    pub fn base(&self) -> &ActivityBase {
        match self {
            Activity::Climb(climb) => &climb.base,
            Activity::Training(training) => &training.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut ActivityBase {
        match self {
            Activity::Climb(climb) => &mut climb.base,
            Activity::Training(training) => &mut training.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn as_climb(&self) -> Option<&ClimbSession> {
        match self {
            Activity::Climb(climb) => Some(climb),
            Activity::Training(_) => None,
        }
    }

    pub fn as_climb_mut(&mut self) -> Option<&mut ClimbSession> {
        match self {
            Activity::Climb(climb) => Some(climb),
            Activity::Training(_) => None,
        }
    }

    pub fn as_training(&self) -> Option<&TrainingSession> {
        match self {
            Activity::Training(training) => Some(training),
            Activity::Climb(_) => None,
        }
    }

    /// Shared fields first, then whatever the variant adds.
    pub fn describe(&self, out: &mut impl fmt::Write) -> fmt::Result {
        self.base().describe(out)?;
        match self {
            Activity::Climb(climb) => {
                writeln!(out, "Hours Climbed: {}", climb.hours)?;
                writeln!(out, "Location: {}", climb.location.formatted())
            }
            Activity::Training(training) => writeln!(out, "Reps: {}", training.reps),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Climb(climb) => write!(
                f,
                "[Climb] {} | {} hrs | {}",
                climb.base.name,
                climb.hours,
                climb.location.formatted()
            ),
            Activity::Training(training) => {
                write!(f, "[Training] {} | {} reps", training.base.name, training.reps)
            }
        }
    }
}

impl From<ClimbSession> for Activity {
    fn from(climb: ClimbSession) -> Self {
        Activity::Climb(climb)
    }
}

impl From<TrainingSession> for Activity {
    fn from(training: TrainingSession) -> Self {
        Activity::Training(training)
    }
}

//! A personal log for climbing and training sessions.
//!
//! Sessions live in an [`ActivityManager`], which owns them in insertion order
//! on top of a doubling [`ResizableSeq`]. A [`Tracker`] wraps the manager with
//! the climber's counters and derives the summary that [`Report`] persists as
//! flat `Key: value` text.

pub mod activity;
pub mod error;
pub mod formatting;
pub mod manager;
pub mod menu;
pub mod report;
pub mod seq;
pub mod settings;
pub mod tracker;

pub use activity::{Activity, ActivityKind, ClimbSession, Difficulty, Location, TrainingSession};
pub use error::{Error, OutOfRange, Result};
pub use manager::ActivityManager;
pub use report::Report;
pub use seq::ResizableSeq;
pub use settings::Settings;
pub use tracker::Tracker;

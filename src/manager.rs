use std::{
    fmt,
    ops::{AddAssign, Index, IndexMut, SubAssign},
};

use crate::{activity::Activity, error::OutOfRange, seq::ResizableSeq};

const DIVIDER: &str = "-----------------------------";

/// Owns every activity handed to it, in insertion order.
///
/// Strict accessors (`at`, `remove_at`, `[]`, `-=`) fail on a bad index while
/// [`ActivityManager::get`] reports absence with `None`.
#[derive(Debug, Default)]
pub struct ActivityManager {
    items: ResizableSeq<Activity>,
}

impl ActivityManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: ResizableSeq::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, activity: impl Into<Activity>) {
        let activity = activity.into();
        tracing::debug!(kind = activity.type_name(), name = activity.name(), "adding activity");
        self.items.push(activity);
    }

    /// Drops the activity at `index` and closes the gap.
    pub fn remove_at(&mut self, index: usize) -> Result<(), OutOfRange> {
        let removed = self.items.remove_at(index)?;
        tracing::debug!(index, name = removed.name(), "removed activity");
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Activity> {
        self.items.at(index).ok()
    }

    pub fn at(&self, index: usize) -> Result<&Activity, OutOfRange> {
        self.items.at(index)
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut Activity, OutOfRange> {
        self.items.at_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        tracing::debug!(count = self.items.len(), "clearing activities");
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.items.iter()
    }

    /// Deep copy: every activity is cloned into storage owned by the new manager.
    pub fn duplicate(&self) -> Self {
        let mut items = ResizableSeq::with_capacity(self.items.capacity());
        for activity in &self.items {
            items.push(activity.clone());
        }
        Self { items }
    }

    pub fn display_all(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for activity in &self.items {
            writeln!(out, "{DIVIDER}")?;
            activity.describe(out)?;
        }
        Ok(())
    }
}

impl Clone for ActivityManager {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl Index<usize> for ActivityManager {
    type Output = Activity;

    /// Panics with the [`OutOfRange`] message on a bad index.
    fn index(&self, index: usize) -> &Self::Output {
        self.at(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl IndexMut<usize> for ActivityManager {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<A: Into<Activity>> AddAssign<A> for ActivityManager {
    fn add_assign(&mut self, activity: A) {
        self.add(activity);
    }
}

impl SubAssign<usize> for ActivityManager {
    /// Same as [`ActivityManager::remove_at`], panicking on a bad index.
    fn sub_assign(&mut self, index: usize) {
        if let Err(err) = self.remove_at(index) {
            panic!("{err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{ClimbSession, Difficulty, Location, TrainingSession};

    fn route(name: &str, hours: f64) -> ClimbSession {
        ClimbSession::new(name, 0, Difficulty::Easy, hours, Location::new("Gym", true))
    }

    fn hangboard() -> TrainingSession {
        TrainingSession::try_new("Hangboard", 1, Difficulty::Moderate, 5).unwrap()
    }

    #[test]
    fn add_then_remove_front() {
        let mut mgr = ActivityManager::new();
        mgr.add(route("Route", 1.0));
        mgr.add(hangboard());
        assert_eq!(mgr.len(), 2);

        mgr.remove_at(0).unwrap();
        assert_eq!(mgr.len(), 1);
        assert_eq!(mgr[0].type_name(), "Training Session");
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut mgr = ActivityManager::with_capacity(2);
        for name in ["A", "B", "C"] {
            mgr.add(route(name, 1.0));
        }
        let names: Vec<_> = mgr.iter().map(Activity::name).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn strict_and_lenient_lookup_differ() {
        let mut mgr = ActivityManager::new();
        mgr.add(route("Route", 1.0));

        assert!(mgr.get(0).is_some());
        assert!(mgr.get(1).is_none());
        assert!(mgr.get(usize::MAX).is_none());

        let err = mgr.at(1).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.size, 1);
        assert!(mgr.at_mut(3).is_err());
        assert!(mgr.remove_at(1).is_err());
        assert_eq!(mgr.len(), 1);
    }

    #[test]
    #[should_panic(expected = "out of range for size 0")]
    fn index_operator_panics_when_empty() {
        let mgr = ActivityManager::new();
        let _ = &mgr[0];
    }

    #[test]
    #[should_panic(expected = "remove_at: index 2 is out of range for size 1")]
    fn sub_assign_panics_on_bad_index() {
        let mut mgr = ActivityManager::new();
        mgr += route("Route", 1.0);
        mgr -= 2;
    }

    #[test]
    fn operator_shorthands_match_named_methods() {
        let mut mgr = ActivityManager::new();
        mgr += route("A", 1.0);
        mgr += hangboard();
        mgr += route("B", 2.0);
        mgr -= 1;

        assert_eq!(mgr.len(), 2);
        assert_eq!(mgr[1].name(), "B");
    }

    #[test]
    fn index_mut_writes_through() {
        let mut mgr = ActivityManager::new();
        mgr.add(route("Route", 1.0));
        if let Some(climb) = mgr[0].as_climb_mut() {
            climb.hours = 4.0;
        }
        assert_eq!(mgr[0].as_climb().map(|c| c.hours), Some(4.0));
    }

    #[test]
    fn copies_are_deep() {
        let mut source = ActivityManager::new();
        source.add(route("Route", 1.0));
        source.add(route("Slab", 2.0));

        let mut copy = source.clone();
        assert_eq!(copy.len(), source.len());
        for (a, b) in source.iter().zip(copy.iter()) {
            assert_eq!(a.as_climb(), b.as_climb());
        }

        copy.at_mut(0).unwrap().as_climb_mut().unwrap().hours = 9.0;
        copy.remove_at(1).unwrap();

        assert_eq!(source.len(), 2);
        assert_eq!(source[0].as_climb().unwrap().hours, 1.0);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut mgr = ActivityManager::new();
        mgr.clear();
        mgr.add(hangboard());
        mgr.clear();
        mgr.clear();
        assert!(mgr.is_empty());
        assert!(mgr.get(0).is_none());
    }

    #[test]
    fn display_all_separates_entries() {
        let mut mgr = ActivityManager::new();
        mgr.add(route("Route", 1.0));
        mgr.add(hangboard());

        let mut out = String::new();
        mgr.display_all(&mut out).unwrap();

        assert_eq!(out.matches(DIVIDER).count(), 2);
        assert!(out.starts_with(DIVIDER));
        let route_at = out.find("Name: Route").unwrap();
        let board_at = out.find("Name: Hangboard").unwrap();
        assert!(route_at < board_at);
        assert!(out.contains("Location: Gym (Indoor)"));
        assert!(out.contains("Reps: 5"));
    }

    #[test]
    fn display_all_on_empty_writes_nothing() {
        let mut out = String::new();
        ActivityManager::new().display_all(&mut out).unwrap();
        assert!(out.is_empty());
    }
}

//! Growable, bounds-checked storage used underneath [`ActivityManager`].
//!
//! `ResizableSeq` keeps its own notion of capacity and doubles it whenever an
//! append finds the buffer full. It is deliberately not `Clone`: duplicating a
//! sequence is the job of whoever knows how to copy its elements.
//!
//! [`ActivityManager`]: crate::manager::ActivityManager

use std::slice;

use crate::error::OutOfRange;

const COMPONENT: &str = "ResizableSeq";

#[derive(Debug)]
pub struct ResizableSeq<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> ResizableSeq<T> {
    pub const DEFAULT_CAPACITY: usize = 5;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// A zero capacity is bumped to one so that doubling always makes room.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: T) {
        if self.items.len() == self.capacity {
            self.grow();
        }
        self.items.push(value);
    }

    /// Removes the element at `index`, shifting everything after it one slot left.
    pub fn remove_at(&mut self, index: usize) -> Result<T, OutOfRange> {
        self.check(index, "remove_at")?;
        Ok(self.items.remove(index))
    }

    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        self.check(index, "at")?;
        Ok(&self.items[index])
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.check(index, "at_mut")?;
        Ok(&mut self.items[index])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every element. Capacity is kept; the sequence never shrinks.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    fn check(&self, index: usize, operation: &'static str) -> Result<(), OutOfRange> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(OutOfRange::new(COMPONENT, operation, index, self.items.len()))
        }
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity * 2;
        tracing::trace!(from = self.capacity, to = new_capacity, "growing sequence");

        let mut items = Vec::with_capacity(new_capacity);
        items.extend(self.items.drain(..));
        self.items = items;
        self.capacity = new_capacity;
    }
}

impl<T> Default for ResizableSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a ResizableSeq<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

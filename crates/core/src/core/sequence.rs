//! Sorted sequence with dedupe-on-insert.
//!
//! `OrderedSequence` keeps its elements in ascending `Ord` order and refuses
//! to store a second element that compares equal to one already present.
//! Inserts are a linear scan; the sequence is sized by the alphabet, never by
//! the input length.

use crate::error::{HuffError, Result};

/// Ascending, duplicate-free sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedSequence<T> {
    items: Vec<T>,
}

impl<T: Ord> OrderedSequence<T> {
    /// Create a new empty sequence.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a new sequence with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Insert an item at its sorted position.
    ///
    /// If an element comparing equal is already stored the item is dropped
    /// and the sequence is left unchanged. Returns whether the item was kept.
    pub fn insert(&mut self, item: T) -> bool {
        let mut pos = self.items.len();

        for (i, existing) in self.items.iter().enumerate() {
            match item.cmp(existing) {
                std::cmp::Ordering::Equal => return false,
                std::cmp::Ordering::Less => {
                    pos = i;
                    break;
                }
                std::cmp::Ordering::Greater => {}
            }
        }

        self.items.insert(pos, item);
        true
    }

    /// Remove the first element equal to `item`.
    ///
    /// Fails with `NotFound` if the value is absent or the sequence is empty.
    pub fn remove_value(&mut self, item: &T) -> Result<T> {
        let pos = self
            .items
            .iter()
            .position(|existing| existing == item)
            .ok_or(HuffError::NotFound)?;

        Ok(self.items.remove(pos))
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Get the element at `index` without removing it.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.items[index])
    }

    /// Index of the first element equal to `item`.
    ///
    /// Returns `Ok(None)` when the value is absent and `Err(Empty)` when the
    /// sequence has no elements at all.
    pub fn index_of(&self, item: &T) -> Result<Option<usize>> {
        if self.items.is_empty() {
            return Err(HuffError::Empty);
        }

        Ok(self.items.iter().position(|existing| existing == item))
    }

    /// Remove and return the smallest element.
    pub fn pop_first(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// The smallest element, if any.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Check whether an equal element is stored.
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if self.items.is_empty() {
            return Err(HuffError::Empty);
        }
        if index >= self.items.len() {
            return Err(HuffError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}

impl<T> OrderedSequence<T> {
    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the sequence has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Consume the sequence, returning its elements in ascending order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Ord> Default for OrderedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for OrderedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::new();
        sequence.extend(iter);
        sequence
    }
}

impl<'a, T> IntoIterator for &'a OrderedSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

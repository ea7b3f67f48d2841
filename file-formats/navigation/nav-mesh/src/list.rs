//! Ordered list container used for per-entity connection lists

use std::slice;

use crate::error::{Error, Result};

/// A resizable sequence that keeps insertion order
///
/// Backed by a `Vec`, so appending is amortized O(1) while positional
/// insertion and [`find`](OrderedList::find) are O(n). The lists held by a
/// navigation mesh are short (one per direction or ladder end), never the
/// whole mesh.
///
/// # Examples
///
/// ```
/// use nav_mesh::OrderedList;
///
/// let mut list = OrderedList::new();
/// list.append(2);
/// list.prepend(1);
/// list.insert(3, 2).unwrap();
///
/// assert_eq!(list.size(), 3);
/// assert_eq!(*list.at(0).unwrap(), 1);
/// assert_eq!(list.find(&3), 2);
/// assert_eq!(list.find(&9), list.size());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> OrderedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty list with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Insert `item` before position `index`
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `index > size()`, in which
    /// case the list is left untouched.
    #[must_use = "insertion can fail and the result must be checked"]
    pub fn insert(&mut self, item: T, index: usize) -> Result<()> {
        if index > self.items.len() {
            return Err(Error::IndexOutOfRange {
                index,
                size: self.items.len(),
            });
        }
        self.items.insert(index, item);
        Ok(())
    }

    /// Add `item` at the end
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Add `item` at the front
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Element at `index`
    pub fn at(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(Error::IndexOutOfRange {
            index,
            size: self.items.len(),
        })
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the elements as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> OrderedList<T> {
    /// Index of the first element equal to `item`
    ///
    /// Returns `size()` (evaluated at call time) when no element matches.
    /// Indices are unsigned, so the list length doubles as the not-found
    /// value: any result `>= size()` means "absent".
    pub fn find(&self, item: &T) -> usize {
        self.items
            .iter()
            .position(|candidate| candidate == item)
            .unwrap_or(self.items.len())
    }

    /// Check if any element equals `item`
    pub fn contains(&self, item: &T) -> bool {
        self.find(item) < self.size()
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

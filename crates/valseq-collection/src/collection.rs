//! Value-equal collection - the shared owned-storage component
//!
//! Operations split into two families with different aliasing behavior:
//!
//! - **In place** (`push`, `pop`, `shift`, `unshift`, `splice`, `remove`,
//!   `reverse`): mutate the owned buffer and return a count or the removed
//!   element(s).
//! - **New instance** (`sort`, `sort_by`, `fill`, `copy_within`): leave the
//!   buffer untouched and return a freshly constructed collection built from a
//!   deep copy of the current contents.
//!
//! Index arguments are relative: negative values count back from the end and
//! out-of-range values are clamped to the buffer bounds.

use crate::{Result, SequenceError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Enumerate, FusedIterator};
use std::ops::Range;
use std::slice;
use tracing::{debug, trace};
use valseq_domain::{deep_clone_slice, value_position, value_rposition, DeepClone, ValueEquality};

/// Resolve a relative index against `len`, clamping into `0..=len`
fn resolve_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(len)
    }
}

/// Ordered buffer of elements searched by value equality
///
/// The buffer is exclusively owned: construction deep-copies its input,
/// [`items`](Self::items) hands out deep snapshots, and new-instance
/// transforms never share storage with `self`.
///
/// # Examples
///
/// ```
/// use valseq_collection::ValueCollection;
///
/// let mut numbers = ValueCollection::new(&[3, 1, 2]);
/// assert_eq!(numbers.push([4]), 4);
///
/// let sorted = numbers.sort();
/// assert_eq!(sorted.as_slice(), &[1, 2, 3, 4]);
/// assert_eq!(numbers.as_slice(), &[3, 1, 2, 4]);
/// ```
#[derive(Debug)]
pub struct ValueCollection<T> {
    storage: Vec<T>,
}

impl<T: ValueEquality + DeepClone> ValueCollection<T> {
    /// Create a collection from a deep copy of `items`
    pub fn new(items: &[T]) -> Self {
        Self::adopt(deep_clone_slice(items))
    }

    /// Create a collection from an owned buffer
    ///
    /// Elements are still deep-copied: the caller may hold shared handles
    /// (`Rc`, `Arc`) into them that would otherwise alias the storage.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::new(&items)
    }

    /// Take ownership of a buffer nothing else can reach
    fn adopt(storage: Vec<T>) -> Self {
        debug!("Constructed value collection with {} elements", storage.len());
        Self { storage }
    }

    /// Deep snapshot of the current contents
    ///
    /// Mutating the returned buffer never affects the collection.
    pub fn items(&self) -> Vec<T> {
        deep_clone_slice(&self.storage)
    }

    /// Borrowed view of the current contents
    ///
    /// This is not a snapshot. Elements with interior mutability (`RefCell`,
    /// `Cell`, or shared pointers to them) can be changed through the view;
    /// use [`items`](Self::items) or [`at`](Self::at) for independent copies.
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// True when the collection holds no elements
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Deep copy of the element at a relative index, or `None` when out of range
    pub fn at(&self, index: isize) -> Option<T> {
        let position = if index < 0 {
            self.storage.len().checked_sub(index.unsigned_abs())?
        } else {
            index.unsigned_abs()
        };
        self.storage.get(position).map(DeepClone::deep_clone)
    }

    /// Deep copy of the `[start, end)` range
    ///
    /// `None` bounds default to the start and end of the collection.
    pub fn slice(&self, start: Option<isize>, end: Option<isize>) -> Vec<T> {
        let range = self.resolve_range(start, end);
        deep_clone_slice(&self.storage[range])
    }

    /// Render every element with `Display` and join them with `separator`
    pub fn join(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        self.storage
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Deep copy of the contents followed by each of `others`
    pub fn concat(&self, others: &[&[T]]) -> Vec<T> {
        let extra: usize = others.iter().map(|other| other.len()).sum();
        let mut combined = Vec::with_capacity(self.storage.len() + extra);
        combined.extend(self.storage.iter().map(DeepClone::deep_clone));
        for other in others {
            combined.extend(other.iter().map(DeepClone::deep_clone));
        }
        combined
    }

    /// Lazily iterate over deep copies of the elements, in order
    ///
    /// Each call starts a fresh pass over the current contents.
    pub fn iter(&self) -> Values<'_, T> {
        Values {
            inner: self.storage.iter(),
        }
    }

    /// Iterate over `(index, copy)` pairs
    pub fn entries(&self) -> Enumerate<Values<'_, T>> {
        self.iter().enumerate()
    }

    /// Iterate over valid indices
    pub fn keys(&self) -> Range<usize> {
        0..self.storage.len()
    }

    /// Same as [`iter`](Self::iter)
    pub fn values(&self) -> Values<'_, T> {
        self.iter()
    }

    /// Position of the first element value-equal to `needle`
    pub fn index_of(&self, needle: &T) -> Option<usize> {
        let found = value_position(&self.storage, needle);
        trace!("index_of scanned {} elements, found {:?}", self.storage.len(), found);
        found
    }

    /// Position of the last element value-equal to `needle`
    pub fn last_index_of(&self, needle: &T) -> Option<usize> {
        let found = value_rposition(&self.storage, needle);
        trace!("last_index_of scanned {} elements, found {:?}", self.storage.len(), found);
        found
    }

    /// True when some element is value-equal to `needle`
    pub fn includes(&self, needle: &T) -> bool {
        self.index_of(needle).is_some()
    }

    /// Like [`includes`](Self::includes), starting the scan at a relative index
    pub fn includes_from(&self, needle: &T, from: isize) -> bool {
        let start = resolve_index(from, self.storage.len());
        value_position(&self.storage[start..], needle).is_some()
    }

    /// Deep copy of the first element matching `predicate`
    pub fn find<F>(&self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        let all = self.storage.as_slice();
        all.iter()
            .enumerate()
            .find(|(i, item)| predicate(*item, *i, all))
            .map(|(_, item)| item.deep_clone())
    }

    /// Position of the first element matching `predicate`
    pub fn find_index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        let all = self.storage.as_slice();
        all.iter().enumerate().position(|(i, item)| predicate(item, i, all))
    }

    /// Deep copies of the elements matching `predicate`, in order
    pub fn filter<F>(&self, mut predicate: F) -> Vec<T>
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        let all = self.storage.as_slice();
        all.iter()
            .enumerate()
            .filter(|(i, item)| predicate(*item, *i, all))
            .map(|(_, item)| item.deep_clone())
            .collect()
    }

    /// True when at least one element matches
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        let all = self.storage.as_slice();
        all.iter().enumerate().any(|(i, item)| predicate(item, i, all))
    }

    /// True when every element matches; vacuously true when empty
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        let all = self.storage.as_slice();
        all.iter().enumerate().all(|(i, item)| predicate(item, i, all))
    }

    /// Call `callback` on every element in order
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&T, usize, &[T]),
    {
        let all = self.storage.as_slice();
        for (i, item) in all.iter().enumerate() {
            callback(item, i, all);
        }
    }

    /// Project every element through `callback`
    pub fn map<U, F>(&self, mut callback: F) -> Vec<U>
    where
        F: FnMut(&T, usize, &[T]) -> U,
    {
        let all = self.storage.as_slice();
        all.iter().enumerate().map(|(i, item)| callback(item, i, all)).collect()
    }

    /// Project every element to zero or more values and flatten one level
    pub fn flat_map<U, I, F>(&self, mut callback: F) -> Vec<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T, usize, &[T]) -> I,
    {
        let all = self.storage.as_slice();
        all.iter().enumerate().flat_map(|(i, item)| callback(item, i, all)).collect()
    }

    /// Flatten nested elements one level deep
    pub fn flat<U>(&self) -> Vec<U>
    where
        T: IntoIterator<Item = U>,
    {
        self.storage.iter().flat_map(|item| item.deep_clone()).collect()
    }

    /// Fold left to right using the first element as the seed
    ///
    /// # Errors
    /// Returns [`SequenceError::EmptyWithoutSeed`] on an empty collection.
    pub fn reduce<F>(&self, mut callback: F) -> Result<T>
    where
        F: FnMut(T, &T, usize, &[T]) -> T,
    {
        let all = self.storage.as_slice();
        let (first, rest) = all.split_first().ok_or(SequenceError::EmptyWithoutSeed)?;
        let mut acc = first.deep_clone();
        for (offset, item) in rest.iter().enumerate() {
            acc = callback(acc, item, offset + 1, all);
        }
        Ok(acc)
    }

    /// Fold left to right from an explicit seed
    ///
    /// The seed is always used, whatever its value.
    pub fn reduce_with<U, F>(&self, init: U, mut callback: F) -> U
    where
        F: FnMut(U, &T, usize, &[T]) -> U,
    {
        let all = self.storage.as_slice();
        all.iter()
            .enumerate()
            .fold(init, |acc, (i, item)| callback(acc, item, i, all))
    }

    /// Fold left to right, seeding from `seed` when present
    ///
    /// Presence is the `Option` variant: `Some(0)`, `Some(false)` or
    /// `Some(String::new())` all seed the fold.
    pub fn reduce_seeded<F>(&self, callback: F, seed: Option<T>) -> Result<T>
    where
        F: FnMut(T, &T, usize, &[T]) -> T,
    {
        match seed {
            Some(init) => Ok(self.reduce_with(init, callback)),
            None => self.reduce(callback),
        }
    }

    /// Fold right to left using the last element as the seed
    ///
    /// # Errors
    /// Returns [`SequenceError::EmptyWithoutSeed`] on an empty collection.
    pub fn reduce_right<F>(&self, mut callback: F) -> Result<T>
    where
        F: FnMut(T, &T, usize, &[T]) -> T,
    {
        let all = self.storage.as_slice();
        let (last, rest) = all.split_last().ok_or(SequenceError::EmptyWithoutSeed)?;
        let mut acc = last.deep_clone();
        for (i, item) in rest.iter().enumerate().rev() {
            acc = callback(acc, item, i, all);
        }
        Ok(acc)
    }

    /// Fold right to left from an explicit seed
    pub fn reduce_right_with<U, F>(&self, init: U, mut callback: F) -> U
    where
        F: FnMut(U, &T, usize, &[T]) -> U,
    {
        let all = self.storage.as_slice();
        all.iter()
            .enumerate()
            .rev()
            .fold(init, |acc, (i, item)| callback(acc, item, i, all))
    }

    /// Fold right to left, seeding from `seed` when present
    pub fn reduce_right_seeded<F>(&self, callback: F, seed: Option<T>) -> Result<T>
    where
        F: FnMut(T, &T, usize, &[T]) -> T,
    {
        match seed {
            Some(init) => Ok(self.reduce_right_with(init, callback)),
            None => self.reduce_right(callback),
        }
    }

    /// Append `items`, returning the new length
    pub fn push<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        self.storage.extend(items);
        debug!("push: length now {}", self.storage.len());
        self.storage.len()
    }

    /// Remove and return the last element
    pub fn pop(&mut self) -> Option<T> {
        let popped = self.storage.pop();
        debug!("pop: length now {}", self.storage.len());
        popped
    }

    /// Remove and return the first element
    pub fn shift(&mut self) -> Option<T> {
        if self.storage.is_empty() {
            return None;
        }
        let shifted = self.storage.remove(0);
        debug!("shift: length now {}", self.storage.len());
        Some(shifted)
    }

    /// Prepend `items` in their given order, returning the new length
    pub fn unshift<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        let tail = std::mem::take(&mut self.storage);
        self.storage.extend(items);
        self.storage.extend(tail);
        debug!("unshift: length now {}", self.storage.len());
        self.storage.len()
    }

    /// Remove `delete_count` elements at `start` and insert `inserts` there
    ///
    /// `None` deletes everything from `start` to the end; `Some(0)` deletes
    /// nothing. Returns the removed elements in order.
    pub fn splice<I>(&mut self, start: isize, delete_count: Option<usize>, inserts: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.storage.len();
        let from = resolve_index(start, len);
        let count = delete_count.map_or(len - from, |count| count.min(len - from));
        let removed: Vec<T> = self.storage.splice(from..from + count, inserts).collect();
        debug!(
            "splice at {}: removed {}, length now {}",
            from,
            removed.len(),
            self.storage.len()
        );
        removed
    }

    /// Delete every element matching `predicate`, keeping the rest in order
    ///
    /// Returns the number of deleted elements.
    pub fn remove<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.storage.len();
        self.storage.retain(|item| !predicate(item));
        let deleted = before - self.storage.len();
        debug!("remove: deleted {}, length now {}", deleted, self.storage.len());
        deleted
    }

    /// Reverse the order in place
    pub fn reverse(&mut self) -> &[T] {
        self.storage.reverse();
        debug!("reverse: {} elements", self.storage.len());
        &self.storage
    }

    /// New collection ordered by `Ord`; `self` is left unchanged
    pub fn sort(&self) -> Self
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp)
    }

    /// New collection stably ordered by `compare`; `self` is left unchanged
    pub fn sort_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut items = self.items();
        items.sort_by(compare);
        debug!("sort: produced new collection of {} elements", items.len());
        Self::adopt(items)
    }

    /// New collection with `[start, end)` overwritten by copies of `value`
    ///
    /// `self` is left unchanged.
    pub fn fill(&self, value: T, start: Option<isize>, end: Option<isize>) -> Self {
        let range = self.resolve_range(start, end);
        let mut items = self.items();
        for slot in &mut items[range.clone()] {
            *slot = value.deep_clone();
        }
        debug!("fill: produced new collection, {} positions filled", range.len());
        Self::adopt(items)
    }

    /// New collection with `[start, end)` copied over the positions at `target`
    ///
    /// The copied run is truncated at the end of the collection. `self` is
    /// left unchanged.
    pub fn copy_within(&self, target: isize, start: isize, end: Option<isize>) -> Self {
        let len = self.storage.len();
        let to = resolve_index(target, len);
        let source = self.resolve_range(Some(start), end);
        let count = source.len().min(len - to);

        let mut items = self.items();
        let copied = deep_clone_slice(&self.storage[source.start..source.start + count]);
        for (slot, value) in items[to..to + count].iter_mut().zip(copied) {
            *slot = value;
        }
        debug!("copy_within: produced new collection, {} positions copied", count);
        Self::adopt(items)
    }

    fn resolve_range(&self, start: Option<isize>, end: Option<isize>) -> Range<usize> {
        let len = self.storage.len();
        let from = start.map_or(0, |index| resolve_index(index, len));
        let to = end.map_or(len, |index| resolve_index(index, len));
        from..to.max(from)
    }
}

impl<T> Default for ValueCollection<T> {
    fn default() -> Self {
        Self { storage: Vec::new() }
    }
}

impl<T: ValueEquality + DeepClone> DeepClone for ValueCollection<T> {
    fn deep_clone(&self) -> Self {
        Self::adopt(self.items())
    }
}

/// Cloning a collection deep-copies its storage
impl<T: ValueEquality + DeepClone> Clone for ValueCollection<T> {
    fn clone(&self) -> Self {
        self.deep_clone()
    }
}

/// Same length and pairwise value-equal
impl<T: ValueEquality> ValueEquality for ValueCollection<T> {
    fn compare(&self, other: &Self) -> bool {
        self.storage.compare(&other.storage)
    }
}

impl<T: ValueEquality> PartialEq for ValueCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other)
    }
}

impl<T: ValueEquality + DeepClone> FromIterator<T> for ValueCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: ValueEquality + DeepClone> From<&[T]> for ValueCollection<T> {
    fn from(items: &[T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T: ValueEquality + DeepClone> IntoIterator for &'a ValueCollection<T> {
    type Item = T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over deep copies of a collection's elements
///
/// Created by [`ValueCollection::iter`] and [`ValueCollection::values`].
#[derive(Debug, Clone)]
pub struct Values<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<T: DeepClone> Iterator for Values<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(DeepClone::deep_clone)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: DeepClone> DoubleEndedIterator for Values<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(DeepClone::deep_clone)
    }
}

impl<T: DeepClone> ExactSizeIterator for Values<'_, T> {}

impl<T: DeepClone> FusedIterator for Values<'_, T> {}

impl<T> IntoIterator for ValueCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<T: Serialize> Serialize for ValueCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.storage.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for ValueCollection<T>
where
    T: ValueEquality + DeepClone + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::adopt)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: push then pop restores the previous contents
        #[test]
        fn test_push_pop_round_trip(items in prop::collection::vec(any::<i32>(), 0..32), x in any::<i32>()) {
            let mut collection = ValueCollection::new(&items);
            let before = collection.items();

            prop_assert_eq!(collection.push([x]), before.len() + 1);
            prop_assert_eq!(collection.pop(), Some(x));
            prop_assert_eq!(collection.as_slice(), before.as_slice());
        }

        /// Property: sort never reorders the source collection
        #[test]
        fn test_sort_leaves_source_untouched(items in prop::collection::vec(any::<i16>(), 0..32)) {
            let collection = ValueCollection::new(&items);
            let sorted = collection.sort();

            let mut expected = items.clone();
            expected.sort();
            prop_assert_eq!(sorted.as_slice(), expected.as_slice());
            prop_assert_eq!(collection.as_slice(), items.as_slice());
        }

        /// Property: remove keeps exactly the non-matching elements, in order
        #[test]
        fn test_remove_polarity(items in prop::collection::vec(0u8..10, 0..32), pivot in 0u8..10) {
            let mut collection = ValueCollection::new(&items);
            let deleted = collection.remove(|x| *x < pivot);

            let kept: Vec<u8> = items.iter().copied().filter(|x| *x >= pivot).collect();
            prop_assert_eq!(collection.as_slice(), kept.as_slice());
            prop_assert_eq!(deleted, items.len() - kept.len());
        }

        /// Property: index_of finds the first and last_index_of the last match
        #[test]
        fn test_index_scans(items in prop::collection::vec(0u8..4, 0..32), needle in 0u8..4) {
            let collection = ValueCollection::new(&items);
            prop_assert_eq!(collection.index_of(&needle), items.iter().position(|x| *x == needle));
            prop_assert_eq!(collection.last_index_of(&needle), items.iter().rposition(|x| *x == needle));
            prop_assert_eq!(collection.includes(&needle), items.contains(&needle));
        }
    }
}

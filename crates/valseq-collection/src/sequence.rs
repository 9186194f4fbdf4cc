//! Sequence operation set for domain collections
//!
//! Domain collections compose a [`ValueCollection`] and implement
//! [`ValueSequence`] by pointing at it; every operation is then provided.
//! New-instance transforms rebuild the concrete type through
//! [`ValueSequence::from_collection`], so a domain type's own construction
//! logic runs for every instance it hands out.

use crate::{Result, ValueCollection, Values};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Enumerate;
use std::ops::Range;
use valseq_domain::{DeepClone, ValueEquality};

/// Full read/mutate/transform surface of a value-equal sequence
///
/// # Examples
///
/// ```
/// use valseq_collection::{ValueCollection, ValueSequence};
/// use valseq_domain::ValueEquality;
///
/// #[derive(Debug, Clone)]
/// struct Tag(String);
///
/// impl ValueEquality for Tag {
///     fn compare(&self, other: &Self) -> bool {
///         self.0.eq_ignore_ascii_case(&other.0)
///     }
/// }
///
/// valseq_domain::deep_clone_via_clone!(Tag);
///
/// struct Tags(ValueCollection<Tag>);
///
/// impl ValueSequence for Tags {
///     type Item = Tag;
///
///     fn collection(&self) -> &ValueCollection<Tag> {
///         &self.0
///     }
///
///     fn collection_mut(&mut self) -> &mut ValueCollection<Tag> {
///         &mut self.0
///     }
///
///     fn from_collection(collection: ValueCollection<Tag>) -> Self {
///         Tags(collection)
///     }
/// }
///
/// let mut tags = Tags::from_items(&[Tag("Rust".into())]);
/// tags.push([Tag("serde".into())]);
/// assert!(tags.includes(&Tag("RUST".into())));
/// assert_eq!(tags.len(), 2);
/// ```
pub trait ValueSequence: Sized {
    /// Element type
    type Item: ValueEquality + DeepClone;

    /// The composed storage component
    fn collection(&self) -> &ValueCollection<Self::Item>;

    /// Mutable access to the composed storage component
    fn collection_mut(&mut self) -> &mut ValueCollection<Self::Item>;

    /// Construction protocol used by every new-instance transform
    fn from_collection(collection: ValueCollection<Self::Item>) -> Self;

    /// Construct from a deep copy of `items`
    fn from_items(items: &[Self::Item]) -> Self {
        Self::from_collection(ValueCollection::new(items))
    }

    /// Deep snapshot of the current contents
    fn items(&self) -> Vec<Self::Item> {
        self.collection().items()
    }

    /// Borrowed view of the current contents; not a snapshot
    fn as_slice(&self) -> &[Self::Item] {
        self.collection().as_slice()
    }

    /// Number of elements
    fn len(&self) -> usize {
        self.collection().len()
    }

    /// True when empty
    fn is_empty(&self) -> bool {
        self.collection().is_empty()
    }

    /// Deep copy of the element at a relative index
    fn at(&self, index: isize) -> Option<Self::Item> {
        self.collection().at(index)
    }

    /// Deep copy of `[start, end)`
    fn slice(&self, start: Option<isize>, end: Option<isize>) -> Vec<Self::Item> {
        self.collection().slice(start, end)
    }

    /// Join the `Display` form of every element
    fn join(&self, separator: &str) -> String
    where
        Self::Item: fmt::Display,
    {
        self.collection().join(separator)
    }

    /// Deep copy of the contents followed by `others`
    fn concat(&self, others: &[&[Self::Item]]) -> Vec<Self::Item> {
        self.collection().concat(others)
    }

    /// Iterate over deep copies of the elements
    fn iter(&self) -> Values<'_, Self::Item> {
        self.collection().iter()
    }

    /// Iterate over `(index, copy)` pairs
    fn entries(&self) -> Enumerate<Values<'_, Self::Item>> {
        self.collection().entries()
    }

    /// Iterate over indices
    fn keys(&self) -> Range<usize> {
        self.collection().keys()
    }

    /// Iterate over deep copies of the elements
    fn values(&self) -> Values<'_, Self::Item> {
        self.collection().values()
    }

    /// First value-equal position
    fn index_of(&self, needle: &Self::Item) -> Option<usize> {
        self.collection().index_of(needle)
    }

    /// Last value-equal position
    fn last_index_of(&self, needle: &Self::Item) -> Option<usize> {
        self.collection().last_index_of(needle)
    }

    /// Value-equal membership
    fn includes(&self, needle: &Self::Item) -> bool {
        self.collection().includes(needle)
    }

    /// Value-equal membership from a relative index
    fn includes_from(&self, needle: &Self::Item, from: isize) -> bool {
        self.collection().includes_from(needle, from)
    }

    /// Deep copy of the first matching element
    fn find<F>(&self, predicate: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, usize, &[Self::Item]) -> bool,
    {
        self.collection().find(predicate)
    }

    /// First matching position
    fn find_index<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&Self::Item, usize, &[Self::Item]) -> bool,
    {
        self.collection().find_index(predicate)
    }

    /// Deep copies of matching elements
    fn filter<F>(&self, predicate: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item, usize, &[Self::Item]) -> bool,
    {
        self.collection().filter(predicate)
    }

    /// Any element matches
    fn some<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Self::Item, usize, &[Self::Item]) -> bool,
    {
        self.collection().some(predicate)
    }

    /// Every element matches
    fn every<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Self::Item, usize, &[Self::Item]) -> bool,
    {
        self.collection().every(predicate)
    }

    /// Visit every element
    fn for_each<F>(&self, callback: F)
    where
        F: FnMut(&Self::Item, usize, &[Self::Item]),
    {
        self.collection().for_each(callback)
    }

    /// Project every element
    fn map<U, F>(&self, callback: F) -> Vec<U>
    where
        F: FnMut(&Self::Item, usize, &[Self::Item]) -> U,
    {
        self.collection().map(callback)
    }

    /// Project and flatten one level
    fn flat_map<U, I, F>(&self, callback: F) -> Vec<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&Self::Item, usize, &[Self::Item]) -> I,
    {
        self.collection().flat_map(callback)
    }

    /// Flatten nested elements one level
    fn flat<U>(&self) -> Vec<U>
    where
        Self::Item: IntoIterator<Item = U>,
    {
        self.collection().flat()
    }

    /// Seedless left fold
    fn reduce<F>(&self, callback: F) -> Result<Self::Item>
    where
        F: FnMut(Self::Item, &Self::Item, usize, &[Self::Item]) -> Self::Item,
    {
        self.collection().reduce(callback)
    }

    /// Seeded left fold
    fn reduce_with<U, F>(&self, init: U, callback: F) -> U
    where
        F: FnMut(U, &Self::Item, usize, &[Self::Item]) -> U,
    {
        self.collection().reduce_with(init, callback)
    }

    /// Left fold seeded by presence of `seed`
    fn reduce_seeded<F>(&self, callback: F, seed: Option<Self::Item>) -> Result<Self::Item>
    where
        F: FnMut(Self::Item, &Self::Item, usize, &[Self::Item]) -> Self::Item,
    {
        self.collection().reduce_seeded(callback, seed)
    }

    /// Seedless right fold
    fn reduce_right<F>(&self, callback: F) -> Result<Self::Item>
    where
        F: FnMut(Self::Item, &Self::Item, usize, &[Self::Item]) -> Self::Item,
    {
        self.collection().reduce_right(callback)
    }

    /// Seeded right fold
    fn reduce_right_with<U, F>(&self, init: U, callback: F) -> U
    where
        F: FnMut(U, &Self::Item, usize, &[Self::Item]) -> U,
    {
        self.collection().reduce_right_with(init, callback)
    }

    /// Right fold seeded by presence of `seed`
    fn reduce_right_seeded<F>(&self, callback: F, seed: Option<Self::Item>) -> Result<Self::Item>
    where
        F: FnMut(Self::Item, &Self::Item, usize, &[Self::Item]) -> Self::Item,
    {
        self.collection().reduce_right_seeded(callback, seed)
    }

    /// Append in place, returning the new length
    fn push<I: IntoIterator<Item = Self::Item>>(&mut self, items: I) -> usize {
        self.collection_mut().push(items)
    }

    /// Remove the last element in place
    fn pop(&mut self) -> Option<Self::Item> {
        self.collection_mut().pop()
    }

    /// Remove the first element in place
    fn shift(&mut self) -> Option<Self::Item> {
        self.collection_mut().shift()
    }

    /// Prepend in place, returning the new length
    fn unshift<I: IntoIterator<Item = Self::Item>>(&mut self, items: I) -> usize {
        self.collection_mut().unshift(items)
    }

    /// Remove and insert in place, returning the removed elements
    fn splice<I>(&mut self, start: isize, delete_count: Option<usize>, inserts: I) -> Vec<Self::Item>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        self.collection_mut().splice(start, delete_count, inserts)
    }

    /// Delete matching elements in place, returning how many were deleted
    fn remove<F>(&mut self, predicate: F) -> usize
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.collection_mut().remove(predicate)
    }

    /// Reverse in place
    fn reverse(&mut self) -> &[Self::Item] {
        self.collection_mut().reverse()
    }

    /// New instance ordered by `Ord`
    fn sort(&self) -> Self
    where
        Self::Item: Ord,
    {
        Self::from_collection(self.collection().sort())
    }

    /// New instance stably ordered by `compare`
    fn sort_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Self::from_collection(self.collection().sort_by(compare))
    }

    /// New instance with `[start, end)` filled with `value`
    fn fill(&self, value: Self::Item, start: Option<isize>, end: Option<isize>) -> Self {
        Self::from_collection(self.collection().fill(value, start, end))
    }

    /// New instance with `[start, end)` copied to `target`
    fn copy_within(&self, target: isize, start: isize, end: Option<isize>) -> Self {
        Self::from_collection(self.collection().copy_within(target, start, end))
    }
}

impl<T: ValueEquality + DeepClone> ValueSequence for ValueCollection<T> {
    type Item = T;

    fn collection(&self) -> &ValueCollection<T> {
        self
    }

    fn collection_mut(&mut self) -> &mut ValueCollection<T> {
        self
    }

    fn from_collection(collection: ValueCollection<T>) -> Self {
        collection
    }
}

/// Declare a domain collection newtype wired to [`ValueSequence`]
///
/// ```
/// use valseq_collection::{value_sequence, ValueSequence};
///
/// value_sequence! {
///     /// Scores recorded in order
///     #[derive(Debug, Clone, Default)]
///     pub struct Scores(u32);
/// }
///
/// let scores = Scores::from_items(&[3, 1, 2]);
/// assert_eq!(scores.sort().as_slice(), &[1, 2, 3]);
/// ```
#[macro_export]
macro_rules! value_sequence {
    ($(#[$meta:meta])* $vis:vis struct $name:ident($item:ty);) => {
        $(#[$meta])*
        $vis struct $name($crate::ValueCollection<$item>);

        impl $crate::ValueSequence for $name {
            type Item = $item;

            fn collection(&self) -> &$crate::ValueCollection<$item> {
                &self.0
            }

            fn collection_mut(&mut self) -> &mut $crate::ValueCollection<$item> {
                &mut self.0
            }

            fn from_collection(collection: $crate::ValueCollection<$item>) -> Self {
                Self(collection)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        static CONSTRUCTED: Cell<usize> = const { Cell::new(0) };
    }

    /// Domain collection that counts how often it is constructed
    struct Counted(ValueCollection<i32>);

    impl ValueSequence for Counted {
        type Item = i32;

        fn collection(&self) -> &ValueCollection<i32> {
            &self.0
        }

        fn collection_mut(&mut self) -> &mut ValueCollection<i32> {
            &mut self.0
        }

        fn from_collection(collection: ValueCollection<i32>) -> Self {
            CONSTRUCTED.with(|count| count.set(count.get() + 1));
            Counted(collection)
        }
    }

    fn constructed() -> usize {
        CONSTRUCTED.with(Cell::get)
    }

    #[test]
    fn test_transforms_route_through_construction() {
        let counted = Counted::from_items(&[2, 1]);
        let start = constructed();

        let sorted = counted.sort();
        let filled = counted.fill(0, None, None);
        let copied = counted.copy_within(0, 1, None);

        assert_eq!(constructed(), start + 3);
        assert_eq!(sorted.as_slice(), &[1, 2]);
        assert_eq!(filled.as_slice(), &[0, 0]);
        assert_eq!(copied.as_slice(), &[1, 1]);
        assert_eq!(counted.as_slice(), &[2, 1]);
    }

    #[test]
    fn test_in_place_ops_do_not_construct() {
        let mut counted = Counted::from_items(&[1]);
        let start = constructed();

        counted.push([2, 3]);
        counted.pop();
        counted.unshift([0]);
        counted.shift();
        counted.splice(0, Some(1), [5]);
        counted.remove(|x| *x == 2);
        counted.reverse();

        assert_eq!(constructed(), start);
        assert_eq!(counted.as_slice(), &[5]);
    }

    #[test]
    fn test_trait_surface_on_collection() {
        let mut collection = <ValueCollection<i32> as ValueSequence>::from_items(&[1, 2, 3]);
        assert_eq!(ValueSequence::len(&collection), 3);
        assert_eq!(ValueSequence::push(&mut collection, [4]), 4);
        assert_eq!(ValueSequence::reduce_with(&collection, 0, |acc, x, _, _| acc + x), 10);
        assert_eq!(ValueSequence::sort_by(&collection, |a, b| b.cmp(a)).as_slice(), &[4, 3, 2, 1]);
    }

    value_sequence! {
        #[derive(Debug, Default)]
        struct Names(String);
    }

    #[test]
    fn test_macro_declared_sequence() {
        let mut names = Names::default();
        names.push([String::from("b"), String::from("a")]);

        assert!(names.includes(&String::from("a")));
        assert_eq!(names.join("+"), "b+a");
        assert_eq!(names.sort().join("+"), "a+b");
        assert_eq!(names.at(-1), Some(String::from("a")));
        assert_eq!(names.find(|n, _, _| n.starts_with('b')), Some(String::from("b")));
        assert_eq!(names.values().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}

//! An open-addressing hash set with quadratic probing.
//!
//! Elements live directly in a prime-sized slot array. Deletion leaves a
//! tombstone behind so that probe sequences passing through the slot stay
//! intact; tombstones are reclaimed by later insertions and dropped whenever
//! the table grows. The table grows to the next prime above twice its size
//! as soon as half of its slots are non-empty.

mod error;
pub mod hasher;
pub mod iter;
pub mod prime;
mod slot;
mod table;

#[cfg(feature = "arbitrary")]
mod arbitrary;
#[cfg(feature = "rayon")]
mod rayon;
#[cfg(feature = "typesize")]
mod typesize;

#[cfg(test)]
mod tests;

pub use error::TraversalError;
pub use iter::{IntoIter, Iter};
pub use slot::SlotState;

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use table::Table;

/// A hash set storing its elements in a single open-addressed array.
///
/// An element acts as its own key: two elements are the same member when
/// they compare equal, and `Hash` must agree with `Eq`. Equality may look at
/// only part of an element, in which case lookups return the *stored*
/// element rather than the probe.
///
/// # Examples
///
/// ```
/// use quadset::QuadSet;
///
/// let mut fruits = QuadSet::new();
/// assert!(fruits.insert("Apples"));
/// assert!(fruits.insert("Pears"));
/// assert!(!fruits.insert("Apples"));
/// assert_eq!(fruits.len(), 2);
/// ```
#[derive(Clone)]
pub struct QuadSet<T, S = RandomState> {
    table: Table<T, S>,
}

impl<T: Eq + Hash> QuadSet<T, RandomState> {
    /// Creates an empty set sized for no elements.
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(0, RandomState::new())
    }

    /// Creates an empty set sized for `expected` elements: the slot array
    /// starts at the smallest prime of at least `2 * expected` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadset::QuadSet;
    ///
    /// let set: QuadSet<u32> = QuadSet::with_capacity(4);
    /// assert_eq!(set.capacity(), 11);
    /// ```
    pub fn with_capacity(expected: usize) -> Self {
        Self::with_capacity_and_hasher(expected, RandomState::new())
    }
}

impl<T: Eq + Hash, S: BuildHasher> QuadSet<T, S> {
    /// Creates an empty set sized for no elements, hashing with `build_hasher`.
    pub fn with_hasher(build_hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, build_hasher)
    }

    /// Creates an empty set sized for `expected` elements, hashing with `build_hasher`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadset::hasher::PassThroughState;
    /// use quadset::QuadSet;
    ///
    /// let mut numbers = QuadSet::with_capacity_and_hasher(2, PassThroughState);
    /// numbers.insert(2u64);
    /// numbers.insert(8u64);
    /// assert!(numbers.contains(&8));
    /// ```
    pub fn with_capacity_and_hasher(expected: usize, build_hasher: S) -> Self {
        let table = Table::new(expected, build_hasher);

        Self { table }
    }

    /// Inserts an element. Returns false, leaving the set untouched, if an
    /// equal element is already present.
    ///
    /// May grow the table before returning.
    pub fn insert(&mut self, element: T) -> bool {
        self.table.insert(element)
    }

    /// Returns the stored element equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadset::QuadSet;
    /// use std::borrow::Borrow;
    /// use std::hash::{Hash, Hasher};
    ///
    /// struct Record {
    ///     id: u64,
    ///     name: &'static str,
    /// }
    ///
    /// impl PartialEq for Record {
    ///     fn eq(&self, other: &Self) -> bool {
    ///         self.id == other.id
    ///     }
    /// }
    ///
    /// impl Eq for Record {}
    ///
    /// impl Hash for Record {
    ///     fn hash<H: Hasher>(&self, state: &mut H) {
    ///         self.id.hash(state)
    ///     }
    /// }
    ///
    /// impl Borrow<u64> for Record {
    ///     fn borrow(&self) -> &u64 {
    ///         &self.id
    ///     }
    /// }
    ///
    /// let mut records = QuadSet::new();
    /// records.insert(Record { id: 7, name: "Elfar" });
    /// assert_eq!(records.find(&7u64).map(|r| r.name), Some("Elfar"));
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.table.find(key)
    }

    /// Checks if the set holds an element equal to `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.find(key).is_some()
    }

    /// Deletes the element equal to `key`, leaving a tombstone in its slot.
    /// Returns true if an element was deleted.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.take(key).is_some()
    }

    /// Like [`delete`](Self::delete), but hands the deleted element back.
    pub fn take<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.table.take(key)
    }

    /// Removes every element and tombstone. The capacity is kept.
    pub fn clear(&mut self) {
        self.table.clear();
    }
}

impl<T, S> QuadSet<T, S> {
    /// Number of elements in the set. Counts by scanning every slot.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Checks if the set holds no elements. Stops at the first occupied slot.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of slots in the underlying array. Always prime.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Number of non-empty slots: live elements plus tombstones.
    pub fn occupied_cells(&self) -> usize {
        self.table.occupied_cells()
    }

    /// Returns the hasher the set was built with.
    pub fn hasher(&self) -> &S {
        self.table.hasher()
    }

    /// Iterates over the elements in slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.table.slots())
    }

    /// Exposes the state of every slot, index by index.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadset::hasher::PassThroughState;
    /// use quadset::{QuadSet, SlotState};
    ///
    /// let mut set = QuadSet::with_capacity_and_hasher(1, PassThroughState);
    /// set.insert(3u64);
    /// set.insert(4u64);
    /// set.delete(&4u64);
    ///
    /// let layout: Vec<String> = set
    ///     .slots()
    ///     .enumerate()
    ///     .map(|(i, slot)| format!("[{}]: {}", i, slot))
    ///     .collect();
    ///
    /// assert_eq!(layout[3], "[3]: 3, active");
    /// assert_eq!(layout[4], "[4]: inactive");
    /// assert!(matches!(set.slots().nth(0), Some(SlotState::Empty)));
    /// ```
    pub fn slots(&self) -> impl ExactSizeIterator<Item = SlotState<'_, T>> + '_ {
        self.table.slots().iter().map(|slot| slot.state())
    }
}

impl<T: Eq + Hash> Default for QuadSet<T, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, S> fmt::Debug for QuadSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Eq + Hash, S: BuildHasher> PartialEq for QuadSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for QuadSet<T, S> {}

impl<T: Eq + Hash, S: BuildHasher + Default> FromIterator<T> for QuadSet<T, S> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash, S: BuildHasher> Extend<T> for QuadSet<T, S> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T, S> IntoIterator for &'a QuadSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, S> IntoIterator for QuadSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.table.into_slots())
    }
}

use crate::prime::{capacity_overflow, checked_smallest_prime_at_least, MIN_CAPACITY};
use crate::slot::Slot;
use log::{debug, trace};
use std::borrow::Borrow;
use std::cmp;
use std::hash::{BuildHasher, Hash, Hasher};
use std::mem;

fn do_hash<S: BuildHasher, T: ?Sized + Hash>(f: &S, i: &T) -> u64 {
    let mut hasher = f.build_hasher();
    i.hash(&mut hasher);
    hasher.finish()
}

fn make_slots<T>(amount: usize) -> Box<[Slot<T>]> {
    (0..amount).map(|_| Slot::Empty).collect()
}

/// Capacity after growth: the smallest prime of at least twice `capacity`.
fn grown_capacity(capacity: usize) -> usize {
    capacity
        .checked_mul(2)
        .and_then(checked_smallest_prime_at_least)
        .unwrap_or_else(|| capacity_overflow())
}

/// Walks the quadratic probe sequence `h0, h0 + 1², h0 + 2², ...` for `key`
/// and returns the first index whose slot is empty, holds an element equal
/// to `key`, or is a tombstone while `stop_on_tombstone` is set.
///
/// Terminates as long as fewer than half of the slots are non-empty and the
/// slot count is prime: the first `len / 2 + 1` probes are then pairwise
/// distinct, so at least one of them lands on an empty slot.
fn probe<T, Q>(slots: &[Slot<T>], hash: u64, key: &Q, stop_on_tombstone: bool) -> usize
where
    T: Borrow<Q>,
    Q: ?Sized + Eq,
{
    let capacity = slots.len();
    let mut index = (hash % capacity as u64) as usize;
    let mut step = 0;

    loop {
        match &slots[index] {
            Slot::Empty => return index,
            Slot::Tombstone if stop_on_tombstone => return index,
            Slot::Occupied(element) if element.borrow() == key => return index,
            _ => {}
        }

        step += 1;
        debug_assert!(step <= capacity, "probe sequence cycled");

        // i² - (i - 1)² = 2i - 1
        index = (index + 2 * step - 1) % capacity;
    }
}

/// The slot array and its occupancy counter.
///
/// `occupied_cells` counts tombstones as well as live elements and stays
/// strictly below half the capacity between calls.
#[derive(Clone)]
pub(crate) struct Table<T, S> {
    slots: Box<[Slot<T>]>,
    occupied_cells: usize,
    hash_builder: S,
}

impl<T: Eq + Hash, S: BuildHasher> Table<T, S> {
    pub(crate) fn new(expected: usize, hash_builder: S) -> Self {
        let capacity = expected
            .checked_mul(2)
            .map(|requested| cmp::max(requested, MIN_CAPACITY))
            .and_then(checked_smallest_prime_at_least)
            .unwrap_or_else(|| capacity_overflow());
        trace!("sizing table for {} elements: {} slots", expected, capacity);

        Self {
            slots: make_slots(capacity),
            occupied_cells: 0,
            hash_builder,
        }
    }

    fn hash<Q: ?Sized + Hash>(&self, key: &Q) -> u64 {
        do_hash(&self.hash_builder, key)
    }

    /// Index of the live element equal to `key`, or of the empty slot that
    /// ends its probe sequence. Never stops on a tombstone.
    fn lookup<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        probe(&self.slots, self.hash(key), key, false)
    }

    pub(crate) fn insert(&mut self, element: T) -> bool {
        let hash = self.hash(&element);
        let index = probe(&self.slots, hash, &element, true);

        match self.slots[index] {
            Slot::Occupied(_) => false,
            Slot::Tombstone => {
                // The insertion probe halts at the first tombstone, but an equal
                // element may still live further along the same sequence.
                if self.slots[probe(&self.slots, hash, &element, false)].is_occupied() {
                    return false;
                }

                self.slots[index] = Slot::Occupied(element);
                true
            }
            Slot::Empty => {
                self.slots[index] = Slot::Occupied(element);
                self.occupied_cells += 1;

                if self.occupied_cells >= self.slots.len() / 2 {
                    self.rehash(grown_capacity(self.slots.len()));
                }

                true
            }
        }
    }

    /// Moves every live element into a fresh array of `new_capacity` slots,
    /// in ascending index order. Tombstones are not carried over.
    fn rehash(&mut self, new_capacity: usize) {
        let old_slots = mem::replace(&mut self.slots, make_slots(new_capacity));
        let old_capacity = old_slots.len();
        let mut moved = 0;

        for element in old_slots.into_vec().into_iter().filter_map(Slot::into_element) {
            let index = probe(&self.slots, self.hash(&element), &element, true);
            self.slots[index] = Slot::Occupied(element);
            moved += 1;
        }

        debug!(
            "rehashed {} -> {} slots: {} elements moved, {} tombstones dropped",
            old_capacity,
            new_capacity,
            moved,
            self.occupied_cells - moved
        );

        self.occupied_cells = moved;
    }

    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.slots[self.lookup(key)].element()
    }

    pub(crate) fn take<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        let index = self.lookup(key);
        self.slots[index].bury()
    }

    pub(crate) fn clear(&mut self) {
        trace!(
            "clearing {} slots ({} occupied cells)",
            self.slots.len(),
            self.occupied_cells
        );

        self.slots = make_slots(self.slots.len());
        self.occupied_cells = 0;
    }
}

impl<T, S> Table<T, S> {
    pub(crate) fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    pub(crate) fn is_empty(&self) -> bool {
        !self.slots.iter().any(Slot::is_occupied)
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn occupied_cells(&self) -> usize {
        self.occupied_cells
    }

    pub(crate) fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    pub(crate) fn hasher(&self) -> &S {
        &self.hash_builder
    }

    pub(crate) fn into_slots(self) -> Vec<Slot<T>> {
        self.slots.into_vec()
    }
}

use crate::error::TraversalError;
use crate::slot::Slot;
use std::iter::FusedIterator;

/// Iterator over the live elements of a [`QuadSet`](crate::QuadSet), in slot order.
///
/// The set stays borrowed for as long as the iterator lives, so it cannot be
/// mutated mid-traversal. An exhausted iterator stays exhausted; call
/// [`QuadSet::iter`](crate::QuadSet::iter) again to start over.
///
/// # Examples
///
/// ```
/// use quadset::QuadSet;
///
/// let mut set = QuadSet::new();
/// set.insert("hello");
/// set.insert("world");
/// assert_eq!(set.iter().count(), 2);
/// ```
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    cursor: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            cursor: self.cursor,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Slot<T>]) -> Self {
        let mut iter = Self { slots, cursor: 0 };
        iter.cursor = iter.next_occupied(0);
        iter
    }

    /// First occupied index at or after `from`, or `slots.len()` if none.
    fn next_occupied(&self, from: usize) -> usize {
        self.slots[from..]
            .iter()
            .position(Slot::is_occupied)
            .map_or(self.slots.len(), |offset| from + offset)
    }

    /// Whether another element can be taken.
    pub fn has_next(&self) -> bool {
        self.cursor < self.slots.len()
    }

    /// Takes the next element, failing with [`TraversalError::Exhausted`]
    /// once every element has been yielded.
    pub fn try_next(&mut self) -> Result<&'a T, TraversalError> {
        let element = self
            .slots
            .get(self.cursor)
            .and_then(Slot::element)
            .ok_or(TraversalError::Exhausted)?;

        self.cursor = self.next_occupied(self.cursor + 1);
        Ok(element)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slots.len() - self.cursor;
        (usize::from(self.has_next()), Some(remaining))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the elements of a [`QuadSet`](crate::QuadSet), in slot order.
pub struct IntoIter<T> {
    slots: std::vec::IntoIter<Slot<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slots: Vec<Slot<T>>) -> Self {
        Self {
            slots: slots.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().find_map(Slot::into_element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.slots.size_hint().1)
    }
}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use crate::hasher::PassThroughState;
    use crate::{QuadSet, TraversalError};

    fn sample() -> QuadSet<u64, PassThroughState> {
        let mut set = QuadSet::with_capacity_and_hasher(8, PassThroughState);
        for key in [9, 3, 14, 0] {
            set.insert(key);
        }
        set
    }

    #[test]
    fn iter_count() {
        let mut set = QuadSet::new();
        set.insert("Johnny");
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().count(), 1);
    }

    #[test]
    fn yields_in_slot_order() {
        let set = sample();
        assert_eq!(set.capacity(), 17);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![0, 3, 9, 14]);
    }

    #[test]
    fn try_next_past_end_fails() {
        let set = sample();
        let mut iter = set.iter();

        for _ in 0..4 {
            assert!(iter.has_next());
            assert!(iter.try_next().is_ok());
        }

        assert!(!iter.has_next());
        assert_eq!(iter.try_next(), Err(TraversalError::Exhausted));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn empty_set_is_exhausted_immediately() {
        let set: QuadSet<u64> = QuadSet::new();
        let mut iter = set.iter();
        assert!(!iter.has_next());
        assert_eq!(iter.try_next(), Err(TraversalError::Exhausted));
    }

    #[test]
    fn skips_tombstones() {
        let mut set = sample();
        set.delete(&3);
        set.delete(&14);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![0, 9]);
    }

    #[test]
    fn iter_clone() {
        let set = sample();
        let mut iter = set.iter();
        iter.next();

        let iter2 = iter.clone();

        assert_eq!(iter.count(), 3);
        assert_eq!(iter2.count(), 3);
    }

    #[test]
    fn into_iter_drains_live_elements() {
        let mut set = sample();
        set.delete(&9);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![0, 3, 14]);
    }
}

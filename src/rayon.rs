use crate::slot::Slot;
use crate::QuadSet;
use core::hash::{BuildHasher, Hash};
use rayon::iter::plumbing::UnindexedConsumer;
use rayon::iter::{FromParallelIterator, IntoParallelIterator, ParallelExtend, ParallelIterator};

// The table is single-threaded: elements are gathered in parallel, then
// inserted one by one.
impl<T, S> ParallelExtend<T> for QuadSet<T, S>
where
    T: Send + Eq + Hash,
    S: BuildHasher,
{
    fn par_extend<I>(&mut self, par_iter: I)
    where
        I: IntoParallelIterator<Item = T>,
    {
        let elements: Vec<T> = par_iter.into_par_iter().collect();
        self.extend(elements);
    }
}

impl<T, S> FromParallelIterator<T> for QuadSet<T, S>
where
    T: Send + Eq + Hash,
    S: Default + BuildHasher,
{
    fn from_par_iter<I>(par_iter: I) -> Self
    where
        I: IntoParallelIterator<Item = T>,
    {
        let elements: Vec<T> = par_iter.into_par_iter().collect();
        let mut set = Self::with_capacity_and_hasher(elements.len(), S::default());
        set.extend(elements);
        set
    }
}

impl<T: Send, S> IntoParallelIterator for QuadSet<T, S> {
    type Iter = OwningIter<T>;
    type Item = T;

    fn into_par_iter(self) -> Self::Iter {
        OwningIter {
            slots: self.table.into_slots(),
        }
    }
}

pub struct OwningIter<T> {
    slots: Vec<Slot<T>>,
}

impl<T: Send> ParallelIterator for OwningIter<T> {
    type Item = T;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        self.slots
            .into_par_iter()
            .filter_map(Slot::into_element)
            .drive_unindexed(consumer)
    }
}

// This impl also enables `IntoParallelRefIterator::par_iter`
impl<'a, T: Sync, S> IntoParallelIterator for &'a QuadSet<T, S> {
    type Iter = Iter<'a, T>;
    type Item = &'a T;

    fn into_par_iter(self) -> Self::Iter {
        Iter {
            slots: self.table.slots(),
        }
    }
}

pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
}

impl<'a, T: Sync> ParallelIterator for Iter<'a, T> {
    type Item = &'a T;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        self.slots
            .into_par_iter()
            .filter_map(|slot| slot.element())
            .drive_unindexed(consumer)
    }
}

use std::fmt;
use std::mem;

/// A single cell of the slot array.
#[derive(Clone, Debug)]
pub(crate) enum Slot<T> {
    /// Never written since the array was allocated.
    Empty,
    /// Held an element that has since been deleted. Lookups walk past it,
    /// insertion may reuse it.
    Tombstone,
    Occupied(T),
}

impl<T> Slot<T> {
    pub(crate) fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    pub(crate) fn element(&self) -> Option<&T> {
        match self {
            Slot::Occupied(element) => Some(element),
            _ => None,
        }
    }

    pub(crate) fn into_element(self) -> Option<T> {
        match self {
            Slot::Occupied(element) => Some(element),
            _ => None,
        }
    }

    /// Turns an occupied slot into a tombstone and hands back its element.
    /// Empty slots and tombstones are left untouched.
    pub(crate) fn bury(&mut self) -> Option<T> {
        if !self.is_occupied() {
            return None;
        }

        mem::replace(self, Slot::Tombstone).into_element()
    }

    pub(crate) fn state(&self) -> SlotState<'_, T> {
        match self {
            Slot::Empty => SlotState::Empty,
            Slot::Tombstone => SlotState::Tombstone,
            Slot::Occupied(element) => SlotState::Occupied(element),
        }
    }
}

/// Read-only view of one cell of a [`QuadSet`](crate::QuadSet)'s slot array,
/// as yielded by [`QuadSet::slots`](crate::QuadSet::slots).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState<'a, T> {
    Empty,
    Tombstone,
    Occupied(&'a T),
}

impl<'a, T> SlotState<'a, T> {
    pub fn element(&self) -> Option<&'a T> {
        match *self {
            SlotState::Occupied(element) => Some(element),
            _ => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for SlotState<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotState::Empty => f.write_str("empty"),
            SlotState::Tombstone => f.write_str("inactive"),
            SlotState::Occupied(element) => write!(f, "{}, active", element),
        }
    }
}

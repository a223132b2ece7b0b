use super::QuadSet;
use crate::hasher::PassThroughState;
use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

/// Equal and hashed by `id` alone.
#[derive(Debug, Clone)]
struct Student {
    id: u64,
    last_name: String,
}

impl Student {
    fn new(id: u64, last_name: &str) -> Self {
        Self {
            id,
            last_name: last_name.to_owned(),
        }
    }

    fn search(id: u64) -> Self {
        Self::new(id, "")
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl Borrow<u64> for Student {
    fn borrow(&self) -> &u64 {
        &self.id
    }
}

fn roster() -> QuadSet<Student, PassThroughState> {
    let mut set = QuadSet::with_capacity_and_hasher(4, PassThroughState);
    assert!(set.insert(Student::new(1001, "Johnson")));
    assert!(set.insert(Student::new(1002, "Elfar")));
    assert!(set.insert(Student::new(2024, "Lovelace")));
    set
}

#[test]
fn find_by_search_record_returns_stored_record() {
    let set = roster();
    let found = set.find(&Student::search(1002)).map(|s| s.last_name.as_str());
    assert_eq!(found, Some("Elfar"));
}

#[test]
fn find_by_bare_key_returns_stored_record() {
    let set = roster();
    assert_eq!(
        set.find(&2024u64).map(|s| s.last_name.as_str()),
        Some("Lovelace")
    );
    assert!(set.find(&9999u64).is_none());
}

#[test]
fn same_id_different_name_is_a_duplicate() {
    let mut set = roster();
    assert!(!set.insert(Student::new(1001, "Impostor")));
    assert_eq!(set.len(), 3);
    assert_eq!(
        set.find(&1001u64).map(|s| s.last_name.as_str()),
        Some("Johnson")
    );
}

#[test]
fn delete_by_key_then_reinsert_new_record() {
    let mut set = roster();
    let taken = set.take(&1001u64);
    assert_eq!(taken.map(|s| s.last_name), Some("Johnson".to_owned()));
    assert!(!set.delete(&Student::search(1001)));

    assert!(set.insert(Student::new(1001, "Jackson")));
    assert_eq!(
        set.find(&1001u64).map(|s| s.last_name.as_str()),
        Some("Jackson")
    );
}

#[test]
fn debug_lists_elements() {
    let mut set = QuadSet::with_capacity_and_hasher(2, PassThroughState);
    set.insert(3u64);
    set.insert(1u64);
    assert_eq!(format!("{:?}", set), "{1, 3}");
}

#[test]
fn sets_compare_by_membership() {
    let a: QuadSet<u64> = (0..20).collect();
    let b: QuadSet<u64> = (0..20).rev().collect();
    let c: QuadSet<u64> = (1..21).collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

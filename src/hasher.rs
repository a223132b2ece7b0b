//! A deterministic hasher for integer-keyed elements.
//!
//! `PassThroughHasher` hashes a lone integer to its own value, so an element
//! keyed by `n` starts probing at slot `n mod capacity`. Composite keys fold
//! each written word as `hash * 31 + word`.

use std::hash::{BuildHasher, Hasher};

#[derive(Clone, Copy, Default, Debug)]
pub struct PassThroughState;

#[derive(Clone, Default, Debug)]
pub struct PassThroughHasher {
    hash: u64,
}

impl BuildHasher for PassThroughState {
    type Hasher = PassThroughHasher;

    fn build_hasher(&self) -> Self::Hasher {
        PassThroughHasher { hash: 0 }
    }
}

impl PassThroughHasher {
    #[inline]
    fn fold(&mut self, word: u64) {
        self.hash = self.hash.wrapping_mul(31).wrapping_add(word);
    }
}

impl Hasher for PassThroughHasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.fold(byte as u64);
        }
    }

    fn write_u8(&mut self, i: u8) {
        self.fold(i as u64);
    }

    fn write_u16(&mut self, i: u16) {
        self.fold(i as u64);
    }

    fn write_u32(&mut self, i: u32) {
        self.fold(i as u64);
    }

    fn write_u64(&mut self, i: u64) {
        self.fold(i);
    }

    fn write_usize(&mut self, i: usize) {
        self.fold(i as u64);
    }
}

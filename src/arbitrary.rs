use arbitrary::{Arbitrary, Unstructured};
use core::hash::{BuildHasher, Hash};

use crate::QuadSet;

impl<'a, T, S> Arbitrary<'a> for QuadSet<T, S>
where
    T: Eq + Hash + Arbitrary<'a>,
    S: Default + BuildHasher,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.arbitrary_len::<T>()?;
        let mut set = QuadSet::with_capacity_and_hasher(len, S::default());

        // Duplicates drawn from the input are simply rejected by `insert`.
        for _ in 0..len {
            set.insert(T::arbitrary(u)?);
        }

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use crate::hasher::PassThroughState;
    use crate::QuadSet;
    use arbitrary::{Arbitrary, Unstructured};
    use std::collections::HashSet;

    #[test]
    fn built_from_fixed_bytes() {
        let bytes: Vec<u8> = (0..=255u8).cycle().take(1024).collect();
        let mut u = Unstructured::new(&bytes);

        let set = QuadSet::<u16, PassThroughState>::arbitrary(&mut u).unwrap();
        let unique: HashSet<u16> = set.iter().copied().collect();

        assert_eq!(set.len(), set.iter().count());
        assert_eq!(unique.len(), set.len());
        assert!(set.occupied_cells() < set.capacity() / 2);
    }
}

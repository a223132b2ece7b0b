use crate::slot::Slot;
use crate::QuadSet;
use core::mem::size_of;
use typesize::TypeSize;

impl<T: TypeSize, S> TypeSize for QuadSet<T, S> {
    fn extra_size(&self) -> usize {
        let elements: usize = self.iter().map(TypeSize::extra_size).sum();

        self.capacity() * size_of::<Slot<T>>() + elements
    }
}

//! Identifiers and simple allocators for core entities.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CounterId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RevealSetId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LayerSetId(pub u32);

/// Monotonic allocator for CounterId, RevealSetId, and LayerSetId.
/// Dense indices improve cache locality; IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_counter: u32,
    next_reveal: u32,
    next_layer: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_counter(&mut self) -> CounterId {
        let id = CounterId(self.next_counter);
        self.next_counter = self.next_counter.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_reveal(&mut self) -> RevealSetId {
        let id = RevealSetId(self.next_reveal);
        self.next_reveal = self.next_reveal.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_layer(&mut self) -> LayerSetId {
        let id = LayerSetId(self.next_layer);
        self.next_layer = self.next_layer.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_counter(), CounterId(0));
        assert_eq!(alloc.alloc_counter(), CounterId(1));
        assert_eq!(alloc.alloc_reveal(), RevealSetId(0));
        assert_eq!(alloc.alloc_reveal(), RevealSetId(1));
        assert_eq!(alloc.alloc_layer(), LayerSetId(0));
        assert_eq!(alloc.alloc_layer(), LayerSetId(1));
    }
}

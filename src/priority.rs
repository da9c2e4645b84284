//! Priority relations

/// A total preorder deciding which of two items must be nearer the root of a heap.
///
/// `outranks(a, b)` is whether `a` has strictly higher priority than `b`. Items for which
/// neither outranks the other are of equal priority, and their relative order in a heap is
/// unspecified.
///
/// The relation must be a pure function of its arguments, and an item's priority must not
/// change while the item is held in a heap.
pub trait Priority<T> {
    fn outranks(&self, a: &T, b: &T) -> bool;
}

impl<T, F: Fn(&T, &T) -> bool> Priority<T> for F {
    #[inline] fn outranks(&self, a: &T, b: &T) -> bool { self(a, b) }
}

/// Greater items first, making a max-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

impl<T: Ord> Priority<T> for Greater {
    #[inline] fn outranks(&self, a: &T, b: &T) -> bool { a > b }
}

/// Lesser items first, making a min-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

impl<T: Ord> Priority<T> for Less {
    #[inline] fn outranks(&self, a: &T, b: &T) -> bool { a < b }
}

#[cfg(test)] mod tests {
    use super::*;

    #[quickcheck] fn greater_and_less_are_converse(x: u32, y: u32) -> bool {
        Greater.outranks(&x, &y) == Less.outranks(&y, &x)
    }

    #[quickcheck] fn irreflexive(x: i64) -> bool {
        !Greater.outranks(&x, &x) && !Less.outranks(&x, &x)
    }

    #[test] fn closures_are_relations() {
        let by_len = |a: &&str, b: &&str| a.len() > b.len();
        assert!(by_len.outranks(&"abc", &"ab"));
        assert!(!by_len.outranks(&"ab", &"xy"));
    }
}

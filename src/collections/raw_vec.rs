use std::collections::TryReserveError;
use std::ops::{Deref, DerefMut};

use log::trace;

/// Growable array with an explicit capacity, a low-level utility type for the containers here
///
/// The capacity is the number of slots the owner asked for, not whatever the allocator happened
/// to round up to, so growth and compaction policies see exactly the slot counts they set.
/// It never inspects the elements it holds.
#[derive(Debug)]
pub struct RawVec<T> {
    data: Vec<T>,
    cap: usize,
}

impl<T> RawVec<T> {
    /// Make a new array with room for `cap` elements.
    ///
    /// # Failures
    ///
    /// Returns `Err` if allocation fails.
    #[inline]
    pub fn with_capacity(cap: usize) -> Result<Self, TryReserveError> {
        let mut data = Vec::new();
        data.try_reserve_exact(cap)?;
        Ok(RawVec { data, cap })
    }

    /// Make an array of the elements of `v`, with capacity equal to its length.
    #[inline]
    pub fn from_vec(mut v: Vec<T>) -> Self {
        v.shrink_to_fit();
        let cap = v.len();
        RawVec { data: v, cap }
    }

    /// Return number of elements array can hold before reallocation.
    #[inline] pub fn capacity(&self) -> usize { self.cap }

    /// Return number of elements in array.
    #[inline] pub fn length(&self) -> usize { self.data.len() }

    /// Whether every slot is occupied.
    #[inline] pub fn is_full(&self) -> bool { self.data.len() == self.cap }

    /// Raise capacity to `cap`, reallocating if need be. Does nothing if capacity is already at
    /// least `cap`.
    ///
    /// # Failures
    ///
    /// Returns `Err` if allocation fails, in which case the array is unchanged.
    pub fn grow(&mut self, cap: usize) -> Result<(), TryReserveError> {
        if cap <= self.cap { return Ok(()) }
        self.data.try_reserve_exact(cap - self.data.len())?;
        trace!("grew array from {} to {} slots", self.cap, cap);
        self.cap = cap;
        Ok(())
    }

    /// Relinquish memory so capacity = `max(cap, length)`.
    pub fn relinquish(&mut self, cap: usize) {
        let cap = usize::max(cap, self.data.len());
        if cap >= self.cap { return }
        self.data.shrink_to(cap);
        trace!("relinquished array from {} to {} slots", self.cap, cap);
        self.cap = cap;
    }

    /// Append `x` in a free slot.
    ///
    /// # Panics
    ///
    /// Panics if the array is full.
    #[inline]
    pub fn push_within(&mut self, x: T) {
        assert!(!self.is_full(), "push into full array");
        self.data.push(x);
    }

    /// Remove and return the last element, or `None` if empty.
    #[inline] pub fn pop(&mut self) -> Option<T> { self.data.pop() }
}

impl<T> Deref for RawVec<T> {
    type Target = [T];

    #[inline] fn deref(&self) -> &[T] { &self.data }
}

impl<T> DerefMut for RawVec<T> {
    #[inline] fn deref_mut(&mut self) -> &mut [T] { &mut self.data }
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] fn grow_keeps_elements() {
        let mut a = RawVec::with_capacity(2).unwrap();
        a.push_within('x');
        a.push_within('y');
        assert!(a.is_full());
        a.grow(4).unwrap();
        assert_eq!(4, a.capacity());
        assert!(!a.is_full());
        a.push_within('z');
        assert_eq!(&['x', 'y', 'z'], &a[..]);
    }

    #[test] fn grow_never_lowers_capacity() {
        let mut a = RawVec::<u8>::with_capacity(8).unwrap();
        a.grow(3).unwrap();
        assert_eq!(8, a.capacity());
    }

    #[test] fn grow_failure_leaves_array_unchanged() {
        let mut a = RawVec::with_capacity(1).unwrap();
        a.push_within(1u64);
        assert!(a.grow(usize::max_value()).is_err());
        assert_eq!(1, a.capacity());
        assert_eq!(&[1], &a[..]);
    }

    #[test] fn relinquish_stops_at_length() {
        let mut a = RawVec::with_capacity(8).unwrap();
        a.push_within(1);
        a.push_within(2);
        a.relinquish(5);
        assert_eq!(5, a.capacity());
        a.relinquish(0);
        assert_eq!(2, a.capacity());
        assert!(a.is_full());
        assert_eq!(&[1, 2], &a[..]);
    }

    #[test] #[should_panic] fn push_into_full_array() {
        let mut a = RawVec::with_capacity(0).unwrap();
        a.push_within(());
    }

    #[quickcheck] fn from_vec_is_full(xs: Vec<u16>) -> bool {
        let a = RawVec::from_vec(xs.clone());
        a.is_full() && &a[..] == &xs[..]
    }
}

//! Heaps
//!
//! A `Heap` is a priority queue over a growable array. It holds its items in custody: they are
//! moved in on insertion and moved back out on removal, and in between the heap only rearranges
//! them, consulting them solely through its `Priority` relation and `Dump` callback.

pub mod slice;

use std::fmt;
use std::io;

use either::Either::{self, *};
use fallible::TryClone;
use log::warn;

use crate::dump::{Debugged, Dump};
use crate::error::{AllocError, InsertError};
use crate::priority::{Greater, Priority};
use super::RawVec;

/// What becomes of a slot freed by removing the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compaction {
    /// Keep the slot; only the length drops.
    Retain,
    /// Release exactly the one slot, keeping the array tightly sized at the cost of a
    /// reallocation per removal.
    ShrinkByOne,
}

impl Default for Compaction {
    #[inline] fn default() -> Self { Compaction::Retain }
}

/// Growable binary heap in terms of `RawVec`
///
/// No item outranks its parent, so the root is an item of highest priority. The capacity
/// doubles whenever an insertion finds the heap full.
pub struct Heap<T, P: Priority<T> = Greater, D: Dump<T> = Debugged> {
    rel: P,
    dump: D,
    compaction: Compaction,
    data: RawVec<T>,
}

impl<T, P: Priority<T>, D: Dump<T>> Heap<T, P, D> {
    /// Make a new heap with room for `cap` elements, ordered by `rel` and dumped by `dump`.
    ///
    /// # Failures
    ///
    /// Returns `Err` if allocation fails.
    #[inline]
    pub fn new(cap: usize, rel: P, dump: D) -> Result<Self, AllocError> {
        let data = RawVec::with_capacity(cap).map_err(|e| AllocError::new(cap, e))?;
        Ok(Heap { rel, dump, compaction: Compaction::default(), data })
    }

    /// Build a heap of the elements of `v`.
    #[inline]
    pub fn from_vec(v: Vec<T>, rel: P, dump: D) -> Self {
        let mut data = RawVec::from_vec(v);
        slice::build(|a, b| rel.outranks(a, b), &mut data[..]);
        Heap { rel, dump, compaction: Compaction::default(), data }
    }

    /// Set what removal does with the freed slot.
    #[inline]
    pub fn with_compaction(self, compaction: Compaction) -> Self { Heap { compaction, ..self } }

    #[inline] pub fn compaction(&self) -> Compaction { self.compaction }

    /// Return number of elements in heap.
    #[inline] pub fn length  (&self) -> usize { self.data.length() }

    #[inline] pub fn is_empty(&self) -> bool { self.data.length() == 0 }

    /// Return number of elements heap can hold before reallocation.
    #[inline] pub fn capacity(&self) -> usize { self.data.capacity() }

    /// Make sure the heap has room for at least `n_more` more elements, reallocating if need be.
    ///
    /// # Failures
    ///
    /// Returns `Err` if allocation fails, in which case the heap is unchanged.
    pub fn reserve(&mut self, n_more: usize) -> Result<(), AllocError> {
        let cap = self.length().saturating_add(n_more);
        self.data.grow(cap).map_err(|e| {
            warn!("heap failed to reserve {} slots: {}", cap, e);
            AllocError::new(cap, e)
        })
    }

    /// Relinquish memory so capacity = length.
    #[inline]
    pub fn relinquish(&mut self) { let n = self.length(); self.data.relinquish(n) }

    /// Return a reference to the root element.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    #[inline]
    pub fn top(&self) -> &T {
        assert!(!self.is_empty(), "top of empty heap");
        &self.data[0]
    }

    /// Return a reference to root element, or `None` if heap empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> { self.data.first() }

    /// Insert an element into the heap.
    ///
    /// If the heap is full its capacity is doubled first.
    ///
    /// # Failures
    ///
    /// Returns `Err` holding `x` if the heap is full and cannot grow, in which case the heap is
    /// unchanged.
    pub fn insert(&mut self, x: T) -> Result<(), InsertError<T>> {
        if self.data.is_full() {
            let cap = usize::max(1, self.capacity().saturating_mul(2));
            if let Err(e) = self.data.grow(cap) {
                warn!("heap failed to grow to {} slots: {}", cap, e);
                return Err(InsertError { item: x, cause: AllocError::new(cap, e) });
            }
        }
        let (rel, data) = (&self.rel, &mut self.data);
        data.push_within(x);
        slice::push(|a, b| rel.outranks(a, b), &mut data[..]);
        Ok(())
    }

    /// Remove the root element and return it.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    #[inline]
    pub fn remove_top(&mut self) -> T {
        match self.pop() {
            Some(x) => x,
            None => panic!("remove top of empty heap"),
        }
    }

    /// Pop the root element off the heap and return it; return `None` if heap empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() { return None }
        let (rel, data) = (&self.rel, &mut self.data);
        slice::pop(|a, b| rel.outranks(a, b), &mut data[..]);
        let x = data.pop();
        if Compaction::ShrinkByOne == self.compaction {
            let cap = data.capacity() - 1;
            data.relinquish(cap);
        }
        x
    }

    /// Write each element through the dump callback, in array order rather than priority order.
    pub fn dump(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        for x in self.data.iter() { self.dump.entry(x, sink)?; }
        Ok(())
    }
}

impl<T: fmt::Debug, P: Priority<T>, D: Dump<T>> fmt::Debug for Heap<T, P, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Heap")
         .field("capacity", &self.capacity())
         .field("compaction", &self.compaction)
         .field("data", &&self.data[..])
         .finish()
    }
}

impl<T: TryClone, P: Priority<T> + Clone, D: Dump<T> + Clone> TryClone for Heap<T, P, D> {
    type Error = Either<AllocError, T::Error>;

    #[inline]
    fn try_clone(&self) -> Result<Self, Self::Error> {
        let mut new = Self::new(self.capacity(), self.rel.clone(), self.dump.clone())
            .map_err(Left)?
            .with_compaction(self.compaction);
        // Same array order, so the heap property carries over.
        for x in self.data.iter() { new.data.push_within(x.try_clone().map_err(Right)?); }
        Ok(new)
    }

    #[inline]
    fn try_clone_from(&mut self, other: &Self) -> Result<(), Self::Error> {
        *self = other.try_clone()?;
        Ok(())
    }
}

//! Allocation failures, surfaced to the caller rather than swallowed.

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

/// Storage for the requested number of slots could not be allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocError {
    capacity: usize,
    source: TryReserveError,
}

impl AllocError {
    #[inline]
    pub(crate) fn new(capacity: usize, source: TryReserveError) -> Self {
        AllocError { capacity, source }
    }

    /// Capacity, in slots, which could not be reached.
    #[inline]
    pub fn capacity(&self) -> usize { self.capacity }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to allocate storage for {} slots", self.capacity)
    }
}

impl Error for AllocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> { Some(&self.source) }
}

/// An insertion was refused because the container could not grow.
///
/// The container is unchanged and the rejected item is handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertError<T> {
    /// The item which could not be inserted.
    pub item: T,
    /// Why the container could not make room.
    pub cause: AllocError,
}

impl<T> InsertError<T> {
    /// Returns the item which could not be inserted.
    #[inline]
    pub fn into_inner(self) -> T { self.item }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "insertion refused: {}", self.cause)
    }
}

impl<T: fmt::Debug> Error for InsertError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> { Some(&self.cause) }
}

//! Containers which hold client payloads in custody: a binary heap ordered by a
//! client-supplied relation, and a singly-linked FIFO queue.
//!
//! Neither container inspects its payloads. The heap consults them only through its
//! [`Priority`](priority::Priority) relation and [`Dump`](dump::Dump) callback.

#![deny(missing_debug_implementations)]

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

pub mod collections;
pub mod dump;
pub mod error;
pub mod priority;

#[cfg(test)]
mod util;

pub use crate::collections::{Compaction, Heap, Queue};
pub use crate::error::{AllocError, InsertError};

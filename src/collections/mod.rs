//! Collection types

pub mod heap;
mod queue;
mod raw_vec;

pub use self::heap::{Compaction, Heap};
pub use self::queue::Queue;
pub use self::raw_vec::RawVec;

//! First-in-first-out queues

use core::marker::PhantomData;
use core::ptr::NonNull;
use std::fmt;
use std::io;

use fallible::TryClone;

use crate::dump::Dump;

struct Node<T> {
    item: T,
    next: Option<NonNull<Node<T>>>,
}

/// Singly-linked FIFO queue
///
/// Enqueue and dequeue are O(1). Nodes are allocated on enqueue and freed on dequeue; the
/// items are moved in and out, never copied.
pub struct Queue<T> {
    front: Option<NonNull<Node<T>>>,
    back: Option<NonNull<Node<T>>>,
    count: usize,
    marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for Queue<T> {}
unsafe impl<T: Sync> Sync for Queue<T> {}

impl<T> Queue<T> {
    /// Make a new queue.
    #[inline]
    pub const fn new() -> Self { Queue { front: None, back: None, count: 0, marker: PhantomData } }

    /// Return number of elements in queue.
    #[inline] pub fn length  (&self) -> usize { self.count }

    #[inline] pub fn is_empty(&self) -> bool { self.count == 0 }

    /// Append `x` at the back.
    pub fn enqueue(&mut self, x: T) {
        let node = NonNull::from(Box::leak(Box::new(Node { item: x, next: None })));
        match self.back {
            None => self.front = Some(node),
            Some(back) => unsafe { (*back.as_ptr()).next = Some(node) },
        }
        self.back = Some(node);
        self.count += 1;
    }

    /// Remove the front element and return it; return `None` if queue empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.front.map(|front| unsafe {
            let node = Box::from_raw(front.as_ptr());
            self.front = node.next;
            if self.front.is_none() { self.back = None; }
            self.count -= 1;
            node.item
        })
    }

    /// Return a reference to the front element, or `None` if queue empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.front.map(|front| unsafe { &(*front.as_ptr()).item })
    }

    /// Write each element through `d`, front to back.
    pub fn dump<D: Dump<T>>(&self, d: &D, sink: &mut dyn io::Write) -> io::Result<()> {
        let mut cur = self.front;
        while let Some(node) = cur {
            let node = unsafe { &*node.as_ptr() };
            d.entry(&node.item, sink)?;
            cur = node.next;
        }
        Ok(())
    }
}

impl<T> Default for Queue<T> {
    #[inline] fn default() -> Self { Queue::new() }
}

impl<T> Drop for Queue<T> {
    #[inline]
    fn drop(&mut self) {
        while let Some(_) = self.dequeue() {}
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut l = f.debug_list();
        let mut cur = self.front;
        while let Some(node) = cur {
            let node = unsafe { &*node.as_ptr() };
            l.entry(&node.item);
            cur = node.next;
        }
        l.finish()
    }
}

impl<T: TryClone> TryClone for Queue<T> {
    type Error = T::Error;

    fn try_clone(&self) -> Result<Self, Self::Error> {
        let mut new = Queue::new();
        let mut cur = self.front;
        while let Some(node) = cur {
            let node = unsafe { &*node.as_ptr() };
            new.enqueue(node.item.try_clone()?);
            cur = node.next;
        }
        Ok(new)
    }

    #[inline]
    fn try_clone_from(&mut self, other: &Self) -> Result<(), Self::Error> {
        *self = other.try_clone()?;
        Ok(())
    }
}

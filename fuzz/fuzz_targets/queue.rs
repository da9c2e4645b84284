#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate custody;

use std::collections::VecDeque;

use custody::Queue;

fuzz_target!(|data: &[u8]| {
    let mut q = Queue::new();
    let mut model = VecDeque::new();
    for &x in data {
        if x & 1 == 0 { q.enqueue(x); model.push_back(x); }
        else { assert_eq!(model.pop_front(), q.dequeue()); }
        assert_eq!(model.len(), q.length());
        assert_eq!(model.front(), q.peek());
    }
});

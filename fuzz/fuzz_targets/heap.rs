#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate custody;

use custody::{Compaction, Heap};
use custody::dump::Debugged;
use custody::priority::Greater;

fuzz_target!(|data: &[u8]| {
    if 0 == data.len() { return; }
    let c = data[0];
    let data = &data[1..];
    let compaction = if c & 0x80 == 0 { Compaction::Retain } else { Compaction::ShrinkByOne };
    if let Ok(h) = Heap::new((c & 0x7F) as usize, Greater, Debugged) {
        let mut h = h.with_compaction(compaction);
        let mut last = None;
        for &x in data {
            match x % 4 {
                0 => {
                    let top = h.pop();
                    // Successive pops without intervening inserts never rise.
                    if let (Some(a), Some(b)) = (last, top) { assert!(b <= a) }
                    last = top;
                },
                1 => { let _ = h.dump(&mut ::std::io::sink()); },
                _ => { h.insert(x).unwrap(); last = None; },
            }
            assert!(h.length() <= h.capacity());
            if let Some(&top) = h.peek() { assert_eq!(top, *h.top()) }
        }
    }
});

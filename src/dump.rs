//! Dump callbacks, through which containers write out items they cannot themselves interpret.

use std::fmt;
use std::io;

/// Writes a representation of one item to a sink.
///
/// Must not mutate the item; it is called once per live entry during a dump.
pub trait Dump<T> {
    fn entry(&self, item: &T, sink: &mut dyn io::Write) -> io::Result<()>;
}

impl<T, F: Fn(&T, &mut dyn io::Write) -> io::Result<()>> Dump<T> for F {
    #[inline] fn entry(&self, item: &T, sink: &mut dyn io::Write) -> io::Result<()> { self(item, sink) }
}

/// Writes each item's `Debug` form on its own line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debugged;

impl<T: fmt::Debug> Dump<T> for Debugged {
    #[inline] fn entry(&self, item: &T, sink: &mut dyn io::Write) -> io::Result<()> {
        writeln!(sink, "{:?}", item)
    }
}

/// Writes each item's `Display` form on its own line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Displayed;

impl<T: fmt::Display> Dump<T> for Displayed {
    #[inline] fn entry(&self, item: &T, sink: &mut dyn io::Write) -> io::Result<()> {
        writeln!(sink, "{}", item)
    }
}

#[cfg(test)] mod tests {
    use std::io::Write;

    use super::*;

    #[test] fn debugged_and_displayed() {
        let mut out = Vec::new();
        Debugged.entry(&"a", &mut out).unwrap();
        Displayed.entry(&"a", &mut out).unwrap();
        assert_eq!(b"\"a\"\na\n", &out[..]);
    }

    #[test] fn closures_are_dumps() {
        let bracketed = |x: &u8, w: &mut dyn Write| write!(w, "[{}]", x);
        let mut out = Vec::new();
        bracketed.entry(&7, &mut out).unwrap();
        assert_eq!(b"[7]", &out[..]);
    }
}

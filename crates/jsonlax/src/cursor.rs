//! Character-stream cursor over one fully materialized input.
//!
//! The original shrinking-buffer pattern (truncate the remaining text on every
//! read) is rendered here as an immutable `&str` plus a byte index; what each
//! consumption call returns is identical. A one-slot pushback holds a
//! character handed back by the caller, and every consumption mode drains that
//! slot before touching the remainder.

/// Tracks the unconsumed remainder of the input.
///
/// Consumption permanently discards every character it examines, both the
/// skipped/advanced-past ones and the one returned, except for the single
/// character restored by [`push_back`](Cursor::push_back). Exhaustion is not
/// an error; it only yields `None`.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    returned: Option<char>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            returned: None,
        }
    }

    /// Skip-set mode: discards leading characters in `skip`, then consumes
    /// and returns the first character outside the set.
    pub(crate) fn next_skipping(&mut self, skip: &[char]) -> Option<char> {
        loop {
            let c = self.next()?;
            if !skip.contains(&c) {
                return Some(c);
            }
        }
    }

    /// Until-set mode: discards characters up to and including the first one
    /// in `until`, returning that terminator. Returns `None` when the input
    /// is exhausted before a terminator appears.
    pub(crate) fn next_until(&mut self, until: &[char]) -> Option<char> {
        loop {
            let c = self.next()?;
            if until.contains(&c) {
                return Some(c);
            }
        }
    }

    /// Restores `c` to the front of the remainder so the next consumption
    /// call, in any mode, sees it first.
    ///
    /// The grammar performs at most one pushback between consumption calls,
    /// so a single slot suffices.
    pub(crate) fn push_back(&mut self, c: char) {
        debug_assert!(self.returned.is_none(), "pushback slot already occupied");
        self.returned = Some(c);
    }
}

impl Iterator for Cursor<'_> {
    type Item = char;

    /// Plain mode: consume and return exactly one character.
    fn next(&mut self) -> Option<char> {
        if let Some(c) = self.returned.take() {
            return Some(c);
        }
        let c = self.input[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }
}

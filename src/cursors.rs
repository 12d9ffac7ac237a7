//! Cursor bookkeeping shared by every ring flavour.
//!
//! Positions are slot indices into a fixed number of slots. One slot is
//! always left unoccupied, so `head == tail` means empty and never full.

use std::ops::Range;

use utils::{count, wrap_add};

/// The read (`tail`) and write (`head`) cursors over `slots` slots.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cursors {
    slots: usize,
    head: usize,
    tail: usize,
}

/// At most two contiguous slot ranges, in logical order.
///
/// `second` is non-empty only when the run wraps past the end of storage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Spans {
    pub first: Range<usize>,
    pub second: Range<usize>,
}

impl Spans {
    fn starting_at(start: usize, len: usize, slots: usize) -> Spans {
        let pre_wrap_len = slots - start;
        if len <= pre_wrap_len {
            Spans {
                first: start..start + len,
                second: 0..0,
            }
        } else {
            Spans {
                first: start..slots,
                second: 0..len - pre_wrap_len,
            }
        }
    }

    /// Scales both ranges from slots to bytes.
    #[inline]
    pub fn scaled(&self, width: usize) -> Spans {
        Spans {
            first: self.first.start * width..self.first.end * width,
            second: self.second.start * width..self.second.end * width,
        }
    }
}

impl Cursors {
    /// Empty cursors at slot 0.
    #[inline]
    pub fn new(slots: usize) -> Cursors {
        debug_assert!(slots >= 2, "ring needs at least 2 slots, got {}", slots);
        Cursors {
            slots,
            head: 0,
            tail: 0,
        }
    }

    #[inline]
    pub fn slots(&self) -> usize {
        self.slots
    }

    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    #[inline]
    pub fn set(&mut self, tail: usize, head: usize) {
        debug_assert!(tail < self.slots, "tail {} out of {} slots", tail, self.slots);
        debug_assert!(head < self.slots, "head {} out of {} slots", head, self.slots);
        self.tail = tail;
        self.head = head;
    }

    /// Slot the head moves to after one more element.
    #[inline]
    pub fn next_head(&self) -> usize {
        wrap_add(self.head, 1, self.slots)
    }

    #[inline]
    pub fn len(&self) -> usize {
        count(self.tail, self.head, self.slots)
    }

    #[inline]
    pub fn usable(&self) -> usize {
        self.slots - 1
    }

    #[inline]
    pub fn free(&self) -> usize {
        self.usable() - self.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.next_head() == self.tail
    }

    /// Slots holding the `len` oldest elements.
    #[inline]
    pub fn read_spans(&self, len: usize) -> Spans {
        debug_assert!(len <= self.len());
        Spans::starting_at(self.tail, len, self.slots)
    }

    /// Slots that the next `len` written elements land in.
    #[inline]
    pub fn write_spans(&self, len: usize) -> Spans {
        debug_assert!(len <= self.free());
        Spans::starting_at(self.head, len, self.slots)
    }

    #[inline]
    pub fn advance_tail(&mut self, len: usize) {
        debug_assert!(len <= self.len());
        self.tail = wrap_add(self.tail, len, self.slots);
    }

    #[inline]
    pub fn advance_head(&mut self, len: usize) {
        debug_assert!(len <= self.free());
        self.head = wrap_add(self.head, len, self.slots);
    }
}

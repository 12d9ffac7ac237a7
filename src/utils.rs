/// Advances a slot index by `addend`, wrapping at `slots`.
#[inline]
pub fn wrap_add(index: usize, addend: usize, slots: usize) -> usize {
    debug_assert!(index < slots);
    debug_assert!(addend <= slots);
    (index + addend) % slots
}

/// Number of slots between `tail` and `head`, walking forward and wrapping
/// through the end of storage.
#[inline]
pub fn count(tail: usize, head: usize, slots: usize) -> usize {
    debug_assert!(head < slots);
    debug_assert!(tail < slots);
    if head >= tail {
        head - tail
    } else {
        slots + head - tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_add_wraps_at_slot_count() {
        assert_eq!(wrap_add(0, 1, 4), 1);
        assert_eq!(wrap_add(3, 1, 4), 0);
        assert_eq!(wrap_add(2, 3, 4), 1);
        assert_eq!(wrap_add(1, 4, 4), 1);
    }

    #[test]
    fn count_handles_both_orders() {
        assert_eq!(count(0, 0, 4), 0);
        assert_eq!(count(1, 3, 4), 2);
        assert_eq!(count(3, 1, 4), 2);
        // head one behind tail: every usable slot is occupied
        assert_eq!(count(1, 0, 128), 127);
    }
}

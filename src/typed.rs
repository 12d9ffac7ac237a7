//! A typed ring over caller-owned slots.

use std::cmp;
use std::fmt;
use std::iter;
use std::slice;

use cursors::{Cursors, Spans};
use error::{CapacityError, InitError};
use region::Region;

/// `RingQueue` is a fixed capacity FIFO of `Copy` values laid over a
/// caller-owned slice.
///
/// It behaves exactly like a [`RingBuffer`](struct.RingBuffer.html) whose
/// element is one `T`.
///
/// # Capacity
///
/// Note that the usable capacity is always `region.len() - 1`.
///
/// # Examples
///
/// ```
/// use slicering::RingQueue;
///
/// let mut slots = [0u16; 4];
/// let mut queue = RingQueue::new(&mut slots).unwrap();
///
/// queue.put(1).unwrap();
/// queue.put(2).unwrap();
/// queue.put(3).unwrap();
/// assert_eq!(queue.put(4).unwrap_err().element, 4);
///
/// assert_eq!(queue.get(), Some(1));
/// assert!(queue.put(4).is_ok());
/// assert_eq!(format!("{:?}", queue), "[2, 3, 4]");
/// ```
pub struct RingQueue<'a, T: 'a + Copy> {
    slots: &'a mut [T],
    cursors: Cursors,
}

/// `RingQueue` iterator
pub type Iter<'a, T> = iter::Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>;

impl<'a, T: Copy> RingQueue<'a, T> {
    /// Lays an empty queue over every slot of `region`.
    ///
    /// # Errors
    ///
    /// Fails with `InitError::TooFewElements` if the region has fewer than
    /// two slots.
    pub fn new<R>(region: &'a mut R) -> Result<Self, InitError>
        where R: Region<Item = T> + ?Sized
    {
        let slots = region.as_mut_slice();
        if slots.len() < 2 {
            return Err(InitError::TooFewElements { count: slots.len() });
        }
        let cursors = Cursors::new(slots.len());
        Ok(RingQueue { slots, cursors })
    }

    /// Number of slots in the region.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cursors.slots()
    }

    /// Largest number of values the queue holds at once.
    #[inline]
    pub fn usable_capacity(&self) -> usize {
        self.cursors.usable()
    }

    /// Returns the number of values in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Number of values that can be put before the queue is full.
    #[inline]
    pub fn free(&self) -> usize {
        self.cursors.free()
    }

    /// Returns true if the queue contains no values
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Returns true if the queue is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cursors.is_full()
    }

    /// Empties the queue and rewinds both cursors to the first slot.
    #[inline]
    pub fn clear(&mut self) {
        self.cursors.set(0, 0);
    }

    /// Appends a value.
    ///
    /// Returns `Err(CapacityError)` carrying the value back if the queue is
    /// full.
    pub fn put(&mut self, element: T) -> Result<(), CapacityError<T>> {
        let next = self.cursors.next_head();
        if next == self.cursors.tail() {
            return Err(CapacityError { element });
        }
        self.slots[self.cursors.head()] = element;
        let tail = self.cursors.tail();
        self.cursors.set(tail, next);
        Ok(())
    }

    /// Removes the oldest value, or returns `None` if the queue is empty.
    pub fn get(&mut self) -> Option<T> {
        if self.cursors.is_empty() {
            return None;
        }
        let element = self.slots[self.cursors.tail()];
        self.cursors.advance_tail(1);
        Some(element)
    }

    /// Copies as many values of `input` as fit and returns how many were
    /// copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use slicering::RingQueue;
    ///
    /// let mut slots = [0i32; 5];
    /// let mut queue = RingQueue::new(&mut slots).unwrap();
    ///
    /// assert_eq!(queue.write(&[1, 2, 3, 4, 5, 6]), 4);
    /// assert!(queue.is_full());
    /// ```
    pub fn write(&mut self, input: &[T]) -> usize {
        let count = cmp::min(input.len(), self.cursors.free());
        if count == 0 {
            return 0;
        }

        let Spans { first, second } = self.cursors.write_spans(count);
        let split = first.len();
        self.slots[first].copy_from_slice(&input[..split]);
        self.slots[second].copy_from_slice(&input[split..count]);

        self.cursors.advance_head(count);
        count
    }

    /// Moves the oldest values into `output` until it is filled or the queue
    /// is empty, and returns how many were moved.
    pub fn read(&mut self, output: &mut [T]) -> usize {
        let count = cmp::min(output.len(), self.cursors.len());
        if count == 0 {
            return 0;
        }

        let Spans { first, second } = self.cursors.read_spans(count);
        let split = first.len();
        output[..split].copy_from_slice(&self.slots[first]);
        output[split..count].copy_from_slice(&self.slots[second]);

        self.cursors.advance_tail(count);
        count
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// queue.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let Spans { first, second } = self.cursors.read_spans(self.len());
        (&self.slots[first], &self.slots[second])
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use slicering::RingQueue;
    ///
    /// let mut slots = [0u8; 4];
    /// let mut queue = RingQueue::new(&mut slots).unwrap();
    /// queue.write(&[5, 3, 4]);
    ///
    /// let values: Vec<u8> = queue.iter().cloned().collect();
    /// assert_eq!(values, vec![5, 3, 4]);
    /// ```
    pub fn iter<'b>(&'b self) -> Iter<'b, T> {
        let (first, second) = self.as_slices();
        first.iter().chain(second.iter())
    }
}

impl<'a, T> fmt::Debug for RingQueue<'a, T>
    where T: Copy + fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_requires_two_slots() {
        let mut one = [0u8; 1];
        assert_eq!(RingQueue::new(&mut one).err(),
                   Some(InitError::TooFewElements { count: 1 }));
        let mut none: [u8; 0] = [];
        assert_eq!(RingQueue::new(&mut none).err(),
                   Some(InitError::TooFewElements { count: 0 }));
    }

    #[test]
    fn put_get_scenario() {
        let mut slots = [0u32; 4];
        let mut queue = RingQueue::new(&mut slots).unwrap();
        assert_eq!(queue.capacity(), 4);
        assert_eq!(queue.usable_capacity(), 3);

        assert!(queue.put(1).is_ok());
        assert!(queue.put(2).is_ok());
        assert!(queue.put(3).is_ok());
        assert_eq!(queue.put(4), Err(CapacityError { element: 4 }));
        assert_eq!(queue.get(), Some(1));
        assert!(queue.put(4).is_ok());
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.free(), 0);

        let mut out = [0u32; 8];
        assert_eq!(queue.read(&mut out), 3);
        assert_eq!(&out[..3], &[2, 3, 4]);
        assert_eq!(queue.get(), None);
    }

    #[test]
    fn iter_follows_wrapped_contents() {
        let mut slots = [0u8; 5];
        let mut queue = RingQueue::new(&mut slots).unwrap();
        queue.write(&[1, 2, 3, 4]);
        queue.get();
        queue.put(5).unwrap();

        let iter = queue.iter();
        assert_eq!(iter.clone().count(), 4);
        assert_eq!(iter.cloned().collect::<Vec<u8>>(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn wraparound_keeps_order() {
        let mut slots = ['\0'; 4];
        let mut queue = RingQueue::new(&mut slots).unwrap();

        assert_eq!(queue.write(&['a', 'b']), 2);
        assert_eq!(queue.get(), Some('a'));
        assert_eq!(queue.write(&['c', 'd']), 2);

        let mut out = ['\0'; 3];
        assert_eq!(queue.read(&mut out), 3);
        assert_eq!(out, ['b', 'c', 'd']);
    }

    #[test]
    fn any_as_slices() {
        const CAP: usize = 10;
        let mut slots = [0usize; CAP];
        let mut tester = RingQueue::new(&mut slots).unwrap();

        for len in 0..CAP - 1 {
            for padding in 0..CAP {
                // queue starts from different cursor position
                tester.cursors.set(padding, padding);

                let expected: Vec<usize> = (0..len).collect();
                assert_eq!(tester.write(&expected), len);

                let split_idx = CAP - padding;
                if split_idx < len {
                    assert_eq!(tester.as_slices(), expected[..].split_at(split_idx));
                } else {
                    assert_eq!(tester.as_slices(), (&expected[..], &[][..]));
                }
                assert_eq!(tester.iter().cloned().collect::<Vec<_>>(), expected);
                tester.clear();
            }
        }
    }

    #[test]
    fn short_write_resumes() {
        let mut slots = [0u8; 4];
        let mut queue = RingQueue::new(&mut slots).unwrap();
        let data = [10u8, 20, 30, 40, 50];

        let written = queue.write(&data);
        assert_eq!(written, 3);
        assert_eq!(queue.write(&data[written..]), 0);

        let mut out = [0u8; 5];
        assert_eq!(queue.read(&mut out[..2]), 2);
        assert_eq!(queue.write(&data[written..]), 2);
        assert_eq!(queue.read(&mut out[2..]), 3);
        assert_eq!(out, data);
    }

    #[test]
    fn fmt_lists_contents() {
        let mut slots = [0i8; 6];
        let mut queue = RingQueue::new(&mut slots).unwrap();
        assert_eq!(format!("{:?}", queue), "[]");
        queue.write(&[0, 1, 2, 3]);
        assert_eq!(format!("{:?}", queue), "[0, 1, 2, 3]");
    }

    #[cfg(feature = "std")]
    #[test]
    fn vec_region() {
        let mut slots = vec![0u64; 3];
        let mut queue = RingQueue::new(&mut slots).unwrap();
        assert_eq!(queue.write(&[7, 8, 9]), 2);
        assert_eq!(queue.get(), Some(7));
        assert_eq!(queue.get(), Some(8));
        assert!(queue.is_empty());
    }
}

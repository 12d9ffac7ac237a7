//! The byte-level ring engine.

use std::cmp;
use std::fmt;

use cursors::{Cursors, Spans};
use error::{CapacityError, InitError};
use region::Region;

/// A fixed capacity FIFO of fixed-size elements laid over caller-owned bytes.
///
/// The buffer borrows its storage, never allocates, and copies elements as
/// opaque runs of `element_size` bytes. Transfers never block: when a request
/// cannot be fully satisfied they move what they can and report how much.
///
/// # Capacity
///
/// `capacity()` is the number of element slots in the region. One slot always
/// stays free so that an empty buffer is distinguishable from a full one, so
/// at most `capacity() - 1` elements are stored at once.
///
/// # Examples
///
/// ```
/// use slicering::RingBuffer;
///
/// let mut storage = [0u8; 4];
/// let mut ring = RingBuffer::new(&mut storage, 4, 1).unwrap();
///
/// assert_eq!(ring.write(&[0x11, 0x22, 0x33, 0x44], 4), 3);
/// assert_eq!(ring.usage(), 3);
///
/// let mut out = [0u8; 4];
/// assert_eq!(ring.read(&mut out, 4), 3);
/// assert_eq!(&out[..3], &[0x11, 0x22, 0x33]);
/// assert!(ring.is_empty());
/// ```
pub struct RingBuffer<'a> {
    storage: &'a mut [u8],
    element_size: usize,
    cursors: Cursors,
}

impl<'a> RingBuffer<'a> {
    /// Lays an empty buffer of `count` elements, each `element_size` bytes
    /// wide, over the start of `region`.
    ///
    /// Bytes of `region` past `count * element_size` are left untouched.
    ///
    /// # Errors
    ///
    /// Fails if `element_size` is zero, if `count` is below 2 (no usable
    /// slot would remain), or if the region is too short for the layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use slicering::{InitError, RingBuffer};
    ///
    /// let mut storage = [0u8; 32];
    /// let ring = RingBuffer::new(&mut storage, 8, 4).unwrap();
    /// assert_eq!(ring.capacity(), 8);
    /// assert_eq!(ring.usage(), 0);
    ///
    /// let mut small = [0u8; 8];
    /// assert_eq!(
    ///     RingBuffer::new(&mut small, 4, 4).err(),
    ///     Some(InitError::RegionTooSmall { needed: 16, available: 8 })
    /// );
    /// ```
    pub fn new<R>(region: &'a mut R, count: usize, element_size: usize) -> Result<Self, InitError>
        where R: Region<Item = u8> + ?Sized
    {
        if element_size == 0 {
            return Err(InitError::ZeroElementSize);
        }
        if count < 2 {
            return Err(InitError::TooFewElements { count });
        }

        let storage = region.as_mut_slice();
        let available = storage.len();
        let needed = count.checked_mul(element_size).unwrap_or(usize::max_value());
        if needed > available {
            return Err(InitError::RegionTooSmall { needed, available });
        }

        Ok(RingBuffer {
            storage: &mut storage[..needed],
            element_size,
            cursors: Cursors::new(count),
        })
    }

    /// Lays an empty buffer over as many whole elements as `region` holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use slicering::RingBuffer;
    ///
    /// let mut storage = [0u8; 10];
    /// let ring = RingBuffer::with_region(&mut storage, 4).unwrap();
    /// assert_eq!(ring.capacity(), 2);
    /// ```
    pub fn with_region<R>(region: &'a mut R, element_size: usize) -> Result<Self, InitError>
        where R: Region<Item = u8> + ?Sized
    {
        if element_size == 0 {
            return Err(InitError::ZeroElementSize);
        }
        let count = region.as_mut_slice().len() / element_size;
        RingBuffer::new(region, count, element_size)
    }

    /// Number of element slots in the storage region.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cursors.slots()
    }

    /// Largest number of elements the buffer holds at once: `capacity() - 1`.
    #[inline]
    pub fn usable_capacity(&self) -> usize {
        self.cursors.usable()
    }

    /// Number of elements currently stored.
    #[inline]
    pub fn usage(&self) -> usize {
        self.cursors.len()
    }

    /// Number of elements that can be written before the buffer is full.
    #[inline]
    pub fn free(&self) -> usize {
        self.cursors.free()
    }

    /// Width of one element in bytes.
    #[inline]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Returns true if the buffer contains no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Returns true if no further element can be written
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cursors.is_full()
    }

    /// Empties the buffer and rewinds both cursors to the start of storage.
    ///
    /// The stored bytes are not scrubbed.
    #[inline]
    pub fn clear(&mut self) {
        self.set_cursors(0, 0);
    }

    /// Positions the cursors at the given slots.
    #[inline]
    fn set_cursors(&mut self, read: usize, write: usize) {
        self.cursors.set(read, write);
    }

    #[inline]
    fn byte_spans(&self, spans: &Spans) -> Spans {
        spans.scaled(self.element_size)
    }

    #[inline]
    fn slot_start(&self, slot: usize) -> usize {
        slot * self.element_size
    }

    fn assert_vector_len(&self, len: usize, max_count: usize) {
        let fits = max_count
            .checked_mul(self.element_size)
            .map_or(false, |needed| needed <= len);
        assert!(fits,
                "vector of {} bytes cannot hold {} elements of {} bytes",
                len,
                max_count,
                self.element_size);
    }

    /// Moves up to `max_count` of the oldest elements into `output`, oldest
    /// first, and returns how many were moved.
    ///
    /// Returns 0 without touching the buffer when it is empty.
    ///
    /// # Panics
    ///
    /// Panics if `output` is shorter than `max_count * element_size()` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use slicering::RingBuffer;
    ///
    /// let mut storage = [0u8; 4];
    /// let mut ring = RingBuffer::new(&mut storage, 4, 1).unwrap();
    /// ring.write(b"ab", 2);
    ///
    /// let mut out = [0u8; 1];
    /// assert_eq!(ring.read(&mut out, 1), 1);
    /// assert_eq!(&out, b"a");
    /// assert_eq!(ring.usage(), 1);
    /// ```
    pub fn read(&mut self, output: &mut [u8], max_count: usize) -> usize {
        self.assert_vector_len(output.len(), max_count);

        let count = cmp::min(max_count, self.usage());
        if count == 0 {
            return 0;
        }

        let Spans { first, second } = self.byte_spans(&self.cursors.read_spans(count));
        let split = first.len();
        let end = split + second.len();
        output[..split].copy_from_slice(&self.storage[first]);
        output[split..end].copy_from_slice(&self.storage[second]);

        self.cursors.advance_tail(count);
        count
    }

    /// Copies up to `max_count` elements from `input` into the buffer and
    /// returns how many were copied.
    ///
    /// Stops early once the buffer is full; unread elements are never
    /// overwritten. A short write can be finished later by writing the
    /// remainder of `input`.
    ///
    /// # Panics
    ///
    /// Panics if `input` is shorter than `max_count * element_size()` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use slicering::RingBuffer;
    ///
    /// let mut storage = [0u8; 4];
    /// let mut ring = RingBuffer::new(&mut storage, 4, 1).unwrap();
    ///
    /// let data = b"wxyz";
    /// let written = ring.write(data, 4);
    /// assert_eq!(written, 3);
    ///
    /// let mut out = [0u8; 1];
    /// ring.read(&mut out, 1);
    /// assert_eq!(ring.write(&data[written..], 4 - written), 1);
    /// ```
    pub fn write(&mut self, input: &[u8], max_count: usize) -> usize {
        self.assert_vector_len(input.len(), max_count);

        let count = cmp::min(max_count, self.free());
        if count == 0 {
            return 0;
        }

        let Spans { first, second } = self.byte_spans(&self.cursors.write_spans(count));
        let split = first.len();
        let end = split + second.len();
        self.storage[first].copy_from_slice(&input[..split]);
        self.storage[second].copy_from_slice(&input[split..end]);

        self.cursors.advance_head(count);
        count
    }

    /// Moves the oldest element into `element`.
    ///
    /// Returns false, leaving `element` untouched, if the buffer is empty.
    /// Unlike `put`, which reports a full buffer as `CapacityError`, an empty
    /// buffer is reported as a plain `false`.
    ///
    /// # Panics
    ///
    /// Panics if `element` is not exactly `element_size()` bytes long.
    ///
    /// # Examples
    ///
    /// ```
    /// use slicering::RingBuffer;
    ///
    /// let mut storage = [0u8; 8];
    /// let mut ring = RingBuffer::new(&mut storage, 4, 2).unwrap();
    ///
    /// let mut element = [0u8; 2];
    /// assert!(!ring.get(&mut element));
    ///
    /// ring.put(&[0xbe, 0xef]).unwrap();
    /// assert!(ring.get(&mut element));
    /// assert_eq!(element, [0xbe, 0xef]);
    /// ```
    pub fn get(&mut self, element: &mut [u8]) -> bool {
        assert_eq!(element.len(), self.element_size, "element size mismatch");
        if self.cursors.is_empty() {
            return false;
        }

        let start = self.slot_start(self.cursors.tail());
        element.copy_from_slice(&self.storage[start..start + self.element_size]);
        self.cursors.advance_tail(1);
        true
    }

    /// Appends one element.
    ///
    /// Returns `Err(CapacityError)` without any mutation if the buffer is
    /// full.
    ///
    /// # Panics
    ///
    /// Panics if `element` is not exactly `element_size()` bytes long.
    ///
    /// # Examples
    ///
    /// ```
    /// use slicering::RingBuffer;
    ///
    /// let mut storage = [0u8; 2];
    /// let mut ring = RingBuffer::new(&mut storage, 2, 1).unwrap();
    ///
    /// assert!(ring.put(&[1]).is_ok());
    /// assert!(ring.put(&[2]).is_err());
    /// ```
    pub fn put(&mut self, element: &[u8]) -> Result<(), CapacityError> {
        assert_eq!(element.len(), self.element_size, "element size mismatch");
        let next = self.cursors.next_head();
        if next == self.cursors.tail() {
            return Err(CapacityError { element: () });
        }

        let start = self.slot_start(self.cursors.head());
        self.storage[start..start + self.element_size].copy_from_slice(element);
        let tail = self.cursors.tail();
        self.set_cursors(tail, next);
        Ok(())
    }

    /// Drops up to `max_count` of the oldest elements without copying them
    /// out. Returns how many were dropped.
    pub fn skip(&mut self, max_count: usize) -> usize {
        let count = cmp::min(max_count, self.usage());
        self.cursors.advance_tail(count);
        count
    }

    /// Returns a pair of byte slices which contain, in order, the stored
    /// elements.
    ///
    /// The second slice is empty unless the contents wrap past the end of
    /// storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use slicering::RingBuffer;
    ///
    /// let mut storage = [0u8; 4];
    /// let mut ring = RingBuffer::new(&mut storage, 4, 1).unwrap();
    ///
    /// ring.write(b"abc", 3);
    /// ring.skip(2);
    /// ring.write(b"de", 2);
    ///
    /// assert_eq!(ring.as_slices(), (&b"cd"[..], &b"e"[..]));
    /// ```
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let Spans { first, second } = self.byte_spans(&self.cursors.read_spans(self.usage()));
        (&self.storage[first], &self.storage[second])
    }
}

impl<'a> fmt::Debug for RingBuffer<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("element_size", &self.element_size)
            .field("usage", &self.usage())
            .finish()
    }
}

#[cfg(feature = "std")]
mod io_impls {
    use std::io;

    use super::RingBuffer;

    fn element_count(buf_len: usize, element_size: usize) -> io::Result<usize> {
        if buf_len != 0 && buf_len < element_size {
            return Err(io::Error::new(io::ErrorKind::InvalidInput,
                                      "buffer shorter than one element"));
        }
        Ok(buf_len / element_size)
    }

    /// Reads whole elements; `Ok(0)` means `buf` is empty or the ring is
    /// currently empty. A non-empty `buf` shorter than one element is
    /// rejected with `InvalidInput`.
    impl<'a> io::Read for RingBuffer<'a> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let max_count = element_count(buf.len(), self.element_size())?;
            Ok(RingBuffer::read(self, buf, max_count) * self.element_size())
        }
    }

    /// Writes whole elements; `Ok(0)` means `buf` is empty or the ring is
    /// full. A non-empty `buf` shorter than one element is rejected with
    /// `InvalidInput`.
    impl<'a> io::Write for RingBuffer<'a> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let max_count = element_count(buf.len(), self.element_size())?;
            Ok(RingBuffer::write(self, buf, max_count) * self.element_size())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}

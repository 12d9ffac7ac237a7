//! Error types.

#[cfg(feature = "std")]
use std::error::Error;
use std::fmt;

/// Error value indicating insufficient capacity
///
/// Returned by `put` when the buffer already holds its usable capacity.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct CapacityError<T = ()> {
    /// The element that was rejected.
    pub element: T,
}

const CAPERROR: &str = "insufficient capacity";

#[cfg(feature = "std")]
impl<T> Error for CapacityError<T> {}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CAPERROR)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "CapacityError", CAPERROR)
    }
}

/// Error value indicating that a buffer cannot be laid over a memory region.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InitError {
    /// The element size was zero.
    ZeroElementSize,
    /// Fewer than two elements were requested, leaving no usable slot.
    TooFewElements {
        /// The requested element count.
        count: usize,
    },
    /// The region is shorter than `count * element_size` bytes.
    ///
    /// `needed` is `usize::MAX` when the product overflows.
    RegionTooSmall {
        /// Bytes required by the requested layout.
        needed: usize,
        /// Bytes provided by the region.
        available: usize,
    },
}

#[cfg(feature = "std")]
impl Error for InitError {}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            InitError::ZeroElementSize => write!(f, "element size must be non-zero"),
            InitError::TooFewElements { count } => {
                write!(f, "ring needs at least 2 elements, got {}", count)
            }
            InitError::RegionTooSmall { needed, available } => write!(
                f,
                "region holds {} bytes, layout needs {}",
                available, needed
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_error_messages() {
        let err = CapacityError { element: 7u32 };
        assert_eq!(format!("{}", err), "insufficient capacity");
        assert_eq!(format!("{:?}", err), "CapacityError: insufficient capacity");
        assert_eq!(err.element, 7);
    }

    #[test]
    fn init_error_messages() {
        assert_eq!(
            InitError::ZeroElementSize.to_string(),
            "element size must be non-zero"
        );
        assert_eq!(
            InitError::TooFewElements { count: 1 }.to_string(),
            "ring needs at least 2 elements, got 1"
        );
        assert_eq!(
            InitError::RegionTooSmall { needed: 16, available: 8 }.to_string(),
            "region holds 8 bytes, layout needs 16"
        );
    }
}

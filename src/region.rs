//! Caller-owned backing memory.

/// Trait for memory regions a ring can be laid over.
///
/// The ring borrows the region for its whole lifetime and never allocates,
/// resizes or frees it.
pub trait Region {
    /// The slot type of the region
    type Item: Copy;

    /// Converts the region to a mutable slice
    fn as_mut_slice(&mut self) -> &mut [Self::Item];
}

impl<T: Copy> Region for [T] {
    type Item = T;

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Copy, const N: usize> Region for [T; N] {
    type Item = T;

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self[..]
    }
}

#[cfg(feature = "std")]
impl<T: Copy> Region for Vec<T> {
    type Item = T;

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        Vec::as_mut_slice(self)
    }
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use super::Region;
    use generic_array::{ArrayLength, GenericArray};

    impl<T, N> Region for GenericArray<T, N>
    where
        T: Copy,
        N: ArrayLength<T>,
    {
        type Item = T;

        #[inline(always)]
        fn as_mut_slice(&mut self) -> &mut [T] {
            GenericArray::as_mut_slice(self)
        }
    }
}

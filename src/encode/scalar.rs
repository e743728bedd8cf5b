//! Fundamental types: the traversal leaves
//!
//! A scalar encodes as its raw in-memory representation — native size,
//! native byte order, no normalization. These are also the only types whose
//! slices qualify for the bulk-copy fast path unconditionally: a fundamental
//! type has no padding bytes, so the storage of `[T]` is one contiguous
//! initialized run.

use std::mem;
use std::slice;

use crate::encode::Encode;
use crate::error::OutputError;
use crate::sink::Sink;

macro_rules! impl_fundamental {
    ($($t:ty),* $(,)?) => {$(
        impl Encode for $t {
            const FUNDAMENTAL: bool = true;
            const PACKED: bool = true;

            #[inline]
            fn encoded_size(&self) -> usize {
                mem::size_of::<$t>()
            }

            #[inline]
            fn encode<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), OutputError> {
                sink.write(&[&self.to_ne_bytes()])
            }

            #[inline]
            fn contiguous_bytes(values: &[$t]) -> Option<&[u8]> {
                // SAFETY: no padding bytes in a fundamental type, so the
                // slice storage is size_of_val(values) initialized bytes.
                Some(unsafe {
                    slice::from_raw_parts(values.as_ptr().cast::<u8>(), mem::size_of_val(values))
                })
            }
        }
    )*};
}

impl_fundamental!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl Encode for bool {
    const FUNDAMENTAL: bool = true;
    const PACKED: bool = true;

    #[inline]
    fn encoded_size(&self) -> usize {
        1
    }

    #[inline]
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), OutputError> {
        sink.put(u8::from(*self))
    }

    #[inline]
    fn contiguous_bytes(values: &[bool]) -> Option<&[u8]> {
        // SAFETY: bool is one byte holding 0 or 1, matching its encoding.
        Some(unsafe { slice::from_raw_parts(values.as_ptr().cast::<u8>(), values.len()) })
    }
}

impl Encode for char {
    const FUNDAMENTAL: bool = true;
    const PACKED: bool = true;

    #[inline]
    fn encoded_size(&self) -> usize {
        mem::size_of::<char>()
    }

    #[inline]
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), OutputError> {
        sink.write(&[&(*self as u32).to_ne_bytes()])
    }

    #[inline]
    fn contiguous_bytes(values: &[char]) -> Option<&[u8]> {
        // SAFETY: char is a four-byte scalar whose memory is its u32 code
        // point in native order, exactly what encode() emits.
        Some(unsafe {
            slice::from_raw_parts(values.as_ptr().cast::<u8>(), mem::size_of_val(values))
        })
    }
}

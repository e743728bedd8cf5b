//! Traversal engine: classification, size computation, and byte emission
//!
//! Encoding is two traversals of the same value: a size pass
//! ([`calc_size`]) that only accumulates lengths, and a write pass
//! ([`write`]) that emits bytes through a [`Sink`]. Both passes live on the
//! same [`Encode`] impl per type, so field order and classification cannot
//! diverge between them — the structural contract the whole format depends
//! on.
//!
//! The wire format is host-native and write-only:
//!
//! ```text
//! scalar           raw in-memory bytes, native size and byte order
//! record           fields concatenated in declared order, no framing
//! packed record    one sizeof(T) raw copy of the whole value
//! sequence         [count: native usize][elements...]
//! POD sequence     [count: native usize][raw element storage, one copy]
//! string           [count][UTF-8 bytes] (a 1-byte-element POD sequence)
//! ```
//!
//! Decoding requires out-of-band schema knowledge; there are no type tags
//! and no terminators.

use crate::error::OutputError;
use crate::sink::Sink;

pub mod record;
mod scalar;
mod sequence;

pub use record::{FieldVisitor, Record};

/// A value with a deterministic flat byte encoding.
///
/// Implementations exist for the fundamental types, for the supported
/// ordered containers, for tuples (the native fixed-arity decomposition),
/// and for any struct registered with [`record!`](crate::record). A type
/// with none of these is rejected at compile time — there is no runtime
/// "unencodable" error.
///
/// A hand-written impl always overrides the automatic strategies: neither
/// the macro nor the tuple protocol applies unless opted into, so a custom
/// mapping simply *is* the type's impl.
pub trait Encode {
    /// True for the language's built-in arithmetic, boolean, and character
    /// types. Leaf verdict of the type classifier.
    const FUNDAMENTAL: bool = false;

    /// True when the encoded form is exactly the in-memory representation:
    /// every field fundamental, field sizes summing to `size_of::<Self>()`,
    /// and `size_of` equal to `align_of` (no compiler-inserted gap
    /// anywhere). Computed structurally by [`record!`](crate::record),
    /// never assumed.
    const PACKED: bool = false;

    /// Exact encoded byte length of `self`.
    ///
    /// Pure: no allocation, no side effects, recursion bounded by the
    /// nesting depth of the type (not by user data).
    fn encoded_size(&self) -> usize;

    /// Emit `self` to `sink`.
    ///
    /// Produces exactly [`encoded_size`](Encode::encoded_size) bytes or
    /// fails with the sink's error; on failure nothing further is written
    /// and bytes already flushed remain in the sink.
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), OutputError>;

    /// Raw storage of a slice of `Self` when a single bulk copy encodes it
    /// correctly, i.e. when element encodings are exactly the elements'
    /// memory. `None` forces element-wise encoding. This is a pure
    /// fast-path hook: both paths produce identical bytes.
    fn contiguous_bytes(_values: &[Self]) -> Option<&[u8]>
    where
        Self: Sized,
    {
        None
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encoded_size(&self) -> usize {
        (**self).encoded_size()
    }

    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), OutputError> {
        (**self).encode(sink)
    }
}

/// Exact encoded byte length of `value`.
///
/// Performs the identical traversal as [`write`] without touching any sink;
/// for every supported value, `write` emits exactly this many bytes.
///
/// # Example
///
/// ```
/// assert_eq!(flatwire::calc_size(&1u32), 4);
/// assert_eq!(
///     flatwire::calc_size(&vec![1u32, 2, 3]),
///     std::mem::size_of::<usize>() + 12,
/// );
/// ```
pub fn calc_size<T: Encode + ?Sized>(value: &T) -> usize {
    value.encoded_size()
}

/// Encode `value` into `sink`, returning the number of bytes written.
///
/// Pre-flight: the encoded size is computed first and checked against
/// [`Sink::capacity`]; a sink without room fails with
/// [`OutputError::Capacity`] before any byte is emitted. Sinks reporting
/// unbounded capacity skip straight to emission and surface their own
/// failures mid-write.
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let n = flatwire::write(&mut out, &(1u32, 2u32)).unwrap();
/// assert_eq!(n, 8);
/// assert_eq!(out.len(), 8);
/// ```
pub fn write<S, T>(sink: &mut S, value: &T) -> Result<usize, OutputError>
where
    S: Sink + ?Sized,
    T: Encode + ?Sized,
{
    let needed = value.encoded_size();
    let available = sink.capacity();
    if needed > available {
        return Err(OutputError::Capacity { needed, available });
    }
    value.encode(sink)?;
    Ok(needed)
}

/// Encode `value` into a fresh exact-capacity buffer.
pub fn to_vec<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>, OutputError> {
    let mut out = Vec::with_capacity(value.encoded_size());
    value.encode(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::SliceSink;

    #[test]
    fn test_write_returns_byte_count() {
        let mut out = Vec::new();
        assert_eq!(write(&mut out, &7u64).unwrap(), 8);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn test_write_rejects_undersized_sink_before_writing() {
        let mut buf = [0u8; 4];
        let mut sink = SliceSink::new(&mut buf);
        let err = write(&mut sink, &7u64).unwrap_err();
        assert!(err.is_capacity());
        assert_eq!(sink.capacity(), 4);
        assert_eq!(sink.written(), 0);
    }

    #[test]
    fn test_to_vec_matches_calc_size() {
        let value = vec![String::from("ab"), String::from("c")];
        let bytes = to_vec(&value).unwrap();
        assert_eq!(bytes.len(), calc_size(&value));
    }

    #[test]
    fn test_encode_through_reference() {
        let value = 5u16;
        let via_ref = to_vec(&&value).unwrap();
        assert_eq!(via_ref, to_vec(&value).unwrap());
    }
}

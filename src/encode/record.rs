//! Records: fixed-arity aggregates and their field traversal
//!
//! A record is any type that can present its fields, by reference and in
//! declared order, to a [`FieldVisitor`]. Two suppliers exist:
//!
//! 1. the native tuple protocol — tuples (and the unit type) decompose
//!    automatically;
//! 2. manual registration through [`record!`](crate::record), which names a
//!    struct's public fields in encode order.
//!
//! A hand-written [`Encode`] impl overrides both, since neither supplier
//! applies to a type unless opted into.
//!
//! The size and write passes share one `visit_fields` definition per type,
//! which is what pins the two traversals to identical field order. The
//! padding-free fast path never changes the bytes — a packed record's raw
//! memory equals its field-wise encoding by construction.

use std::mem;
use std::slice;

use crate::encode::Encode;
use crate::error::OutputError;
use crate::sink::Sink;

/// Receiver for one record traversal.
///
/// Fields arrive by reference in declared order; nothing is copied and no
/// reference escapes the visit call.
pub trait FieldVisitor {
    /// Observe the next field.
    fn field<T: Encode + ?Sized>(&mut self, value: &T) -> Result<(), OutputError>;
}

/// A fixed-arity aggregate with an ordered field list.
///
/// `FIELD_COUNT` is a compile-time constant; `visit_fields` must present
/// exactly that many fields, in the same order, on every call.
pub trait Record {
    /// Number of fields, fixed per type.
    const FIELD_COUNT: usize;

    /// Present each field to `visitor` in declared order.
    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) -> Result<(), OutputError>;
}

struct SizeVisitor {
    total: usize,
}

impl FieldVisitor for SizeVisitor {
    fn field<T: Encode + ?Sized>(&mut self, value: &T) -> Result<(), OutputError> {
        self.total += value.encoded_size();
        Ok(())
    }
}

struct WriteVisitor<'a, S: Sink + ?Sized> {
    sink: &'a mut S,
}

impl<S: Sink + ?Sized> FieldVisitor for WriteVisitor<'_, S> {
    fn field<T: Encode + ?Sized>(&mut self, value: &T) -> Result<(), OutputError> {
        value.encode(self.sink)
    }
}

/// Field-wise encoded size of a record: the sum of each field's recursively
/// computed size, in declared order.
pub fn record_size<R: Record + ?Sized>(record: &R) -> usize {
    let mut visitor = SizeVisitor { total: 0 };
    // The size visitor never fails; Record impls only propagate visitor
    // errors.
    let _ = record.visit_fields(&mut visitor);
    visitor.total
}

/// Field-wise encoding of a record: each field dispatched per its own
/// classification, no framing, no count prefix. This is the general path a
/// packed record's bulk copy must byte-for-byte agree with.
pub fn encode_record<R, S>(record: &R, sink: &mut S) -> Result<(), OutputError>
where
    R: Record + ?Sized,
    S: Sink + ?Sized,
{
    let mut visitor = WriteVisitor { sink };
    record.visit_fields(&mut visitor)
}

/// Raw bytes of one packed record.
///
/// Only meaningful for types whose [`Encode::PACKED`] predicate holds;
/// `record!` routes through here for its fast path.
#[doc(hidden)]
pub fn packed_bytes<T: Encode>(value: &T) -> &[u8] {
    assert!(T::PACKED);
    // SAFETY: PACKED is computed structurally: fundamental fields only and
    // field sizes summing to size_of::<T>(), so every byte is initialized.
    unsafe { slice::from_raw_parts((value as *const T).cast::<u8>(), mem::size_of::<T>()) }
}

/// Raw storage of a slice of packed records.
#[doc(hidden)]
pub fn packed_slice_bytes<T: Encode>(values: &[T]) -> &[u8] {
    assert!(T::PACKED);
    // SAFETY: as for packed_bytes; slice stride equals size_of::<T>(), so
    // the element storage is one contiguous initialized run.
    unsafe { slice::from_raw_parts(values.as_ptr().cast::<u8>(), mem::size_of_val(values)) }
}

/// Register a struct's fields for encoding, in declared order.
///
/// Expands to [`Record`] and [`Encode`] impls. The padding-free predicate
/// is evaluated structurally at compile time from the named field types;
/// records that fail it (any non-fundamental field, any compiler-inserted
/// gap) fall back to field-wise encoding with identical output.
///
/// Naming a non-public field from outside its module fails to compile, so a
/// type with hidden state cannot be silently part-mapped.
///
/// # Example
///
/// ```
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// flatwire::record!(Point { x: f32, y: f32 });
///
/// let bytes = flatwire::to_vec(&Point { x: 1.0, y: 2.0 }).unwrap();
/// assert_eq!(bytes.len(), 8);
/// ```
#[macro_export]
macro_rules! record {
    ($ty:ty {}) => {
        impl $crate::Record for $ty {
            const FIELD_COUNT: usize = 0;

            fn visit_fields<V: $crate::FieldVisitor>(
                &self,
                _visitor: &mut V,
            ) -> ::std::result::Result<(), $crate::OutputError> {
                ::std::result::Result::Ok(())
            }
        }

        impl $crate::Encode for $ty {
            fn encoded_size(&self) -> usize {
                0
            }

            fn encode<S: $crate::Sink + ?Sized>(
                &self,
                _sink: &mut S,
            ) -> ::std::result::Result<(), $crate::OutputError> {
                ::std::result::Result::Ok(())
            }
        }
    };
    ($ty:ty { $($field:ident: $fty:ty),+ $(,)? }) => {
        impl $crate::Record for $ty {
            const FIELD_COUNT: usize = [$(stringify!($field)),+].len();

            fn visit_fields<V: $crate::FieldVisitor>(
                &self,
                visitor: &mut V,
            ) -> ::std::result::Result<(), $crate::OutputError> {
                $(visitor.field(&self.$field)?;)+
                ::std::result::Result::Ok(())
            }
        }

        impl $crate::Encode for $ty {
            const PACKED: bool = ::std::mem::size_of::<$ty>() == ::std::mem::align_of::<$ty>()
                && ::std::mem::size_of::<$ty>() == (0 $(+ ::std::mem::size_of::<$fty>())+)
                $(&& <$fty as $crate::Encode>::FUNDAMENTAL)+;

            fn encoded_size(&self) -> usize {
                $crate::encode::record::record_size(self)
            }

            fn encode<S: $crate::Sink + ?Sized>(
                &self,
                sink: &mut S,
            ) -> ::std::result::Result<(), $crate::OutputError> {
                if <Self as $crate::Encode>::PACKED {
                    return sink.write(&[$crate::encode::record::packed_bytes(self)]);
                }
                $crate::encode::record::encode_record(self, sink)
            }

            fn contiguous_bytes(values: &[Self]) -> ::std::option::Option<&[u8]> {
                if <Self as $crate::Encode>::PACKED {
                    ::std::option::Option::Some($crate::encode::record::packed_slice_bytes(values))
                } else {
                    ::std::option::Option::None
                }
            }
        }
    };
}

/// The unit type is the zero-field record: zero bytes.
impl Record for () {
    const FIELD_COUNT: usize = 0;

    fn visit_fields<V: FieldVisitor>(&self, _visitor: &mut V) -> Result<(), OutputError> {
        Ok(())
    }
}

impl Encode for () {
    fn encoded_size(&self) -> usize {
        0
    }

    fn encode<S: Sink + ?Sized>(&self, _sink: &mut S) -> Result<(), OutputError> {
        Ok(())
    }
}

// Tuples are the native fixed-arity decomposition: fields in positional
// order, no framing, same packed predicate as registered records.
macro_rules! impl_tuple_record {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name: Encode),+> Record for ($($name,)+) {
            const FIELD_COUNT: usize = [$(stringify!($idx)),+].len();

            fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) -> Result<(), OutputError> {
                $(visitor.field(&self.$idx)?;)+
                Ok(())
            }
        }

        impl<$($name: Encode),+> Encode for ($($name,)+) {
            const PACKED: bool = mem::size_of::<Self>() == mem::align_of::<Self>()
                && mem::size_of::<Self>() == (0 $(+ mem::size_of::<$name>())+)
                $(&& $name::FUNDAMENTAL)+;

            fn encoded_size(&self) -> usize {
                record_size(self)
            }

            fn encode<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), OutputError> {
                if Self::PACKED {
                    return sink.write(&[packed_bytes(self)]);
                }
                encode_record(self, sink)
            }

            fn contiguous_bytes(values: &[Self]) -> Option<&[u8]> {
                if Self::PACKED {
                    Some(packed_slice_bytes(values))
                } else {
                    None
                }
            }
        }
    };
}

impl_tuple_record!(A.0);
impl_tuple_record!(A.0, B.1);
impl_tuple_record!(A.0, B.1, C.2);
impl_tuple_record!(A.0, B.1, C.2, D.3);
impl_tuple_record!(A.0, B.1, C.2, D.3, E.4);
impl_tuple_record!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_tuple_record!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_tuple_record!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
impl_tuple_record!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
impl_tuple_record!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
impl_tuple_record!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
impl_tuple_record!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);

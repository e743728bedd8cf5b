//! Homogeneous sequences and strings
//!
//! Every sequence is preceded by its element count as a host-native
//! `usize` — no varint, no terminator, no element type tag. Two encoding
//! strategies follow the prefix:
//!
//! - *contiguous POD*: the element type reports its slice storage through
//!   [`Encode::contiguous_bytes`]; prefix and payload go out as one
//!   two-chunk write.
//! - *general*: each element is recursively encoded in iteration order.
//!
//! Both strategies produce identical bytes; the split is purely a copy
//! count. Fixed-size arrays are not sequences — their arity is static, so
//! they follow the tuple protocol (no prefix), like every other fixed-arity
//! decomposition.
//!
//! Hash-based containers are deliberately unsupported: their iteration
//! order would break the determinism guarantee. Use the ordered `BTree`
//! containers instead.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::mem;

use crate::encode::Encode;
use crate::error::OutputError;
use crate::sink::Sink;

/// Bytes occupied by a sequence's size prefix.
const PREFIX_SIZE: usize = mem::size_of::<usize>();

impl<T: Encode> Encode for [T] {
    fn encoded_size(&self) -> usize {
        if T::PACKED {
            PREFIX_SIZE + self.len() * mem::size_of::<T>()
        } else {
            PREFIX_SIZE + self.iter().map(Encode::encoded_size).sum::<usize>()
        }
    }

    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), OutputError> {
        let count = self.len().to_ne_bytes();
        if let Some(storage) = T::contiguous_bytes(self) {
            return sink.write(&[&count, storage]);
        }
        sink.write(&[&count])?;
        for element in self {
            element.encode(sink)?;
        }
        Ok(())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encoded_size(&self) -> usize {
        self.as_slice().encoded_size()
    }

    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), OutputError> {
        self.as_slice().encode(sink)
    }
}

/// Fixed-size arrays have static arity, so they decompose like tuples:
/// elements in order, no size prefix. The bulk fast path still applies when
/// the element type is packed.
impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encoded_size(&self) -> usize {
        if T::PACKED {
            N * mem::size_of::<T>()
        } else {
            self.iter().map(Encode::encoded_size).sum()
        }
    }

    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), OutputError> {
        if let Some(storage) = T::contiguous_bytes(self) {
            return sink.write(&[storage]);
        }
        for element in self {
            element.encode(sink)?;
        }
        Ok(())
    }
}

/// Strings are contiguous POD sequences of one-byte elements:
/// `[count][UTF-8 bytes]`, always a single two-chunk write.
impl Encode for str {
    fn encoded_size(&self) -> usize {
        PREFIX_SIZE + self.len()
    }

    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), OutputError> {
        sink.write(&[&self.len().to_ne_bytes(), self.as_bytes()])
    }
}

impl Encode for String {
    fn encoded_size(&self) -> usize {
        self.as_str().encoded_size()
    }

    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), OutputError> {
        self.as_str().encode(sink)
    }
}

/// Deque storage may be split, so this is always the general path.
impl<T: Encode> Encode for VecDeque<T> {
    fn encoded_size(&self) -> usize {
        PREFIX_SIZE + self.iter().map(Encode::encoded_size).sum::<usize>()
    }

    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), OutputError> {
        sink.write(&[&self.len().to_ne_bytes()])?;
        for element in self {
            element.encode(sink)?;
        }
        Ok(())
    }
}

/// A map is a general sequence of `(key, value)` pair records in key order.
impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encoded_size(&self) -> usize {
        PREFIX_SIZE
            + self
                .iter()
                .map(|(k, v)| k.encoded_size() + v.encoded_size())
                .sum::<usize>()
    }

    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), OutputError> {
        sink.write(&[&self.len().to_ne_bytes()])?;
        for (key, value) in self {
            key.encode(sink)?;
            value.encode(sink)?;
        }
        Ok(())
    }
}

impl<T: Encode> Encode for BTreeSet<T> {
    fn encoded_size(&self) -> usize {
        PREFIX_SIZE + self.iter().map(Encode::encoded_size).sum::<usize>()
    }

    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), OutputError> {
        sink.write(&[&self.len().to_ne_bytes()])?;
        for element in self {
            element.encode(sink)?;
        }
        Ok(())
    }
}

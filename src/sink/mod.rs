//! Output sink abstraction
//!
//! A sink is the destination side of an encode: anything that can accept
//! ordered byte chunks and report how much room it has left. The traversal
//! engine talks to every destination through the same three operations, so
//! one encoding pass can target a growable buffer, a fixed window, a stream,
//! or a raw file descriptor without changing shape.
//!
//! A single [`Sink::write`] call carries one *or more* chunks (for example a
//! sequence's size prefix followed by its payload). Sinks must treat a
//! multi-chunk write as one logical operation — no buffering between chunks
//! on the caller's side, at most one capacity decision on the sink's side.

use crate::error::OutputError;

mod buffer;
mod fn_sink;
mod stream;

#[cfg(unix)]
mod fd;

pub use buffer::SliceSink;
#[cfg(unix)]
pub use fd::FdSink;
pub use fn_sink::FnSink;
pub use stream::IoSink;

/// Uniform write contract for encode destinations.
///
/// # Capacity semantics
///
/// [`capacity`](Sink::capacity) reports the bytes the sink can still accept;
/// unbounded sinks report [`usize::MAX`]. The top-level
/// [`write`](crate::write) entry point performs a pre-flight check against
/// this value and refuses to start an encode that cannot fit, so bounded
/// sinks see either the whole value or nothing.
///
/// # Failure semantics
///
/// A failed write leaves previously flushed bytes in place. Implementations
/// must not emit any byte of a chunk they reject, but are not required to
/// roll back earlier chunks.
pub trait Sink {
    /// Remaining bytes this sink can accept, or [`usize::MAX`] when the
    /// destination grows or is otherwise unbounded.
    fn capacity(&self) -> usize;

    /// Accept `chunks` in order as one logical write.
    fn write(&mut self, chunks: &[&[u8]]) -> Result<(), OutputError>;

    /// Accept a single byte.
    fn put(&mut self, byte: u8) -> Result<(), OutputError> {
        self.write(&[&[byte]])
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn write(&mut self, chunks: &[&[u8]]) -> Result<(), OutputError> {
        (**self).write(chunks)
    }

    fn put(&mut self, byte: u8) -> Result<(), OutputError> {
        (**self).put(byte)
    }
}

/// Total length of a multi-chunk write.
pub(crate) fn chunks_len(chunks: &[&[u8]]) -> usize {
    chunks.iter().map(|c| c.len()).sum()
}

//! In-memory sinks: the growable buffer and the bounded window

use crate::error::OutputError;
use crate::sink::{chunks_len, Sink};

/// Growable buffer sink.
///
/// Appends to whatever the vector already holds — encoding into a non-empty
/// `Vec<u8>` extends it by exactly the encoded size. Capacity is unbounded;
/// the buffer is reserved up front per write so a multi-chunk write costs at
/// most one allocation.
impl Sink for Vec<u8> {
    fn capacity(&self) -> usize {
        usize::MAX
    }

    fn write(&mut self, chunks: &[&[u8]]) -> Result<(), OutputError> {
        self.reserve(chunks_len(chunks));
        for chunk in chunks {
            self.extend_from_slice(chunk);
        }
        Ok(())
    }

    fn put(&mut self, byte: u8) -> Result<(), OutputError> {
        self.push(byte);
        Ok(())
    }
}

/// Bounded window over a caller-provided byte buffer.
///
/// The window shrinks as bytes are written; [`capacity`](Sink::capacity)
/// reports the remaining room. A chunk set that does not fit is rejected
/// whole — the window is left untouched, no partial chunk is copied.
///
/// # Example
///
/// ```
/// use flatwire::{Sink, SliceSink};
///
/// let mut buf = [0u8; 8];
/// let mut sink = SliceSink::new(&mut buf);
/// sink.write(&[b"abc"]).unwrap();
/// assert_eq!(sink.capacity(), 5);
/// assert_eq!(sink.written(), 3);
/// ```
#[derive(Debug)]
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceSink<'a> {
    /// Wrap a fixed buffer as a write window starting at its first byte.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written through this window so far.
    pub fn written(&self) -> usize {
        self.pos
    }

    /// The filled prefix of the underlying buffer.
    pub fn filled(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}

impl Sink for SliceSink<'_> {
    fn capacity(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn write(&mut self, chunks: &[&[u8]]) -> Result<(), OutputError> {
        let needed = chunks_len(chunks);
        let available = self.capacity();
        if needed > available {
            return Err(OutputError::Capacity { needed, available });
        }
        for chunk in chunks {
            self.buf[self.pos..self.pos + chunk.len()].copy_from_slice(chunk);
            self.pos += chunk.len();
        }
        Ok(())
    }

    fn put(&mut self, byte: u8) -> Result<(), OutputError> {
        if self.pos == self.buf.len() {
            return Err(OutputError::Capacity {
                needed: 1,
                available: 0,
            });
        }
        self.buf[self.pos] = byte;
        self.pos += 1;
        Ok(())
    }
}

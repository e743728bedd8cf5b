//! Stream sink: adapter over any [`std::io::Write`]

use std::io::Write;

use crate::error::OutputError;
use crate::sink::Sink;

/// Sink over an arbitrary [`io::Write`](std::io::Write) destination.
///
/// Capacity is unbounded; failure surfaces as whatever `io::Error` the
/// underlying writer reports. The writer is *not* flushed per write — call
/// [`IoSink::into_inner`] (or flush the writer yourself) when the encode is
/// done.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use flatwire::IoSink;
///
/// let mut sink = IoSink::new(Cursor::new(Vec::new()));
/// flatwire::write(&mut sink, &7u32).unwrap();
/// assert_eq!(sink.into_inner().into_inner(), 7u32.to_ne_bytes());
/// ```
#[derive(Debug)]
pub struct IoSink<W: Write> {
    writer: W,
}

impl<W: Write> IoSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrow the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwrap back into the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for IoSink<W> {
    fn capacity(&self) -> usize {
        usize::MAX
    }

    fn write(&mut self, chunks: &[&[u8]]) -> Result<(), OutputError> {
        for chunk in chunks {
            self.writer.write_all(chunk)?;
        }
        Ok(())
    }

    fn put(&mut self, byte: u8) -> Result<(), OutputError> {
        self.writer.write_all(&[byte])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_sink_writes_all_chunks() {
        let mut sink = IoSink::new(Vec::new());
        sink.write(&[b"head", b"tail"]).unwrap();
        sink.put(b'!').unwrap();
        assert_eq!(sink.into_inner(), b"headtail!");
    }

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_io_sink_propagates_stream_error() {
        let mut sink = IoSink::new(FailingWriter);
        let err = sink.write(&[b"data"]).unwrap_err();
        assert!(err.is_io());
    }
}

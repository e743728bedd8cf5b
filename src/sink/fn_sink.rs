//! Closure sink: the output-iterator destination kind

use crate::error::OutputError;
use crate::sink::Sink;

/// Sink that feeds every byte to a closure, one at a time.
///
/// The flat-byte equivalent of writing through an output iterator: unbounded
/// capacity, no failure path, the caller's closure decides where each byte
/// goes.
///
/// # Example
///
/// ```
/// use flatwire::FnSink;
///
/// let mut seen = Vec::new();
/// let mut sink = FnSink::new(|b| seen.push(b));
/// flatwire::write(&mut sink, &0x01020304u32).unwrap();
/// drop(sink);
/// assert_eq!(seen, 0x01020304u32.to_ne_bytes());
/// ```
pub struct FnSink<F: FnMut(u8)> {
    emit: F,
}

impl<F: FnMut(u8)> FnSink<F> {
    /// Wrap a per-byte closure.
    pub fn new(emit: F) -> Self {
        Self { emit }
    }
}

impl<F: FnMut(u8)> Sink for FnSink<F> {
    fn capacity(&self) -> usize {
        usize::MAX
    }

    fn write(&mut self, chunks: &[&[u8]]) -> Result<(), OutputError> {
        for chunk in chunks {
            for &byte in *chunk {
                (self.emit)(byte);
            }
        }
        Ok(())
    }

    fn put(&mut self, byte: u8) -> Result<(), OutputError> {
        (self.emit)(byte);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_sink_sees_bytes_in_order() {
        let mut seen = Vec::new();
        {
            let mut sink = FnSink::new(|b| seen.push(b));
            sink.write(&[&[1, 2], &[3]]).unwrap();
            sink.put(4).unwrap();
        }
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }
}

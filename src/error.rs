//! Unified error type for encoding operations
//!
//! Every failure an encode call can hit is an output-side failure: the sink
//! ran out of room, the underlying descriptor wrote short, or a stream
//! reported an I/O error. Classification of the value itself never fails at
//! runtime — an unencodable type is rejected by the compiler because it has
//! no [`Encode`](crate::Encode) impl.

use thiserror::Error;

/// Error produced when a sink cannot accept the bytes an encoding needs.
///
/// All variants are fatal to the current [`write`](crate::write) call: the
/// traversal unwinds immediately, bytes already flushed stay in the sink,
/// and no further bytes are written. Retrying or resuming is the caller's
/// responsibility.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The sink's reported capacity is smaller than the encoded size.
    ///
    /// Raised by the pre-flight check in [`write`](crate::write) before any
    /// byte is emitted, and by bounded sinks whose remaining window is
    /// exceeded mid-write.
    #[error("sink capacity exhausted: {needed} bytes required, {available} available")]
    Capacity {
        /// Bytes the pending write requires.
        needed: usize,
        /// Bytes the sink reports it can still accept.
        available: usize,
    },

    /// A descriptor accepted fewer bytes than requested.
    #[error("short write: {written} of {requested} bytes accepted")]
    ShortWrite {
        /// Bytes the descriptor actually took.
        written: usize,
        /// Bytes handed to the descriptor.
        requested: usize,
    },

    /// An underlying stream reported an I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OutputError {
    /// Returns true if the failure was a capacity check, meaning no byte of
    /// the failed chunk reached the sink.
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::Capacity { .. })
    }

    /// Returns true if the failure came from the operating system rather
    /// than from this crate's own bookkeeping.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::ShortWrite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let cap = OutputError::Capacity {
            needed: 16,
            available: 4,
        };
        assert!(cap.is_capacity());
        assert!(!cap.is_io());

        let short = OutputError::ShortWrite {
            written: 10,
            requested: 32,
        };
        assert!(short.is_io());
        assert!(!short.is_capacity());

        let io = OutputError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert!(io.is_io());
    }

    #[test]
    fn test_error_display() {
        let err = OutputError::Capacity {
            needed: 16,
            available: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("16 bytes required"));
        assert!(msg.contains("4 available"));
    }
}

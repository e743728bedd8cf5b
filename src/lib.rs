//! Flatwire: deterministic flat binary serialization
//!
//! Flatwire turns structured values — records of scalars, strings, nested
//! records, and homogeneous sequences — into a flat, host-native byte
//! encoding, and can compute the exact encoded size before writing a single
//! byte. It is an embedding core for wire protocols and persistence layers,
//! not a standalone tool:
//! - write-only format (no decoding, no schema tags, no versioning);
//! - host-native layout (not portable across differing architectures);
//! - synchronous and single-threaded (callers synchronize shared sinks).
//!
//! Two halves make up the crate: the [`Encode`] traversal engine (what the
//! bytes are) and the [`Sink`] abstraction (where the bytes go). The same
//! traversal targets a growable `Vec<u8>`, a bounded [`SliceSink`] window,
//! any [`std::io::Write`] via [`IoSink`], a raw Unix descriptor via
//! [`FdSink`], or a per-byte closure via [`FnSink`].
//!
//! # Example
//!
//! ```
//! struct Sample {
//!     id: u32,
//!     name: String,
//! }
//!
//! flatwire::record!(Sample { id: u32, name: String });
//!
//! let sample = Sample { id: 7, name: String::from("probe") };
//! let mut out = Vec::new();
//! let written = flatwire::write(&mut out, &sample).unwrap();
//!
//! assert_eq!(written, flatwire::calc_size(&sample));
//! assert_eq!(out.len(), written);
//! ```

pub mod encode;
pub mod error;
pub mod sink;

// Re-export the call-level surface
pub use encode::{calc_size, to_vec, write, Encode, FieldVisitor, Record};
pub use error::OutputError;
#[cfg(unix)]
pub use sink::FdSink;
pub use sink::{FnSink, IoSink, Sink, SliceSink};

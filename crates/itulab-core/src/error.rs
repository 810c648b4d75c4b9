//! Error types for itulab

use thiserror::Error;

/// Result type for itulab operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while transforming or bridging ITULab data
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Source bytes could not be opened as a JPEG stream
    #[error("Stream open failed: {0}")]
    StreamOpen(String),

    /// Marker recognition failed where an ITU-T.42 stream was required
    #[error("input is not ITU-T.42 fax data (no G3FAX application marker)")]
    NotItuFax,

    /// The external JPEG codec reported a fatal condition
    #[error("JPEG codec error: {0}")]
    Codec(String),

    /// Image geometry overflows addressable buffer sizes
    #[error("cannot allocate {width}x{height} scanline storage")]
    Allocation { width: u32, height: u32 },

    /// Caller-owned buffer does not match the image geometry
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}

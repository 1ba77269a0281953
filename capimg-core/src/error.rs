//! Error types for capimg operations

/// Structural failures while walking or rewriting a JPEG stream.
///
/// Negative results (not a JPEG, no XMP present, no description in a
/// packet) are ordinary return values, not errors; see
/// [`ReadOutcome`](crate::types::ReadOutcome) and
/// [`WriteOutcome`](crate::types::WriteOutcome). Everything here aborts
/// the whole operation and must not be confused with "not found".
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum XmpError {
    /// A segment declared a length field below the 2-byte minimum
    #[error("invalid segment length {length} for marker 0x{marker:02X}")]
    InvalidSegmentLength {
        /// The marker whose length field was invalid.
        marker: u8,
        /// The declared length (includes the 2 length bytes).
        length: u16,
    },

    /// The stream ended before a terminal marker or mid-segment
    #[error("unexpected end of stream")]
    UnexpectedEof,

    /// The XMP packet does not fit a single APP1 segment
    #[error("XMP packet too large: segment needs {size} bytes, limit is {max}")]
    PacketTooLarge {
        /// Required segment length (identifier + packet + length bytes).
        size: usize,
        /// Maximum value of the 16-bit length field.
        max: usize,
    },

    /// IO error during read/write
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for XmpError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            XmpError::UnexpectedEof
        } else {
            XmpError::Io(err.to_string())
        }
    }
}

//! Core result types for capimg operations

use crate::constants::{has_length_field, marker_name};

/// Outcome of scanning a stream for an XMP packet.
///
/// All three cases are ordinary results; structural stream damage is
/// reported through [`XmpError`](crate::XmpError) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The stream does not start with an SOI marker; not a JPEG.
    NotJpeg,

    /// A well-formed scan reached SOS or EOI without finding XMP.
    NoXmp,

    /// The raw XMP packet text found in the first matching APP1 segment.
    Xmp(String),
}

/// Outcome of rewriting a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The input does not start with an SOI marker; nothing was written.
    NotJpeg,

    /// The rewritten stream was fully emitted.
    Rewritten,
}

/// One marker segment located during inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentInfo {
    /// Marker code (without the 0xFF prefix).
    pub marker: u8,

    /// Byte offset of the marker's 0xFF prefix in the input.
    pub offset: usize,

    /// Payload length in bytes (zero for standalone markers).
    pub payload_len: usize,
}

impl SegmentInfo {
    /// Human-readable marker name.
    pub fn name(&self) -> &'static str {
        marker_name(self.marker)
    }

    /// Total encoded size: marker framing plus length field plus payload.
    pub fn total_size(&self) -> usize {
        if has_length_field(self.marker) {
            2 + 2 + self.payload_len
        } else {
            2
        }
    }
}

//! High-level description read/write
//!
//! Composes the segment walker and the packet codec: a read scans the
//! stream for the XMP APP1 payload and extracts the `dc:description`
//! value; a write builds a fresh packet (existing packets are replaced
//! wholesale, never merged) and rewrites the stream.

use std::io::{Cursor, Read, Write};

use crate::packet::{build_packet, extract_description};
use crate::types::{ReadOutcome, WriteOutcome};
use crate::walker;
use crate::Result;

/// Read the description embedded in a JPEG stream.
///
/// Returns `None` for non-JPEG input, a JPEG without XMP, or a packet
/// without a usable (non-blank) description.
pub fn read_description<R: Read>(reader: &mut R) -> Result<Option<String>> {
    match walker::read_xmp(reader)? {
        ReadOutcome::Xmp(packet) => Ok(extract_description(&packet)),
        ReadOutcome::NotJpeg | ReadOutcome::NoXmp => Ok(None),
    }
}

/// Rewrite a JPEG stream with a new description.
///
/// The previous XMP packet, including any other RDF content it carried,
/// is discarded.
pub fn write_description<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    description: &str,
) -> Result<WriteOutcome> {
    let packet = build_packet(description);
    walker::write_xmp(reader, writer, &packet)
}

/// Read the description from an in-memory JPEG.
pub fn read_description_from_bytes(data: &[u8]) -> Result<Option<String>> {
    read_description(&mut Cursor::new(data))
}

/// Rewrite an in-memory JPEG with a new description.
///
/// Returns `None` if the input is not a JPEG.
pub fn write_description_to_vec(data: &[u8], description: &str) -> Result<Option<Vec<u8>>> {
    let mut out = Vec::with_capacity(data.len() + 1024);
    match write_description(&mut Cursor::new(data), &mut out, description)? {
        WriteOutcome::NotJpeg => Ok(None),
        WriteOutcome::Rewritten => Ok(Some(out)),
    }
}

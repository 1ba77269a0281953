//! JPEG marker segment walker
//!
//! Walks a JPEG byte stream marker-by-marker in a strictly forward single
//! pass: locate the XMP APP1 segment on read, or rewrite the stream with a
//! fresh XMP segment on write while passing every other segment through
//! byte-for-byte. Entropy-coded scan data after SOS is never parsed as
//! markers.

use std::io::{self, Cursor, Read, Write};

use bytes::{BufMut, Bytes, BytesMut};

use crate::constants::{
    has_length_field, APP1, EOI, MARKER_PREFIX, MAX_SEGMENT_LEN, SOI, SOS, XMP_ID,
};
use crate::error::XmpError;
use crate::types::{ReadOutcome, SegmentInfo, WriteOutcome};
use crate::Result;

#[cfg(feature = "logging")]
use tracing::{debug, trace};

/// Check whether a byte slice starts with the JPEG SOI marker.
///
/// A failing check means "not a supported container", not an error.
pub fn is_jpeg(header: &[u8]) -> bool {
    header.len() >= 2 && header[0] == MARKER_PREFIX && header[1] == SOI
}

/// Scan a JPEG stream for the XMP APP1 segment.
///
/// Stops at SOS or EOI (metadata segments never appear after SOS). The
/// first matching segment wins. The payload after the 29-byte identifier
/// is decoded as UTF-8 with replacement characters.
///
/// Truncation before a terminal marker is reached is a structural
/// [`XmpError::UnexpectedEof`], distinct from [`ReadOutcome::NoXmp`].
pub fn read_xmp<R: Read>(reader: &mut R) -> Result<ReadOutcome> {
    let mut soi = [0u8; 2];
    if read_header(reader, &mut soi)?.is_none() || !is_jpeg(&soi) {
        return Ok(ReadOutcome::NotJpeg);
    }

    loop {
        let marker = next_marker(reader)?;

        // Image data begins at SOS; no more metadata segments beyond it.
        if marker == SOS || marker == EOI {
            return Ok(ReadOutcome::NoXmp);
        }

        if !has_length_field(marker) {
            continue;
        }

        let length = read_u16_be(reader)?;
        if length < 2 {
            return Err(XmpError::InvalidSegmentLength { marker, length });
        }
        let payload_len = (length - 2) as usize;

        if marker == APP1 {
            let prefix_len = payload_len.min(XMP_ID.len());
            let mut prefix = vec![0u8; prefix_len];
            reader.read_exact(&mut prefix)?;

            if prefix_len == XMP_ID.len() && prefix.as_slice() == &XMP_ID[..] {
                let mut packet = vec![0u8; payload_len - prefix_len];
                reader.read_exact(&mut packet)?;

                #[cfg(feature = "logging")]
                debug!("found XMP APP1 segment with {} packet bytes", packet.len());

                return Ok(ReadOutcome::Xmp(
                    String::from_utf8_lossy(&packet).into_owned(),
                ));
            }

            // Not XMP (EXIF or other APP1 use); skip the rest.
            skip_exact(reader, payload_len - prefix_len)?;
        } else {
            skip_exact(reader, payload_len)?;
        }
    }
}

/// Rewrite a JPEG stream with a new XMP packet.
///
/// The new APP1 segment is inserted immediately after SOI; every
/// pre-existing XMP APP1 segment is dropped so exactly one survives. All
/// other segments, including unrecognized vendor markers, are copied
/// byte-for-byte. Everything after the SOS segment is copied verbatim.
///
/// Fails with [`XmpError::PacketTooLarge`] before anything is written if
/// the packet cannot fit a single segment.
pub fn write_xmp<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    packet: &str,
) -> Result<WriteOutcome> {
    let segment = xmp_segment(packet)?;

    let mut soi = [0u8; 2];
    if read_header(reader, &mut soi)?.is_none() || !is_jpeg(&soi) {
        return Ok(WriteOutcome::NotJpeg);
    }

    writer.write_all(&soi)?;
    writer.write_all(&segment)?;

    rewrite_segments(reader, writer)?;

    writer.flush()?;
    Ok(WriteOutcome::Rewritten)
}

/// Rewrite a JPEG stream with all XMP APP1 segments removed.
///
/// Same pass-through discipline as [`write_xmp`], without inserting a
/// replacement segment.
pub fn strip_xmp<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<WriteOutcome> {
    let mut soi = [0u8; 2];
    if read_header(reader, &mut soi)?.is_none() || !is_jpeg(&soi) {
        return Ok(WriteOutcome::NotJpeg);
    }

    writer.write_all(&soi)?;
    rewrite_segments(reader, writer)?;
    writer.flush()?;
    Ok(WriteOutcome::Rewritten)
}

/// Shared rewrite loop: copy segments, dropping XMP APP1 segments, and
/// copy everything after SOS verbatim.
fn rewrite_segments<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<()> {
    loop {
        let marker = next_marker(reader)?;

        if !has_length_field(marker) {
            writer.write_all(&[MARKER_PREFIX, marker])?;
            if marker == EOI {
                return Ok(());
            }
            continue;
        }

        let length = read_u16_be(reader)?;
        if length < 2 {
            return Err(XmpError::InvalidSegmentLength { marker, length });
        }
        let payload_len = (length - 2) as usize;

        let mut payload = vec![0u8; payload_len];
        reader.read_exact(&mut payload)?;

        // Drop pre-existing XMP segments.
        if marker == APP1 && payload.starts_with(XMP_ID) {
            #[cfg(feature = "logging")]
            debug!("dropping existing XMP APP1 segment ({} bytes)", payload_len);
            continue;
        }

        writer.write_all(&[MARKER_PREFIX, marker])?;
        writer.write_all(&length.to_be_bytes())?;
        writer.write_all(&payload)?;

        if marker == SOS {
            // Entropy-coded data plus EOI follow; never parsed as markers.
            let copied = io::copy(reader, writer)?;

            #[cfg(feature = "logging")]
            trace!("copied {} bytes of scan data verbatim", copied);
            #[cfg(not(feature = "logging"))]
            let _ = copied;

            return Ok(());
        }
    }
}

/// Frame an XMP packet as a complete APP1 segment (marker, length,
/// identifier, UTF-8 packet bytes).
pub fn xmp_segment(packet: &str) -> Result<Bytes> {
    let payload_len = XMP_ID.len() + packet.len();
    // The length field counts itself.
    let total_len = payload_len + 2;
    if total_len > MAX_SEGMENT_LEN {
        return Err(XmpError::PacketTooLarge {
            size: total_len,
            max: MAX_SEGMENT_LEN,
        });
    }

    let mut buf = BytesMut::with_capacity(2 + total_len);
    buf.put_u8(MARKER_PREFIX);
    buf.put_u8(APP1);
    buf.put_u16(total_len as u16);
    buf.put_slice(XMP_ID);
    buf.put_slice(packet.as_bytes());

    Ok(buf.freeze())
}

/// Enumerate the marker segments of a JPEG held in memory.
///
/// Returns `None` if the slice does not start with SOI. Stops after the
/// SOS segment (or at EOI for scanless streams); the entropy-coded tail
/// is not enumerated.
pub fn list_segments(data: &[u8]) -> Result<Option<Vec<SegmentInfo>>> {
    if !is_jpeg(data) {
        return Ok(None);
    }

    let mut segments = vec![SegmentInfo {
        marker: SOI,
        offset: 0,
        payload_len: 0,
    }];
    let mut pos = 2usize;

    loop {
        while pos < data.len() && data[pos] != MARKER_PREFIX {
            pos += 1;
        }
        while pos < data.len() && data[pos] == MARKER_PREFIX {
            pos += 1;
        }
        if pos >= data.len() {
            return Err(XmpError::UnexpectedEof);
        }

        let marker = data[pos];
        let offset = pos - 1;
        pos += 1;

        if !has_length_field(marker) {
            segments.push(SegmentInfo {
                marker,
                offset,
                payload_len: 0,
            });
            if marker == EOI {
                return Ok(Some(segments));
            }
            continue;
        }

        if pos + 2 > data.len() {
            return Err(XmpError::UnexpectedEof);
        }
        let length = u16::from_be_bytes([data[pos], data[pos + 1]]);
        if length < 2 {
            return Err(XmpError::InvalidSegmentLength { marker, length });
        }
        let payload_len = (length - 2) as usize;
        if pos + 2 + payload_len > data.len() {
            return Err(XmpError::UnexpectedEof);
        }
        pos += 2 + payload_len;

        segments.push(SegmentInfo {
            marker,
            offset,
            payload_len,
        });

        if marker == SOS {
            return Ok(Some(segments));
        }
    }
}

/// Scan an in-memory JPEG for its XMP packet.
pub fn read_xmp_from_bytes(data: &[u8]) -> Result<ReadOutcome> {
    read_xmp(&mut Cursor::new(data))
}

/// Rewrite an in-memory JPEG with a new XMP packet.
///
/// Returns `None` if the input is not a JPEG; the rewritten bytes
/// otherwise.
pub fn write_xmp_to_vec(data: &[u8], packet: &str) -> Result<Option<Vec<u8>>> {
    let mut out = Vec::with_capacity(data.len() + packet.len() + 64);
    match write_xmp(&mut Cursor::new(data), &mut out, packet)? {
        WriteOutcome::NotJpeg => Ok(None),
        WriteOutcome::Rewritten => Ok(Some(out)),
    }
}

/// Read the first two bytes, treating a stream shorter than the container
/// check itself as a negative result rather than truncation.
fn read_header<R: Read>(reader: &mut R, buf: &mut [u8; 2]) -> Result<Option<()>> {
    match reader.read_exact(buf) {
        Ok(()) => Ok(Some(())),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Locate the next marker: skip to a 0xFF byte, skip any 0xFF fill bytes,
/// return the marker code.
fn next_marker<R: Read>(reader: &mut R) -> Result<u8> {
    let mut b = read_u8(reader)?;
    while b != MARKER_PREFIX {
        b = read_u8(reader)?;
    }
    b = read_u8(reader)?;
    while b == MARKER_PREFIX {
        b = read_u8(reader)?;
    }
    Ok(b)
}

fn read_u8<R: Read>(reader: &mut R) -> Result<u8> {
    let mut buf = [0u8; 1];
    reader.read_exact(&mut buf)?;
    Ok(buf[0])
}

fn read_u16_be<R: Read>(reader: &mut R) -> Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

fn skip_exact<R: Read>(reader: &mut R, n: usize) -> Result<()> {
    let mut limited = reader.by_ref().take(n as u64);
    let copied = io::copy(&mut limited, &mut io::sink())?;
    if copied < n as u64 {
        return Err(XmpError::UnexpectedEof);
    }
    Ok(())
}

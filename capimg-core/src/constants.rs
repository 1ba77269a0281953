//! Constants and marker classification for the JPEG container

/// Prefix byte introducing every marker
pub const MARKER_PREFIX: u8 = 0xFF;

/// Start Of Image
pub const SOI: u8 = 0xD8;

/// End Of Image
pub const EOI: u8 = 0xD9;

/// Start Of Scan; entropy-coded image data follows
pub const SOS: u8 = 0xDA;

/// APP1 application segment (EXIF/XMP)
pub const APP1: u8 = 0xE1;

/// Temporary marker (standalone, reserved)
pub const TEM: u8 = 0x01;

/// Identifying prefix of an XMP APP1 payload (ASCII URI plus one NUL)
pub const XMP_ID: &[u8; 29] = b"http://ns.adobe.com/xap/1.0/\0";

/// Maximum value of a segment length field (length bytes + payload)
pub const MAX_SEGMENT_LEN: usize = 0xFFFF;

/// Whether a marker carries a 2-byte big-endian length field.
///
/// SOI, EOI, RST0-RST7 and TEM are standalone; every other marker,
/// including all APPn and any vendor/unknown code, is length-bearing.
pub const fn has_length_field(marker: u8) -> bool {
    !matches!(marker, SOI | EOI | TEM | 0xD0..=0xD7)
}

/// Human-readable marker name for diagnostics.
pub fn marker_name(marker: u8) -> &'static str {
    match marker {
        SOI => "SOI",
        EOI => "EOI",
        SOS => "SOS",
        TEM => "TEM",
        0xC0 => "SOF0",
        0xC1 => "SOF1",
        0xC2 => "SOF2",
        0xC4 => "DHT",
        0xDB => "DQT",
        0xDD => "DRI",
        0xFE => "COM",
        0xD0..=0xD7 => "RST",
        0xE0 => "APP0",
        APP1 => "APP1",
        0xE2 => "APP2",
        0xE3..=0xEF => "APPn",
        _ => "UNKNOWN",
    }
}

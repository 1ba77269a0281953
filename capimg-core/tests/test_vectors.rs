//! Fixed byte vectors for the wire-level contract
//!
//! These pin the exact framing other JPEG tools must be able to read.

use capimg_core::constants::{MAX_SEGMENT_LEN, XMP_ID};
use capimg_core::packet::build_packet;
use capimg_core::walker::{write_xmp_to_vec, xmp_segment};

#[test]
fn test_xmp_identifier_bytes() {
    assert_eq!(
        &XMP_ID[..],
        &[
            0x68, 0x74, 0x74, 0x70, 0x3A, 0x2F, 0x2F, 0x6E, 0x73, 0x2E, 0x61, 0x64, 0x6F, 0x62,
            0x65, 0x2E, 0x63, 0x6F, 0x6D, 0x2F, 0x78, 0x61, 0x70, 0x2F, 0x31, 0x2E, 0x30, 0x2F,
            0x00,
        ]
    );
}

#[test]
fn test_empty_packet_segment_bytes() {
    let seg = xmp_segment("").unwrap();
    // FF E1, length 31 (2 length bytes + 29 identifier bytes), identifier.
    assert_eq!(seg.len(), 2 + 2 + 29);
    assert_eq!(&seg[..4], &[0xFF, 0xE1, 0x00, 0x1F]);
    assert_eq!(&seg[4..], &XMP_ID[..]);
}

#[test]
fn test_segment_length_counts_itself() {
    let seg = xmp_segment("1234").unwrap();
    let declared = u16::from_be_bytes([seg[2], seg[3]]) as usize;
    assert_eq!(declared, seg.len() - 2);
    assert_eq!(declared, 2 + 29 + 4);
}

#[test]
fn test_segment_ceiling_is_u16_max() {
    assert_eq!(MAX_SEGMENT_LEN, 65535);
    let largest = "x".repeat(MAX_SEGMENT_LEN - 2 - XMP_ID.len());
    assert!(xmp_segment(&largest).is_ok());
    assert!(xmp_segment(&format!("{largest}!")).is_err());
}

#[test]
fn test_minimal_rewrite_vector() {
    // SOI + SOS(1 payload byte) + 1 scan byte + EOI.
    let jpeg = [
        0xFF, 0xD8, 0xFF, 0xDA, 0x00, 0x03, 0x01, 0x42, 0xFF, 0xD9,
    ];
    let out = write_xmp_to_vec(&jpeg, "p").unwrap().unwrap();

    let mut expected = vec![0xFF, 0xD8];
    expected.extend_from_slice(&[0xFF, 0xE1, 0x00, 0x20]); // 2 + 29 + 1
    expected.extend_from_slice(&XMP_ID[..]);
    expected.push(b'p');
    expected.extend_from_slice(&jpeg[2..]);

    assert_eq!(out, expected);
}

#[test]
fn test_built_packet_carries_bom_and_magic_id() {
    let packet = build_packet("v");
    // The xpacket begin value is the UTF-8 BOM.
    assert!(packet.contains("begin=\"\u{FEFF}\""));
    assert!(packet.contains("W5M0MpCehiHzreSzNTczkc9d"));
    assert!(packet.contains("http://purl.org/dc/elements/1.1/"));
    assert!(packet.contains("http://www.w3.org/1999/02/22-rdf-syntax-ns#"));
}

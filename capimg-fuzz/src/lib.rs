//! Fuzzing entry points for the capimg-core walker and packet codec
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_read_xmp

pub fn fuzz_read_xmp(data: &[u8]) {
    use capimg_core::walker::read_xmp_from_bytes;

    // Try to scan - should never panic
    let _ = read_xmp_from_bytes(data);
}

pub fn fuzz_write_xmp(data: &[u8]) {
    use capimg_core::walker::write_xmp_to_vec;

    // Try to rewrite - should never panic
    let _ = write_xmp_to_vec(data, "<x:xmpmeta/>");
}

pub fn fuzz_list_segments(data: &[u8]) {
    use capimg_core::walker::list_segments;

    let _ = list_segments(data);
}

pub fn fuzz_extract_description(data: &[u8]) {
    use capimg_core::packet::extract_description;

    if let Ok(packet) = std::str::from_utf8(data) {
        let _ = extract_description(packet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_read_empty() {
        fuzz_read_xmp(&[]);
    }

    #[test]
    fn test_fuzz_read_random() {
        fuzz_read_xmp(&[0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_fuzz_read_all_prefix_bytes() {
        fuzz_read_xmp(&[0xFF; 1024]);
    }

    #[test]
    fn test_fuzz_write_soi_only() {
        fuzz_write_xmp(&[0xFF, 0xD8]);
    }

    #[test]
    fn test_fuzz_list_random() {
        fuzz_list_segments(&[0xFF, 0xD8, 0xFF, 0xFF, 0x00]);
    }

    #[test]
    fn test_fuzz_extract_random() {
        fuzz_extract_description(b"<rdf:li>\xFF\xFE");
        fuzz_extract_description(b"<rdf:li></rdf:li>");
    }
}

//! XMP packet codec
//!
//! Builds a minimal RDF/XMP packet carrying a single `dc:description`
//! value, and extracts that value back out of an arbitrary packet string.
//! Extraction is deliberately substring-based rather than a full XML
//! parse: it has to survive producers that emit non-canonical XML, and a
//! legacy producer that double-escaped the `xml:lang` quotes.

/// Opening tag of the canonical description entry.
const LI_X_DEFAULT: &str = r#"<rdf:li xml:lang="x-default">"#;

/// Legacy variant with literal backslash-escaped quotes, written by an
/// old producer. Packets like this exist in the wild and must keep
/// reading.
const LI_X_DEFAULT_LEGACY: &str = r#"<rdf:li xml:lang=\"x-default\">"#;

/// Unlabeled entry, the last-resort fallback.
const LI_PLAIN: &str = "<rdf:li>";

const LI_END: &str = "</rdf:li>";

/// Build an XMP packet holding one description.
///
/// Works for any Unicode input; the only size constraint is the segment
/// ceiling enforced by the walker when the packet is embedded.
pub fn build_packet(description: &str) -> String {
    let escaped = escape_xml(description);
    format!(
        r#"<?xpacket begin="{bom}" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about="" xmlns:dc="http://purl.org/dc/elements/1.1/">
      <dc:description>
        <rdf:Alt>
          <rdf:li xml:lang="x-default">{escaped}</rdf:li>
        </rdf:Alt>
      </dc:description>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#,
        bom = '\u{FEFF}',
    )
}

/// Extract the description from an XMP packet.
///
/// Fallback order, first match wins: the `x-default` entry, the legacy
/// escaped-quote variant, then the first unlabeled `<rdf:li>`. Returns
/// `None` when no entry is found or the decoded text is blank; a missing
/// description is a normal case, not an error.
pub fn extract_description(packet: &str) -> Option<String> {
    for start in [LI_X_DEFAULT, LI_X_DEFAULT_LEGACY, LI_PLAIN] {
        if let Some(raw) = between(packet, start, LI_END) {
            let decoded = unescape_xml(raw.trim());
            return if decoded.trim().is_empty() {
                None
            } else {
                Some(decoded)
            };
        }
    }
    None
}

fn between<'a>(haystack: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let idx = haystack.find(start)?;
    let content_start = idx + start.len();
    let end_idx = haystack[content_start..].find(end)?;
    Some(&haystack[content_start..content_start + end_idx])
}

/// Escape the five XML metacharacters. Ampersand goes first so the
/// entities introduced by the other replacements are not re-escaped.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Inverse of [`escape_xml`], in inverse order: ampersand last.
fn unescape_xml(s: &str) -> String {
    s.replace("&apos;", "'")
        .replace("&quot;", "\"")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}

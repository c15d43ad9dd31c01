//! ISO-8859-1 transcoding.
//!
//! Codelist names carry French diacritics and the downstream consumers of the
//! delimited export expect the legacy single-byte encoding, so text is
//! transcoded rather than emitted as UTF-8. The same table backs the PDF
//! export: the document font uses WinAnsiEncoding, which agrees with Latin-1
//! on every code point the registry data uses.

/// Byte substituted for characters outside the Latin-1 range.
pub const SUBSTITUTE: u8 = b'?';

/// Encode text as ISO-8859-1, substituting unmappable characters.
///
/// Unicode scalar values up to U+00FF map directly onto Latin-1 bytes;
/// anything above becomes [`SUBSTITUTE`].
pub fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| {
            let code = ch as u32;
            if code <= 0xFF { code as u8 } else { SUBSTITUTE }
        })
        .collect()
}

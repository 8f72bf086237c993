//! Surrogate-aware code point expansion.
//!
//! The scanner and parser both index into the original string by byte
//! offset, but need to reason about "one logical character" at a time —
//! including astral (non-BMP) code points, which the original JS-era design
//! this crate generalizes represented as UTF-16 surrogate pairs. Rust's
//! `char` already represents a full Unicode scalar value, so no actual
//! transcoding is needed; this module exists to record, alongside each
//! `char`, its UTF-16 width so offset arithmetic stays faithful to that
//! original surrogate-pair model when it matters (e.g. `utf16_len`-based
//! trimming in downstream renderers).

/// A single scanned unit: a Unicode scalar value plus its position in the
/// original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePoint {
    pub ch: char,
    /// Byte offset of this code point in the original string.
    pub byte_start: usize,
    /// Byte length of this code point's UTF-8 encoding.
    pub byte_len: usize,
    /// Width in UTF-16 code units (1 for BMP, 2 for astral).
    pub utf16_len: u8,
}

/// Expand a string into an ordered sequence of code points with byte offsets.
///
/// This is the single source of truth for cursor arithmetic: every offset
/// the scanner and parser hand back to callers is a byte offset taken from
/// `CodePoint::byte_start`/`byte_len`, never a code-point index.
pub fn expand(text: &str) -> Vec<CodePoint> {
    text.char_indices()
        .map(|(byte_start, ch)| CodePoint {
            ch,
            byte_start,
            byte_len: ch.len_utf8(),
            utf16_len: ch.len_utf16() as u8,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trip() {
        let cps = expand("abc");
        assert_eq!(cps.len(), 3);
        assert!(cps.iter().all(|c| c.byte_len == 1 && c.utf16_len == 1));
    }

    #[test]
    fn astral_code_point_is_width_two() {
        // U+1F600 GRINNING FACE is outside the BMP.
        let cps = expand("a😀b");
        assert_eq!(cps.len(), 3);
        assert_eq!(cps[0].ch, 'a');
        assert_eq!(cps[1].ch, '😀');
        assert_eq!(cps[1].byte_len, 4);
        assert_eq!(cps[1].utf16_len, 2);
        assert_eq!(cps[2].byte_start, cps[1].byte_start + cps[1].byte_len);
    }

    #[test]
    fn offsets_partition_the_string() {
        let text = "héllo 😀 world";
        let cps = expand(text);
        let mut cursor = 0usize;
        for cp in &cps {
            assert_eq!(cp.byte_start, cursor);
            cursor += cp.byte_len;
        }
        assert_eq!(cursor, text.len());
    }
}

//! Character class predicates over `char`.
//!
//! These are the alphabet-level building blocks the character FSM
//! (`crate::scanner`) is built from. Each predicate is a plain function, not
//! a boxed closure or a compiled regex — the scan loop calls one of these
//! per code point on the hot path, so ASCII gets a fast inline check before
//! falling back to a Unicode property lookup.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// U+FFFC OBJECT REPLACEMENT CHARACTER — folded into whitespace to
/// accommodate artifacts left behind by rich-text editors.
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

/// U+FE0F VARIATION SELECTOR-16 — forces emoji presentation; continues an
/// in-progress emoji run but never starts one on its own (a lone VS16 at
/// the start of a string has nothing to modify, so it falls through to
/// `Sym` rather than opening an emoji token — see DESIGN.md).
pub const VS16: char = '\u{FE0F}';

/// U+200D ZERO WIDTH JOINER — glues adjacent emoji into one sequence.
pub const ZWJ: char = '\u{200D}';

#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn is_ascii_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Any Unicode letter, ASCII or otherwise. Used to recognize
/// internationalized domain labels (`UWord`/`Utld`) distinct from the
/// ASCII-only `Word`/`Tld` track.
#[inline]
pub fn is_letter(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphabetic();
    }
    ch.general_category_group() == GeneralCategoryGroup::Letter
}

/// Non-newline whitespace. CR/LF are handled as their own tokens by the
/// scanner (they need to become `Nl` rather than `Ws`), so this
/// deliberately excludes them.
#[inline]
pub fn is_space(ch: char) -> bool {
    if ch == '\n' || ch == '\r' {
        return false;
    }
    ch == OBJECT_REPLACEMENT || ch.is_whitespace()
}

/// Coarse emoji detection via a precompiled range set rather than a crate
/// API, per the "inline fast paths ... or a precompiled range set" design
/// note — this deliberately covers the commonly-rendered emoji blocks
/// rather than chasing full Unicode emoji-data coverage, since the scanner
/// only needs "is this code point part of an emoji run", not exhaustive
/// classification (presentation, modifiers, etc.).
#[inline]
pub fn is_emoji(ch: char) -> bool {
    let c = ch as u32;
    matches!(c,
        0x203C | 0x2049
        | 0x2122 | 0x2139
        | 0x2194..=0x21AA
        | 0x231A..=0x231B
        | 0x2328
        | 0x23CF
        | 0x23E9..=0x23FA
        | 0x24C2
        | 0x25AA..=0x25FE
        | 0x2600..=0x27BF
        | 0x2934..=0x2935
        | 0x2B00..=0x2BFF
        | 0x3030 | 0x303D
        | 0x3297 | 0x3299
        | 0x1F000..=0x1FFFF
    )
}

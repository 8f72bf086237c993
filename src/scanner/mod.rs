//! The character-level scanner: builds one immutable FSM over `char` and
//! runs it with greedy longest-match to partition input text into
//! [`ScannerToken`]s.

mod tld_table;

use crate::charclass::{VS16, ZWJ};
use crate::codepoints;
use crate::fsm::{Fsm, Groups};

/// `Fsm` predicates are `fn(&Symbol) -> bool`; `charclass`'s predicates take
/// `char` by value (cheaper to call directly when not used as an FSM edge).
/// These thin wrappers are what actually get registered as class edges.
fn is_digit(ch: &char) -> bool {
    crate::charclass::is_digit(*ch)
}

fn is_ascii_letter(ch: &char) -> bool {
    crate::charclass::is_ascii_letter(*ch)
}

fn is_letter(ch: &char) -> bool {
    crate::charclass::is_letter(*ch)
}

fn is_space(ch: &char) -> bool {
    crate::charclass::is_space(*ch)
}

fn is_emoji(ch: &char) -> bool {
    crate::charclass::is_emoji(*ch)
}

/// Index of a registered custom scheme, used instead of an owned `String`
/// so [`TokenTag`] stays `Copy` — string names live only at the registry
/// boundary (`crate::registry::SchemeDef::name`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemeId(pub u16);

/// The scanner's token alphabet. Tags are closed, `Copy` variants rather
/// than strings so the parser's hot path never compares or hashes string
/// data; string names exist only at the public boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenTag {
    /// A single unmatched code point — the start state's default edge.
    Sym,
    Num,
    Word,
    AsciiNumeric,
    UWord,
    AlphaNumeric,
    Ws,
    Nl,
    Emoji,
    Tld,
    Utld,
    Scheme,
    SlashScheme,
    Localhost,
    CustomScheme(SchemeId),
    /// A single-character punctuation token, e.g. `Punct('.')`.
    Punct(char),
}

impl TokenTag {
    pub const DOT: TokenTag = TokenTag::Punct('.');
    pub const HYPHEN: TokenTag = TokenTag::Punct('-');
    pub const COLON: TokenTag = TokenTag::Punct(':');
    pub const SLASH: TokenTag = TokenTag::Punct('/');
    pub const AT: TokenTag = TokenTag::Punct('@');
    pub const QUERY: TokenTag = TokenTag::Punct('?');
    pub const POUND: TokenTag = TokenTag::Punct('#');
    pub const COMMA: TokenTag = TokenTag::Punct(',');
    pub const EXCLAMATION: TokenTag = TokenTag::Punct('!');
    pub const SEMI: TokenTag = TokenTag::Punct(';');
    pub const DQUOTE: TokenTag = TokenTag::Punct('"');
    pub const APOSTROPHE: TokenTag = TokenTag::Punct('\'');

    /// `true` for tags that may occur inside a [`Domain`](crate::parser)
    /// label: `Word`, `UWord`, `AsciiNumeric`, `AlphaNumeric`, `Num`, and
    /// emoji runs — everything but the dot/hyphen separators and the
    /// TLD/UTLD/localhost terminators, which the parser checks separately.
    pub fn is_domain_segment(self) -> bool {
        matches!(
            self,
            TokenTag::Word
                | TokenTag::UWord
                | TokenTag::AsciiNumeric
                | TokenTag::AlphaNumeric
                | TokenTag::Num
                | TokenTag::Emoji
        )
    }

    pub fn is_domain_terminator(self) -> bool {
        matches!(self, TokenTag::Tld | TokenTag::Utld | TokenTag::Localhost)
    }

    pub fn is_whitespace_like(self) -> bool {
        matches!(self, TokenTag::Ws | TokenTag::Nl)
    }
}

/// One contiguous, typed slice of the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerToken {
    pub tag: TokenTag,
    pub start: usize,
    pub end: usize,
}

impl ScannerToken {
    pub fn value<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// A scheme the character FSM should recognize, beyond the six built-in
/// ones (`http`, `https`, `ftp`, `ftps`, `file`, `mailto`).
#[derive(Debug, Clone)]
pub struct SchemeDef {
    pub id: SchemeId,
    pub name: String,
    pub requires_slash_slash: bool,
}

impl SchemeDef {
    /// Hyphenated schemes are `domain`-shaped, letter-free schemes are
    /// `numeric`, schemes with at least one digit are `asciinumeric`,
    /// everything else is plain `ascii`; the slash-slash requirement
    /// additionally contributes the `scheme`/`slashscheme` base flag.
    pub fn groups(&self) -> Groups {
        let shape = if self.name.contains('-') {
            Groups::DOMAIN
        } else if !self.name.chars().any(|c| c.is_ascii_alphabetic()) {
            Groups::NUMERIC
        } else if self.name.chars().any(|c| c.is_ascii_digit()) {
            Groups::ASCIINUMERIC
        } else {
            Groups::ASCII
        };
        let base = if self.requires_slash_slash {
            Groups::SLASHSCHEME
        } else {
            Groups::SCHEME
        };
        shape | base
    }
}

pub type CharFsm = Fsm<char, TokenTag>;

const PUNCTUATION: &[char] = &[
    '\'', '{', '}', '[', ']', '(', ')', '<', '>', '\u{FF08}', '\u{FF09}', '\u{FF3B}', '\u{FF3D}',
    '&', '*', '@', '`', '^', ':', ',', '$', '.', '=', '!', '-', '%', '|', '+', '#', '?', '"', '/',
    ';', '~', '_', '\\', '\u{30FB}',
];

/// Build the character-level FSM from the six built-in schemes, the TLD
/// tables, `localhost`, and any caller-registered custom schemes.
pub fn build_char_fsm(custom_schemes: &[SchemeDef]) -> CharFsm {
    let mut fsm: CharFsm = Fsm::new();
    let start = fsm.start();

    // --- numeric / word / mixed runs -----------------------------------
    let num_node = fsm.new_node();
    fsm.set_accepting(num_node, TokenTag::Num, Groups::NUMERIC);
    fsm.add_class(num_node, is_digit, Some(num_node));
    fsm.add_class(start, is_digit, Some(num_node));

    let word_node = fsm.new_node();
    fsm.set_accepting(word_node, TokenTag::Word, Groups::ALPHA | Groups::ASCII);
    fsm.add_class(word_node, is_ascii_letter, Some(word_node));
    fsm.add_class(start, is_ascii_letter, Some(word_node));

    let asciinumeric_node = fsm.new_node();
    fsm.set_accepting(
        asciinumeric_node,
        TokenTag::AsciiNumeric,
        Groups::ASCIINUMERIC | Groups::ASCII,
    );
    fsm.add_class(asciinumeric_node, is_digit, Some(asciinumeric_node));
    fsm.add_class(asciinumeric_node, is_ascii_letter, Some(asciinumeric_node));
    fsm.add_class(word_node, is_digit, Some(asciinumeric_node));
    fsm.add_class(num_node, is_ascii_letter, Some(asciinumeric_node));

    let uword_node = fsm.new_node();
    fsm.set_accepting(uword_node, TokenTag::UWord, Groups::ALPHA);
    fsm.add_class(uword_node, is_nonascii_letter, Some(uword_node));
    fsm.add_class(start, is_letter, Some(uword_node));

    let alphanumeric_node = fsm.new_node();
    fsm.set_accepting(alphanumeric_node, TokenTag::AlphaNumeric, Groups::ALPHANUMERIC);
    fsm.add_class(alphanumeric_node, is_digit, Some(alphanumeric_node));
    fsm.add_class(alphanumeric_node, is_letter, Some(alphanumeric_node));
    fsm.add_class(uword_node, is_digit, Some(alphanumeric_node));
    fsm.add_class(num_node, is_nonascii_letter, Some(alphanumeric_node));

    // --- whitespace / newlines ------------------------------------------
    let ws_node = fsm.new_node();
    fsm.set_accepting(ws_node, TokenTag::Ws, Groups::WHITESPACE);
    fsm.add_class(ws_node, is_space, Some(ws_node));
    fsm.add_class(start, is_space, Some(ws_node));

    let nl_node = fsm.new_node();
    fsm.set_accepting(nl_node, TokenTag::Nl, Groups::WHITESPACE);
    fsm.add_literal(nl_node, '\n', Some(nl_node));
    fsm.add_literal(start, '\n', Some(nl_node));

    let cr_node = fsm.new_node();
    fsm.set_accepting(cr_node, TokenTag::Ws, Groups::WHITESPACE);
    fsm.add_literal(cr_node, '\n', Some(nl_node));
    fsm.add_literal(start, '\r', Some(cr_node));

    // --- emoji sequences --------------------------------------------------
    let emoji_node = fsm.new_node();
    fsm.set_accepting(emoji_node, TokenTag::Emoji, Groups::EMOJI);
    fsm.add_class(emoji_node, is_emoji, Some(emoji_node));
    fsm.add_literal(emoji_node, VS16, Some(emoji_node));
    let zwj_join_node = fsm.new_node(); // non-accepting: a dangling ZWJ rolls back
    fsm.add_literal(emoji_node, ZWJ, Some(zwj_join_node));
    fsm.add_class(zwj_join_node, is_emoji, Some(emoji_node));
    fsm.add_class(start, is_emoji, Some(emoji_node));

    // --- fixed schemes ------------------------------------------------
    let word_side = [(is_ascii_letter as fn(&char) -> bool, word_node), (is_digit, asciinumeric_node)];
    for scheme in ["file", "mailto"] {
        let chars: Vec<char> = scheme.chars().collect();
        fsm.add_chain(
            start,
            &chars,
            TokenTag::Scheme,
            Groups::SCHEME | Groups::ASCII,
            TokenTag::Word,
            Groups::ALPHA | Groups::ASCII,
            &word_side,
        );
    }
    for scheme in ["http", "https", "ftp", "ftps"] {
        let chars: Vec<char> = scheme.chars().collect();
        fsm.add_chain(
            start,
            &chars,
            TokenTag::SlashScheme,
            Groups::SLASHSCHEME | Groups::ASCII,
            TokenTag::Word,
            Groups::ALPHA | Groups::ASCII,
            &word_side,
        );
    }

    // --- localhost -------------------------------------------------------
    {
        let chars: Vec<char> = "localhost".chars().collect();
        fsm.add_chain(
            start,
            &chars,
            TokenTag::Localhost,
            Groups::DOMAIN | Groups::ASCII,
            TokenTag::Word,
            Groups::ALPHA | Groups::ASCII,
            &word_side,
        );
    }

    // --- TLDs --------------------------------------------------------------
    for tld in tld_table::ASCII_TLDS {
        let chars: Vec<char> = tld.chars().collect();
        fsm.add_chain(
            start,
            &chars,
            TokenTag::Tld,
            Groups::TLD | Groups::ASCII,
            TokenTag::Word,
            Groups::ALPHA | Groups::ASCII,
            &word_side,
        );
    }
    let uword_side = [(is_nonascii_letter as fn(&char) -> bool, uword_node), (is_digit, alphanumeric_node)];
    for tld in tld_table::UNICODE_TLDS {
        let chars: Vec<char> = tld.chars().collect();
        fsm.add_chain(
            start,
            &chars,
            TokenTag::Utld,
            Groups::UTLD,
            TokenTag::UWord,
            Groups::ALPHA,
            &uword_side,
        );
    }

    // --- custom schemes, sorted so shared prefixes collapse deterministically
    let mut sorted_schemes: Vec<&SchemeDef> = custom_schemes.iter().collect();
    sorted_schemes.sort_by(|a, b| a.name.cmp(&b.name));
    for scheme in sorted_schemes {
        let chars: Vec<char> = scheme.name.chars().collect();
        let groups = scheme.groups();
        fsm.add_chain(
            start,
            &chars,
            TokenTag::CustomScheme(scheme.id),
            groups,
            TokenTag::Word,
            Groups::ALPHA | Groups::ASCII,
            &word_side,
        );
    }

    // --- single-character punctuation ------------------------------------
    for &ch in PUNCTUATION {
        let node = fsm.add_literal(start, ch, None);
        fsm.set_accepting(node, TokenTag::Punct(ch), Groups::NONE);
    }

    // --- default symbol (catches everything else: control chars, nulls,
    // lone combining marks, unassigned code points) -----------------------
    let sym_node = fsm.new_node();
    fsm.set_accepting(sym_node, TokenTag::Sym, Groups::NONE);
    fsm.set_default_symbol(start, sym_node);

    fsm
}

fn is_nonascii_letter(ch: &char) -> bool {
    is_letter(ch) && !ch.is_ascii()
}

/// Run the character FSM with greedy longest-match and accepting-state
/// rollback, producing a complete, non-overlapping partition of `text`.
pub fn scan(text: &str, fsm: &CharFsm) -> Vec<ScannerToken> {
    let folded = fold_ascii_case(text);
    let code_points = codepoints::expand(&folded);
    let mut tokens = Vec::new();
    let mut i = 0usize;
    let n = code_points.len();
    let start = fsm.start();

    while i < n {
        let mut node = start;
        let mut cursor = i;
        let mut latest_accept: Option<(usize, TokenTag)> = None;

        while cursor < n {
            match fsm.step(node, &code_points[cursor].ch) {
                Some(next) => {
                    node = next;
                    cursor += 1;
                    if fsm.accepts(node) {
                        latest_accept = Some((cursor, fsm.tag(node).unwrap()));
                    }
                }
                None => break,
            }
        }

        let (end_cp, tag) = latest_accept.unwrap_or_else(|| {
            // Unreachable in practice: the start node always has a default
            // symbol edge, so at least one code point is always consumed.
            (i + 1, TokenTag::Sym)
        });

        let start_byte = code_points[i].byte_start;
        let end_byte = if end_cp < n {
            code_points[end_cp].byte_start
        } else {
            text.len()
        };
        tokens.push(ScannerToken {
            tag,
            start: start_byte,
            end: end_byte,
        });
        i = end_cp.max(i + 1);
    }

    tokens
}

/// Lowercase ASCII `A`-`Z` only, preserving byte length so offsets computed
/// against the folded copy remain valid against the original string — every
/// emitted token still slices the *original* `text`, not this copy.
fn fold_ascii_case(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c })
        .collect()
}

pub use tld_table::{ASCII_TLDS, UNICODE_TLDS};

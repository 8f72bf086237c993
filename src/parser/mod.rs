//! The token-level parser: merges scanner tokens into multi-token
//! [`Entity`] values (URLs, emails, custom-scheme links) or leaves them as
//! inert text/whitespace entities.
//!
//! Domain recognition (one or more `Word`/`Tld`/... segments joined by `.`
//! or `-`) is a genuine regular language and gets a real
//! `Fsm<TokenTag, DomainState>`, reusing the same generic arena as the
//! scanner. Bracket balancing is context-free, not regular, so it and the
//! surrounding scheme/port/path assembly are hand-written control flow on
//! top of that FSM, per the documented hybrid design (see DESIGN.md).

use crate::fsm::{Fsm, Groups};
use crate::options::Options;
use crate::scanner::{ScannerToken, SchemeDef, TokenTag};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainState {
    /// A domain ending in a plain segment (`Word`, `AsciiNumeric`, ...).
    Seg,
    /// A domain ending in a recognized terminator (`Tld`, `Utld`, `Localhost`).
    Term,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EntityTag {
    Url,
    Email,
    Localhost,
    Text,
    Nl,
    Ws,
    Scheme(String),
}

impl EntityTag {
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            EntityTag::Url => Cow::Borrowed("url"),
            EntityTag::Email => Cow::Borrowed("email"),
            EntityTag::Localhost => Cow::Borrowed("localhost"),
            EntityTag::Text => Cow::Borrowed("text"),
            EntityTag::Nl => Cow::Borrowed("nl"),
            EntityTag::Ws => Cow::Borrowed("ws"),
            EntityTag::Scheme(name) => Cow::Owned(name.clone()),
        }
    }

    pub fn is_link(&self) -> bool {
        !matches!(self, EntityTag::Text | EntityTag::Nl | EntityTag::Ws)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entity {
    pub tag: EntityTag,
    pub value: String,
    pub start: usize,
    pub end: usize,
    pub is_link: bool,
    pub href: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub sub_tokens: Vec<ScannerToken>,
}

fn is_segment_tag(tag: &TokenTag) -> bool {
    tag.is_domain_segment()
}

fn is_terminator_tag(tag: &TokenTag) -> bool {
    tag.is_domain_terminator()
}

/// Build the Domain sub-grammar: segments separated by `.`/`-`, with the
/// FSM's own start node doing double duty as the "a separator was just
/// consumed, or nothing has been consumed yet" state.
pub fn build_domain_fsm() -> Fsm<TokenTag, DomainState> {
    let mut fsm: Fsm<TokenTag, DomainState> = Fsm::new();
    let start = fsm.start();
    let seg = fsm.new_node();
    fsm.set_accepting(seg, DomainState::Seg, Groups::NONE);
    let term = fsm.new_node();
    fsm.set_accepting(term, DomainState::Term, Groups::NONE);

    fsm.add_class(start, is_segment_tag, Some(seg));
    fsm.add_class(start, is_terminator_tag, Some(term));

    for node in [seg, term] {
        fsm.add_literal(node, TokenTag::DOT, Some(start));
        fsm.add_literal(node, TokenTag::HYPHEN, Some(start));
    }

    fsm
}

/// Run the domain FSM from `i`, returning the exclusive end index and the
/// state of the last accepting position reached, or `None` if no domain
/// segment starts at `i` at all.
fn run_domain(
    tokens: &[ScannerToken],
    i: usize,
    fsm: &Fsm<TokenTag, DomainState>,
) -> Option<(usize, DomainState)> {
    let mut node = fsm.start();
    let mut cursor = i;
    let mut latest = None;
    while cursor < tokens.len() {
        match fsm.step(node, &tokens[cursor].tag) {
            Some(next) => {
                node = next;
                cursor += 1;
                if fsm.accepts(node) {
                    latest = Some((cursor, fsm.tag(node).unwrap()));
                }
            }
            None => break,
        }
    }
    latest
}

/// One of the four bracket families tracked during tail consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BracketFamily {
    Paren,
    Square,
    Curly,
    Angle,
}

fn bracket_role(ch: char) -> Option<(BracketFamily, bool)> {
    // (family, is_opener)
    match ch {
        '(' => Some((BracketFamily::Paren, true)),
        ')' => Some((BracketFamily::Paren, false)),
        '[' | '\u{FF3B}' => Some((BracketFamily::Square, true)),
        ']' | '\u{FF3D}' => Some((BracketFamily::Square, false)),
        '{' => Some((BracketFamily::Curly, true)),
        '}' => Some((BracketFamily::Curly, false)),
        '<' => Some((BracketFamily::Angle, true)),
        '>' => Some((BracketFamily::Angle, false)),
        '\u{FF08}' => Some((BracketFamily::Paren, true)),
        '\u{FF09}' => Some((BracketFamily::Paren, false)),
        _ => None,
    }
}

const TRIM_PUNCT: &[TokenTag] = &[
    TokenTag::DOT,
    TokenTag::COMMA,
    TokenTag::EXCLAMATION,
    TokenTag::QUERY,
    TokenTag::SEMI,
    TokenTag::COLON,
    TokenTag::DQUOTE,
    TokenTag::APOSTROPHE,
];

/// Greedily consume tokens starting at `j` as a URL tail (path/query/
/// fragment) up to the next whitespace/newline token or an unmatched
/// closing bracket, tracking per-family bracket balance as we go.
fn consume_tail(tokens: &[ScannerToken], mut j: usize) -> usize {
    let mut open_count = [0i32; 4];
    while j < tokens.len() {
        let tag = tokens[j].tag;
        if tag.is_whitespace_like() {
            break;
        }
        if let TokenTag::Punct(ch) = tag {
            if let Some((family, is_opener)) = bracket_role(ch) {
                let idx = family as usize;
                if is_opener {
                    open_count[idx] += 1;
                } else {
                    if open_count[idx] <= 0 {
                        break;
                    }
                    open_count[idx] -= 1;
                }
            }
        }
        j += 1;
    }
    j
}

/// Trim trailing punctuation/unmatched closers from `[start, end)`, per
/// §4.3: strip `Dot`/`Comma`/`Exclamation`/`Query`/`Semi`/`Colon`/quotes
/// unconditionally, and a trailing closing bracket only when its family has
/// no matching opener left in the remaining span.
fn trim_trailing(tokens: &[ScannerToken], start: usize, mut end: usize) -> usize {
    loop {
        if end <= start {
            break;
        }
        let tag = tokens[end - 1].tag;
        if TRIM_PUNCT.contains(&tag) {
            end -= 1;
            continue;
        }
        if let TokenTag::Punct(ch) = tag {
            if let Some((family, false)) = bracket_role(ch) {
                let mut opens = 0i32;
                let mut closes = 0i32;
                for tok in &tokens[start..end] {
                    if let TokenTag::Punct(c) = tok.tag {
                        if let Some((f, is_opener)) = bracket_role(c) {
                            if f == family {
                                if is_opener {
                                    opens += 1;
                                } else {
                                    closes += 1;
                                }
                            }
                        }
                    }
                }
                if closes > opens {
                    end -= 1;
                    continue;
                }
            }
        }
        break;
    }
    end
}

struct Candidate {
    end: usize,
    tag: EntityTag,
    href: String,
}

/// Try every entity kind starting at `i` and keep the longest match
/// (greedy-longest-match across entity *kinds*, mirroring the scanner's
/// within-FSM rollback).
fn try_match(
    tokens: &[ScannerToken],
    text: &str,
    i: usize,
    schemes: &[SchemeDef],
    domain_fsm: &Fsm<TokenTag, DomainState>,
    options: &Options,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    let consider = |c: Candidate, best: &mut Option<Candidate>| {
        if best.as_ref().map(|b| c.end > b.end).unwrap_or(true) {
            *best = Some(c);
        }
    };

    // Custom-scheme URL.
    if let TokenTag::CustomScheme(id) = tokens[i].tag {
        if let Some(scheme) = schemes.iter().find(|s| s.id == id) {
            if let Some(cand) = match_scheme_url(tokens, text, i, scheme.requires_slash_slash, &scheme.name) {
                consider(cand, &mut best);
            }
        }
    }

    // Fixed `mailto`/`file` (Scheme) and `http`/`https`/`ftp`/`ftps`
    // (SlashScheme).
    match tokens[i].tag {
        TokenTag::Scheme => {
            let name = tokens[i].value(text).to_ascii_lowercase();
            if name == "mailto" {
                // `mailto:` only ever yields an Email entity or nothing — it
                // must not fall through to the freeform scheme-url match,
                // which would tag a malformed address (no TLD/Localhost on
                // the right-hand side) as a generic Url instead.
                if options.detect_email {
                    if let Some(cand) = match_mailto(tokens, text, i, domain_fsm) {
                        consider(cand, &mut best);
                    }
                }
            } else if let Some(cand) = match_scheme_url(tokens, text, i, false, &name) {
                consider(cand, &mut best);
            }
        }
        TokenTag::SlashScheme => {
            let name = tokens[i].value(text).to_ascii_lowercase();
            if let Some(cand) = match_scheme_url(tokens, text, i, true, &name) {
                consider(cand, &mut best);
            }
        }
        _ => {}
    }

    // Bare domain: Url, Email, or standalone Localhost.
    if let Some((d_end, state)) = run_domain(tokens, i, domain_fsm) {
        // Email: Domain At Domain(term).
        if options.detect_email && d_end < tokens.len() && tokens[d_end].tag == TokenTag::AT {
            if let Some((e_end, DomainState::Term)) = run_domain(tokens, d_end + 1, domain_fsm) {
                let value = &text[tokens[i].start..tokens[e_end - 1].end];
                let href = format!("mailto:{value}");
                consider(
                    Candidate {
                        end: e_end,
                        tag: EntityTag::Email,
                        href,
                    },
                    &mut best,
                );
            }
        }

        if state == DomainState::Term {
            let mut end = d_end;
            let mut has_port = false;
            if end < tokens.len() && tokens[end].tag == TokenTag::COLON && end + 1 < tokens.len() {
                let port_tok = tokens[end + 1];
                let is_digits = matches!(port_tok.tag, TokenTag::Num)
                    || (matches!(port_tok.tag, TokenTag::AsciiNumeric)
                        && port_tok.value(text).chars().all(|c| c.is_ascii_digit()));
                if is_digits {
                    end += 2;
                    has_port = true;
                }
            }
            let tail_starts = end < tokens.len()
                && matches!(tokens[end].tag, TokenTag::SLASH | TokenTag::QUERY | TokenTag::POUND);
            if tail_starts {
                end = consume_tail(tokens, end);
            }
            end = trim_trailing(tokens, i, end);
            let value = &text[tokens[i].start..tokens[end - 1].end];
            let is_bare_localhost =
                !has_port && !tail_starts && tokens[d_end - 1].tag == TokenTag::Localhost && d_end == end;
            if is_bare_localhost {
                consider(
                    Candidate {
                        end,
                        tag: EntityTag::Localhost,
                        href: format!("{}://{}", options.default_protocol, value),
                    },
                    &mut best,
                );
            } else {
                let href = format!("{}://{}", options.default_protocol, value);
                consider(
                    Candidate {
                        end,
                        tag: EntityTag::Url,
                        href,
                    },
                    &mut best,
                );
            }
        }
    }

    best
}

fn match_mailto(
    tokens: &[ScannerToken],
    text: &str,
    i: usize,
    domain_fsm: &Fsm<TokenTag, DomainState>,
) -> Option<Candidate> {
    if i + 1 >= tokens.len() || tokens[i + 1].tag != TokenTag::COLON {
        return None;
    }
    let addr_start = i + 2;
    let (d_end, _) = run_domain(tokens, addr_start, domain_fsm)?;
    if d_end >= tokens.len() || tokens[d_end].tag != TokenTag::AT {
        return None;
    }
    let (e_end, state) = run_domain(tokens, d_end + 1, domain_fsm)?;
    if state != DomainState::Term {
        return None;
    }
    let addr = &text[tokens[addr_start].start..tokens[e_end - 1].end];
    Some(Candidate {
        end: e_end,
        tag: EntityTag::Email,
        href: format!("mailto:{addr}"),
    })
}

fn match_scheme_url(
    tokens: &[ScannerToken],
    text: &str,
    i: usize,
    requires_slash_slash: bool,
    scheme_name: &str,
) -> Option<Candidate> {
    let mut j = i + 1;
    if j >= tokens.len() || tokens[j].tag != TokenTag::COLON {
        return None;
    }
    j += 1;
    if requires_slash_slash {
        if j + 1 >= tokens.len() || tokens[j].tag != TokenTag::SLASH || tokens[j + 1].tag != TokenTag::SLASH {
            return None;
        }
        j += 2;
    }
    let body_start = j;
    let end = consume_tail(tokens, body_start).max(body_start);
    let end = trim_trailing(tokens, i, end.max(j));
    if end <= i {
        return None;
    }
    let value = &text[tokens[i].start..tokens[end - 1].end];
    let is_known_fixed = matches!(scheme_name, "http" | "https" | "ftp" | "ftps" | "file" | "mailto");
    let tag = if is_known_fixed {
        EntityTag::Url
    } else {
        EntityTag::Scheme(scheme_name.to_string())
    };
    Some(Candidate {
        end,
        tag,
        href: value.to_string(),
    })
}

/// Parse a complete scanner token stream into entities.
pub fn parse(
    tokens: &[ScannerToken],
    text: &str,
    schemes: &[SchemeDef],
    options: &Options,
) -> Vec<Entity> {
    let domain_fsm = build_domain_fsm();
    let mut entities = Vec::new();
    let mut i = 0usize;
    while i < tokens.len() {
        if let Some(cand) = try_match(tokens, text, i, schemes, &domain_fsm, options) {
            let value = text[tokens[i].start..tokens[cand.end - 1].end].to_string();
            let entity = Entity {
                is_link: cand.tag.is_link(),
                start: tokens[i].start,
                end: tokens[cand.end - 1].end,
                value,
                href: cand.href,
                tag: cand.tag,
                sub_tokens: tokens[i..cand.end].to_vec(),
            };
            let validated = options
                .validate
                .as_ref()
                .map(|f| run_validate(f.as_ref(), &entity))
                .unwrap_or(true);
            if validated {
                let end = cand.end;
                entities.push(entity);
                i = end;
                continue;
            }
            log::warn!("validate callback rejected entity, demoting to text");
        }
        push_inert(&mut entities, tokens, text, i);
        i += 1;
    }
    entities
}

fn run_validate(f: &(dyn Fn(&Entity) -> bool + Send + Sync), entity: &Entity) -> bool {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| f(entity))).unwrap_or(false)
}

fn push_inert(entities: &mut Vec<Entity>, tokens: &[ScannerToken], text: &str, i: usize) {
    let tok = tokens[i];
    let tag = match tok.tag {
        TokenTag::Nl => EntityTag::Nl,
        TokenTag::Ws => EntityTag::Ws,
        _ => EntityTag::Text,
    };
    entities.push(Entity {
        value: tok.value(text).to_string(),
        start: tok.start,
        end: tok.end,
        is_link: false,
        href: String::new(),
        tag,
        sub_tokens: vec![tok],
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{build_char_fsm, SchemeId};

    fn parse_text(text: &str, schemes: &[SchemeDef], options: &Options) -> Vec<Entity> {
        let fsm = build_char_fsm(schemes);
        let tokens = crate::scanner::scan(text, &fsm);
        parse(&tokens, text, schemes, options)
    }

    #[cfg(feature = "serde")]
    #[test]
    fn entity_serializes_to_json_when_serde_enabled() {
        let entities = parse_text("https://example.com", &[], &Options::default());
        let json = serde_json::to_string(&entities[0]).unwrap();
        assert!(json.contains("\"value\":\"https://example.com\""));
        assert!(json.contains("\"tag\":\"url\""));
    }

    #[test]
    fn partition_covers_whole_string() {
        let text = "Visit https://example.com, now.";
        let entities = parse_text(text, &[], &Options::default());
        let mut cursor = 0;
        let mut rebuilt = String::new();
        for e in &entities {
            assert_eq!(e.start, cursor);
            rebuilt.push_str(&e.value);
            cursor = e.end;
        }
        assert_eq!(cursor, text.len());
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn scenario_one_plain_url() {
        let text = "Visit https://example.com, now.";
        let entities = parse_text(text, &[], &Options::default());
        let links: Vec<_> = entities.iter().filter(|e| e.is_link).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].value, "https://example.com");
        assert_eq!(links[0].href, "https://example.com");
        assert_eq!(links[0].start, 6);
        assert_eq!(links[0].end, 25);
    }

    #[test]
    fn scenario_two_email() {
        let text = "Write to alice@example.com.";
        let entities = parse_text(text, &[], &Options::default());
        let links: Vec<_> = entities.iter().filter(|e| e.is_link).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].tag, EntityTag::Email);
        assert_eq!(links[0].value, "alice@example.com");
        assert_eq!(links[0].href, "mailto:alice@example.com");
        assert_eq!(links[0].start, 9);
        assert_eq!(links[0].end, 26);
    }

    #[test]
    fn scenario_three_balanced_inner_bracket() {
        let text = "(see http://a.co/p(x)y)";
        let entities = parse_text(text, &[], &Options::default());
        let links: Vec<_> = entities.iter().filter(|e| e.is_link).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].value, "http://a.co/p(x)y");
    }

    #[test]
    fn scenario_four_localhost_with_port_and_path() {
        let text = "localhost:8080/path";
        let entities = parse_text(text, &[], &Options::default());
        let links: Vec<_> = entities.iter().filter(|e| e.is_link).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "http://localhost:8080/path");
    }

    #[test]
    fn scenario_five_invalid_right_domain_no_match() {
        let text = "Email me at not-an-email@.";
        let entities = parse_text(text, &[], &Options::default());
        assert!(!entities.iter().any(|e| e.is_link));
    }

    #[test]
    fn scenario_six_custom_scheme() {
        let scheme = SchemeDef {
            id: SchemeId(0),
            name: "steam".to_string(),
            requires_slash_slash: true,
        };
        let text = "open steam://run/440 now";
        let entities = parse_text(text, &[scheme], &Options::default());
        let links: Vec<_> = entities.iter().filter(|e| e.is_link).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].value, "steam://run/440");
        assert_eq!(links[0].tag, EntityTag::Scheme("steam".to_string()));

        let entities_unregistered = parse_text(text, &[], &Options::default());
        assert!(!entities_unregistered.iter().any(|e| e.is_link));
    }

    #[test]
    fn bare_localhost_tagged_distinctly_from_full_url() {
        let entities = parse_text("localhost", &[], &Options::default());
        let links: Vec<_> = entities.iter().filter(|e| e.is_link).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].tag, EntityTag::Localhost);
    }

    #[test]
    fn emoji_prefixed_domain_still_a_url() {
        let text = "😀.com";
        let entities = parse_text(text, &[], &Options::default());
        let links: Vec<_> = entities.iter().filter(|e| e.is_link).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].value, text);
    }
}

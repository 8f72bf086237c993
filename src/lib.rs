//! # hyperlex
//!
//! A deterministic, FSM-based scanner and parser for detecting URLs,
//! email addresses, `localhost`, and custom-scheme links inside arbitrary
//! Unicode text.
//!
//! ## Example
//!
//! ```
//! let entities = hyperlex::find("Visit https://example.com for more.", None);
//! assert_eq!(entities.len(), 1);
//! assert_eq!(entities[0].value, "https://example.com");
//! ```
//!
//! ## Design
//!
//! Detection runs in two layers: a character-level [`scanner`] builds one
//! immutable FSM over `char` and partitions input into typed tokens, then a
//! token-level [`parser`] merges those tokens into [`parser::Entity`]
//! values. Both layers share the generic [`fsm::Fsm`] arena. See
//! `DESIGN.md` for the grounding of each module.

pub mod batch;
pub mod charclass;
pub mod codepoints;
pub mod error;
pub mod fsm;
pub mod invariants;
pub mod options;
pub mod parser;
pub mod plugin;
mod registry;
pub mod scanner;
mod schemes;

pub use batch::{find_batch, find_batch_with, tokenize_batch, tokenize_batch_with};
pub use error::Error;
pub use options::{Options, OptionsBuilder};
pub use parser::{Entity, EntityTag};
pub use plugin::{CharFsmBuilder, TokenFsmBuilder};

/// Run the scanner then the parser over `text` with default options,
/// returning every entity (links and inert text/whitespace alike).
pub fn tokenize(text: &str) -> Vec<Entity> {
    tokenize_with(text, &Options::default())
}

/// Like [`tokenize`], but with caller-supplied [`Options`] (affects
/// `default_protocol`, `detect_email`, and the `validate` callback).
pub fn tokenize_with(text: &str, options: &Options) -> Vec<Entity> {
    log::trace!("tokenize: {} bytes", text.len());
    let snapshot = registry::global().snapshot();
    let tokens = scanner::scan(text, &snapshot.char_fsm);
    let entities = parser::parse(&tokens, text, &snapshot.schemes, options);
    invariants::assert_partition_covers_input(&entities, text);
    entities
}

/// Run `tokenize` and keep only `is_link` entities, optionally filtered by
/// kind (`"url"`, `"email"`, `"localhost"`, or a registered custom-scheme
/// name).
pub fn find(text: &str, kind: Option<&str>) -> Vec<Entity> {
    find_with(text, kind, &Options::default())
}

/// Like [`find`], with caller-supplied [`Options`].
pub fn find_with(text: &str, kind: Option<&str>, options: &Options) -> Vec<Entity> {
    let all = tokenize_with(text, options);
    let links: Vec<Entity> = all
        .iter()
        .filter(|e| e.is_link && kind.map(|k| e.tag.name().as_ref() == k).unwrap_or(true))
        .cloned()
        .collect();
    if kind.is_none() {
        let all_links: Vec<Entity> = all.into_iter().filter(|e| e.is_link).collect();
        invariants::assert_find_is_link_subsequence(&all_links, &links);
    }
    for link in &links {
        invariants::assert_link_brackets_balanced(link);
    }
    links
}

/// `true` iff the entire input is a single accepted entity of the given
/// kind (or any link kind, if `kind` is `None`).
pub fn test(text: &str, kind: Option<&str>) -> bool {
    let entities = tokenize(text);
    match entities.as_slice() {
        [only] => only.is_link && kind.map(|k| only.tag.name().as_ref() == k).unwrap_or(true),
        _ => false,
    }
}

/// Register a custom URL scheme (e.g. `steam`) so future `tokenize`/`find`
/// calls recognize it. Re-registering the same name is a no-op.
pub fn register_custom_protocol(scheme: &str, requires_slash_slash: bool) -> Result<(), Error> {
    registry::global().register_custom_protocol(scheme, requires_slash_slash)
}

/// Register a plugin mutating the character FSM builder before every
/// rebuild, keyed by `name`. Fails if `name` is already registered or
/// `depends_on` names a plugin not yet registered.
pub fn register_plugin(
    name: &str,
    factory: impl Fn(&mut CharFsmBuilder) + Send + Sync + 'static,
    depends_on: Option<&str>,
) -> Result<(), Error> {
    registry::global().register_plugin(name, factory, depends_on)
}

/// Register a plugin mutating the Domain sub-FSM builder before every
/// rebuild. See [`register_plugin`] for semantics.
pub fn register_token_plugin(
    name: &str,
    factory: impl Fn(&mut TokenFsmBuilder) + Send + Sync + 'static,
    depends_on: Option<&str>,
) -> Result<(), Error> {
    registry::global().register_token_plugin(name, factory, depends_on)
}

/// Clear all custom schemes and plugins, returning the crate to its
/// just-initialized state.
pub fn reset() {
    registry::global().reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// `register_custom_protocol`/`reset` mutate the single process-wide
    /// registry singleton; Rust's default test harness runs tests in this
    /// module concurrently, so any test touching it needs this guard (see
    /// the matching lock in `tests/scenarios.rs`).
    static REGISTRY_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn tokenize_reconstructs_input() {
        let text = "Visit https://example.com, now.";
        let entities = tokenize(text);
        let rebuilt: String = entities.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn find_filters_to_links_only() {
        let text = "a.com and some text and b.org";
        let links = find(text, None);
        assert!(links.iter().all(|e| e.is_link));
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn find_respects_kind_filter() {
        let text = "Visit https://example.com or email me@example.com";
        let urls = find(text, Some("url"));
        let emails = find(text, Some("email"));
        assert_eq!(urls.len(), 1);
        assert_eq!(emails.len(), 1);
    }

    #[test]
    fn test_true_for_a_single_bare_url() {
        assert!(test("example.com", None));
        assert!(test("example.com", Some("url")));
        assert!(!test("example.com", Some("email")));
    }

    #[test]
    fn test_false_for_mixed_content() {
        assert!(!test("visit example.com today", None));
    }

    #[test]
    fn register_and_reset_custom_protocol() {
        let _guard = REGISTRY_LOCK.lock().unwrap();
        reset();
        assert!(!test("steam://run/440", None));
        register_custom_protocol("steam", true).unwrap();
        assert!(test("steam://run/440", Some("steam")));
        reset();
        assert!(!test("steam://run/440", None));
    }

    #[test]
    fn invalid_scheme_registration_is_rejected() {
        let _guard = REGISTRY_LOCK.lock().unwrap();
        reset();
        let err = register_custom_protocol("1bad", true).unwrap_err();
        assert!(matches!(err, Error::InvalidScheme(_)));
        reset();
    }
}

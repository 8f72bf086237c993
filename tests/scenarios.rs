//! End-to-end scenarios against the public API, covering §8's concrete
//! examples and the boundary cases the suite must exercise.

use std::sync::Mutex;

// The global FSM registry is process-wide; serialize tests that mutate it
// so registration tests don't race each other (see DESIGN.md).
static REGISTRY_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn plain_url_in_prose() {
    let _guard = REGISTRY_LOCK.lock().unwrap();
    let matches = hyperlex::find("Visit https://example.com, now.", None);
    assert_eq!(matches.len(), 1);
    let m = &matches[0];
    assert_eq!(m.tag.name().as_ref(), "url");
    assert_eq!(m.value, "https://example.com");
    assert_eq!(m.href, "https://example.com");
    assert_eq!(m.start, 6);
    assert_eq!(m.end, 25);
}

#[test]
fn email_address() {
    let _guard = REGISTRY_LOCK.lock().unwrap();
    let matches = hyperlex::find("Write to alice@example.com.", None);
    assert_eq!(matches.len(), 1);
    let m = &matches[0];
    assert_eq!(m.tag.name().as_ref(), "email");
    assert_eq!(m.value, "alice@example.com");
    assert_eq!(m.href, "mailto:alice@example.com");
    assert_eq!(m.start, 9);
    assert_eq!(m.end, 26);
}

#[test]
fn balanced_inner_parenthesis_in_path() {
    let _guard = REGISTRY_LOCK.lock().unwrap();
    let matches = hyperlex::find("(see http://a.co/p(x)y)", None);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].value, "http://a.co/p(x)y");
}

#[test]
fn localhost_with_port_and_path() {
    let _guard = REGISTRY_LOCK.lock().unwrap();
    let matches = hyperlex::find("localhost:8080/path", None);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].href, "http://localhost:8080/path");
}

#[test]
fn invalid_right_domain_has_no_match() {
    let _guard = REGISTRY_LOCK.lock().unwrap();
    let matches = hyperlex::find("Email me at not-an-email@.", None);
    assert!(matches.is_empty());
}

#[test]
fn custom_scheme_registration_round_trip() {
    let _guard = REGISTRY_LOCK.lock().unwrap();
    hyperlex::reset();
    let text = "open steam://run/440 now";
    assert!(hyperlex::find(text, None).is_empty());

    hyperlex::register_custom_protocol("steam", true).unwrap();
    let matches = hyperlex::find(text, None);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].tag.name().as_ref(), "steam");
    assert_eq!(matches[0].value, "steam://run/440");

    hyperlex::reset();
    assert!(hyperlex::find(text, None).is_empty());
}

#[test]
fn surrogate_pair_inside_a_url_path() {
    let _guard = REGISTRY_LOCK.lock().unwrap();
    let text = "see http://example.com/😀/page";
    let matches = hyperlex::find(text, None);
    assert_eq!(matches.len(), 1);
    assert!(matches[0].value.contains('😀'));
}

#[test]
fn emoji_zwj_sequence_then_tld_is_a_url() {
    let _guard = REGISTRY_LOCK.lock().unwrap();
    let text = "😀\u{200D}😀.com";
    let matches = hyperlex::find(text, None);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].value, text);
}

#[test]
fn crlf_run_is_a_single_newline_entity() {
    let _guard = REGISTRY_LOCK.lock().unwrap();
    let entities = hyperlex::tokenize("a\r\nb");
    let nl_count = entities.iter().filter(|e| e.tag.name().as_ref() == "nl").count();
    assert_eq!(nl_count, 1);
}

#[test]
fn consecutive_custom_schemes_with_shared_prefix_do_not_collide() {
    let _guard = REGISTRY_LOCK.lock().unwrap();
    hyperlex::reset();
    hyperlex::register_custom_protocol("git", true).unwrap();
    hyperlex::register_custom_protocol("github", true).unwrap();
    assert_eq!(hyperlex::find("git://repo", None)[0].tag.name().as_ref(), "git");
    assert_eq!(hyperlex::find("github://repo", None)[0].tag.name().as_ref(), "github");
    hyperlex::reset();
}

#[test]
fn reregistering_a_scheme_is_a_no_op() {
    let _guard = REGISTRY_LOCK.lock().unwrap();
    hyperlex::reset();
    hyperlex::register_custom_protocol("steam", true).unwrap();
    hyperlex::register_custom_protocol("steam", false).unwrap();
    assert_eq!(hyperlex::find("steam://run/440", None).len(), 1);
    hyperlex::reset();
}

//! Scheme-name syntax validation, shared by [`crate::register_custom_protocol`]
//! and [`crate::options::Options::validate_fields`] (the `default_protocol`
//! option is itself a scheme name).

/// ASCII-alphanumeric-with-hyphens, starting with a letter, at least two
/// characters — the constraint from §4.5. Returns `Err(reason)` on failure
/// so callers can fold it into their own error variant.
pub fn validate_scheme_syntax(scheme: &str) -> Result<(), String> {
    if scheme.chars().count() < 2 {
        return Err("must be at least 2 characters".to_string());
    }
    let mut chars = scheme.chars();
    let first = chars.next().unwrap();
    if !first.is_ascii_alphabetic() {
        return Err("must start with an ASCII letter".to_string());
    }
    if !scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err("must contain only ASCII alphanumerics and hyphens".to_string());
    }
    Ok(())
}

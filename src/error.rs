//! Error taxonomy for registration and configuration failures.
//!
//! Scanning and parsing never fail on malformed input — an unmatched
//! substring simply becomes an inert [`crate::EntityTag::Text`] entity. The
//! errors below only arise from misuse of the registration/configuration
//! surface (bad scheme syntax, unknown plugin dependency, malformed option).
//!
//! ```
//! use hyperlex::Error;
//!
//! assert_eq!(
//!     Error::InvalidScheme("1bad".into()).to_string(),
//!     "invalid scheme '1bad': must start with an ASCII letter, contain only \
//!      ASCII alphanumerics and hyphens, and be at least 2 characters"
//! );
//! assert_eq!(
//!     Error::UnknownPluginDependency("mentions".into()).to_string(),
//!     "plugin depends on unregistered plugin 'mentions'"
//! );
//! assert_eq!(
//!     Error::PluginAlreadyRegistered("hashtags".into()).to_string(),
//!     "plugin 'hashtags' is already registered"
//! );
//! ```

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A scheme passed to [`crate::register_custom_protocol`] failed the
    /// syntactic constraints in the scheme grammar: ASCII-alphanumeric with
    /// optional hyphens, first character an ASCII letter, length >= 2.
    #[error("invalid scheme '{0}': must start with an ASCII letter, contain only ASCII alphanumerics and hyphens, and be at least 2 characters")]
    InvalidScheme(String),

    /// A plugin declared a dependency on a plugin name that has not been
    /// registered yet.
    #[error("plugin depends on unregistered plugin '{0}'")]
    UnknownPluginDependency(String),

    /// An [`crate::Options`] field was the wrong shape, e.g. `default_protocol`
    /// containing characters outside the scheme grammar.
    #[error("invalid option value for '{field}': {reason}")]
    InvalidOptionValue { field: &'static str, reason: String },

    /// A plugin name collides with one already registered. Unlike scheme
    /// re-registration (a no-op), plugin closures cannot be compared for
    /// equality, so a name collision is rejected rather than silently kept.
    #[error("plugin '{0}' is already registered")]
    PluginAlreadyRegistered(String),
}

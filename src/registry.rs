//! Process-wide cache of the compiled FSM pair, rebuilt on demand and
//! published copy-on-write so concurrent readers never observe a half-built
//! graph and never block each other (§5).

use crate::error::Error;
use crate::fsm::Fsm;
use crate::parser::{self, DomainState};
use crate::plugin::{CharFsmBuilder, PluginSpec, TokenFsmBuilder};
use crate::scanner::{self, CharFsm, SchemeDef, SchemeId, TokenTag};
use crate::schemes::validate_scheme_syntax;
use std::sync::{Arc, Mutex, OnceLock};

/// A fully built, immutable FSM pair plus the registration metadata needed
/// to label tokens/entities (scheme names, the domain sub-FSM).
pub struct CompiledFsms {
    pub char_fsm: CharFsm,
    pub domain_fsm: Fsm<TokenTag, DomainState>,
    pub schemes: Vec<SchemeDef>,
}

struct RegistryState {
    custom_schemes: Vec<SchemeDef>,
    char_plugins: Vec<PluginSpec<CharFsmBuilder>>,
    token_plugins: Vec<PluginSpec<TokenFsmBuilder>>,
    next_scheme_id: u16,
}

impl RegistryState {
    fn fresh() -> Self {
        RegistryState {
            custom_schemes: Vec::new(),
            char_plugins: Vec::new(),
            token_plugins: Vec::new(),
            next_scheme_id: 0,
        }
    }

    fn build(&self) -> CompiledFsms {
        let mut builder = CharFsmBuilder::new(scanner::build_char_fsm(&self.custom_schemes));
        for plugin in &self.char_plugins {
            (plugin.factory)(&mut builder);
        }
        let char_fsm = builder.finish();

        let mut token_builder = TokenFsmBuilder::new(parser::build_domain_fsm());
        for plugin in &self.token_plugins {
            (plugin.factory)(&mut token_builder);
        }
        let domain_fsm = token_builder.finish();

        log::debug!(
            "rebuilt FSM pair: {} custom schemes, {} char plugins, {} token plugins, {} char nodes",
            self.custom_schemes.len(),
            self.char_plugins.len(),
            self.token_plugins.len(),
            char_fsm.node_count(),
        );

        CompiledFsms {
            char_fsm,
            domain_fsm,
            schemes: self.custom_schemes.clone(),
        }
    }
}

/// The process-wide registry: mutable registration state behind a mutex,
/// plus the currently-published immutable snapshot.
pub struct Registry {
    state: Mutex<RegistryState>,
    snapshot: Mutex<Arc<CompiledFsms>>,
}

impl Registry {
    fn fresh() -> Self {
        let state = RegistryState::fresh();
        let snapshot = Arc::new(state.build());
        Registry {
            state: Mutex::new(state),
            snapshot: Mutex::new(snapshot),
        }
    }

    /// Take a clone of the current immutable snapshot — one `Arc` clone,
    /// never the graph itself.
    pub fn snapshot(&self) -> Arc<CompiledFsms> {
        self.snapshot.lock().unwrap().clone()
    }

    fn rebuild_and_publish(&self) {
        let state = self.state.lock().unwrap();
        let fresh = Arc::new(state.build());
        *self.snapshot.lock().unwrap() = fresh;
    }

    pub fn register_custom_protocol(&self, scheme: &str, requires_slash_slash: bool) -> Result<(), Error> {
        validate_scheme_syntax(scheme).map_err(|_| Error::InvalidScheme(scheme.to_string()))?;
        {
            let mut state = self.state.lock().unwrap();
            if state.custom_schemes.iter().any(|s| s.name == scheme) {
                // Re-registration of an existing scheme is a no-op (§4.5).
                return Ok(());
            }
            let id = SchemeId(state.next_scheme_id);
            state.next_scheme_id += 1;
            state.custom_schemes.push(SchemeDef {
                id,
                name: scheme.to_string(),
                requires_slash_slash,
            });
        }
        self.rebuild_and_publish();
        Ok(())
    }

    pub fn register_plugin(
        &self,
        name: &str,
        factory: impl Fn(&mut CharFsmBuilder) + Send + Sync + 'static,
        depends_on: Option<&str>,
    ) -> Result<(), Error> {
        {
            let mut state = self.state.lock().unwrap();
            if state.char_plugins.iter().any(|p| p.name == name) {
                return Err(Error::PluginAlreadyRegistered(name.to_string()));
            }
            if let Some(dep) = depends_on {
                if !state.char_plugins.iter().any(|p| p.name == dep) {
                    return Err(Error::UnknownPluginDependency(dep.to_string()));
                }
            }
            state.char_plugins.push(PluginSpec {
                name: name.to_string(),
                factory: Box::new(factory),
            });
        }
        self.rebuild_and_publish();
        Ok(())
    }

    pub fn register_token_plugin(
        &self,
        name: &str,
        factory: impl Fn(&mut TokenFsmBuilder) + Send + Sync + 'static,
        depends_on: Option<&str>,
    ) -> Result<(), Error> {
        {
            let mut state = self.state.lock().unwrap();
            if state.token_plugins.iter().any(|p| p.name == name) {
                return Err(Error::PluginAlreadyRegistered(name.to_string()));
            }
            if let Some(dep) = depends_on {
                if !state.token_plugins.iter().any(|p| p.name == dep) {
                    return Err(Error::UnknownPluginDependency(dep.to_string()));
                }
            }
            state.token_plugins.push(PluginSpec {
                name: name.to_string(),
                factory: Box::new(factory),
            });
        }
        self.rebuild_and_publish();
        Ok(())
    }

    pub fn reset(&self) {
        let fresh_state = RegistryState::fresh();
        let fresh_snapshot = Arc::new(fresh_state.build());
        *self.state.lock().unwrap() = fresh_state;
        *self.snapshot.lock().unwrap() = fresh_snapshot;
        log::debug!("registry reset to factory defaults");
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub fn global() -> &'static Registry {
    REGISTRY.get_or_init(Registry::fresh)
}

#[allow(dead_code)]
fn _assert_registry_is_sync_send() {
    fn assert<T: Send + Sync>() {}
    assert::<Registry>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_registry_has_no_custom_schemes() {
        let registry = Registry::fresh();
        assert!(registry.snapshot().schemes.is_empty());
    }

    #[test]
    fn registering_a_scheme_publishes_a_new_snapshot() {
        let registry = Registry::fresh();
        let before = registry.snapshot();
        registry.register_custom_protocol("steam", true).unwrap();
        let after = registry.snapshot();
        assert_eq!(before.schemes.len(), 0);
        assert_eq!(after.schemes.len(), 1);
        assert_eq!(after.schemes[0].name, "steam");
    }

    #[test]
    fn reregistering_same_scheme_is_a_no_op() {
        let registry = Registry::fresh();
        registry.register_custom_protocol("steam", true).unwrap();
        registry.register_custom_protocol("steam", false).unwrap();
        let snap = registry.snapshot();
        assert_eq!(snap.schemes.len(), 1);
        assert!(snap.schemes[0].requires_slash_slash);
    }

    #[test]
    fn invalid_scheme_is_rejected_without_mutating_state() {
        let registry = Registry::fresh();
        let err = registry.register_custom_protocol("2fast", true).unwrap_err();
        assert!(matches!(err, Error::InvalidScheme(_)));
        assert!(registry.snapshot().schemes.is_empty());
    }

    #[test]
    fn reset_clears_custom_schemes() {
        let registry = Registry::fresh();
        registry.register_custom_protocol("steam", true).unwrap();
        registry.reset();
        assert!(registry.snapshot().schemes.is_empty());
    }

    #[test]
    fn unknown_plugin_dependency_is_rejected() {
        let registry = Registry::fresh();
        let err = registry
            .register_plugin("mentions", |_| {}, Some("hashtags"))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownPluginDependency(_)));
    }

    #[test]
    fn duplicate_plugin_name_is_rejected() {
        let registry = Registry::fresh();
        registry.register_plugin("mentions", |_| {}, None).unwrap();
        let err = registry.register_plugin("mentions", |_| {}, None).unwrap_err();
        assert!(matches!(err, Error::PluginAlreadyRegistered(_)));
    }
}

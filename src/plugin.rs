//! Builder wrappers handed to registered plugins just before FSM
//! finalization (§4.6, §9 "plugin extensibility"). A plugin only sees the
//! handful of mutating operations the FSM exposes — `add_literal`,
//! `add_class`, `add_chain`, `set_accepting` — never the raw arena.
//!
//! Token-level plugins extend the Domain sub-grammar (new segment shapes,
//! new separators, new terminators) rather than the full entity grammar:
//! the parser's scheme/port/path/bracket assembly stays hand-written
//! control flow outside any FSM, so there is no single "entity FSM" a
//! plugin could otherwise hook into. See DESIGN.md for this narrowing of
//! the original plugin surface.

use crate::fsm::{Fsm, Groups};
use crate::parser::DomainState;
use crate::scanner::TokenTag;

pub(crate) struct PluginSpec<Builder> {
    pub name: String,
    pub factory: Box<dyn Fn(&mut Builder) + Send + Sync>,
}

pub struct CharFsmBuilder {
    fsm: Fsm<char, TokenTag>,
}

impl CharFsmBuilder {
    pub(crate) fn new(fsm: Fsm<char, TokenTag>) -> Self {
        CharFsmBuilder { fsm }
    }

    pub(crate) fn finish(self) -> Fsm<char, TokenTag> {
        self.fsm
    }

    pub fn start(&self) -> crate::fsm::NodeId {
        self.fsm.start()
    }

    pub fn new_node(&mut self) -> crate::fsm::NodeId {
        self.fsm.new_node()
    }

    pub fn set_accepting(&mut self, node: crate::fsm::NodeId, tag: TokenTag, groups: Groups) {
        self.fsm.set_accepting(node, tag, groups);
    }

    pub fn add_literal(
        &mut self,
        src: crate::fsm::NodeId,
        symbol: char,
        target: Option<crate::fsm::NodeId>,
    ) -> crate::fsm::NodeId {
        self.fsm.add_literal(src, symbol, target)
    }

    pub fn add_class(
        &mut self,
        src: crate::fsm::NodeId,
        predicate: fn(&char) -> bool,
        target: Option<crate::fsm::NodeId>,
    ) -> crate::fsm::NodeId {
        self.fsm.add_class(src, predicate, target)
    }
}

pub struct TokenFsmBuilder {
    fsm: Fsm<TokenTag, DomainState>,
}

impl TokenFsmBuilder {
    pub(crate) fn new(fsm: Fsm<TokenTag, DomainState>) -> Self {
        TokenFsmBuilder { fsm }
    }

    pub(crate) fn finish(self) -> Fsm<TokenTag, DomainState> {
        self.fsm
    }

    pub fn start(&self) -> crate::fsm::NodeId {
        self.fsm.start()
    }

    pub fn new_node(&mut self) -> crate::fsm::NodeId {
        self.fsm.new_node()
    }

    pub fn set_accepting(&mut self, node: crate::fsm::NodeId, tag: DomainState, groups: Groups) {
        self.fsm.set_accepting(node, tag, groups);
    }

    pub fn add_literal(
        &mut self,
        src: crate::fsm::NodeId,
        symbol: TokenTag,
        target: Option<crate::fsm::NodeId>,
    ) -> crate::fsm::NodeId {
        self.fsm.add_literal(src, symbol, target)
    }

    pub fn add_class(
        &mut self,
        src: crate::fsm::NodeId,
        predicate: fn(&TokenTag) -> bool,
        target: Option<crate::fsm::NodeId>,
    ) -> crate::fsm::NodeId {
        self.fsm.add_class(src, predicate, target)
    }
}

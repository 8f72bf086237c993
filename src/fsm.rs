//! Generic deterministic finite-state-machine arena.
//!
//! Both the character-level scanner FSM (`char` alphabet, `TokenTag` output)
//! and the token-level parser FSM (`TokenTag` alphabet, `EntityTag` output)
//! are instances of the same `Fsm<Symbol, Tag>` type. Keeping the two levels
//! on one generic implementation is what lets the token FSM be rebuilt
//! (e.g. a new plugin) without touching the character FSM, and vice versa.
//!
//! Nodes live in a flat arena (`Vec<Node<_, _>>`) addressed by [`NodeId`]
//! rather than as a graph of `Rc`/`Box` pointers: self-loops (digit runs,
//! letter runs, whitespace runs) and shared suffix nodes would otherwise
//! form reference cycles, and integer indices traverse more predictably in
//! cache.

use std::collections::HashMap;
use std::hash::Hash;

/// Index into an [`Fsm`]'s node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

/// A predicate edge. Represented as a bare function pointer (not a boxed
/// closure) so edges stay `Copy` and comparable — the fixed, small set of
/// classifiers used by this crate (`is_digit`, `is_letter`, ...) never needs
/// closure captures.
pub type Predicate<Symbol> = fn(&Symbol) -> bool;

/// Semantic capability flags attached to a node's accepting tag. Transitions
/// in the token FSM can key on a group rather than a specific tag (e.g. "any
/// ascii-ish segment"), which is what lets `Domain` accept `Word`, `Tld`,
/// `AsciiNumeric`, ... uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Groups(u16);

impl Groups {
    pub const NONE: Groups = Groups(0);
    pub const NUMERIC: Groups = Groups(1 << 0);
    pub const ASCIINUMERIC: Groups = Groups(1 << 1);
    pub const ALPHA: Groups = Groups(1 << 2);
    pub const ALPHANUMERIC: Groups = Groups(1 << 3);
    pub const ASCII: Groups = Groups(1 << 4);
    pub const EMOJI: Groups = Groups(1 << 5);
    pub const SCHEME: Groups = Groups(1 << 6);
    pub const SLASHSCHEME: Groups = Groups(1 << 7);
    pub const TLD: Groups = Groups(1 << 8);
    pub const UTLD: Groups = Groups(1 << 9);
    pub const DOMAIN: Groups = Groups(1 << 10);
    pub const WHITESPACE: Groups = Groups(1 << 11);

    #[must_use]
    pub const fn union(self, other: Groups) -> Groups {
        Groups(self.0 | other.0)
    }

    #[must_use]
    pub const fn contains(self, other: Groups) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for Groups {
    type Output = Groups;
    fn bitor(self, rhs: Groups) -> Groups {
        self.union(rhs)
    }
}

struct Node<Symbol, Tag> {
    tag: Option<Tag>,
    groups: Groups,
    literal_edges: HashMap<Symbol, NodeId>,
    class_edges: Vec<(Predicate<Symbol>, NodeId)>,
    default_symbol: Option<NodeId>,
}

impl<Symbol, Tag> Node<Symbol, Tag> {
    fn empty() -> Self {
        Node {
            tag: None,
            groups: Groups::NONE,
            literal_edges: HashMap::new(),
            class_edges: Vec::new(),
            default_symbol: None,
        }
    }
}

/// A deterministic FSM over an arbitrary symbol alphabet, built incrementally
/// and then walked read-only. There is no separate "builder" type: the same
/// arena accepts mutations (`add_literal`, `add_class`, `add_chain`,
/// `set_accepting`) up until callers stop mutating it and start calling
/// `step`/`accepts`. Once published into a [`crate::registry::CompiledFsms`]
/// snapshot, nothing mutates it again.
pub struct Fsm<Symbol, Tag> {
    nodes: Vec<Node<Symbol, Tag>>,
    start: NodeId,
}

impl<Symbol, Tag> Fsm<Symbol, Tag>
where
    Symbol: Eq + Hash + Copy,
    Tag: Copy,
{
    pub fn new() -> Self {
        Fsm {
            nodes: vec![Node::empty()],
            start: NodeId(0),
        }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Allocate a fresh, non-accepting node.
    pub fn new_node(&mut self) -> NodeId {
        self.nodes.push(Node::empty());
        NodeId((self.nodes.len() - 1) as u32)
    }

    pub fn set_accepting(&mut self, node: NodeId, tag: Tag, groups: Groups) {
        let n = &mut self.nodes[node.0 as usize];
        n.tag = Some(tag);
        n.groups = n.groups.union(groups);
    }

    /// Add a literal-symbol edge from `src`. If `target` is `None`, a fresh
    /// non-accepting node is allocated (unless an edge for this symbol
    /// already exists, in which case it is reused — this is what lets
    /// `add_chain` share prefixes across TLDs/schemes).
    pub fn add_literal(&mut self, src: NodeId, symbol: Symbol, target: Option<NodeId>) -> NodeId {
        if let Some(&existing) = self.nodes[src.0 as usize].literal_edges.get(&symbol) {
            return existing;
        }
        let target = target.unwrap_or_else(|| self.new_node());
        self.nodes[src.0 as usize].literal_edges.insert(symbol, target);
        target
    }

    /// Add a predicate-class edge from `src`, tried in insertion order after
    /// all literal edges. Re-adding the same predicate function is a no-op
    /// (fn pointers compare by identity), which keeps repeated
    /// `add_chain` calls over a shared prefix from piling up duplicate
    /// side-transitions.
    pub fn add_class(
        &mut self,
        src: NodeId,
        predicate: Predicate<Symbol>,
        target: Option<NodeId>,
    ) -> NodeId {
        if let Some(&(_, existing)) = self.nodes[src.0 as usize]
            .class_edges
            .iter()
            .find(|(p, _)| *p == predicate)
        {
            return existing;
        }
        let target = target.unwrap_or_else(|| self.new_node());
        self.nodes[src.0 as usize]
            .class_edges
            .push((predicate, target));
        target
    }

    /// Set the default-symbol edge. Only meaningful when `src` is the start
    /// node — `step` only consults it there.
    pub fn set_default_symbol(&mut self, src: NodeId, target: NodeId) {
        self.nodes[src.0 as usize].default_symbol = Some(target);
    }

    /// Add a linear chain of literal-symbol edges spelling out `symbols`,
    /// starting at `src`. Every intermediate node becomes accepting with
    /// `default_tag` and gains the given `side_transitions` (so, e.g., the
    /// `h`-`t`-`t`-`p` chain for the `http` scheme still accepts further
    /// ASCII letters back into the generic `Word` run rather than dead-ending).
    /// The final node becomes accepting with `final_tag` (plus `final_groups`).
    /// Returns the final node.
    pub fn add_chain(
        &mut self,
        src: NodeId,
        symbols: &[Symbol],
        final_tag: Tag,
        final_groups: Groups,
        default_tag: Tag,
        default_groups: Groups,
        side_transitions: &[(Predicate<Symbol>, NodeId)],
    ) -> NodeId {
        let mut cur = src;
        for (i, &sym) in symbols.iter().enumerate() {
            let is_last = i == symbols.len() - 1;
            let next = self.add_literal(cur, sym, None);
            if is_last {
                self.set_accepting(next, final_tag, final_groups);
            } else {
                // Only promote to the default (generic) tag if nothing more
                // specific has already claimed this node — a shorter TLD
                // that is itself a prefix of a longer one keeps its own tag.
                if self.nodes[next.0 as usize].tag.is_none() {
                    self.set_accepting(next, default_tag, default_groups);
                }
                for &(pred, target) in side_transitions {
                    self.add_class(next, pred, Some(target));
                }
            }
            cur = next;
        }
        cur
    }

    /// Resolution order: literal edge, then class edges in insertion order,
    /// then (start node only) the default-symbol edge.
    pub fn step(&self, node: NodeId, symbol: &Symbol) -> Option<NodeId> {
        let n = &self.nodes[node.0 as usize];
        if let Some(&next) = n.literal_edges.get(symbol) {
            return Some(next);
        }
        for &(predicate, next) in &n.class_edges {
            if predicate(symbol) {
                return Some(next);
            }
        }
        if node == self.start {
            return n.default_symbol;
        }
        None
    }

    pub fn accepts(&self, node: NodeId) -> bool {
        self.nodes[node.0 as usize].tag.is_some()
    }

    pub fn tag(&self, node: NodeId) -> Option<Tag> {
        self.nodes[node.0 as usize].tag
    }

    pub fn groups(&self, node: NodeId) -> Groups {
        self.nodes[node.0 as usize].groups
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<Symbol, Tag> Default for Fsm<Symbol, Tag>
where
    Symbol: Eq + Hash + Copy,
    Tag: Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

//! Runtime invariant assertions for scanner/parser correctness.
//!
//! These are debug-mode sanity checks on the structural guarantees
//! `tokenize`/`find` are supposed to uphold, not user input validation —
//! malformed-looking input is never an error (§7). In release builds they
//! compile to no-ops.
//!
//! # Invariants enforced
//!
//! 1. **Partition coverage**: entity spans are contiguous, non-overlapping,
//!    and their concatenated `value`s reconstruct the original input.
//! 2. **Link subsequence**: `find(s)` is exactly the `is_link` subsequence
//!    of `tokenize(s)`, in order.
//! 3. **Bracket balance**: a matched link's value never has more closing
//!    brackets of a family than openers.

use crate::parser::Entity;

#[inline]
pub fn assert_partition_covers_input(entities: &[Entity], text: &str) {
    #[cfg(debug_assertions)]
    {
        let mut cursor = 0usize;
        let mut rebuilt = String::with_capacity(text.len());
        for (i, entity) in entities.iter().enumerate() {
            debug_assert!(
                entity.start == cursor,
                "Invariant violation: entity[{i}] starts at {} but cursor is at {cursor}",
                entity.start
            );
            rebuilt.push_str(&entity.value);
            cursor = entity.end;
        }
        debug_assert!(
            cursor == text.len(),
            "Invariant violation: entities cover [0, {cursor}) but input is {} bytes",
            text.len()
        );
        debug_assert!(
            rebuilt == text,
            "Invariant violation: concatenated entity values do not reconstruct the input"
        );
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = (entities, text);
    }
}

#[inline]
pub fn assert_find_is_link_subsequence(all: &[Entity], links: &[Entity]) {
    #[cfg(debug_assertions)]
    {
        debug_assert!(
            links.len() <= all.len(),
            "Invariant violation: find() returned more entities ({}) than tokenize() ({})",
            links.len(),
            all.len()
        );
        let expected: Vec<&Entity> = all.iter().filter(|e| e.is_link).collect();
        debug_assert!(
            expected.len() == links.len(),
            "Invariant violation: find() returned {} entities but {} tokenize() entities are links",
            links.len(),
            expected.len()
        );
        for (a, b) in expected.iter().zip(links.iter()) {
            debug_assert!(
                a.start == b.start && a.end == b.end,
                "Invariant violation: find()/tokenize() disagree on a link span"
            );
        }
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = (all, links);
    }
}

#[inline]
pub fn assert_link_brackets_balanced(entity: &Entity) {
    #[cfg(debug_assertions)]
    {
        if !entity.is_link {
            return;
        }
        for (open, close) in [('(', ')'), ('[', ']'), ('{', '}'), ('<', '>')] {
            let opens = entity.value.chars().filter(|&c| c == open).count();
            let closes = entity.value.chars().filter(|&c| c == close).count();
            debug_assert!(
                closes <= opens,
                "Invariant violation: link value {:?} has more '{close}' than '{open}'",
                entity.value
            );
        }
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = entity;
    }
}

//! Parallel batch convenience wrappers: each worker takes its own snapshot
//! `Arc` clone of the current FSM pair, so batch calls add no locking
//! beyond the one snapshot fetch already paid by every `tokenize`/`find`
//! call.

use crate::options::Options;
use crate::parser::Entity;
use rayon::prelude::*;

/// Run [`crate::tokenize`] over every text in `texts` in parallel, with
/// default options.
pub fn tokenize_batch(texts: &[&str]) -> Vec<Vec<Entity>> {
    tokenize_batch_with(texts, &Options::default())
}

/// Like [`tokenize_batch`], but with caller-supplied [`Options`].
pub fn tokenize_batch_with(texts: &[&str], options: &Options) -> Vec<Vec<Entity>> {
    texts.par_iter().map(|text| crate::tokenize_with(text, options)).collect()
}

/// Run [`crate::find`] over every text in `texts` in parallel, with default
/// options.
pub fn find_batch(texts: &[&str], kind: Option<&str>) -> Vec<Vec<Entity>> {
    find_batch_with(texts, kind, &Options::default())
}

/// Like [`find_batch`], but with caller-supplied [`Options`].
pub fn find_batch_with(texts: &[&str], kind: Option<&str>, options: &Options) -> Vec<Vec<Entity>> {
    texts
        .par_iter()
        .map(|text| crate::find_with(text, kind, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_with_matches_sequential_calls_in_order() {
        let texts = ["visit https://a.com", "no links here", "mail me@b.com"];
        let options = Options::default();
        let batched = tokenize_batch_with(&texts, &options);
        let sequential: Vec<_> = texts.iter().map(|t| crate::tokenize_with(t, &options)).collect();
        assert_eq!(batched.len(), sequential.len());
        for (b, s) in batched.iter().zip(sequential.iter()) {
            assert_eq!(b.len(), s.len());
            for (be, se) in b.iter().zip(s.iter()) {
                assert_eq!(be.value, se.value);
                assert_eq!(be.tag, se.tag);
            }
        }
    }

    #[test]
    fn default_tokenize_batch_matches_tokenize() {
        let texts = ["https://example.com lives here", "and nothing here"];
        let batched = tokenize_batch(&texts);
        for (b, t) in batched.iter().zip(texts.iter()) {
            assert_eq!(b.len(), crate::tokenize(t).len());
        }
    }

    #[test]
    fn default_find_batch_matches_find() {
        let texts = ["https://example.com", "no links"];
        let batched = find_batch(&texts, None);
        for (b, t) in batched.iter().zip(texts.iter()) {
            assert_eq!(b.len(), crate::find(t, None).len());
        }
    }
}

//! `letter_pool` — the multiset of letters still available to the generator.
//!
//! A pool is built once from the source phrase (lowercased, whitespace
//! discarded) and then mutated in place as the search takes letters for a
//! prefix and puts them back while backtracking. Counts are kept per
//! character together with a cached total, so emptiness checks are O(1).

use std::collections::BTreeMap;

/// Remaining-letters multiset.
///
/// Invariant: the letters consumed along the generator's current prefix
/// (spaces excluded) plus the letters still in the pool always equal the
/// original phrase's letter multiset.
#[derive(Debug, Clone)]
pub struct LetterPool {
    /// Count per character. Entries may sit at zero after `take`/`put` churn.
    counts: BTreeMap<char, u32>,
    /// Total letters remaining across all counts.
    remaining: usize,
}

impl LetterPool {
    /// Build a pool from a raw phrase: lowercase everything and drop
    /// whitespace. Non-alphabetic characters (digits, punctuation) are kept;
    /// whether they ever reach the pool is the word filter's concern.
    pub fn from_phrase(phrase: &str) -> Self {
        let mut counts = BTreeMap::new();
        let mut remaining = 0;
        for c in phrase.to_lowercase().chars() {
            if c.is_whitespace() {
                continue;
            }
            *counts.entry(c).or_insert(0) += 1;
            remaining += 1;
        }
        LetterPool { counts, remaining }
    }

    /// Take one occurrence of `letter` out of the pool.
    ///
    /// Returns `false` (and changes nothing) if the pool has none left;
    /// this is the generator's pruning test.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(n) if *n > 0 => {
                *n -= 1;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    /// Give one occurrence of `letter` back. The inverse of a successful
    /// [`take`](Self::take); callers only return what they took.
    pub fn put(&mut self, letter: char) {
        *self.counts.entry(letter).or_insert(0) += 1;
        self.remaining += 1;
    }

    /// Can the pool spell `word` in full, respecting multiplicity?
    pub fn covers(&self, word: &str) -> bool {
        let mut needed: BTreeMap<char, u32> = BTreeMap::new();
        for c in word.chars() {
            *needed.entry(c).or_insert(0) += 1;
        }
        needed
            .iter()
            .all(|(c, n)| self.counts.get(c).copied().unwrap_or(0) >= *n)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Number of letters remaining.
    pub fn len(&self) -> usize {
        self.remaining
    }

    /// Remaining letters in sorted order with multiplicity, e.g. `"aact"`.
    /// Canonical form for diagnostics and comparisons.
    pub fn letters(&self) -> String {
        let mut s = String::with_capacity(self.remaining);
        for (&c, &n) in &self.counts {
            for _ in 0..n {
                s.push(c);
            }
        }
        s
    }
}

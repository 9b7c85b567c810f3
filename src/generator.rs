//! `generator` — trie-driven backtracking enumeration of anagram phrases.
//!
//! The generator walks the [`WordIndex`](crate::trie::WordIndex) and the
//! [`LetterPool`](crate::letter_pool::LetterPool) in lockstep: an edge is
//! only followed while the pool still holds its letter, so whole families of
//! impossible arrangements are pruned the moment a prefix stops being a
//! prefix of any dictionary word. At a word-end node the walk may also spend
//! one unit of the separator budget and restart from the root for the next
//! word.
//!
//! A candidate is emitted when the pool is empty, the budget is fully spent
//! and the walk stands on a word end. Candidates go straight into a channel
//! sender; the generator blocks when the channel is full, which is what
//! keeps the producer from racing arbitrarily far ahead of the matcher.

use crossbeam_channel::Sender;

use crate::cancel::CancelToken;
use crate::letter_pool::LetterPool;
use crate::trie::{NodeId, WordIndex};

/// A finished arrangement: dictionary words joined by single spaces.
pub type Candidate = String;

/// How a generator run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorOutcome {
    /// Every arrangement reachable from the inputs was emitted.
    Exhausted,
    /// The run stopped early: the token tripped, or the consumer hung up.
    Cancelled,
}

/// Internal short-circuit: the consumer needs nothing more.
struct Stopped;

/// Immutable context threaded through the recursion.
struct SearchCtx<'a> {
    index: &'a WordIndex,
    sink: &'a Sender<Candidate>,
    cancel: &'a CancelToken,
}

/// Enumerate every arrangement of `pool` into indexed words with exactly
/// `separators` spaces, sending each candidate through `sink` as it is
/// found.
///
/// Emission order is deterministic: depth-first over the sorted trie edges,
/// with the separator branch explored after the letter branches at each
/// node.
///
/// The pool is restored to its initial state before returning (every `take`
/// is paired with a `put` on the way back up). A send failure means the
/// receiving side hung up; that and a tripped cancellation token both end
/// the run with [`GeneratorOutcome::Cancelled`].
#[must_use]
pub fn generate(
    index: &WordIndex,
    pool: &mut LetterPool,
    separators: usize,
    sink: &Sender<Candidate>,
    cancel: &CancelToken,
) -> GeneratorOutcome {
    let ctx = SearchCtx { index, sink, cancel };
    let mut prefix = String::with_capacity(pool.len() + separators);
    match descend(&ctx, pool, &mut prefix, index.root(), separators) {
        Ok(()) => GeneratorOutcome::Exhausted,
        Err(Stopped) => GeneratorOutcome::Cancelled,
    }
}

fn descend(
    ctx: &SearchCtx,
    pool: &mut LetterPool,
    prefix: &mut String,
    node: NodeId,
    separators_left: usize,
) -> Result<(), Stopped> {
    if ctx.cancel.is_cancelled() {
        return Err(Stopped);
    }

    if pool.is_empty() && separators_left == 0 {
        // The root is never a word end, so an empty pool at the root (an
        // empty phrase) emits nothing.
        if ctx.index.is_word_end(node) {
            ctx.sink.send(prefix.clone()).map_err(|_| Stopped)?;
        }
        return Ok(());
    }

    for (letter, child) in ctx.index.children(node) {
        if pool.take(letter) {
            prefix.push(letter);
            let walked = descend(ctx, pool, prefix, child, separators_left);
            prefix.pop();
            pool.put(letter);
            walked?;
        }
    }

    // Word boundary: spend one separator and start the next word. Pointless
    // when the pool is empty, since no word can follow.
    if separators_left > 0 && !pool.is_empty() && ctx.index.is_word_end(node) {
        prefix.push(' ');
        let walked = descend(ctx, pool, prefix, ctx.index.root(), separators_left - 1);
        prefix.pop();
        walked?;
    }

    Ok(())
}

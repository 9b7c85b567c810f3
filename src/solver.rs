//! The pipeline coordinator: an anagram generator thread feeding the MD5
//! matcher on the calling thread through one bounded channel.
//!
//! # Shutdown protocol
//!
//! The generator owns the channel's only sender and drops it when it
//! returns, so the matcher observes end-of-stream as a disconnect. In the
//! other direction, when the matcher finishes first the coordinator trips
//! the cancellation token *and* drops the receiver: a generator blocked on
//! a full channel cannot poll the token, but its pending `send` fails the
//! moment the receiver is gone. Either signal ends the generator cleanly.
//!
//! # Examples
//!
//! ```
//! use anahash::letter_pool::LetterPool;
//! use anahash::matcher::TargetSet;
//! use anahash::solver::{self, SearchStatus};
//! use anahash::trie::WordIndex;
//!
//! let index = WordIndex::build(["cat", "act"]);
//! let pool = LetterPool::from_phrase("act");
//! // md5("cat")
//! let targets = TargetSet::new(["d077f244def8a70e5ea758bd8352fcd8"]);
//!
//! let report = solver::run_search(index, pool, 0, targets, |event| {
//!     println!("{} -> '{}'", event.digest, event.candidate);
//! })?;
//!
//! assert_eq!(report.status, SearchStatus::AllTargetsFound);
//! assert_eq!(report.matches[0].candidate, "cat");
//! # Ok::<(), anahash::solver::SearchError>(())
//! ```

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::bounded;
use log::{debug, info};

use crate::cancel::CancelToken;
use crate::generator::{self, Candidate, GeneratorOutcome};
use crate::letter_pool::LetterPool;
use crate::matcher::{self, MatchEvent, TargetSet};
use crate::trie::WordIndex;

// Candidates buffered between generator and matcher. Bounds how far the
// producer can run ahead, so cancellation lands quickly.
const CANDIDATE_CHANNEL_CAPACITY: usize = 4096;

/// Status of a finished search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Every target digest was matched; the generator was stopped early if
    /// it was still running.
    AllTargetsFound,
    /// The generator exhausted the arrangement space with targets left over.
    SpaceExhausted,
}

/// Outcome of a search run (even one that found nothing).
#[derive(Debug)]
pub struct SearchReport {
    pub status: SearchStatus,
    /// Found targets, in the order they were hit.
    pub matches: Vec<MatchEvent>,
    /// Total candidates hashed.
    pub candidates_checked: u64,
    /// Targets never matched, sorted.
    pub unmatched: Vec<String>,
    /// Wall-clock time for the whole run.
    pub elapsed: Duration,
}

/// Pipeline failure.
///
/// Exhausting the space without finding every target is *not* an error;
/// that is [`SearchStatus::SpaceExhausted`]. This type is for transport
/// failures that void the run's completeness guarantee.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The generator thread panicked; candidates may have been lost.
    #[error("anagram generator thread panicked")]
    GeneratorPanicked,
}

/// Run the full search: spawn the generator over `index`/`pool`, match
/// candidates against `targets` on the calling thread, and shut both sides
/// down cleanly whichever finishes first.
///
/// `on_match` fires once per found target while the search is still
/// running; printing and persistence belong to the caller.
///
/// # Errors
///
/// [`SearchError::GeneratorPanicked`] if the generator thread dies. Every
/// candidate produced before cancellation is offered to the matcher exactly
/// once, in production order.
pub fn run_search<F>(
    index: WordIndex,
    pool: LetterPool,
    separators: usize,
    targets: TargetSet,
    on_match: F,
) -> Result<SearchReport, SearchError>
where
    F: FnMut(&MatchEvent),
{
    let started = Instant::now();
    let (sender, receiver) = bounded::<Candidate>(CANDIDATE_CHANNEL_CAPACITY);
    let cancel = CancelToken::new();

    info!(
        "searching arrangements of '{}' with {} separator(s) for {} target(s)",
        pool.letters(),
        separators,
        targets.len()
    );

    let generator_cancel = cancel.clone();
    let worker = thread::spawn(move || {
        let mut pool = pool;
        // Dropping `sender` on return closes the channel: end-of-stream.
        generator::generate(&index, &mut pool, separators, &sender, &generator_cancel)
    });

    let summary = matcher::match_candidates(&receiver, targets, on_match);

    // The matcher needs nothing more. Trip the token, then drop the receiver
    // so a send blocked on a full channel errors out instead of waiting for
    // a receive that will never come.
    cancel.cancel();
    drop(receiver);

    let outcome = worker.join().map_err(|_| SearchError::GeneratorPanicked)?;
    debug!("generator finished: {outcome:?}");
    debug_assert!(
        summary.unmatched.is_empty() || outcome == GeneratorOutcome::Exhausted,
        "targets can only remain once the space is exhausted"
    );

    let status = if summary.unmatched.is_empty() {
        SearchStatus::AllTargetsFound
    } else {
        SearchStatus::SpaceExhausted
    };
    let elapsed = started.elapsed();

    info!(
        "search finished: {status:?} after {} candidate(s) in {:.3}s",
        summary.candidates_checked,
        elapsed.as_secs_f64()
    );

    Ok(SearchReport {
        status,
        matches: summary.matches,
        candidates_checked: summary.candidates_checked,
        unmatched: summary.unmatched,
        elapsed,
    })
}

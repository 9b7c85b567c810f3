//! `matcher` — consume candidates from the channel and check their MD5
//! digests against the remaining targets.
//!
//! The matcher owns the target set outright; nothing else mutates it, so no
//! locking is needed anywhere in the pipeline. It stops as soon as the set
//! is empty (checked before every receive, so draining the channel is never
//! a precondition for finishing) or when the channel disconnects, which is
//! the generator's way of saying the search space is exhausted.

use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use log::{debug, trace};
use md5::{Digest, Md5};

use crate::generator::Candidate;

// One progress line per this many candidates, at debug level.
const PROGRESS_INTERVAL: u64 = 1000;

/// Digests still waiting to be matched. Shrinks as matches land; never
/// regrows.
#[derive(Debug, Clone)]
pub struct TargetSet {
    digests: std::collections::HashSet<String>,
}

impl TargetSet {
    /// Build from lowercase 32-hex digests. Duplicates collapse.
    pub fn new<I, S>(digests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TargetSet {
            digests: digests.into_iter().map(Into::into).collect(),
        }
    }

    /// Remove `digest` if it is a live target. Returns whether it was.
    fn take(&mut self, digest: &str) -> bool {
        self.digests.remove(digest)
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    /// Remaining digests in sorted order, for stable reporting.
    pub fn remaining_sorted(&self) -> Vec<String> {
        let mut remaining: Vec<String> = self.digests.iter().cloned().collect();
        remaining.sort();
        remaining
    }
}

/// One found target.
#[derive(Debug, Clone)]
pub struct MatchEvent {
    /// The matched target digest (lowercase hex).
    pub digest: String,
    /// The candidate whose MD5 is `digest`.
    pub candidate: String,
    /// 1-based position of the candidate in the stream.
    pub ordinal: u64,
    /// Time since the matcher started.
    pub elapsed: Duration,
}

/// What the match loop saw before it stopped.
#[derive(Debug)]
pub struct MatchSummary {
    /// Found targets, in the order they were hit.
    pub matches: Vec<MatchEvent>,
    /// Total candidates hashed.
    pub candidates_checked: u64,
    /// Targets never hit, sorted.
    pub unmatched: Vec<String>,
}

/// Drain `receiver` until every target is found or the channel disconnects.
///
/// Each candidate is hashed exactly once, in production order. `on_match`
/// fires per found target as it happens, so the caller can report or
/// persist partial progress while the search is still running.
pub fn match_candidates<F>(
    receiver: &Receiver<Candidate>,
    mut targets: TargetSet,
    mut on_match: F,
) -> MatchSummary
where
    F: FnMut(&MatchEvent),
{
    let start = Instant::now();
    let mut matches = Vec::new();
    let mut checked: u64 = 0;

    while !targets.is_empty() {
        // Disconnect means the generator finished the whole space.
        let Ok(candidate) = receiver.recv() else {
            debug!("candidate stream ended with {} target(s) unmatched", targets.len());
            break;
        };

        checked += 1;
        let digest = hex::encode(Md5::digest(candidate.as_bytes()));

        if checked % PROGRESS_INTERVAL == 0 {
            debug!("checked {checked} candidates; current: '{candidate}'");
        }

        if targets.take(&digest) {
            let event = MatchEvent {
                digest,
                candidate,
                ordinal: checked,
                elapsed: start.elapsed(),
            };
            on_match(&event);
            matches.push(event);
        } else {
            trace!("'{candidate}' -> {digest}");
        }
    }

    MatchSummary {
        matches,
        candidates_checked: checked,
        unmatched: targets.remaining_sorted(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // md5("cat"), md5("tac"), md5("dog")
    const CAT: &str = "d077f244def8a70e5ea758bd8352fcd8";
    const TAC: &str = "32390fa731a71f4cdcf6b76a05334545";
    const DOG: &str = "06d80eb0c50b49a509b49f2424e8c805";

    fn channel_with(candidates: &[&str]) -> Receiver<Candidate> {
        let (tx, rx) = crossbeam_channel::unbounded();
        for c in candidates {
            tx.send((*c).to_string()).unwrap();
        }
        rx
    }

    #[test]
    fn test_finds_target_and_reports_ordinal() {
        let rx = channel_with(&["act", "cat", "tac"]);
        let summary = match_candidates(&rx, TargetSet::new([CAT]), |_| {});

        assert_eq!(summary.matches.len(), 1);
        assert_eq!(summary.matches[0].digest, CAT);
        assert_eq!(summary.matches[0].candidate, "cat");
        assert_eq!(summary.matches[0].ordinal, 2);
        assert!(summary.unmatched.is_empty());
    }

    #[test]
    fn test_stops_as_soon_as_targets_are_empty() {
        let rx = channel_with(&["act", "cat", "tac"]);
        let summary = match_candidates(&rx, TargetSet::new([CAT]), |_| {});

        assert_eq!(summary.candidates_checked, 2);
        // "tac" was never consumed.
        assert_eq!(rx.try_recv().as_deref(), Ok("tac"));
    }

    #[test]
    fn test_empty_target_set_consumes_nothing() {
        let rx = channel_with(&["act"]);
        let summary = match_candidates(&rx, TargetSet::new(Vec::<String>::new()), |_| {});

        assert_eq!(summary.candidates_checked, 0);
        assert!(summary.matches.is_empty());
        assert!(summary.unmatched.is_empty());
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn test_disconnect_reports_unmatched_targets() {
        let rx = channel_with(&["act", "cat"]);
        let summary = match_candidates(&rx, TargetSet::new([DOG]), |_| {});

        assert_eq!(summary.candidates_checked, 2);
        assert!(summary.matches.is_empty());
        assert_eq!(summary.unmatched, vec![DOG]);
    }

    #[test]
    fn test_multiple_targets_matched_in_stream_order() {
        let rx = channel_with(&["act", "tac", "cat"]);
        let summary = match_candidates(&rx, TargetSet::new([CAT, TAC]), |_| {});

        assert_eq!(summary.matches.len(), 2);
        assert_eq!(summary.matches[0].candidate, "tac");
        assert_eq!(summary.matches[0].ordinal, 2);
        assert_eq!(summary.matches[1].candidate, "cat");
        assert_eq!(summary.matches[1].ordinal, 3);
    }

    #[test]
    fn test_on_match_fires_per_event() {
        let rx = channel_with(&["tac", "cat"]);
        let mut seen = Vec::new();
        let summary = match_candidates(&rx, TargetSet::new([CAT, TAC]), |event| {
            seen.push((event.digest.clone(), event.ordinal));
        });

        assert_eq!(seen, vec![(TAC.to_string(), 1), (CAT.to_string(), 2)]);
        assert_eq!(summary.matches.len(), 2);
    }

    #[test]
    fn test_duplicate_digests_collapse() {
        let targets = TargetSet::new([CAT, CAT]);
        assert_eq!(targets.len(), 1);
    }

    #[test]
    fn test_remaining_sorted_is_sorted() {
        let targets = TargetSet::new([DOG, CAT, TAC]);
        let remaining = targets.remaining_sorted();
        let mut expected = vec![DOG.to_string(), CAT.to_string(), TAC.to_string()];
        expected.sort();
        assert_eq!(remaining, expected);
    }
}

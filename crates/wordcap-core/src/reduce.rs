// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Deterministic word-count reduction.
//!
//! Words are dropped in a fixed priority order until the sequence fits:
//!
//! 1. pure punctuation tokens, scanning from the end
//! 2. stopwords, scanning from the end
//! 3. filler words, scanning from the end
//! 4. the shortest interior words (never the current first or last word),
//!    earliest first among equal lengths
//! 5. hard truncation to the first `limit` words
//!
//! Each phase stops as soon as the limit is met and later phases are
//! skipped.  Survivors always keep their original relative order.

use tracing::trace;

use crate::lexicon::{is_filler_word, is_stopword};
use crate::tokenize::normalize_word;

/// Sort key for interior words without any classifiable characters.
const EMPTY_NORMALIZED_RANK: usize = 1000;

/// Result of a reduction pass together with a per-phase removal tally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reduction {
    pub words: Vec<String>,
    pub punctuation: usize,
    pub stopwords: usize,
    pub filler: usize,
    pub shortest_interior: usize,
    pub truncated: usize,
}

impl Reduction {
    /// Total number of words removed across all phases.
    pub fn removed(&self) -> usize {
        self.punctuation + self.stopwords + self.filler + self.shortest_interior + self.truncated
    }
}

/// Shrink `words` to at most `limit` entries.
///
/// A sequence already within the limit is returned unchanged.  `limit == 0`
/// yields an empty sequence.
pub fn reduce_to_limit<S: AsRef<str>>(words: &[S], limit: usize) -> Vec<String> {
    reduce_with_report(words, limit).words
}

/// Like [`reduce_to_limit`] but also reports how many words each phase took.
pub fn reduce_with_report<S: AsRef<str>>(words: &[S], limit: usize) -> Reduction {
    let mut pass = Pass::new(words, limit);
    let mut report = Reduction::default();

    if pass.over() {
        report.punctuation = pass.strip_from_end(str::is_empty);
        report.stopwords = pass.strip_from_end(is_stopword);
        report.filler = pass.strip_from_end(is_filler_word);
        report.shortest_interior = pass.strip_shortest_interior();
        report.truncated = pass.truncate();
        trace!(
            limit,
            punctuation = report.punctuation,
            stopwords = report.stopwords,
            filler = report.filler,
            shortest_interior = report.shortest_interior,
            truncated = report.truncated,
            "reduction phases complete"
        );
    }

    report.words = pass.into_words();
    report
}

// ─── Private helpers ──────────────────────────────────────────────────────────

struct Slot<'a> {
    word: &'a str,
    normalized: String,
    alive: bool,
}

/// Words are never spliced out: removal clears `alive`, so slot positions
/// stay stable for the whole pass and survivors are compacted once at the
/// end.
struct Pass<'a> {
    slots: Vec<Slot<'a>>,
    live: usize,
    limit: usize,
}

impl<'a> Pass<'a> {
    fn new<S: AsRef<str>>(words: &'a [S], limit: usize) -> Self {
        let slots: Vec<Slot<'a>> = words
            .iter()
            .map(|w| {
                let word = w.as_ref();
                Slot { word, normalized: normalize_word(word), alive: true }
            })
            .collect();
        let live = slots.len();
        Self { slots, live, limit }
    }

    fn over(&self) -> bool {
        self.live > self.limit
    }

    fn kill(&mut self, idx: usize) {
        self.slots[idx].alive = false;
        self.live -= 1;
    }

    /// Remove words whose normalized form matches `pred`, last to first,
    /// until the limit is met.
    fn strip_from_end(&mut self, pred: impl Fn(&str) -> bool) -> usize {
        let mut removed = 0;
        for idx in (0..self.slots.len()).rev() {
            if !self.over() {
                break;
            }
            let slot = &self.slots[idx];
            if slot.alive && pred(slot.normalized.as_str()) {
                self.kill(idx);
                removed += 1;
            }
        }
        removed
    }

    /// Remove interior words shortest first, ties broken by position.
    ///
    /// The first and last surviving words are anchors and never candidates.
    /// Slot position order equals current sequence order, so sorting by slot
    /// index gives the same tie-break as sorting by live index.
    fn strip_shortest_interior(&mut self) -> usize {
        if !self.over() {
            return 0;
        }
        let alive: Vec<usize> = (0..self.slots.len()).filter(|&i| self.slots[i].alive).collect();
        if alive.len() <= 2 {
            return 0;
        }

        let mut candidates: Vec<(usize, usize)> = alive[1..alive.len() - 1]
            .iter()
            .map(|&idx| {
                let len = self.slots[idx].normalized.chars().count();
                let rank = if len == 0 { EMPTY_NORMALIZED_RANK } else { len };
                (rank, idx)
            })
            .collect();
        candidates.sort_unstable();

        let mut removed = 0;
        for (_, idx) in candidates {
            if !self.over() {
                break;
            }
            self.kill(idx);
            removed += 1;
        }
        removed
    }

    /// Keep only the first `limit` surviving words.
    fn truncate(&mut self) -> usize {
        if !self.over() {
            return 0;
        }
        let mut kept = 0;
        let mut removed = 0;
        for slot in self.slots.iter_mut().filter(|s| s.alive) {
            if kept < self.limit {
                kept += 1;
            } else {
                slot.alive = false;
                removed += 1;
            }
        }
        self.live -= removed;
        removed
    }

    fn into_words(self) -> Vec<String> {
        self.slots
            .into_iter()
            .filter(|s| s.alive)
            .map(|s| s.word.to_string())
            .collect()
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

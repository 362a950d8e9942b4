// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Fixed English word lists used to pick low-information words.
//!
//! Both sets hold normalized forms (see [`crate::normalize_word`]).

use std::collections::HashSet;
use std::sync::OnceLock;

const STOPWORDS: &[&str] = &[
    // articles & conjunctions
    "a", "an", "the", "and", "or", "but", "so",
    // prepositions
    "to", "of", "for", "in", "on", "at", "by", "with", "from", "into", "about",
    "over", "under", "between", "through", "during", "before", "after",
    "up", "down", "out", "off", "than", "as", "if", "then",
    // subordinators
    "while", "because", "since", "though", "although", "unless",
    "without", "within", "beyond", "around", "near",
    // degree & frequency adverbs
    "just", "very", "really", "quite", "still", "also", "even", "too",
    "ever", "never", "maybe", "perhaps", "almost",
];

const FILLER_WORDS: &[&str] = &[
    "literally", "actually", "basically", "seriously", "simply", "kinda", "sorta",
    "pretty", "totally", "completely", "extremely", "highly", "truly", "honestly",
    "definitely", "probably", "apparently", "maybe", "perhaps", "somewhat",
];

fn stopwords() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORDS.iter().copied().collect())
}

fn filler_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| FILLER_WORDS.iter().copied().collect())
}

/// `normalized` must already be normalized.
pub fn is_stopword(normalized: &str) -> bool {
    stopwords().contains(normalized)
}

/// `normalized` must already be normalized.
pub fn is_filler_word(normalized: &str) -> bool {
    filler_words().contains(normalized)
}

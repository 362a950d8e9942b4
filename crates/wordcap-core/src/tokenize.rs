// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Whitespace tokenizer and joiner.
//!
//! Words are runs of non-whitespace; the original spacing is not preserved.

/// Split `text` into words on runs of whitespace.  Empty or
/// whitespace-only input yields an empty list.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Join words with single spaces.
///
/// Empty tokens are dropped and any whitespace inside a token is collapsed,
/// so the result always re-splits into the same words.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::new();
    for piece in words.iter().flat_map(|w| w.as_ref().split_whitespace()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(piece);
    }
    out
}

/// Classification key for a word: lowercased, with everything outside
/// `[a-z0-9']` trimmed from both ends.
pub fn normalize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    lower
        .trim_matches(|c: char| !is_word_char(c))
        .to_string()
}

/// True when the word carries no letters, digits or apostrophes at all.
pub fn is_pure_punctuation(word: &str) -> bool {
    normalize_word(word).is_empty()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '\''
}

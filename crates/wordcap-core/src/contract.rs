// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::sync::OnceLock;

use regex::Regex;

/// Two-word phrases and their one-word informal contraction.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("you are", "you're"),
    ("you have", "you've"),
    ("kind of", "kinda"),
    ("sort of", "sorta"),
    ("going to", "gonna"),
    ("got to", "gotta"),
    ("trying to", "tryna"),
];

fn compiled() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| {
        CONTRACTIONS
            .iter()
            .filter_map(|(phrase, short)| {
                let pattern = format!(r"(?i)\b{}\b", phrase.replace(' ', r"\s+"));
                Regex::new(&pattern).ok().map(|re| (re, *short))
            })
            .collect()
    })
}

/// Replace common two-word phrases with their contraction, saving one word
/// per match.  Matching is case-insensitive; replacements are lowercase.
pub fn contract_phrases(text: &str) -> String {
    let mut out = text.to_string();
    for (re, short) in compiled() {
        if re.is_match(&out) {
            out = re.replace_all(&out, *short).into_owned();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::word_count;

    #[test]
    fn contracts_every_listed_phrase() {
        assert_eq!(contract_phrases("you are"), "you're");
        assert_eq!(contract_phrases("you have"), "you've");
        assert_eq!(contract_phrases("kind of"), "kinda");
        assert_eq!(contract_phrases("sort of"), "sorta");
        assert_eq!(contract_phrases("going to"), "gonna");
        assert_eq!(contract_phrases("got to"), "gotta");
        assert_eq!(contract_phrases("trying to"), "tryna");
    }

    #[test]
    fn sentence_contraction_saves_words() {
        let text = "You are going to love it, I am trying to say.";
        let out = contract_phrases(text);
        assert_eq!(out, "you're gonna love it, I am tryna say.");
        assert_eq!(word_count(text) - word_count(&out), 3);
    }

    #[test]
    fn respects_word_boundaries() {
        assert_eq!(contract_phrases("bayou aren't"), "bayou aren't");
        assert_eq!(contract_phrases("mankind offers"), "mankind offers");
    }

    #[test]
    fn spans_irregular_whitespace() {
        assert_eq!(contract_phrases("Sort   of fine"), "sorta fine");
    }

    #[test]
    fn leaves_unrelated_text_alone() {
        let text = "Nothing to contract here.";
        assert_eq!(contract_phrases(text), text);
    }
}

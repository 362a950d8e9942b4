// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
mod contract;
mod error;
mod events;
mod gate;
mod hook;
mod lexicon;
mod reduce;
mod tokenize;

pub use contract::contract_phrases;
pub use error::PolicyError;
pub use events::LimitEvent;
pub use gate::{apply_word_limit, apply_word_limit_opt, validate_policy, LimitMethod, LimitOutcome};
pub use hook::{CharacterPolicy, HookChain, LimitHook, PolicyHook, PolicySource};
pub use lexicon::{is_filler_word, is_stopword};
pub use reduce::{reduce_to_limit, reduce_with_report, Reduction};
pub use tokenize::{is_pure_punctuation, join_words, normalize_word, split_words, word_count};

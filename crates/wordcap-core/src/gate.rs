// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Policy gate: decides whether a response is left alone, reported or
//! trimmed.
//!
//! The gate never fails.  Bad policies and missing text pass through
//! untouched; out-of-range counts under strict mode are surfaced as a
//! [`LimitEvent`] on the outcome and in the log.

use serde::Serialize;
use tracing::{debug, info, warn};
use wordcap_config::WordLimitPolicy;

use crate::contract::contract_phrases;
use crate::error::PolicyError;
use crate::events::LimitEvent;
use crate::reduce::reduce_with_report;
use crate::tokenize::{join_words, split_words, word_count};

/// Which branch of the gate produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LimitMethod {
    Disabled,
    Empty,
    InvalidPolicy,
    Unchanged,
    TooShort,
    TooShortReported,
    Trimmed,
    TooLong,
    TooLongReported,
}

impl std::fmt::Display for LimitMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LimitMethod::Disabled => "disabled",
            LimitMethod::Empty => "empty",
            LimitMethod::InvalidPolicy => "invalid-policy",
            LimitMethod::Unchanged => "unchanged",
            LimitMethod::TooShort => "too-short",
            LimitMethod::TooShortReported => "too-short-reported",
            LimitMethod::Trimmed => "trimmed",
            LimitMethod::TooLong => "too-long",
            LimitMethod::TooLongReported => "too-long-reported",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitOutcome {
    pub text: String,
    /// True only when the text was rewritten.
    pub applied: bool,
    pub method: LimitMethod,
    pub original_words: usize,
    pub final_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<LimitEvent>,
}

impl LimitOutcome {
    /// Outcome that hands `text` back untouched.
    pub fn passthrough(text: &str, method: LimitMethod) -> Self {
        let count = word_count(text);
        Self {
            text: text.to_string(),
            applied: false,
            method,
            original_words: count,
            final_words: count,
            event: None,
        }
    }

    fn reported(text: &str, method: LimitMethod, event: LimitEvent) -> Self {
        Self { event: Some(event), ..Self::passthrough(text, method) }
    }
}

/// Check that `max_words >= 1` and `min_words <= max_words`.
pub fn validate_policy(policy: &WordLimitPolicy) -> Result<(), PolicyError> {
    if policy.max_words < 1 {
        return Err(PolicyError::MaxBelowOne);
    }
    if policy.min_words > policy.max_words {
        return Err(PolicyError::MinAboveMax { min: policy.min_words, max: policy.max_words });
    }
    Ok(())
}

/// Apply `policy` to `text`.
pub fn apply_word_limit(text: &str, policy: &WordLimitPolicy) -> LimitOutcome {
    if !policy.enabled {
        return LimitOutcome::passthrough(text, LimitMethod::Disabled);
    }
    if text.trim().is_empty() {
        return LimitOutcome::passthrough(text, LimitMethod::Empty);
    }
    if let Err(e) = validate_policy(policy) {
        warn!("{e}; leaving text unchanged");
        let event = LimitEvent::InvalidPolicy { min: policy.min_words, max: policy.max_words };
        return LimitOutcome::reported(text, LimitMethod::InvalidPolicy, event);
    }

    let count = word_count(text);

    if count < policy.min_words {
        if policy.strict_mode {
            let event = LimitEvent::TooShort { count, min: policy.min_words };
            info!(count, min = policy.min_words, "{event}");
            return LimitOutcome::reported(text, LimitMethod::TooShortReported, event);
        }
        return LimitOutcome::passthrough(text, LimitMethod::TooShort);
    }

    if count <= policy.max_words {
        return LimitOutcome::passthrough(text, LimitMethod::Unchanged);
    }

    if policy.auto_trim {
        return trim(text, count, policy);
    }
    if policy.strict_mode {
        let event = LimitEvent::TooLong { count, max: policy.max_words };
        info!(count, max = policy.max_words, "{event}");
        return LimitOutcome::reported(text, LimitMethod::TooLongReported, event);
    }
    LimitOutcome::passthrough(text, LimitMethod::TooLong)
}

/// Treats a missing text the same as an empty one.
pub fn apply_word_limit_opt(text: Option<&str>, policy: &WordLimitPolicy) -> LimitOutcome {
    apply_word_limit(text.unwrap_or_default(), policy)
}

fn trim(text: &str, count: usize, policy: &WordLimitPolicy) -> LimitOutcome {
    let source = if policy.contract_phrases {
        contract_phrases(text)
    } else {
        text.to_string()
    };
    let words = split_words(&source);
    let contracted = count.saturating_sub(words.len());
    let reduction = reduce_with_report(&words, policy.max_words);
    let trimmed = join_words(&reduction.words);

    debug!(
        before = count,
        after = reduction.words.len(),
        contracted,
        punctuation = reduction.punctuation,
        stopwords = reduction.stopwords,
        filler = reduction.filler,
        shortest_interior = reduction.shortest_interior,
        truncated = reduction.truncated,
        "trimmed response to word limit"
    );

    LimitOutcome {
        final_words: reduction.words.len(),
        text: trimmed,
        applied: true,
        method: LimitMethod::Trimmed,
        original_words: count,
        event: None,
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use serde::Serialize;

/// Conditions the gate reports without failing the call.
/// Hosts inspect these to decide follow-up work such as asking for a
/// regenerated response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LimitEvent {
    /// Strict mode saw fewer words than the minimum
    TooShort { count: usize, min: usize },
    /// Strict mode saw more words than the maximum and trimming was off
    TooLong { count: usize, max: usize },
    /// The policy itself was unusable; the text passed through untouched
    InvalidPolicy { min: usize, max: usize },
}

impl std::fmt::Display for LimitEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LimitEvent::TooShort { count, min } => {
                write!(f, "response too short: {count} words (minimum: {min})")
            }
            LimitEvent::TooLong { count, max } => {
                write!(f, "response too long: {count} words (maximum: {max})")
            }
            LimitEvent::InvalidPolicy { min, max } => {
                write!(f, "invalid word limit policy: min {min}, max {max}")
            }
        }
    }
}

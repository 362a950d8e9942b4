// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("maximum word count must be at least 1")]
    MaxBelowOne,

    #[error("minimum word count {min} exceeds maximum {max}")]
    MinAboveMax { min: usize, max: usize },
}

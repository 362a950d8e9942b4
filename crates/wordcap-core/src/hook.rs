// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Interceptor chain for hosts that post-process generated responses.
//!
//! A host registers [`LimitHook`]s once and routes every response through
//! [`HookChain::process`].  The first hook that claims a response decides
//! its outcome; unclaimed responses come back untouched.

use tracing::debug;
use wordcap_config::{Config, WordLimitPolicy};

use crate::gate::{apply_word_limit, LimitMethod, LimitOutcome};

/// Supplies the policy for whatever entity is currently active.
///
/// Returning `None` means "no word limit for this entity".
pub trait PolicySource: Send + Sync {
    fn policy(&self) -> Option<WordLimitPolicy>;
}

impl<F> PolicySource for F
where
    F: Fn() -> Option<WordLimitPolicy> + Send + Sync,
{
    fn policy(&self) -> Option<WordLimitPolicy> {
        self()
    }
}

/// Policy of one named character in a loaded [`Config`].
#[derive(Debug, Clone)]
pub struct CharacterPolicy {
    config: Config,
    character: String,
}

impl CharacterPolicy {
    pub fn new(config: Config, character: impl Into<String>) -> Self {
        Self { config, character: character.into() }
    }
}

impl PolicySource for CharacterPolicy {
    fn policy(&self) -> Option<WordLimitPolicy> {
        self.config.policy_for(&self.character)
    }
}

pub trait LimitHook: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Return `Some` to claim `text`, `None` to let the next hook see it.
    fn handle(&self, text: &str) -> Option<LimitOutcome>;
}

/// Built-in hook: applies the gate whenever its source yields an enabled
/// policy.
pub struct PolicyHook<S> {
    source: S,
}

impl<S: PolicySource> PolicyHook<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: PolicySource> LimitHook for PolicyHook<S> {
    fn name(&self) -> &str {
        "policy"
    }

    fn handle(&self, text: &str) -> Option<LimitOutcome> {
        let policy = self.source.policy().filter(|p| p.enabled)?;
        Some(apply_word_limit(text, &policy))
    }
}

/// Ordered list of hooks; registration order is evaluation order.
#[derive(Default)]
pub struct HookChain {
    hooks: Vec<Box<dyn LimitHook>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: impl LimitHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn process(&self, text: &str) -> LimitOutcome {
        for hook in &self.hooks {
            if let Some(outcome) = hook.handle(text) {
                debug!(hook = hook.name(), method = %outcome.method, "hook claimed response");
                return outcome;
            }
        }
        LimitOutcome::passthrough(text, LimitMethod::Unchanged)
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

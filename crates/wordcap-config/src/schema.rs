// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Serde default helper: returns `true`.
///
/// `#[serde(default)]` on a `bool` always falls back to `false`, so the
/// fields that are on unless switched off need a named function.
fn default_true() -> bool {
    true
}

fn default_min_words() -> usize {
    10
}
fn default_max_words() -> usize {
    100
}
fn default_max_regeneration_attempts() -> u32 {
    3
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Limits applied when a character does not override a field.
    #[serde(default)]
    pub defaults: LimitDefaults,
    /// Per-character word limit overrides, keyed by character name.
    ///
    /// ```toml
    /// [characters.alice]
    /// enabled = true
    /// max_words = 50
    /// instructions = "Keep responses concise."
    /// ```
    #[serde(default)]
    pub characters: HashMap<String, CharacterLimits>,
}

/// How a response should relate to its word limit.
///
/// Only carried through to the caller; the reducer never looks at it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStyle {
    /// Let the writer decide
    #[default]
    Natural,
    /// Prefer shorter responses
    Concise,
    /// Prefer longer responses
    Detailed,
}

impl std::fmt::Display for ResponseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseStyle::Natural => write!(f, "natural"),
            ResponseStyle::Concise => write!(f, "concise"),
            ResponseStyle::Detailed => write!(f, "detailed"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitDefaults {
    /// Master switch for the default policy
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_min_words")]
    pub min_words: usize,
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    /// Report responses that fall outside the limits
    #[serde(default)]
    pub strict_mode: bool,
    /// Shrink over-long responses instead of only reporting them
    #[serde(default = "default_true")]
    pub auto_trim: bool,
    #[serde(default)]
    pub style: ResponseStyle,
    /// Contract common phrases ("going to" → "gonna") before trimming.
    #[serde(default)]
    pub contract_phrases: bool,
    /// How many times a host may regenerate a rejected response.  Passed
    /// through untouched; nothing in this workspace regenerates text.
    #[serde(default = "default_max_regeneration_attempts")]
    pub max_regeneration_attempts: u32,
}

impl Default for LimitDefaults {
    fn default() -> Self {
        Self {
            enabled: true,
            min_words: default_min_words(),
            max_words: default_max_words(),
            strict_mode: false,
            auto_trim: true,
            style: ResponseStyle::Natural,
            contract_phrases: false,
            max_regeneration_attempts: default_max_regeneration_attempts(),
        }
    }
}

/// Per-character overrides.  Unset (or zero) fields fall back to
/// [`LimitDefaults`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterLimits {
    /// A character only gets a policy when this is explicitly on.
    #[serde(default)]
    pub enabled: bool,
    pub min_words: Option<usize>,
    pub max_words: Option<usize>,
    pub strict_mode: Option<bool>,
    pub auto_trim: Option<bool>,
    pub style: Option<ResponseStyle>,
    pub instructions: Option<String>,
    pub contract_phrases: Option<bool>,
}

/// Fully resolved word limit settings handed to the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordLimitPolicy {
    pub enabled: bool,
    pub min_words: usize,
    pub max_words: usize,
    pub strict_mode: bool,
    pub auto_trim: bool,
    pub style: ResponseStyle,
    pub instructions: String,
    pub contract_phrases: bool,
    pub max_regeneration_attempts: u32,
}

impl Default for WordLimitPolicy {
    fn default() -> Self {
        LimitDefaults::default().to_policy()
    }
}

impl WordLimitPolicy {
    /// Convenience constructor for an enabled, auto-trimming policy.
    pub fn with_limits(min_words: usize, max_words: usize) -> Self {
        Self { min_words, max_words, ..Self::default() }
    }
}

impl LimitDefaults {
    pub fn to_policy(&self) -> WordLimitPolicy {
        WordLimitPolicy {
            enabled: self.enabled,
            min_words: self.min_words,
            max_words: self.max_words,
            strict_mode: self.strict_mode,
            auto_trim: self.auto_trim,
            style: self.style,
            instructions: String::new(),
            contract_phrases: self.contract_phrases,
            max_regeneration_attempts: self.max_regeneration_attempts,
        }
    }
}

impl CharacterLimits {
    /// Merge these overrides onto `defaults`.
    ///
    /// Zero counts count as unset.  `strict_mode` is on when either side
    /// turns it on, while `auto_trim` stays on unless the character
    /// explicitly switches it off.
    pub fn resolve(&self, defaults: &LimitDefaults) -> WordLimitPolicy {
        let nonzero = |v: Option<usize>| v.filter(|n| *n > 0);
        WordLimitPolicy {
            enabled: self.enabled,
            min_words: nonzero(self.min_words).unwrap_or(defaults.min_words),
            max_words: nonzero(self.max_words).unwrap_or(defaults.max_words),
            strict_mode: self.strict_mode.unwrap_or(false) || defaults.strict_mode,
            auto_trim: self.auto_trim != Some(false),
            style: self.style.unwrap_or(defaults.style),
            instructions: self.instructions.clone().unwrap_or_default(),
            contract_phrases: self.contract_phrases.unwrap_or(defaults.contract_phrases),
            max_regeneration_attempts: defaults.max_regeneration_attempts,
        }
    }
}

impl Config {
    /// Policy for `character`, or `None` when the character is unknown or
    /// has word limits switched off.
    pub fn policy_for(&self, character: &str) -> Option<WordLimitPolicy> {
        let limits = self.characters.get(character)?;
        if !limits.enabled {
            return None;
        }
        Some(limits.resolve(&self.defaults))
    }

    /// Policy built from `[defaults]` alone.
    pub fn default_policy(&self) -> WordLimitPolicy {
        self.defaults.to_policy()
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Config {
        toml::from_str(s).unwrap()
    }

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = parse("");
        assert!(cfg.defaults.enabled);
        assert_eq!(cfg.defaults.min_words, 10);
        assert_eq!(cfg.defaults.max_words, 100);
        assert!(!cfg.defaults.strict_mode);
        assert!(cfg.defaults.auto_trim);
        assert_eq!(cfg.defaults.style, ResponseStyle::Natural);
        assert_eq!(cfg.defaults.max_regeneration_attempts, 3);
        assert!(cfg.characters.is_empty());
    }

    #[test]
    fn partial_defaults_table_keeps_other_fields() {
        let cfg = parse("[defaults]\nmax_words = 40\n");
        assert_eq!(cfg.defaults.max_words, 40);
        assert_eq!(cfg.defaults.min_words, 10);
        assert!(cfg.defaults.auto_trim);
    }

    #[test]
    fn style_parses_lowercase() {
        let cfg = parse("[defaults]\nstyle = \"concise\"\n");
        assert_eq!(cfg.defaults.style, ResponseStyle::Concise);
        assert_eq!(cfg.defaults.style.to_string(), "concise");
    }

    // ── Character resolution ──────────────────────────────────────────────────

    #[test]
    fn unknown_character_has_no_policy() {
        assert!(Config::default().policy_for("nobody").is_none());
    }

    #[test]
    fn disabled_character_has_no_policy() {
        let cfg = parse("[characters.bob]\nmax_words = 20\n");
        assert!(cfg.policy_for("bob").is_none());
    }

    #[test]
    fn character_overrides_fall_back_field_by_field() {
        let cfg = parse(
            r#"[defaults]
min_words = 5
style = "detailed"

[characters.alice]
enabled = true
max_words = 50
instructions = "Keep responses concise."
"#,
        );
        let p = cfg.policy_for("alice").unwrap();
        assert!(p.enabled);
        assert_eq!(p.min_words, 5);
        assert_eq!(p.max_words, 50);
        assert_eq!(p.style, ResponseStyle::Detailed);
        assert_eq!(p.instructions, "Keep responses concise.");
    }

    #[test]
    fn zero_counts_fall_back_to_defaults() {
        let cfg = parse("[characters.c]\nenabled = true\nmin_words = 0\nmax_words = 0\n");
        let p = cfg.policy_for("c").unwrap();
        assert_eq!(p.min_words, 10);
        assert_eq!(p.max_words, 100);
    }

    #[test]
    fn auto_trim_only_off_when_explicitly_false() {
        let mut defaults = LimitDefaults::default();
        defaults.auto_trim = false;
        let unset = CharacterLimits { enabled: true, ..CharacterLimits::default() };
        assert!(unset.resolve(&defaults).auto_trim);

        let off = CharacterLimits { auto_trim: Some(false), ..unset.clone() };
        assert!(!off.resolve(&defaults).auto_trim);
    }

    #[test]
    fn strict_mode_is_either_side() {
        let mut defaults = LimitDefaults::default();
        let c = CharacterLimits { enabled: true, strict_mode: Some(false), ..Default::default() };
        assert!(!c.resolve(&defaults).strict_mode);
        defaults.strict_mode = true;
        assert!(c.resolve(&defaults).strict_mode);
    }

    #[test]
    fn with_limits_keeps_auto_trim_on() {
        let p = WordLimitPolicy::with_limits(3, 7);
        assert!(p.enabled && p.auto_trim);
        assert_eq!((p.min_words, p.max_words), (3, 7));
    }
}

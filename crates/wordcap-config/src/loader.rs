use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::Config;

/// Ordered list of config file locations searched from lowest to highest priority.
/// Later files override earlier ones.
fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. System-wide default
    paths.push(PathBuf::from("/etc/wordcap/config.toml"));

    // 2. XDG / home
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".config/wordcap/config.toml"));
    }
    if let Some(cfg) = dirs::config_dir() {
        paths.push(cfg.join("wordcap/config.toml"));
    }

    // 3. Working-directory local
    paths.push(PathBuf::from(".wordcap/config.toml"));
    paths.push(PathBuf::from("wordcap.toml"));

    paths
}

fn read_layer(path: &Path) -> anyhow::Result<toml::Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Load configuration by merging all discovered TOML files.
/// The `extra` argument may provide an explicit path (e.g. `--config` CLI flag).
pub fn load(extra: Option<&Path>) -> anyhow::Result<Config> {
    let mut merged = toml::Value::Table(toml::map::Map::new());

    for path in config_search_paths() {
        if path.is_file() {
            debug!(path = %path.display(), "loading config layer");
            merge_toml(&mut merged, read_layer(&path)?);
        }
    }

    if let Some(p) = extra {
        debug!(path = %p.display(), "loading explicit config");
        merge_toml(&mut merged, read_layer(p)?);
    }

    let config: Config = merged.try_into().context("invalid word limit configuration")?;
    Ok(config)
}

/// Deep-merge `src` into `dst`; src wins on scalar conflicts.
fn merge_toml(dst: &mut toml::Value, src: toml::Value) {
    match (dst, src) {
        (toml::Value::Table(d), toml::Value::Table(s)) => {
            for (k, v) in s {
                match d.get_mut(&k) {
                    Some(existing) => merge_toml(existing, v),
                    None => {
                        d.insert(k, v);
                    }
                }
            }
        }
        (dst, src) => *dst = src,
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

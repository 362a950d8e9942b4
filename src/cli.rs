// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::path::PathBuf;
use wordcap_config::ResponseStyle;

#[derive(Parser, Debug)]
#[command(
    name = "wordcap",
    about = "Trim generated responses to a word limit",
    version,
    long_about = None,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (overrides auto-discovery)
    #[arg(long, short = 'c', global = true, env = "WORDCAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v = debug, -vv = trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shrink text to at most MAX words and print the before/after counts.
    /// Reads stdin when TEXT is omitted.
    Trim {
        #[arg(value_name = "TEXT")]
        text: Option<String>,
        /// Maximum number of words to keep
        #[arg(long, short = 'm', value_name = "N")]
        max: usize,
    },
    /// Run the full word limit policy (config defaults, optional character
    /// overrides, then flags) and print the resulting text.
    Apply(ApplyArgs),
    /// Print the effective configuration and exit
    ShowConfig,
    /// Generate shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct ApplyArgs {
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
    /// Use the `[characters.NAME]` table from the config
    #[arg(long, value_name = "NAME")]
    pub character: Option<String>,
    #[arg(long, value_name = "N")]
    pub min: Option<usize>,
    #[arg(long, value_name = "N")]
    pub max: Option<usize>,
    /// Report responses outside the limits
    #[arg(long)]
    pub strict: bool,
    /// Only report over-long responses, never shorten them
    #[arg(long)]
    pub no_auto_trim: bool,
    /// Contract common phrases ("going to" → "gonna") before trimming
    #[arg(long)]
    pub contract: bool,
    #[arg(long, value_enum)]
    pub style: Option<ResponseStyle>,
    /// Print the full outcome as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "wordcap", &mut std::io::stdout());
}

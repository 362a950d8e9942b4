mod cli;

use std::io::{self, IsTerminal, Read};

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use cli::{ApplyArgs, Cli, Commands};
use wordcap_config::{Config, WordLimitPolicy};
use wordcap_core::{apply_word_limit, join_words, reduce_with_report, split_words};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Completions { shell } => {
            cli::print_completions(shell);
            Ok(())
        }
        Commands::ShowConfig => {
            let config = wordcap_config::load(cli.config.as_deref())?;
            println!("{}", serde_yaml::to_string(&config)?);
            Ok(())
        }
        Commands::Trim { text, max } => {
            let text = read_text(text)?;
            println!("{}", trim_report(&text, max));
            Ok(())
        }
        Commands::Apply(args) => {
            let config = wordcap_config::load(cli.config.as_deref())?;
            run_apply(&config, args)
        }
    }
}

/// `"<before> -> <after> words\nResult: <text>"`
fn trim_report(text: &str, max: usize) -> String {
    let words = split_words(text);
    let reduction = reduce_with_report(&words, max);
    debug!(removed = reduction.removed(), "trim finished");
    format!(
        "{} -> {} words\nResult: {}",
        words.len(),
        reduction.words.len(),
        join_words(&reduction.words)
    )
}

fn run_apply(config: &Config, args: ApplyArgs) -> anyhow::Result<()> {
    let policy = resolve_policy(config, &args)?;
    debug!(
        min = policy.min_words,
        max = policy.max_words,
        strict = policy.strict_mode,
        auto_trim = policy.auto_trim,
        style = %policy.style,
        "resolved word limit policy"
    );

    let text = read_text(args.text)?;
    let outcome = apply_word_limit(&text, &policy);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        if let Some(event) = &outcome.event {
            eprintln!("{event}");
        }
        println!("{}", outcome.text);
    }
    Ok(())
}

/// Character table (if named) over `[defaults]`, then CLI flags on top.
fn resolve_policy(config: &Config, args: &ApplyArgs) -> anyhow::Result<WordLimitPolicy> {
    let mut policy = match &args.character {
        Some(name) => {
            if !config.characters.contains_key(name) {
                anyhow::bail!("unknown character: {name:?}");
            }
            config.policy_for(name).unwrap_or_else(|| {
                debug!(character = %name, "word limit disabled for character");
                WordLimitPolicy { enabled: false, ..config.default_policy() }
            })
        }
        None => config.default_policy(),
    };

    if let Some(min) = args.min {
        policy.min_words = min;
    }
    if let Some(max) = args.max {
        policy.max_words = max;
    }
    if let Some(style) = args.style {
        policy.style = style;
    }
    policy.strict_mode |= args.strict;
    policy.contract_phrases |= args.contract;
    if args.no_auto_trim {
        policy.auto_trim = false;
    }
    Ok(policy)
}

/// Use the positional text when given, otherwise read all of stdin.
fn read_text(arg: Option<String>) -> anyhow::Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("no text given; pass TEXT or pipe it on stdin");
    }
    let mut buf = String::new();
    stdin.lock().read_to_string(&mut buf).context("reading text from stdin")?;
    Ok(buf)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// End-to-end tests across the config and core crates.
use wordcap_config::{Config, WordLimitPolicy};
use wordcap_core::{
    apply_word_limit, join_words, reduce_to_limit, split_words, CharacterPolicy, HookChain,
    LimitEvent, LimitMethod, PolicyHook,
};

const CONFIG: &str = r#"
[defaults]
min_words = 10
max_words = 100

[characters.narrator]
enabled = true
min_words = 10
max_words = 50
strict_mode = false
auto_trim = true
style = "natural"
instructions = "Keep responses concise."

[characters.critic]
enabled = true
min_words = 3
max_words = 8
auto_trim = false
strict_mode = true
"#;

fn config() -> Config {
    toml::from_str(CONFIG).unwrap()
}

#[test]
fn long_sentence_trims_to_ten_words_keeping_first() {
    let text = "This is a very long sentence that contains many words and should be \
                trimmed down to fit within the specified limit of words.";
    let out = apply_word_limit(text, &WordLimitPolicy::with_limits(1, 10));
    let words = split_words(&out.text);
    assert!(out.applied);
    assert_eq!(words.len(), 10);
    assert_eq!(words[0], "This");
    assert!(words.iter().all(|w| w.chars().any(|c| c.is_alphanumeric())));
}

#[test]
fn short_response_is_left_alone() {
    let policy = WordLimitPolicy::with_limits(1, 100);
    let out = apply_word_limit("Short response.", &policy);
    assert_eq!(out.text, "Short response.");
    assert!(!out.applied);
    assert_eq!(out.method, LimitMethod::Unchanged);
}

#[test]
fn stopwords_go_first_end_to_start() {
    let words = ["The", "cat", "sat", "on", "the", "mat", "quietly", "today"];
    assert_eq!(reduce_to_limit(&words, 5), ["cat", "sat", "mat", "quietly", "today"]);
}

#[test]
fn strict_too_short_is_reported_not_changed() {
    let policy = WordLimitPolicy { strict_mode: true, ..WordLimitPolicy::with_limits(10, 100) };
    let text = "Only five words right here.";
    let out = apply_word_limit(text, &policy);
    assert_eq!(out.text, text);
    assert!(!out.applied);
    assert_eq!(out.event, Some(LimitEvent::TooShort { count: 5, min: 10 }));
}

#[test]
fn trimmed_output_rejoins_cleanly() {
    let text = "Well ...   I   literally   think ,   honestly ,  that this is fine !";
    let out = apply_word_limit(text, &WordLimitPolicy::with_limits(1, 6));
    assert_eq!(out.final_words, 6);
    assert_eq!(join_words(&split_words(&out.text)), out.text);
    assert!(!out.text.contains("  "));
}

#[test]
fn character_from_config_is_trimmed_through_hook_chain() {
    let text = "This is a very long response that contains many words and should definitely \
                be trimmed down to fit within the specified word limit because it exceeds the \
                maximum allowed number of words for this character, which was configured to be \
                rather small so that the narrator keeps things brief and to the point without \
                wandering off into long digressions that nobody asked for in the first place.";
    let mut chain = HookChain::new();
    chain.register(PolicyHook::new(CharacterPolicy::new(config(), "narrator")));
    let out = chain.process(text);
    assert!(out.applied);
    assert_eq!(out.final_words, 50);
    assert!(out.text.starts_with("This"));
    assert!(out.text.ends_with("place."));
}

#[test]
fn strict_character_without_trim_reports_too_long() {
    let policy = config().policy_for("critic").unwrap();
    assert!(policy.strict_mode && !policy.auto_trim);
    let text = "one two three four five six seven eight nine ten eleven twelve";
    let out = apply_word_limit(text, &policy);
    assert_eq!(out.method, LimitMethod::TooLongReported);
    assert_eq!(out.text, text);
    assert_eq!(out.event, Some(LimitEvent::TooLong { count: 12, max: 8 }));
}

#[test]
fn unconfigured_character_falls_through_chain() {
    let mut chain = HookChain::new();
    chain.register(PolicyHook::new(CharacterPolicy::new(config(), "stranger")));
    let text = "a ".repeat(500);
    let out = chain.process(&text);
    assert!(!out.applied);
    assert_eq!(out.text, text);
}

//! Tests for configuration loading

use habla::config::{AppTarget, Config, RuleConfig, DEFAULT_CONFIG};
use habla::launcher::Platform;
use habla::matcher::{IntentMatcher, MatcherError};
use habla::Intent;
use tempfile::TempDir;

#[test]
fn test_default_config_text_matches_defaults() {
    let parsed = Config::from_toml(DEFAULT_CONFIG).unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn test_empty_file_uses_defaults() {
    let parsed = Config::from_toml("").unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn test_partial_voice_section() {
    let parsed = Config::from_toml("[voice]\nlanguage = \"es-MX\"\ntimeout = 3.0\n").unwrap();

    assert_eq!(parsed.voice.language, "es-MX");
    assert_eq!(parsed.voice.timeout, 3.0);
    assert_eq!(parsed.voice.pause_threshold, 0.8);
    assert_eq!(parsed.voice.energy_threshold, 300.0);
}

#[test]
fn test_app_tables_accept_single_and_candidates() {
    let parsed = Config::from_toml(
        r#"
[apps.linux]
calculadora = "gnome-calculator"
navegador = ["brave-browser", "firefox"]
"#,
    )
    .unwrap();

    let linux = parsed.apps.for_platform(Platform::Linux);
    assert_eq!(linux["calculadora"], AppTarget::from("gnome-calculator"));
    assert_eq!(linux["navegador"].candidates(), ["brave-browser", "firefox"]);

    // Other platforms keep their defaults
    assert_eq!(parsed.apps.windows, Config::default().apps.windows);
}

#[test]
fn test_custom_rule_order_changes_priority() {
    let parsed = Config::from_toml(
        r#"
[[commands.rules]]
intent = "play_media"
pattern = '\b(?:reproducir|reproduce)\s+(?P<arg>.+)'

[[commands.rules]]
intent = "open_app"
pattern = '\b(?:abrir|abre)\s+(?P<arg>.+)'
"#,
    )
    .unwrap();

    let matcher = IntentMatcher::from_settings(&parsed.commands).unwrap();
    let matched = matcher.match_utterance("reproduce y abre algo");
    assert_eq!(matched.intent, Intent::PlayMedia);
    assert_eq!(matched.argument(), Some("y abre algo"));
}

#[test]
fn test_invalid_rule_pattern_is_rejected() {
    let mut config = Config::default();
    config.commands.rules.push(RuleConfig::new(Intent::Help, "(unclosed"));

    let err = IntentMatcher::from_settings(&config.commands).err().unwrap();
    assert!(matches!(err, MatcherError::InvalidPattern { intent: Intent::Help, .. }));
}

#[test]
fn test_init_file_loads_from_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("habla").join("config.toml");

    Config::write_default(&path).unwrap();
    let mut text = std::fs::read_to_string(&path).unwrap();
    text = text.replace("opening = \"Opening {app}\"", "opening = \"Abriendo {app}\"");
    std::fs::write(&path, text).unwrap();

    let loaded = Config::load_from(Some(&path)).unwrap();
    assert_eq!(loaded.messages.opening("notepad"), "Abriendo notepad");
    assert_eq!(loaded.voice, Config::default().voice);
    assert_eq!(
        Config::history_db_path(Some(&path)),
        dir.path().join("habla").join("history.db")
    );
}

#[test]
fn test_unknown_intent_name_fails_to_parse() {
    let err = Config::from_toml("[[commands.rules]]\nintent = \"dance\"\npattern = 'x'\n");
    assert!(err.is_err());
}

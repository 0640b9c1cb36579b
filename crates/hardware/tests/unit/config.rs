//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization, and file loading.

use std::io::Write;

use pfsim_core::common::ConfigError;
use pfsim_core::config::*;
use pfsim_core::Address;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.prefetchers, vec![PrefetcherKind::Markov, PrefetcherKind::Stride]);
    assert_eq!(config.markov, MarkovConfig::default());
    assert_eq!(config.simulation, SimulationConfig::default());
}

#[test]
fn test_markov_config_defaults() {
    let markov = MarkovConfig::default();
    assert_eq!(markov.num_addresses, None);
    assert_eq!(markov.history_window_size, 5);
}

#[test]
fn test_default_suite() {
    let sim = SimulationConfig::default();
    assert_eq!(sim.seed, 42);
    let names: Vec<&str> = sim.patterns.iter().map(AccessPattern::name).collect();
    assert_eq!(
        names,
        vec!["Sequential", "Strided", "Interleaved", "Random", "Repeated", "Custom"]
    );
    assert_eq!(sim.patterns[4].generate(0), sim.patterns[5].generate(0));
}

#[test]
fn test_prefetcher_kind_names() {
    assert_eq!(PrefetcherKind::Markov.name(), "Markov");
    assert_eq!(PrefetcherKind::Stride.name(), "Stride");
    assert_eq!(PrefetcherKind::default(), PrefetcherKind::Markov);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config.prefetchers.len(), 2);
    assert_eq!(config.markov.history_window_size, 5);
    assert_eq!(config.simulation.patterns.len(), 6);
}

#[test]
fn test_prefetcher_kind_aliases() {
    let config =
        Config::from_json_str(r#"{ "prefetchers": ["markov", "TransitionTable", "stride"] }"#)
            .unwrap();
    assert_eq!(
        config.prefetchers,
        vec![PrefetcherKind::Markov, PrefetcherKind::Markov, PrefetcherKind::Stride]
    );
}

#[test]
fn test_partial_markov_section() {
    let config = Config::from_json_str(r#"{ "markov": { "num_addresses": 20 } }"#).unwrap();
    assert_eq!(config.markov.num_addresses, Some(20));
    assert_eq!(config.markov.history_window_size, 5);
}

#[test]
fn test_pattern_deserialization() {
    let json = r#"{
        "simulation": {
            "patterns": [
                { "kind": "Sequential", "length": 4 },
                { "kind": "Interleaved", "length": 6 },
                { "kind": "Random", "length": 8, "seed": 3 },
                { "kind": "Repeated", "pattern": [1, 2], "repetitions": 2 },
                { "kind": "Custom", "addresses": [9, 8, 7] },
                { "kind": "Custom", "label": "Hot", "addresses": [1] }
            ]
        }
    }"#;
    let config = Config::from_json_str(json).unwrap();
    let p = &config.simulation.patterns;
    assert_eq!(config.simulation.seed, 42);
    assert_eq!(p[0], AccessPattern::Sequential { length: 4 });
    assert_eq!(
        p[2],
        AccessPattern::Random {
            length: 8,
            seed: Some(3)
        }
    );
    assert_eq!(
        p[3],
        AccessPattern::Repeated {
            pattern: vec![Address(1), Address(2)],
            repetitions: 2
        }
    );
    assert_eq!(p[4].name(), "Custom");
    assert_eq!(p[5].name(), "Hot");
}

#[test]
fn test_invalid_json_is_parse_error() {
    let err = Config::from_json_str(r#"{ "prefetchers": ["Oracle"] }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = Config::from_json_str("not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "prefetchers": ["Stride"], "simulation": {{ "seed": 9, "patterns": [] }} }}"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.prefetchers, vec![PrefetcherKind::Stride]);
    assert_eq!(config.simulation.seed, 9);
    assert!(config.simulation.patterns.is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = Config::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

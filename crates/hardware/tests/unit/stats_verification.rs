//! Prefetch Statistics Verification.
//!
//! Verifies the accounting helpers and the suite report rendering.

use pretty_assertions::assert_eq;

use pfsim_core::stats::{PrefetchStats, RunRecord, SuiteResults};

fn record(pattern: &str, prefetcher: &str, hits: u64, requests: u64) -> RunRecord {
    RunRecord {
        pattern: pattern.to_string(),
        prefetcher: prefetcher.to_string(),
        stats: Some(PrefetchStats {
            accesses: requests + 2,
            requests,
            hits,
            unused_evictions: 0,
        }),
        error: None,
    }
}

#[test]
fn accuracy_is_zero_without_requests() {
    let stats = PrefetchStats::default();
    assert_eq!(stats.accuracy(), 0.0);
    assert_eq!(stats.misses(), 0);
}

#[test]
fn counters_accumulate() {
    let mut stats = PrefetchStats::default();
    stats.record_access();
    stats.record_request();
    stats.record_request();
    stats.record_hit();
    stats.record_unused_eviction();

    assert_eq!(
        stats,
        PrefetchStats {
            accesses: 1,
            requests: 2,
            hits: 1,
            unused_evictions: 1,
        }
    );
    assert_eq!(stats.misses(), 1);
    assert_eq!(stats.accuracy(), 0.5);
}

#[test]
fn markdown_table_pivots_by_prefetcher() {
    let mut results = SuiteResults::default();
    results.push(record("Strided", "Markov", 0, 0));
    results.push(record("Strided", "Stride", 7, 8));
    results.push(record("Repeated", "Markov", 5, 6));
    results.push(RunRecord {
        pattern: "Repeated".to_string(),
        prefetcher: "Stride".to_string(),
        stats: None,
        error: Some("boom".to_string()),
    });

    let expected = "\
| Pattern | Markov | Stride |
| ------- | ------ | ------ |
| Strided | 0.00 | 0.88 |
| Repeated | 0.83 | error |
";
    assert_eq!(results.to_markdown(), expected);
    assert_eq!(results.failures(), 1);
}

#[test]
fn missing_cell_renders_dash() {
    let mut results = SuiteResults::default();
    results.push(record("A", "Markov", 1, 1));
    results.push(record("B", "Stride", 1, 2));
    let table = results.to_string();
    assert!(table.contains("| A | 1.00 | - |"));
    assert!(table.contains("| B | - | 0.50 |"));
}

#[test]
fn results_serialize_to_json() {
    let mut results = SuiteResults::default();
    results.push(record("Strided", "Stride", 7, 8));
    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json["runs"][0]["pattern"], "Strided");
    assert_eq!(json["runs"][0]["stats"]["hits"], 7);
    assert!(json["runs"][0]["error"].is_null());
}

//! Prefetch accounting and result reporting.
//!
//! This module tracks how useful a prefetcher's predictions were. It provides:
//! 1. **Accounting:** Demand accesses, prefetch requests, confirmed hits, and unused evictions.
//! 2. **Accuracy:** Confirmed hits over prefetch requests, defined as zero before any request.
//! 3. **Suite results:** Per-run records rendered as a markdown table or serialized as JSON.

use std::fmt;

use serde::Serialize;

/// Prefetch statistics for a single predictor instance.
///
/// `hits` never exceeds `requests`: a prefetch can be confirmed at most once,
/// and only prefetches that were issued can be confirmed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PrefetchStats {
    /// Demand accesses observed.
    pub accesses: u64,
    /// Prefetches issued.
    pub requests: u64,
    /// Prefetches confirmed by a later demand access.
    pub hits: u64,
    /// Prefetches evicted from the history window before confirmation.
    pub unused_evictions: u64,
}

impl PrefetchStats {
    /// Records one demand access.
    #[inline]
    pub const fn record_access(&mut self) {
        self.accesses += 1;
    }

    /// Records one issued prefetch.
    #[inline]
    pub const fn record_request(&mut self) {
        self.requests += 1;
    }

    /// Records one confirmed prefetch.
    #[inline]
    pub fn record_hit(&mut self) {
        debug_assert!(
            self.hits < self.requests,
            "prefetch hit credited without an outstanding request"
        );
        self.hits += 1;
    }

    /// Records one prefetch evicted before it was confirmed.
    #[inline]
    pub const fn record_unused_eviction(&mut self) {
        self.unused_evictions += 1;
    }

    /// Prefetches issued but not (yet) confirmed.
    pub const fn misses(&self) -> u64 {
        self.requests.saturating_sub(self.hits)
    }

    /// Fraction of issued prefetches that were confirmed.
    ///
    /// Returns `0.0` when no prefetch was ever issued, so the value always
    /// lies in `[0.0, 1.0]`.
    pub fn accuracy(&self) -> f64 {
        if self.requests == 0 {
            0.0
        } else {
            self.hits as f64 / self.requests as f64
        }
    }
}

/// Outcome of one (pattern, prefetcher) run in a suite.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunRecord {
    /// Pattern label.
    pub pattern: String,
    /// Prefetcher name.
    pub prefetcher: String,
    /// Final statistics, or `None` if the run failed.
    pub stats: Option<PrefetchStats>,
    /// Failure message for runs that did not complete.
    pub error: Option<String>,
}

impl RunRecord {
    /// Accuracy of a completed run.
    pub fn accuracy(&self) -> Option<f64> {
        self.stats.as_ref().map(PrefetchStats::accuracy)
    }
}

/// Results of a suite of runs, in execution order.
///
/// `Display` renders a markdown table with one row per pattern and one
/// accuracy column per prefetcher:
///
/// ```text
/// | Pattern | Markov | Stride |
/// | ------- | ------ | ------ |
/// | Strided | 0.00 | 0.88 |
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SuiteResults {
    /// Individual run records.
    pub runs: Vec<RunRecord>,
}

impl SuiteResults {
    /// Appends a run record.
    pub fn push(&mut self, record: RunRecord) {
        self.runs.push(record);
    }

    /// Looks up the record for a pattern and prefetcher.
    pub fn get(&self, pattern: &str, prefetcher: &str) -> Option<&RunRecord> {
        self.runs
            .iter()
            .find(|r| r.pattern == pattern && r.prefetcher == prefetcher)
    }

    /// Number of runs that failed.
    pub fn failures(&self) -> usize {
        self.runs.iter().filter(|r| r.stats.is_none()).count()
    }

    /// Distinct values of `key` over the runs, in first-seen order.
    fn distinct<'a>(&'a self, key: impl Fn(&'a RunRecord) -> &'a str) -> Vec<&'a str> {
        let mut out: Vec<&str> = Vec::new();
        for run in &self.runs {
            let value = key(run);
            if !out.contains(&value) {
                out.push(value);
            }
        }
        out
    }

    /// Renders the suite as a markdown table.
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SuiteResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patterns = self.distinct(|r| r.pattern.as_str());
        let prefetchers = self.distinct(|r| r.prefetcher.as_str());

        write!(f, "| Pattern |")?;
        for name in &prefetchers {
            write!(f, " {name} |")?;
        }
        writeln!(f)?;
        write!(f, "| ------- |")?;
        for _ in &prefetchers {
            write!(f, " ------ |")?;
        }
        writeln!(f)?;

        for pattern in &patterns {
            write!(f, "| {pattern} |")?;
            for prefetcher in &prefetchers {
                match self.get(pattern, prefetcher).map(RunRecord::accuracy) {
                    Some(Some(acc)) => write!(f, " {acc:.2} |")?,
                    Some(None) => write!(f, " error |")?,
                    None => write!(f, " - |")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

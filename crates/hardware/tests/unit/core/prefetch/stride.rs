//! Stride Prefetcher Tests.
//!
//! Verifies that the stride prefetcher warms up over two accesses, then
//! issues `address + last_stride` on every access, and that it leaves hit
//! scoring to its driver.

use pfsim_core::core::{HitScoring, PredictorPhase, Prefetcher, StridePrefetcher};
use pfsim_core::Address;

use crate::common::{feed, feed_issued};

// ══════════════════════════════════════════════════════════
// 1. Warm-up
// ══════════════════════════════════════════════════════════

/// The first two accesses only establish the previous address and stride.
#[test]
fn no_prefetch_before_third_access() {
    let mut pf = StridePrefetcher::new();
    assert_eq!(pf.phase(), PredictorPhase::Idle);

    assert_eq!(feed_issued(&mut pf, &[100]), vec![None]);
    assert_eq!(pf.phase(), PredictorPhase::Warming);
    assert_eq!(pf.last_stride(), None);

    assert_eq!(feed_issued(&mut pf, &[108]), vec![None]);
    assert_eq!(pf.phase(), PredictorPhase::Predicting);
    assert_eq!(pf.last_stride(), Some(8));
    assert_eq!(pf.stats().requests, 0);
}

// ══════════════════════════════════════════════════════════
// 2. Prediction
// ══════════════════════════════════════════════════════════

/// The prediction uses the stride recorded before the current access.
#[test]
fn prediction_uses_previous_stride() {
    let mut pf = StridePrefetcher::new();
    let issued = feed_issued(&mut pf, &[0, 4, 6]);
    // Stride before the third access is 4, so 6 + 4.
    assert_eq!(issued[2], Some(Address(10)));
    assert_eq!(pf.last_stride(), Some(2));
}

/// A constant stride yields one request per access from the third on.
#[test]
fn constant_stride_requests() {
    let mut pf = StridePrefetcher::new();
    let issued = feed_issued(&mut pf, &[0, 2, 4, 6, 8]);
    assert_eq!(
        issued,
        vec![None, None, Some(Address(6)), Some(Address(8)), Some(Address(10))]
    );
    assert_eq!(pf.stats().requests, 3);
    assert_eq!(pf.stats().hits, 0, "Hits are scored by the driver");
}

/// Descending streams produce negative strides.
#[test]
fn negative_stride() {
    let mut pf = StridePrefetcher::new();
    let issued = feed_issued(&mut pf, &[30, 20, 10]);
    assert_eq!(pf.last_stride(), Some(-10));
    assert_eq!(issued[2], Some(Address(0)));
}

/// A repeated address has stride zero and predicts itself.
#[test]
fn single_address_repeat_predicts_itself() {
    let mut pf = StridePrefetcher::new();
    let issued = feed_issued(&mut pf, &[5, 5, 5, 5]);
    assert_eq!(pf.last_stride(), Some(0));
    assert_eq!(issued, vec![None, None, Some(Address(5)), Some(Address(5))]);
}

/// A target below address zero is still a request, but has no address.
#[test]
fn underflowing_target_counts_as_request() {
    let mut pf = StridePrefetcher::new();
    let issued = feed_issued(&mut pf, &[10, 5, 2]);
    assert_eq!(issued[2], None);
    assert_eq!(pf.stats().requests, 1);
}

// ══════════════════════════════════════════════════════════
// 3. External scoring
// ══════════════════════════════════════════════════════════

/// The stride prefetcher is scored by look-ahead.
#[test]
fn scoring_is_lookahead() {
    assert_eq!(StridePrefetcher::new().scoring(), HitScoring::Lookahead);
}

/// Reporting a hit after a confirmed prediction brings accuracy to one.
#[test]
fn reported_hit_reaches_full_accuracy() {
    let mut pf = StridePrefetcher::new();
    let issued = feed_issued(&mut pf, &[5, 5, 5]);
    let next = Address(5);
    if issued[2] == Some(next) {
        pf.report_prefetch_hit();
    }
    assert_eq!(pf.stats().hits, 1);
    assert_eq!(pf.accuracy(), 1.0);
}

/// A report with no outstanding prefetch is ignored.
#[test]
fn report_without_request_is_ignored() {
    let mut pf = StridePrefetcher::new();
    pf.report_prefetch_hit();
    assert_eq!(pf.stats().hits, 0);

    // The second access learns a stride but issues nothing.
    feed(&mut pf, &[0, 1]);
    pf.report_prefetch_hit();
    assert_eq!((pf.stats().hits, pf.stats().requests), (0, 0));
    assert_eq!(pf.accuracy(), 0.0);
}

/// One issued prefetch is credited at most once.
#[test]
fn repeated_report_credits_once() {
    let mut pf = StridePrefetcher::new();
    feed(&mut pf, &[0, 1, 2]);
    pf.report_prefetch_hit();
    pf.report_prefetch_hit();
    assert_eq!((pf.stats().hits, pf.stats().requests), (1, 1));
    assert_eq!(pf.accuracy(), 1.0);
}

/// The next access closes the previous prefetch, even if the new one has no target.
#[test]
fn report_expires_on_next_access() {
    let mut pf = StridePrefetcher::new();
    let issued = feed_issued(&mut pf, &[10, 9, 8, 0]);
    assert_eq!(issued[2], Some(Address(7)));
    assert_eq!(issued[3], None);
    pf.report_prefetch_hit();
    assert_eq!((pf.stats().hits, pf.stats().requests), (0, 2));
}

/// A target below zero has no address and cannot be credited.
#[test]
fn underflowing_target_cannot_be_credited() {
    let mut pf = StridePrefetcher::new();
    feed(&mut pf, &[10, 5, 2]);
    pf.report_prefetch_hit();
    assert_eq!((pf.stats().hits, pf.stats().requests), (0, 1));
}

/// Accuracy is zero before any access.
#[test]
fn empty_accuracy_is_zero() {
    let mut pf = StridePrefetcher::new();
    assert_eq!(pf.accuracy(), 0.0);
    feed(&mut pf, &[]);
    assert_eq!(pf.accuracy(), 0.0);
    assert_eq!(pf.previous_address(), None);
}

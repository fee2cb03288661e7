//! Audit metrics and observability module.
//!
//! This module provides metrics tracking for an audit run, including file
//! loads, load failures, and the key findings accumulated across every
//! (language, file) pair.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global audit metrics singleton.
pub struct AuditMetrics {
    /// Number of message files successfully loaded and parsed
    files_loaded: AtomicUsize,

    /// Number of message files that could not be read or parsed
    load_failures: AtomicUsize,

    /// Number of reference keys found missing across all pairs
    missing_keys: AtomicUsize,

    /// Number of extra keys found across all pairs
    extra_keys: AtomicUsize,

    /// Number of placeholder warnings across all pairs
    placeholder_warnings: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<AuditMetrics> = OnceLock::new();

impl AuditMetrics {
    /// Get the global audit metrics instance.
    ///
    /// This method initializes the metrics on first call and returns a
    /// reference to the singleton instance on subsequent calls.
    pub fn global() -> &'static AuditMetrics {
        METRICS.get_or_init(|| AuditMetrics {
            files_loaded: AtomicUsize::new(0),
            load_failures: AtomicUsize::new(0),
            missing_keys: AtomicUsize::new(0),
            extra_keys: AtomicUsize::new(0),
            placeholder_warnings: AtomicUsize::new(0),
        })
    }

    /// Record a successfully loaded message file.
    pub fn record_file_loaded(&self) {
        self.files_loaded.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a message file that failed to load or parse.
    pub fn record_load_failure(&self) {
        self.load_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record missing keys found in one comparison.
    pub fn record_missing_keys(&self, count: usize) {
        self.missing_keys.fetch_add(count, Ordering::Relaxed);
    }

    /// Record extra keys found in one comparison.
    pub fn record_extra_keys(&self, count: usize) {
        self.extra_keys.fetch_add(count, Ordering::Relaxed);
    }

    /// Record placeholder warnings found in one comparison.
    pub fn record_placeholder_warnings(&self, count: usize) {
        self.placeholder_warnings.fetch_add(count, Ordering::Relaxed);
    }

    /// Get the current loaded-file count.
    pub fn files_loaded(&self) -> usize {
        self.files_loaded.load(Ordering::Relaxed)
    }

    /// Get the current load-failure count.
    pub fn load_failures(&self) -> usize {
        self.load_failures.load(Ordering::Relaxed)
    }

    /// Get the current missing-key count.
    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    /// Get the current extra-key count.
    pub fn extra_keys(&self) -> usize {
        self.extra_keys.load(Ordering::Relaxed)
    }

    /// Get the current placeholder-warning count.
    pub fn placeholder_warnings(&self) -> usize {
        self.placeholder_warnings.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let loaded = self.files_loaded();
        let failures = self.load_failures();
        let total_loads = loaded + failures;
        let load_success_rate = if total_loads > 0 {
            (loaded as f64 / total_loads as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            files_loaded: loaded,
            load_failures: failures,
            load_success_rate,
            missing_keys: self.missing_keys(),
            extra_keys: self.extra_keys(),
            placeholder_warnings: self.placeholder_warnings(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.files_loaded.store(0, Ordering::Relaxed);
        self.load_failures.store(0, Ordering::Relaxed);
        self.missing_keys.store(0, Ordering::Relaxed);
        self.extra_keys.store(0, Ordering::Relaxed);
        self.placeholder_warnings.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current audit statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of message files successfully loaded
    pub files_loaded: usize,

    /// Number of message files that failed to load
    pub load_failures: usize,

    /// Load success rate as a percentage (0-100)
    pub load_success_rate: f64,

    /// Total missing keys across all comparisons
    pub missing_keys: usize,

    /// Total extra keys across all comparisons
    pub extra_keys: usize,

    /// Total placeholder warnings across all comparisons
    pub placeholder_warnings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Tests share the global singleton, so they run serially and reset first.

    #[test]
    #[serial]
    fn test_record_file_loaded() {
        let metrics = AuditMetrics::global();
        metrics.reset();

        assert_eq!(metrics.files_loaded(), 0);
        metrics.record_file_loaded();
        assert_eq!(metrics.files_loaded(), 1);
        metrics.record_file_loaded();
        assert_eq!(metrics.files_loaded(), 2);
    }

    #[test]
    #[serial]
    fn test_record_load_failure() {
        let metrics = AuditMetrics::global();
        metrics.reset();

        assert_eq!(metrics.load_failures(), 0);
        metrics.record_load_failure();
        assert_eq!(metrics.load_failures(), 1);
    }

    #[test]
    #[serial]
    fn test_record_key_counts() {
        let metrics = AuditMetrics::global();
        metrics.reset();

        metrics.record_missing_keys(3);
        metrics.record_missing_keys(2);
        metrics.record_extra_keys(4);
        metrics.record_placeholder_warnings(1);

        assert_eq!(metrics.missing_keys(), 5);
        assert_eq!(metrics.extra_keys(), 4);
        assert_eq!(metrics.placeholder_warnings(), 1);
    }

    #[test]
    #[serial]
    fn test_report_empty() {
        let metrics = AuditMetrics::global();
        metrics.reset();
        let report = metrics.report();

        assert_eq!(report.files_loaded, 0);
        assert_eq!(report.load_failures, 0);
        assert_eq!(report.load_success_rate, 0.0);
        assert_eq!(report.missing_keys, 0);
    }

    #[test]
    #[serial]
    fn test_report_load_success_rate() {
        let metrics = AuditMetrics::global();
        metrics.reset();

        // 3 loads, 1 failure = 75% success rate
        metrics.record_file_loaded();
        metrics.record_file_loaded();
        metrics.record_file_loaded();
        metrics.record_load_failure();

        let report = metrics.report();
        assert_eq!(report.files_loaded, 3);
        assert_eq!(report.load_failures, 1);
        assert_eq!(report.load_success_rate, 75.0);
    }

    #[test]
    #[serial]
    fn test_report_100_percent_success_rate() {
        let metrics = AuditMetrics::global();
        metrics.reset();

        metrics.record_file_loaded();
        metrics.record_file_loaded();

        let report = metrics.report();
        assert_eq!(report.load_success_rate, 100.0);
    }

    #[test]
    #[serial]
    fn test_global_returns_same_instance() {
        let metrics1 = AuditMetrics::global();
        let metrics2 = AuditMetrics::global();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(metrics1, metrics2));
    }
}

//! Metrics registry
//!
//! In-process counters and gauges with Prometheus text export. Handlers
//! record named events (dotted names, statsd style); the exporter rewrites
//! them into Prometheus-safe identifiers.

use std::collections::HashMap;
use std::sync::RwLock;

/// Metrics storage. Cheap to share behind an `Arc`.
#[derive(Debug, Default)]
pub struct MetricsStore {
    counters: RwLock<HashMap<String, u64>>,
    gauges: RwLock<HashMap<String, f64>>,
}

impl MetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment a named counter by one.
    pub fn increment(&self, name: &str) {
        let mut counters = self
            .counters
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *counters.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Set a named gauge to the given value.
    pub fn gauge(&self, name: &str, value: f64) {
        let mut gauges = self
            .gauges
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        gauges.insert(name.to_string(), value);
    }

    /// Current value of a counter, zero if never incremented.
    pub fn counter_value(&self, name: &str) -> u64 {
        self.counters
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(name)
            .copied()
            .unwrap_or(0)
    }

    /// Export all metrics in Prometheus text exposition format.
    ///
    /// Names are sorted so the output is stable between scrapes.
    pub fn export_prometheus(&self) -> String {
        let mut output = String::new();

        let counters = self
            .counters
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut names: Vec<&String> = counters.keys().collect();
        names.sort();
        for name in names {
            output.push_str("# TYPE ");
            output.push_str(&sanitize(name));
            output.push_str(" counter\n");
            output.push_str(&format!("{} {}\n", sanitize(name), counters[name]));
        }

        let gauges = self
            .gauges
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut names: Vec<&String> = gauges.keys().collect();
        names.sort();
        for name in names {
            output.push_str("# TYPE ");
            output.push_str(&sanitize(name));
            output.push_str(" gauge\n");
            output.push_str(&format!("{} {}\n", sanitize(name), gauges[name]));
        }

        output
    }
}

/// Rewrite a dotted metric name into a Prometheus-safe identifier.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_accumulates() {
        let store = MetricsStore::new();
        assert_eq!(store.counter_value("assignments.post.hit"), 0);
        store.increment("assignments.post.hit");
        store.increment("assignments.post.hit");
        assert_eq!(store.counter_value("assignments.post.hit"), 2);
    }

    #[test]
    fn test_gauge_overwrites() {
        let store = MetricsStore::new();
        store.gauge("assignments.retrieved", 3.0);
        store.gauge("assignments.retrieved", 7.0);
        let exported = store.export_prometheus();
        assert!(exported.contains("assignments_retrieved 7"));
    }

    #[test]
    fn test_export_sanitizes_names() {
        let store = MetricsStore::new();
        store.increment("health_check.success");
        let exported = store.export_prometheus();
        assert!(exported.contains("# TYPE health_check_success counter"));
        assert!(exported.contains("health_check_success 1"));
    }

    #[test]
    fn test_export_is_sorted_and_stable() {
        let store = MetricsStore::new();
        store.increment("b.metric");
        store.increment("a.metric");
        let first = store.export_prometheus();
        let second = store.export_prometheus();
        assert_eq!(first, second);
        let a_pos = first.find("a_metric").unwrap();
        let b_pos = first.find("b_metric").unwrap();
        assert!(a_pos < b_pos);
    }
}

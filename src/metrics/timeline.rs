//! Assemble Phase Metrics
//!
//! Counters describing how much cleanup provider payloads needed on their
//! way to a canonical timeline.

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

/// Metrics collection for timeline assembly
pub struct TimelineMetrics;

impl TimelineMetrics {
    /// Record one assembled fixture and how many events it produced
    pub fn record_fixture_assembled(events: usize) {
        ::metrics::counter!(phase_metric!(counter, "assemble", "fixtures")).increment(1);
        ::metrics::counter!(phase_metric!(counter, "assemble", "events")).increment(events as u64);
        ::metrics::histogram!(phase_metric!(histogram, "assemble", "events_per_fixture"))
            .record(events as f64);
    }

    /// Payload was not an event array and yielded an empty timeline
    pub fn record_malformed_payload() {
        ::metrics::counter!(phase_metric!(counter, "assemble", "malformed_payloads")).increment(1);
    }

    /// An array element could not be read as an event and was replaced by an empty one
    pub fn record_malformed_event() {
        ::metrics::counter!(phase_metric!(counter, "assemble", "malformed_events")).increment(1);
    }

    /// Event team id matched neither side and fell back to home
    pub fn record_unknown_side() {
        ::metrics::counter!(phase_metric!(counter, "assemble", "unknown_side_events")).increment(1);
    }

    pub fn record_unparsable_minute() {
        ::metrics::counter!(phase_metric!(counter, "assemble", "unparsable_minutes")).increment(1);
    }

    /// A yellow+red pair collapsed into one second-yellow dismissal
    pub fn record_second_yellow_compressed() {
        ::metrics::counter!(phase_metric!(counter, "assemble", "second_yellow_compressions"))
            .increment(1);
    }
}

impl PhaseMetrics for TimelineMetrics {
    fn register_metrics() {
        use metrics::{counter, histogram};

        // Pre-register all metrics (bind to placeholders to satisfy must_use)
        let _ = counter!(phase_metric!(counter, "assemble", "fixtures"));
        let _ = counter!(phase_metric!(counter, "assemble", "events"));
        let _ = counter!(phase_metric!(counter, "assemble", "malformed_payloads"));
        let _ = counter!(phase_metric!(counter, "assemble", "malformed_events"));
        let _ = counter!(phase_metric!(counter, "assemble", "unknown_side_events"));
        let _ = counter!(phase_metric!(counter, "assemble", "unparsable_minutes"));
        let _ = counter!(phase_metric!(counter, "assemble", "second_yellow_compressions"));

        let _ = histogram!(phase_metric!(histogram, "assemble", "events_per_fixture"));
    }

    fn phase_name() -> &'static str {
        "assemble"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "assemble", "fixtures"),
                metric_type: MetricType::Counter,
                help: "Total number of fixtures assembled into timelines",
            },
            MetricDoc {
                name: phase_metric!(counter, "assemble", "events"),
                metric_type: MetricType::Counter,
                help: "Total number of canonical events emitted",
            },
            MetricDoc {
                name: phase_metric!(counter, "assemble", "malformed_payloads"),
                metric_type: MetricType::Counter,
                help: "Event payloads that were not arrays",
            },
            MetricDoc {
                name: phase_metric!(counter, "assemble", "malformed_events"),
                metric_type: MetricType::Counter,
                help: "Array elements that could not be read as events",
            },
            MetricDoc {
                name: phase_metric!(counter, "assemble", "unknown_side_events"),
                metric_type: MetricType::Counter,
                help: "Events whose team id matched neither side",
            },
            MetricDoc {
                name: phase_metric!(counter, "assemble", "unparsable_minutes"),
                metric_type: MetricType::Counter,
                help: "Events sorted to the end for lack of a readable minute",
            },
            MetricDoc {
                name: phase_metric!(counter, "assemble", "second_yellow_compressions"),
                metric_type: MetricType::Counter,
                help: "Yellow+red pairs merged into a single dismissal",
            },
            MetricDoc {
                name: phase_metric!(histogram, "assemble", "events_per_fixture"),
                metric_type: MetricType::Histogram,
                help: "Distribution of canonical events per fixture",
            },
        ]
    }
}

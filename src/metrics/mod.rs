//! Metrics for the timeline pipeline
//!
//! Counters go through the `metrics` facade. Without an installed recorder
//! every call is a no-op, so the library never needs a metrics backend; a
//! host process that installs one gets the full catalog below.

pub mod timeline;

pub use timeline::TimelineMetrics;

use std::sync::Once;
use tracing::debug;

static INIT: Once = Once::new();

/// Register every phase's metrics with whatever recorder is installed.
///
/// Idempotent. Call after installing a recorder so the catalog shows up
/// before the first fixture is processed.
pub fn init_metrics() {
    INIT.call_once(|| {
        register_phase::<TimelineMetrics>();
    });
}

fn register_phase<T: PhaseMetrics>() {
    T::register_metrics();
    debug!(
        "Registered {} metrics for phase '{}'",
        T::metrics_documentation().len(),
        T::phase_name()
    );
}

/// Trait for phase-specific metrics collections
pub trait PhaseMetrics {
    /// Register all metrics for this phase
    fn register_metrics();

    /// Get the phase name for prefixing metrics
    fn phase_name() -> &'static str;

    /// Get documentation for all metrics in this phase
    fn metrics_documentation() -> Vec<MetricDoc>;
}

/// Documentation for a single metric
#[derive(Debug, Clone)]
pub struct MetricDoc {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub help: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricType {
    Counter,
    Histogram,
}

/// Macro to create phase-specific metric names with consistent naming:
/// timeline_{phase}_{metric_name}_{type}
macro_rules! phase_metric {
    (counter, $phase:literal, $name:literal) => {
        concat!("timeline_", $phase, "_", $name, "_total")
    };
    (histogram, $phase:literal, $name:literal) => {
        concat!("timeline_", $phase, "_", $name)
    };
}

pub(crate) use phase_metric;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_naming_convention() {
        assert_eq!(
            phase_metric!(counter, "assemble", "fixtures"),
            "timeline_assemble_fixtures_total"
        );
        assert_eq!(
            phase_metric!(histogram, "assemble", "events_per_fixture"),
            "timeline_assemble_events_per_fixture"
        );
    }

    #[test]
    fn test_init_metrics_is_idempotent_without_recorder() {
        init_metrics();
        init_metrics();
    }
}

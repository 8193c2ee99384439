//! Prometheus metrics for the Store runtime.
//!
//! The Store records through the `metrics` facade, so nothing is collected
//! until a recorder is installed. [`MetricsRecorder`] installs the Prometheus
//! recorder and renders the text exposition format on demand; there is no
//! HTTP endpoint since the application runs in-process only.
//!
//! # Example
//!
//! ```rust,no_run
//! use tickbox_runtime::metrics::MetricsRecorder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut recorder = MetricsRecorder::new();
//! recorder.install()?;
//!
//! // ... run the application ...
//!
//! if let Some(text) = recorder.render() {
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;
use thiserror::Error;

/// Total actions processed, labelled by store and action name
pub const ACTIONS_PROCESSED: &str = "store_actions_processed_total";
/// Reducer execution time
pub const REDUCER_DURATION: &str = "store_reducer_duration_seconds";
/// Listener invocations
pub const LISTENERS_NOTIFIED: &str = "store_listeners_notified_total";
/// Actions rejected after shutdown
pub const ACTIONS_REJECTED: &str = "store_rejected_actions_total";

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to build metrics exporter
    #[error("Failed to build metrics exporter: {0}")]
    Build(String),
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Installs the Prometheus recorder and renders collected metrics.
#[derive(Default)]
pub struct MetricsRecorder {
    handle: Option<PrometheusHandle>,
}

impl MetricsRecorder {
    /// Create a recorder that has not been installed yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Register metric descriptions and install the global recorder.
    ///
    /// # Errors
    ///
    /// Returns error if the exporter cannot be built or installed.
    ///
    /// # Note
    ///
    /// If a recorder is already installed (e.g., in tests), this logs a
    /// warning and succeeds without a handle, so [`MetricsRecorder::render`]
    /// returns `None`.
    pub fn install(&mut self) -> Result<(), MetricsError> {
        register_metrics();

        let builder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Suffix("duration_seconds".to_string()),
                &[0.000_01, 0.000_05, 0.000_1, 0.000_5, 0.001, 0.005, 0.01, 0.05],
            )
            .map_err(|e| MetricsError::Build(e.to_string()))?;

        match builder.install_recorder() {
            Ok(handle) => {
                self.handle = Some(handle);
                tracing::info!("Prometheus metrics recorder installed");
                Ok(())
            }
            Err(e) => {
                let err_msg = e.to_string();
                if err_msg.contains("already initialized") {
                    tracing::warn!("Metrics recorder already initialized, skipping re-initialization");
                    Ok(())
                } else {
                    Err(MetricsError::Install(err_msg))
                }
            }
        }
    }

    /// Get the metrics handle for rendering.
    #[must_use]
    pub const fn handle(&self) -> Option<&PrometheusHandle> {
        self.handle.as_ref()
    }

    /// Render current metrics in Prometheus text format.
    ///
    /// Returns `None` if this recorder was never installed.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        self.handle.as_ref().map(PrometheusHandle::render)
    }
}

impl std::fmt::Debug for MetricsRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsRecorder")
            .field("installed", &self.handle.is_some())
            .finish()
    }
}

/// Register all metric descriptions.
fn register_metrics() {
    describe_counter!(
        ACTIONS_PROCESSED,
        "Total number of actions processed by stores"
    );
    describe_histogram!(
        REDUCER_DURATION,
        "Time taken to execute reducers"
    );
    describe_counter!(
        LISTENERS_NOTIFIED,
        "Total number of listener invocations after state changes"
    );
    describe_counter!(
        ACTIONS_REJECTED,
        "Total number of actions rejected because the store was shut down"
    );
}

/// Store metrics recorder.
pub struct StoreMetrics;

impl StoreMetrics {
    /// Record one reduced action.
    pub fn record_action(store: &'static str, action: &'static str, duration: Duration) {
        counter!(ACTIONS_PROCESSED, "store" => store, "action" => action).increment(1);
        histogram!(REDUCER_DURATION, "store" => store).record(duration.as_secs_f64());
    }

    /// Record a notification round.
    pub fn record_notification(store: &'static str, listeners: usize) {
        counter!(LISTENERS_NOTIFIED, "store" => store).increment(listeners as u64);
    }

    /// Record an action rejected after shutdown.
    pub fn record_rejection(store: &'static str) {
        counter!(ACTIONS_REJECTED, "store" => store).increment(1);
    }
}

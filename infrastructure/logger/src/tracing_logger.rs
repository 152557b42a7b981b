use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use case logs to `tracing` under the `recipes` target, so the
/// subscriber's `RUST_LOG` filter can address them as `recipes=debug`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "recipes", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "recipes", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "recipes", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "recipes", "{}", message);
    }
}

use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Routes domain log calls to `tracing`, tagging every event with the
/// storefront target so subscribers can filter service logs from library
/// noise.
#[derive(Default)]
pub struct TracingLogger;

const TARGET: &str = "Storefront -- ";

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}

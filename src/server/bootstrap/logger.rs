/// Receives one human readable line per bootstrap step.
///
/// Any `Fn(&str, &str)` closure taking `(message, source)` is a logger.
pub trait BootstrapLogger {
    fn log(&self, message: &str, source: &str);
}

/// Default logger, forwarding lines to `tracing` at info level.
pub struct TracingLogger;

impl BootstrapLogger for TracingLogger {
    fn log(&self, message: &str, source: &str) {
        tracing::info!(source = source, "{}", message);
    }
}

impl<F> BootstrapLogger for F
where
    F: Fn(&str, &str),
{
    fn log(&self, message: &str, source: &str) {
        self(message, source)
    }
}

/// Receives one human-readable message per rendering failure.
///
/// Reporting is fire-and-forget: a sink has no way to fail the render call,
/// and the caller always gets the original error back.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, message: &str);
}

/// Default sink: one `ERROR` event on the current `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, message: &str) {
        tracing::error!("{message}");
    }
}

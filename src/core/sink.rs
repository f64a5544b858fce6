//! Diagnostic logging collaborator.
//!
//! The history manager reports what it did through a [`LogSink`]. Sinks are
//! best effort: they must not panic or block, and the manager never looks at
//! whether a message was delivered.

use tracing::debug;

/// Receiver for diagnostic log lines.
pub trait LogSink {
    /// Record one message.
    fn log(&self, message: &str);
}

/// Forwards messages to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, message: &str) {
        debug!("{}", message);
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _message: &str) {}
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}

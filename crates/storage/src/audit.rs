use chrono::SecondsFormat;

use solid_core::DesignResult;

use crate::clock::Clock;
use crate::sink::Sink;

/// Timestamps messages and hands them to whatever sink it was built with.
///
/// The logger never learns which sink it holds; swapping sinks changes where
/// entries go, not how they are produced.
pub struct AuditLogger<S, C> {
    sink: S,
    clock: C,
}

impl<S: Sink, C: Clock> AuditLogger<S, C> {
    pub fn new(sink: S, clock: C) -> Self {
        Self { sink, clock }
    }

    /// Format `"[<RFC 3339 timestamp>] <message>"`.
    pub fn format_entry(&self, message: &str) -> String {
        let at = self.clock.now().to_rfc3339_opts(SecondsFormat::Secs, true);
        format!("[{at}] {message}")
    }

    /// Exactly one sink write per call.
    pub fn log(&self, message: &str) -> DesignResult<()> {
        let entry = self.format_entry(message);
        self.sink.write(&entry)
    }
}

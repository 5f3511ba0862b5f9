/// Output context, error rendering and stage timing.
use std::io::Write;

use crate::types::ErrorOutput;

/// Output context passed to all command handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputCtx {
    /// Emit JSON objects instead of plain lines.
    pub json: bool,
    /// Record stage timings.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI flags.
    #[must_use]
    pub fn new(json: bool, debug: bool) -> Self {
        Self { json, debug }
    }

    /// Start a named stage timer. Logs elapsed time on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Write an error to stderr: one `Error: ...` line, or a JSON envelope with `--json`.
pub fn write_error(err: &ErrorOutput, json: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    if json {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
    }
}

/// A RAII timer that logs elapsed milliseconds at `debug` level on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            tracing::debug!(stage = self.label, elapsed_ms = ms, "stage finished");
        }
    }
}

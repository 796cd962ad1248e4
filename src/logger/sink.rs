//! Output destinations for rendered lines.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Receives fully rendered lines, terminator included.
///
/// Implementations write each line in one piece so lines from concurrent callers
/// never interleave. Errors are returned to the logger, which swallows them.
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Process standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.flush()
    }
}

/// Collects lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Everything written so far, concatenated.
    pub fn contents(&self) -> String {
        self.lines().concat()
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "memory sink mutex poisoned"))?;
        lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shared_between_clones() {
        let sink = MemorySink::new();
        let other = sink.clone();

        sink.write_line("one\n").unwrap();
        other.write_line("two\n").unwrap();

        assert_eq!(sink.lines(), vec!["one\n", "two\n"]);
        assert_eq!(other.contents(), "one\ntwo\n");

        sink.clear();
        assert!(other.lines().is_empty());
    }
}

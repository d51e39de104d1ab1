//! Line cursor
//!
//! A single-pass, non-rewindable iterator over the raw log lines. The whole
//! log is loaded before scanning starts, so the cursor never blocks on I/O
//! mid-parse. Section handlers share one cursor by mutable reference; there
//! is no peek and no rewind, which guarantees single-pass semantics across
//! the nested section loops.

/// Forward-only cursor over the lines of one log.
pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    next: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, next: 0 }
    }

    /// Return the next raw line, or `None` once the log is exhausted.
    ///
    /// Callers inside a section block translate `None` into a
    /// malformed-section failure; in the scanning state it simply ends
    /// the run.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.next).copied()?;
        self.next += 1;
        Some(line)
    }

    /// 0-based offset of the line most recently handed out.
    ///
    /// Before the first `next_line` call this is 0; it is used to report
    /// where a fatal parse error was triggered.
    pub fn offset(&self) -> usize {
        self.next.saturating_sub(1)
    }
}

use std::cell::RefCell;
use std::rc::Rc;

/// Callback channel for per-line extraction warnings.
///
/// A merged line that fails the record grammar is reported here and skipped;
/// it never aborts the run. Callers can swap the sink to capture, suppress or
/// assert on warnings.
pub trait DiagnosticSink {
    fn unparsed(&self, line: &str);
}

/// Default sink: forwards warnings to the `log` facade.
#[derive(Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn unparsed(&self, line: &str) {
        log::warn!("could not parse: {line}");
    }
}

/// Sink that keeps warnings in memory.
///
/// Cloning shares the underlying buffer, so a handle kept by the caller sees
/// everything reported during extraction. Extraction is single-threaded, so
/// `Rc<RefCell<_>>` is enough.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unparsed_lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn unparsed(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

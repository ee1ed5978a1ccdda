//! Bounded in-memory log sink.
//!
//! The UI owns the terminal's alternate screen, so log output cannot go to
//! stderr while it runs. Formatted tracing output is split into lines and
//! kept in a ring buffer instead; the terminal window's `log` command reads
//! the tail back.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock};

pub const DEFAULT_MAX_LINES: usize = 2000;

static GLOBAL_LOG: OnceLock<LogHandle> = OnceLock::new();
static PANIC_HOOK_INSTALLED: OnceLock<()> = OnceLock::new();

pub fn set_global_log(handle: LogHandle) -> bool {
    GLOBAL_LOG.set(handle).is_ok()
}

pub fn global_log() -> Option<LogHandle> {
    GLOBAL_LOG.get().cloned()
}

/// Record a panic (location and message) in the global buffer before the
/// previous hook runs.
pub fn install_panic_hook() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }
    let prev = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Some(handle) = GLOBAL_LOG.get() {
            handle.push("=== PANIC ===");
            if let Some(location) = info.location() {
                handle.push(format!(
                    "{}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                ));
            }
            handle.push(format!("message: {}", panic_message(info.payload())));
        }
        prev(info);
    }));
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "<non-string panic>".to_string()
    }
}

#[derive(Debug)]
struct LogBuffer {
    lines: VecDeque<String>,
    max_lines: usize,
}

impl LogBuffer {
    fn new(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            max_lines: max_lines.max(1),
        }
    }

    fn push_line(&mut self, line: String) {
        self.lines.push_back(line);
        while self.lines.len() > self.max_lines {
            self.lines.pop_front();
        }
    }
}

#[derive(Clone, Debug)]
pub struct LogHandle {
    inner: Arc<Mutex<LogBuffer>>,
}

impl Default for LogHandle {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINES)
    }
}

impl LogHandle {
    pub fn new(max_lines: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LogBuffer::new(max_lines))),
        }
    }

    pub fn push(&self, line: impl Into<String>) {
        if let Ok(mut buffer) = self.inner.lock() {
            buffer.push_line(line.into());
        }
    }

    /// The last `count` lines, oldest first.
    pub fn tail(&self, count: usize) -> Vec<String> {
        match self.inner.lock() {
            Ok(buffer) => {
                let skip = buffer.lines.len().saturating_sub(count);
                buffer.lines.iter().skip(skip).cloned().collect()
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|b| b.lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn writer(&self) -> LogWriter {
        LogWriter::new(self.clone())
    }
}

/// `io::Write` adapter that pushes complete lines into a [`LogHandle`].
#[derive(Debug)]
pub struct LogWriter {
    handle: LogHandle,
    pending: Vec<u8>,
}

impl LogWriter {
    pub fn new(handle: LogHandle) -> Self {
        Self {
            handle,
            pending: Vec::new(),
        }
    }

    fn flush_pending(&mut self, force: bool) {
        if self.pending.is_empty() {
            return;
        }
        let drained: Vec<u8> = if force {
            std::mem::take(&mut self.pending)
        } else {
            let Some(pos) = self.pending.iter().rposition(|b| *b == b'\n') else {
                return;
            };
            self.pending.drain(..=pos).collect()
        };
        let text = String::from_utf8_lossy(&drained);
        for line in text.split('\n').filter(|line| !line.is_empty()) {
            self.handle.push(line.to_string());
        }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        self.flush_pending(false);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_pending(true);
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        self.flush_pending(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_capped() {
        let handle = LogHandle::new(3);
        for line in ["one", "two", "three", "four"] {
            handle.push(line);
        }
        assert_eq!(handle.len(), 3);
        assert_eq!(handle.tail(10), vec!["two", "three", "four"]);
        assert_eq!(handle.tail(1), vec!["four"]);
    }

    #[test]
    fn writer_splits_lines_and_flushes_partial() {
        let handle = LogHandle::new(10);
        let mut writer = handle.writer();
        writer.write_all(b"first line\nsecond line\npartial").unwrap();
        assert_eq!(handle.tail(10), vec!["first line", "second line"]);
        writer.flush().unwrap();
        assert_eq!(handle.tail(1), vec!["partial"]);
    }

    #[test]
    fn dropping_writer_keeps_unterminated_line() {
        let handle = LogHandle::new(10);
        {
            let mut writer = handle.writer();
            writer.write_all(b"no newline").unwrap();
        }
        assert_eq!(handle.tail(1), vec!["no newline"]);
    }

    #[test]
    fn panic_message_reads_both_string_kinds() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("static");
        assert_eq!(panic_message(boxed.as_ref()), "static");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(boxed.as_ref()), "owned");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(boxed.as_ref()), "<non-string panic>");
    }
}

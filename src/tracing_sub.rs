//! Global tracing subscriber.
//!
//! While the desktop owns the screen, formatted events go to the in-memory
//! log buffer (read back by the terminal window's `log` command). Before a
//! buffer is registered they fall through to stderr.

use std::io::{self, Write};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::log_buffer::{LogHandle, LogWriter, global_log};

pub enum LogSink {
    Buffer(LogWriter),
    Stderr(io::Stderr),
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::Buffer(w) => w.write(buf),
            LogSink::Stderr(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::Buffer(w) => w.flush(),
            LogSink::Stderr(s) => s.flush(),
        }
    }
}

/// Picks the sink per event. A fixed handle wins over the global buffer.
#[derive(Clone, Debug, Default)]
pub struct FolioMakeWriter {
    handle: Option<LogHandle>,
}

impl FolioMakeWriter {
    pub fn to_handle(handle: LogHandle) -> Self {
        Self {
            handle: Some(handle),
        }
    }
}

impl<'a> MakeWriter<'a> for FolioMakeWriter {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        match self.handle.clone().or_else(global_log) {
            Some(handle) => LogSink::Buffer(handle.writer()),
            None => LogSink::Stderr(io::stderr()),
        }
    }
}

/// Install the global subscriber at `level`. Later calls are no-ops.
pub fn init(level: Level) {
    let installed = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_writer(FolioMakeWriter::default())
        .with_target(false)
        .with_ansi(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(%level, "tracing initialised");
    }
}

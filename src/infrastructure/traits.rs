//! I/O boundary traits for testability
//!
//! These traits abstract the remote host and the output destination,
//! allowing commands to be tested with mock implementations.

use std::io::{self, Write};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::World;
use crate::infrastructure::InfraResult;

/// Read access to the worlds of a remote host.
///
/// Implementations must stop waiting and return `InfraError::Cancelled`
/// once `cancel` fires.
#[async_trait]
pub trait WorldApi: Send + Sync {
    /// Fetch every world currently known to the host, in host order.
    async fn list_worlds(&self, cancel: &CancellationToken) -> InfraResult<Vec<World>>;

    /// Fetch a single world by its identifier.
    ///
    /// Fails with `InfraError::NotFound` if the host has no such world.
    async fn get_world(&self, id: &str, cancel: &CancellationToken) -> InfraResult<World>;
}

/// Line-oriented text destination.
pub trait OutputSink: Send + Sync {
    /// Write `text` followed by a newline as one unit.
    fn write_line(&self, text: &str) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Writes to the process's standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}")?;
        out.flush()
    }
}

/// Collects output in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    buffer: Mutex<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .map(|b| b.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl OutputSink for BufferSink {
    fn write_line(&self, text: &str) -> io::Result<()> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "output buffer poisoned"))?;
        buffer.push_str(text);
        buffer.push('\n');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_buffer_sink_when_writing_lines_then_each_is_newline_terminated() {
        let sink = BufferSink::new();
        sink.write_line("first").unwrap();
        sink.write_line("").unwrap();
        assert_eq!(sink.contents(), "first\n\n");
    }
}

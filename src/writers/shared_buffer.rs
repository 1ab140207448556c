use std::{
    io::Write,
    sync::{Arc, Mutex, PoisonError},
};

/// An in-memory output that can replace stdout or stderr, e.g. to capture log lines in tests.
///
/// Clones share the same buffer.
///
/// ```rust
/// use linelog::{writers::SharedBuffer, Logger, Mode};
///
/// let captured = SharedBuffer::new();
/// let router = Logger::new(Mode::Development).stdout(captured.clone()).build();
/// linelog::infof!(logger: &router, "hello {}", "world");
/// assert!(captured.contents().contains("hello world"));
/// ```
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns what was written so far, lossily converted to a `String`.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap_or_else(PoisonError::into_inner)).into_owned()
    }

    /// Returns the written lines, without line terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(ToString::to_string).collect()
    }

    /// Discards what was written so far.
    pub fn clear(&self) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

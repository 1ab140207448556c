use crate::{
    global,
    util::{eprint_err, ErrorCode},
    LinelogError, Router,
};
use std::sync::Arc;

/// Gives access to the installed [`Router`], and
/// **closes the log file when it is dropped**.
///
/// A `LoggerHandle` is returned from [`Logger::start`](crate::Logger::start),
/// [`init`](crate::init), and [`init_with_file`](crate::init_with_file).
///
/// When logging to a file, keep it alive until the very end of your program:
///
/// ```rust
/// fn main() {
///     let _logger = linelog::init_with_file("production", false, "/var/log/myprog.log");
///     linelog::infof!("started");
///     // do work
/// }
/// ```
///
/// Without log file, dropping the handle has no effect, and you can ignore it.
///
/// Note that a `FATAL` record terminates the process without running destructors;
/// this is harmless, because every line reaches the file immediately.
pub struct LoggerHandle {
    router: Arc<Router>,
}

impl LoggerHandle {
    pub(crate) fn install(router: Router) -> Self {
        let router = Arc::new(router);
        global::install(Arc::clone(&router));
        Self { router }
    }

    /// The router that was installed together with this handle.
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Closes the log file now, rather than when the handle is dropped.
    ///
    /// # Errors
    ///
    /// `LinelogError::Io` if the final flush fails.
    pub fn teardown(&self) -> Result<(), LinelogError> {
        self.router.close()
    }
}

impl Drop for LoggerHandle {
    fn drop(&mut self) {
        if let Err(e) = self.router.close() {
            eprint_err(ErrorCode::Flush, "closing the log file failed", &e);
        }
    }
}

impl std::fmt::Debug for LoggerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerHandle")
            .field("router", &self.router)
            .finish()
    }
}

//! The process-wide router that the logging macros use when no router is given.

use crate::{
    util::{eprint_err, eprint_msg, ErrorCode},
    LinelogError, Logger, LoggerHandle, Mode, Router,
};
use std::{
    path::Path,
    sync::{Arc, LazyLock, PoisonError, RwLock},
};

static ROUTER: RwLock<Option<Arc<Router>>> = RwLock::new(None);

// Is used until the first initialization
static DISCARDING: LazyLock<Arc<Router>> = LazyLock::new(|| Arc::new(Router::discarding()));

// Replaces the installed router; the file of the previous one is closed.
pub(crate) fn install(router: Arc<Router>) {
    let o_previous = match ROUTER.write() {
        Ok(mut guard) => guard.replace(router),
        Err(poisoned) => {
            eprint_msg(ErrorCode::Poison, "router lock was poisoned");
            poisoned.into_inner().replace(router)
        }
    };
    if let Some(previous) = o_previous {
        if let Err(e) = previous.close() {
            eprint_err(ErrorCode::Flush, "closing the previous log file failed", &e);
        }
    }
}

/// The currently installed router.
///
/// Before the first initialization, this is a router that discards everything.
#[must_use]
pub fn current() -> Arc<Router> {
    ROUTER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map_or_else(|| Arc::clone(&DISCARDING), Arc::clone)
}

/// Initializes the process-wide router for console output.
///
/// `mode` is interpreted with [`Mode::from_name`]: `"production"` selects production mode,
/// everything else development mode. `verbose` enables `DEBUG` output in development mode.
/// The enabled severities are taken from [`LOGGER_LEVELS`](crate::LEVELS_ENV_VAR).
///
/// Calling this function again replaces the previous configuration completely.
/// It never fails; configuration problems are reported on stderr.
pub fn init<M: Into<Mode>>(mode: M, verbose: bool) -> LoggerHandle {
    Logger::new(mode.into()).verbose(verbose).start()
}

/// Like [`init`], and the console output is additionally written to the given file
/// (in production mode with journal, the file stays empty).
///
/// An empty path is equivalent to calling [`init`]. If the file cannot be opened,
/// this is reported on stderr and logging continues without file.
///
/// The file is closed with [`teardown`], or when the returned handle is dropped.
#[must_use = "the log file is closed when the handle is dropped"]
pub fn init_with_file<M: Into<Mode>, P: AsRef<Path>>(
    mode: M,
    verbose: bool,
    path: P,
) -> LoggerHandle {
    Logger::new(mode.into())
        .verbose(verbose)
        .log_to_file(path.as_ref())
        .start()
}

/// Flushes and closes the log file of the process-wide router.
///
/// Calling it more than once, or without log file, is harmless.
/// Console output continues after this call.
///
/// # Errors
///
/// `LinelogError::Io` if the final flush fails.
pub fn teardown() -> Result<(), LinelogError> {
    current().close()
}

#[cfg(test)]
mod test {
    use super::{current, install};
    use crate::{Logger, Mode, Router, Severity};
    use std::sync::Arc;

    // the only unit test that touches the process-wide state
    #[test]
    fn test_install_replaces_and_closes() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.path().join("global.log");

        let first = Arc::new(
            Logger::new(Mode::Development)
                .log_to_file(&path)
                .stdout(crate::writers::SharedBuffer::new())
                .build(),
        );
        install(Arc::clone(&first));
        assert!(Arc::ptr_eq(&current(), &first));

        install(Arc::new(Router::discarding()));
        assert!(!Arc::ptr_eq(&current(), &first));
        assert_eq!(current().route_name(Severity::Info), "discard");

        // the file of the replaced router was closed
        first.log_fmt(
            Severity::Info,
            crate::Caller::new("a::b", 1),
            format_args!("too late"),
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}

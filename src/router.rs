use crate::{
    backend::Backend,
    kv::{encode_fields, Value},
    util::{eprint_err, ErrorCode},
    writers::LogFile,
    Caller, DeferredNow, LevelSet, LinelogError, Severity,
};
use std::{
    fmt::{self, Display},
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

// Serializes all writes of all routers, so that lines never interleave,
// also not when a record goes to more than one output.
static WRITE_LOCK: Mutex<()> = Mutex::new(());

/// The route table: which severities are enabled, and where each severity is written to.
///
/// A `Router` is created with [`Logger::build`](crate::Logger::build) and is immutable
/// afterwards. It can be used explicitly, by passing it to the logging macros:
///
/// ```rust
/// use linelog::{infof, Logger, Mode};
///
/// let router = Logger::new(Mode::Development).build();
/// infof!(logger: &router, "listening on port {}", 8080);
/// ```
///
/// or it can be installed as the process-wide router, with [`Logger::start`](crate::Logger::start)
/// or [`init`](crate::init), which is used by the macros if no router is given explicitly.
///
/// Writing through any router is serialized by one process-wide lock,
/// so each record appears as one complete line in each of its outputs.
pub struct Router {
    levels: LevelSet,
    routes: [Backend; 5],
    program_name: Arc<str>,
    o_log_file: Option<Arc<LogFile>>,
}

// The message part of a record, rendered after the caller label.
enum Message<'a> {
    Args(fmt::Arguments<'a>),
    Concat(&'a [&'a dyn Display]),
    Kv(&'a str, &'a [Value<'a>]),
    Api(i64, fmt::Arguments<'a>),
}

impl Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Message::Args(args) => f.write_fmt(args),
            Message::Concat(items) => items.iter().try_for_each(|item| item.fmt(f)),
            Message::Kv(message, items) => {
                f.write_str(message)?;
                f.write_str(&encode_fields(items))
            }
            Message::Api(status, args) => write!(f, "[{status}] {args}"),
        }
    }
}

impl Router {
    pub(crate) fn new(
        levels: LevelSet,
        routes: [Backend; 5],
        program_name: Arc<str>,
        o_log_file: Option<Arc<LogFile>>,
    ) -> Self {
        Self {
            levels,
            routes,
            program_name,
            o_log_file,
        }
    }

    // Drops everything; is in place before the first initialization.
    pub(crate) fn discarding() -> Self {
        Self::new(
            LevelSet::all(),
            [
                Backend::Discard,
                Backend::Discard,
                Backend::Discard,
                Backend::Discard,
                Backend::Discard,
            ],
            Arc::from("unknown"),
            None,
        )
    }

    /// Is the given severity enabled?
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.levels.is_enabled(severity)
    }

    /// The set of enabled severities.
    #[must_use]
    pub fn levels(&self) -> LevelSet {
        self.levels
    }

    /// The program name, which is used as syslog identifier in the journal.
    #[must_use]
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// The path of the log file, if a log file is attached.
    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.o_log_file.as_deref().map(LogFile::path)
    }

    /// Writes a record whose message is produced by `format_args!`.
    pub fn log_fmt(&self, severity: Severity, caller: Caller, args: fmt::Arguments<'_>) {
        self.dispatch(severity, caller, &Message::Args(args));
    }

    /// Writes a record whose message is the concatenation of the given items,
    /// without separator.
    pub fn log_plain(&self, severity: Severity, caller: Caller, items: &[&dyn Display]) {
        self.dispatch(severity, caller, &Message::Concat(items));
    }

    /// Writes a record whose message is `message`, followed by the encoded key-value items
    /// (see [`encode_fields`]).
    pub fn log_kv(&self, severity: Severity, caller: Caller, message: &str, items: &[Value<'_>]) {
        self.dispatch(severity, caller, &Message::Kv(message, items));
    }

    /// Writes `[status] message` with the severity that corresponds to the HTTP status code
    /// (see [`Severity::for_status`]).
    pub fn api(&self, caller: Caller, status: i64, args: fmt::Arguments<'_>) {
        self.dispatch(
            Severity::for_status(status),
            caller,
            &Message::Api(status, args),
        );
    }

    /// Writes a `FATAL` record like [`Router::log_fmt`], and terminates the process
    /// with exit code 1.
    pub fn fatal_fmt(&self, caller: Caller, args: fmt::Arguments<'_>) -> ! {
        self.fatal(caller, &Message::Args(args))
    }

    /// Writes a `FATAL` record like [`Router::log_plain`], and terminates the process
    /// with exit code 1.
    pub fn fatal_plain(&self, caller: Caller, items: &[&dyn Display]) -> ! {
        self.fatal(caller, &Message::Concat(items))
    }

    /// Writes a `FATAL` record like [`Router::log_kv`], and terminates the process
    /// with exit code 1.
    pub fn fatal_kv(&self, caller: Caller, message: &str, items: &[Value<'_>]) -> ! {
        self.fatal(caller, &Message::Kv(message, items))
    }

    /// Flushes and closes the log file, if one is attached.
    ///
    /// Lines that arrive later are not written to the file anymore.
    /// Calling this method more than once is harmless.
    ///
    /// # Errors
    ///
    /// `LinelogError::Io` if the final flush fails.
    pub fn close(&self) -> Result<(), LinelogError> {
        match self.o_log_file {
            Some(ref log_file) => {
                let _guard = WRITE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
                log_file.close().map_err(LinelogError::Io)
            }
            None => Ok(()),
        }
    }

    // A disabled FATAL is silent, but terminates nonetheless.
    fn fatal(&self, caller: Caller, message: &Message) -> ! {
        self.dispatch(Severity::Fatal, caller, message);
        std::process::exit(1)
    }

    fn dispatch(&self, severity: Severity, caller: Caller, message: &Message) {
        if !self.is_enabled(severity) {
            return;
        }
        let backend = &self.routes[severity.index()];
        if backend.is_discard() {
            return;
        }

        // user code (Display impls) runs only here, outside of the lock
        let text = format!("[{}] {message}", caller.label());

        let mut now = DeferredNow::new();
        let result = {
            let _guard = WRITE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
            backend.write(&mut now, &text)
        };

        if let Err(e) = result {
            let code = match backend {
                Backend::Journal(_) => ErrorCode::Journal,
                _ => ErrorCode::Write,
            };
            eprint_err(code, "writing log line failed", &e);
        }
    }

    #[cfg(test)]
    pub(crate) fn route_name(&self, severity: Severity) -> &'static str {
        self.routes[severity.index()].name()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("levels", &self.levels)
            .field("routes", &self.routes)
            .field("program_name", &self.program_name)
            .field("log_file", &self.log_file())
            .finish()
    }
}

use crate::{
    backend::Backend,
    util::{eprint_err, eprint_msg, ErrorCode},
    writers::{
        ColorWriter, Journal, JournalPriority, JournalWriter, Journald, LogFile, PlainWriter,
        StdStream,
    },
    LevelSet, LinelogError, LoggerHandle, Router, Severity,
};
use std::{
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

/// The deployment mode, which decides where log lines go.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Colored, timestamped lines on the console (and optionally in a log file).
    #[default]
    Development,
    /// Relay to the system journal; without journal, plain lines on stdout and stderr
    /// (and optionally in a log file).
    Production,
}

impl Mode {
    /// Interprets a mode name: exactly `"production"` selects [`Mode::Production`],
    /// every other value selects [`Mode::Development`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == "production" {
            Self::Production
        } else {
            Self::Development
        }
    }
}

impl From<&str> for Mode {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl FromStr for Mode {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// The entry point for configuring `linelog`.
///
/// Create a `Logger` for the deployment mode, adjust it with the configuration methods,
/// and then either
///
/// * call [`start`](Logger::start) to install the result as process-wide router
///   that the logging macros use by default, or
/// * call [`build`](Logger::build) to get a [`Router`] that you own and pass to the macros
///   explicitly.
///
/// ## Routing
///
/// | Mode | Severity | Output |
/// |------|----------|--------|
/// | development | `DEBUG` | stdout if [`verbose`](Logger::verbose), otherwise discarded |
/// | development | `INFO`, `WARN`, `ERROR` | stdout |
/// | development | `FATAL` | stderr |
/// | production, journal reachable | all | journal |
/// | production, no journal | `DEBUG`, `INFO` | stdout |
/// | production, no journal | `WARN`, `ERROR`, `FATAL` | stderr |
///
/// The console outputs are additionally written to the log file, if one is configured.
/// With the journal, the log file stays empty.
///
/// ## Example
///
/// ```rust
/// use linelog::{infof, Logger, Mode};
///
/// let _handle = Logger::new(Mode::from_name("production"))
///     .log_to_file("/var/log/myprog.log")
///     .start();
/// infof!("started");
/// ```
pub struct Logger {
    mode: Mode,
    verbose: bool,
    o_file_path: Option<PathBuf>,
    o_levels: Option<LevelSet>,
    o_program_name: Option<String>,
    stdout: StdStream,
    stderr: StdStream,
    journal: Arc<dyn Journal>,
    require_journal: bool,
}

/// Simple methods for influencing the behavior of the Logger.
impl Logger {
    /// Creates a `Logger` for the given mode, with defaults for everything else.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            verbose: false,
            o_file_path: None,
            o_levels: None,
            o_program_name: None,
            stdout: StdStream::stdout(),
            stderr: StdStream::stderr(),
            journal: Arc::new(Journald::new()),
            require_journal: false,
        }
    }

    /// Shows `DEBUG` lines in development mode.
    ///
    /// Has no effect in production mode, where `DEBUG` is controlled by the level set only.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Makes the console outputs also write to the given file.
    ///
    /// The file is created if necessary and appended to; the file copy never contains
    /// color codes.
    #[must_use]
    pub fn log_to_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.o_file_path = Some(path.into());
        self
    }

    /// With `Some` equivalent to [`Logger::log_to_file`], with `None` it resets the file option.
    #[must_use]
    pub fn o_log_to_file<P: Into<PathBuf>>(mut self, o_path: Option<P>) -> Self {
        self.o_file_path = o_path.map(Into::into);
        self
    }

    /// Sets the enabled severities explicitly.
    ///
    /// Without this call, the environment variable
    /// [`LOGGER_LEVELS`](crate::LEVELS_ENV_VAR) is consulted,
    /// and if that is not set or empty, all severities are enabled.
    #[must_use]
    pub fn levels(mut self, levels: LevelSet) -> Self {
        self.o_levels = Some(levels);
        self
    }

    /// Sets the program name that is used as syslog identifier in the journal.
    ///
    /// By default, the file name of the running executable is used.
    #[must_use]
    pub fn program_name<S: Into<String>>(mut self, name: S) -> Self {
        self.o_program_name = Some(name.into());
        self
    }

    /// Replaces stdout as console output, e.g. with a [`SharedBuffer`](crate::writers::SharedBuffer).
    #[must_use]
    pub fn stdout<W: Write + Send + 'static>(mut self, w: W) -> Self {
        self.stdout = StdStream::custom(w);
        self
    }

    /// Replaces stderr as console output, e.g. with a [`SharedBuffer`](crate::writers::SharedBuffer).
    #[must_use]
    pub fn stderr<W: Write + Send + 'static>(mut self, w: W) -> Self {
        self.stderr = StdStream::custom(w);
        self
    }

    /// Replaces the default journal connection ([`Journald`]).
    #[must_use]
    pub fn journal<J: Journal + 'static>(mut self, journal: Arc<J>) -> Self {
        self.journal = journal;
        self
    }

    /// In production mode, insist on the journal.
    ///
    /// With [`Logger::try_build`] and [`Logger::try_start`], an unreachable journal is then
    /// an error; [`Logger::build`] and [`Logger::start`] report it on stderr and fall back
    /// to the console.
    #[must_use]
    pub fn require_journal(mut self, require: bool) -> Self {
        self.require_journal = require;
        self
    }
}

/// Finishing the configuration.
impl Logger {
    /// Creates the [`Router`], degrading gracefully.
    ///
    /// A log file that cannot be opened is reported on stderr and left out;
    /// the console output is not affected.
    #[must_use]
    pub fn build(self) -> Router {
        self.assemble(false).unwrap_or_else(|e| {
            // only strict assembly fails
            eprint_err(ErrorCode::LogFile, "unexpected setup failure", &e);
            Router::discarding()
        })
    }

    /// Creates the [`Router`], failing on configuration problems.
    ///
    /// # Errors
    ///
    /// `LinelogError::OpenFile` if the log file cannot be opened,
    /// `LinelogError::JournalUnavailable` if the journal is
    /// [required](Logger::require_journal) but not reachable.
    pub fn try_build(self) -> Result<Router, LinelogError> {
        self.assemble(true)
    }

    /// Builds the [`Router`] like [`Logger::build`] and installs it as the process-wide router,
    /// replacing (and closing) a previously installed one.
    ///
    /// The returned handle closes the log file when it is dropped;
    /// keep it alive until the end of your program.
    #[must_use = "the log file is closed when the handle is dropped"]
    pub fn start(self) -> LoggerHandle {
        LoggerHandle::install(self.build())
    }

    /// Like [`Logger::start`], but with the strictness of [`Logger::try_build`].
    ///
    /// # Errors
    ///
    /// See [`Logger::try_build`].
    #[must_use = "the log file is closed when the handle is dropped"]
    pub fn try_start(self) -> Result<LoggerHandle, LinelogError> {
        Ok(LoggerHandle::install(self.try_build()?))
    }

    fn assemble(self, strict: bool) -> Result<Router, LinelogError> {
        let program_name: Arc<str> = Arc::from(
            self.o_program_name
                .clone()
                .unwrap_or_else(default_program_name),
        );
        let levels = self
            .o_levels
            .or_else(LevelSet::from_env)
            .unwrap_or_default();
        let o_log_file = match self.o_file_path {
            Some(ref path) => open_log_file(path, strict)?,
            None => None,
        };

        let use_journal = self.mode == Mode::Production && self.journal_is_usable(strict)?;

        let routes = match self.mode {
            Mode::Production if use_journal => Severity::ALL.map(|severity| {
                Backend::Journal(JournalWriter::new(
                    Arc::clone(&self.journal),
                    JournalPriority::for_severity(severity),
                    Arc::clone(&program_name),
                ))
            }),
            Mode::Production => Severity::ALL.map(|severity| {
                let stream = if severity <= Severity::Info {
                    &self.stdout
                } else {
                    &self.stderr
                };
                Backend::Plain(PlainWriter::new(
                    severity,
                    stream.clone(),
                    o_log_file.clone(),
                ))
            }),
            Mode::Development => Severity::ALL.map(|severity| {
                let stream = match severity {
                    Severity::Debug if !self.verbose => return Backend::Discard,
                    Severity::Fatal => &self.stderr,
                    _ => &self.stdout,
                };
                Backend::Color(ColorWriter::new(
                    severity,
                    stream.clone(),
                    o_log_file.clone(),
                ))
            }),
        };

        Ok(Router::new(levels, routes, program_name, o_log_file))
    }

    fn journal_is_usable(&self, strict: bool) -> Result<bool, LinelogError> {
        if self.journal.is_available() {
            return Ok(true);
        }
        if self.require_journal {
            if strict {
                return Err(LinelogError::JournalUnavailable);
            }
            eprint_msg(
                ErrorCode::Journal,
                "the journal is not reachable, logging to the console instead",
            );
        }
        Ok(false)
    }
}

// An empty path means: no log file.
fn open_log_file(path: &Path, strict: bool) -> Result<Option<Arc<LogFile>>, LinelogError> {
    if path.as_os_str().is_empty() {
        return Ok(None);
    }
    match LogFile::open(path) {
        Ok(log_file) => Ok(Some(Arc::new(log_file))),
        Err(e) if strict => Err(e),
        Err(e) => {
            eprint_err(
                ErrorCode::LogFile,
                "cannot open log file, continuing without",
                &e,
            );
            Ok(None)
        }
    }
}

// The file name of the running executable.
fn default_program_name() -> String {
    std::env::args_os()
        .next()
        .map(PathBuf::from)
        .or_else(|| std::env::current_exe().ok())
        .and_then(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

use std::path::PathBuf;
use thiserror::Error;

/// Describes errors in the setup and teardown of `linelog`.
///
/// Note that the logging macros themselves never return errors;
/// problems while writing are reported on stderr.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LinelogError {
    /// The log file could not be opened.
    #[error("failed to open log file {}: {source}", path.display())]
    OpenFile {
        /// The configured path.
        path: PathBuf,
        /// The reason.
        #[source]
        source: std::io::Error,
    },

    /// Flushing or closing an output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Production mode was required to log to the journal, but no journal is reachable.
    #[error("the systemd journal is not available")]
    JournalUnavailable,

    /// Installing the bridge for the `log` facade failed.
    #[error(transparent)]
    Log(#[from] log::SetLoggerError),
}

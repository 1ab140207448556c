use std::fmt;

/// The severity of a log record.
///
/// The ordering is only used for presentation (colors, stream selection);
/// whether a severity produces output is decided by the [`LevelSet`](crate::LevelSet),
/// which is membership-based rather than threshold-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Diagnostic details, usually only interesting while developing.
    Debug = 0,
    /// Normal operational messages.
    Info = 1,
    /// Something unexpected that the program could handle.
    Warn = 2,
    /// A failed operation.
    Error = 3,
    /// An unrecoverable condition; logging at this severity terminates the process.
    Fatal = 4,
}

impl Severity {
    /// All severities, in ascending order.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// The upper-case label that appears in log lines, e.g. `WARN`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Maps a single token of a level list to a severity.
    ///
    /// Case-insensitive, surrounding whitespace is ignored, and `WARNING` is accepted
    /// as synonym for `WARN`. Unknown tokens yield `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Severity> {
        match token.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Some(Severity::Debug),
            "INFO" => Some(Severity::Info),
            "WARN" | "WARNING" => Some(Severity::Warn),
            "ERROR" => Some(Severity::Error),
            "FATAL" => Some(Severity::Fatal),
            _ => None,
        }
    }

    /// Chooses the severity for an HTTP status code.
    ///
    /// `5xx` is an error, `4xx` a warning, everything below 400 (including redirects)
    /// is informational.
    #[must_use]
    pub fn for_status(status: i64) -> Severity {
        match status {
            500.. => Severity::Error,
            400..=499 => Severity::Warn,
            _ => Severity::Info,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warn,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Severity;

    #[test]
    fn test_tokens() {
        assert_eq!(Severity::from_token(" warning "), Some(Severity::Warn));
        assert_eq!(Severity::from_token("Warn"), Some(Severity::Warn));
        assert_eq!(Severity::from_token("fatal"), Some(Severity::Fatal));
        assert_eq!(Severity::from_token("trace"), None);
        assert_eq!(Severity::from_token(""), None);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(Severity::for_status(-1), Severity::Info);
        assert_eq!(Severity::for_status(100), Severity::Info);
        assert_eq!(Severity::for_status(200), Severity::Info);
        assert_eq!(Severity::for_status(301), Severity::Info);
        assert_eq!(Severity::for_status(399), Severity::Info);
        assert_eq!(Severity::for_status(400), Severity::Warn);
        assert_eq!(Severity::for_status(404), Severity::Warn);
        assert_eq!(Severity::for_status(499), Severity::Warn);
        assert_eq!(Severity::for_status(500), Severity::Error);
        assert_eq!(Severity::for_status(503), Severity::Error);
    }

    #[test]
    fn test_order_and_labels() {
        assert!(Severity::Debug < Severity::Fatal);
        let labels: Vec<_> = Severity::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["DEBUG", "INFO", "WARN", "ERROR", "FATAL"]);
    }
}

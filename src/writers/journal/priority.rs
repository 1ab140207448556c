use crate::Severity;

/// Priority of a journal entry; these are the syslog severities.
///
/// See [RFC 5424](https://datatracker.ietf.org/doc/rfc5424).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum JournalPriority {
    /// System is unusable.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Error conditions.
    Error = 3,
    /// Warning conditions
    Warning = 4,
    /// Normal but significant condition
    Notice = 5,
    /// Informational messages.
    Info = 6,
    /// Debug-level messages.
    Debug = 7,
}

impl JournalPriority {
    /// The priority that records of the given severity get in the journal.
    #[must_use]
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Debug => Self::Debug,
            Severity::Info => Self::Info,
            Severity::Warn => Self::Warning,
            Severity::Error => Self::Error,
            Severity::Fatal => Self::Critical,
        }
    }

    /// The numeric value, as used in the journal's `PRIORITY` field.
    #[must_use]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

mod journal_writer;
mod journald;
mod priority;

pub(crate) use self::journal_writer::JournalWriter;
#[cfg(test)]
pub(crate) use self::journal_writer::test as test_support;
pub use self::{
    journald::{Journald, JOURNAL_SOCKET},
    priority::JournalPriority,
};

/// Access to the system journal.
///
/// `linelog` uses [`Journald`] by default; other implementations can be provided with
/// [`Logger::journal`](crate::Logger::journal), e.g. for tests.
pub trait Journal: Send + Sync {
    /// Is the journal reachable?
    ///
    /// Is asked once per initialization in production mode.
    fn is_available(&self) -> bool;

    /// Hands a single record to the journal.
    ///
    /// `fields` are additional annotations, e.g. `("SYSLOG_IDENTIFIER", "myprog")`.
    ///
    /// # Errors
    ///
    /// `std::io::Error` if the record could not be delivered.
    fn send(
        &self,
        message: &str,
        priority: JournalPriority,
        fields: &[(&str, &str)],
    ) -> std::io::Result<()>;
}

//! The outputs that log lines are written to.
//!
//! `linelog` binds each [`Severity`](crate::Severity) to one of these writers when a
//! [`Router`](crate::Router) is built:
//!
//! * in development mode, a colorizing console writer,
//! * in production mode with a reachable system journal, a relay to the [`Journal`],
//! * in production mode without journal, a plain console writer
//!   (stdout for `DEBUG` and `INFO`, stderr for the others).
//!
//! The console writers can additionally tee into a log file;
//! the file copy never contains ANSI escape sequences (see [`strip_ansi`]).
//!
//! This module also contains the [`Journal`] abstraction with its default implementation
//! [`Journald`], and [`SharedBuffer`], an in-memory stand-in for stdout or stderr.

mod color_writer;
mod file_relay;
mod journal;
mod log_writer;
mod plain_writer;
mod shared_buffer;
mod std_stream;

pub(crate) use self::{
    color_writer::ColorWriter, file_relay::LogFile, journal::JournalWriter, log_writer::LogWriter,
    plain_writer::PlainWriter, std_stream::StdStream,
};

pub use self::{
    file_relay::strip_ansi,
    journal::{Journal, JournalPriority, Journald, JOURNAL_SOCKET},
    shared_buffer::SharedBuffer,
};

#[cfg(test)]
pub(crate) use self::journal::test_support;

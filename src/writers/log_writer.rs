use crate::DeferredNow;
use std::io;

// Writes the log lines of one severity to its output(s).
//
// `text` is the complete record text (`[caller] message`); the writer adds its own
// decoration (severity label, timestamp, line terminator) and must hand the result
// to each output with a single write call.
pub(crate) trait LogWriter: Sync + Send {
    fn write(&self, now: &mut DeferredNow, text: &str) -> io::Result<()>;
}

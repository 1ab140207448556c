use super::{file_relay::LogFile, log_writer::LogWriter, std_stream::StdStream};
use crate::{util::write_composed, DeferredNow, Severity};
use std::{io::Write, sync::Arc};

// Production writer for systems without journal.
//
// Console only: `[LEVEL] <text>`, minimal, without timestamp.
// With a log file attached: `[LEVEL] <date> <time> <text>`, the same line to console and file.
pub(crate) struct PlainWriter {
    severity: Severity,
    stream: StdStream,
    o_file: Option<Arc<LogFile>>,
}

impl PlainWriter {
    pub(crate) fn new(severity: Severity, stream: StdStream, o_file: Option<Arc<LogFile>>) -> Self {
        Self {
            severity,
            stream,
            o_file,
        }
    }
}

impl LogWriter for PlainWriter {
    fn write(&self, now: &mut DeferredNow, text: &str) -> std::io::Result<()> {
        match self.o_file {
            None => write_composed(
                |buf| writeln!(buf, "[{}] {text}", self.severity),
                |line| self.stream.write_line(line),
            ),
            Some(ref file) => write_composed(
                |buf| writeln!(buf, "[{}] {} {text}", self.severity, now.format_stamp()),
                |line| {
                    let console_result = self.stream.write_line(line);
                    console_result.and(file.write_stripped(line))
                },
            ),
        }
    }
}

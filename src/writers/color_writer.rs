use super::{file_relay::LogFile, log_writer::LogWriter, std_stream::StdStream};
use crate::{util::write_composed, DeferredNow, Severity};
use std::{io::Write, sync::Arc};

#[cfg(feature = "colors")]
use nu_ansi_term::Color;

// Color of the severity label in development mode.
#[cfg(feature = "colors")]
fn label_color(severity: Severity) -> Color {
    match severity {
        Severity::Debug => Color::Cyan,
        Severity::Info => Color::Green,
        Severity::Warn => Color::Yellow,
        Severity::Error => Color::Red,
        Severity::Fatal => Color::Purple,
    }
}

// `[LEVEL]`, wrapped into the color escape codes of the severity.
pub(crate) fn colored_label(severity: Severity) -> String {
    let label = format!("[{severity}]");
    #[cfg(feature = "colors")]
    {
        label_color(severity).paint(label).to_string()
    }
    #[cfg(not(feature = "colors"))]
    {
        label
    }
}

// Development writer: `<color>[LEVEL]<reset> <date> <time> <text>` to the console,
// and the same line without the color codes to the log file, if one is attached.
pub(crate) struct ColorWriter {
    label: String,
    stream: StdStream,
    o_file: Option<Arc<LogFile>>,
}

impl ColorWriter {
    pub(crate) fn new(severity: Severity, stream: StdStream, o_file: Option<Arc<LogFile>>) -> Self {
        Self {
            label: colored_label(severity),
            stream,
            o_file,
        }
    }
}

impl LogWriter for ColorWriter {
    fn write(&self, now: &mut DeferredNow, text: &str) -> std::io::Result<()> {
        write_composed(
            |buf| writeln!(buf, "{} {} {text}", self.label, now.format_stamp()),
            |line| {
                let console_result = self.stream.write_line(line);
                let file_result = match self.o_file {
                    Some(ref file) => file.write_stripped(line),
                    None => Ok(()),
                };
                console_result.and(file_result)
            },
        )
    }
}

#[cfg(test)]
mod test {
    use super::{colored_label, ColorWriter};
    use crate::{
        writers::{file_relay::LogFile, log_writer::LogWriter, std_stream::StdStream, SharedBuffer},
        DeferredNow, Severity,
    };
    use std::sync::Arc;

    #[cfg(feature = "colors")]
    #[test]
    fn test_palette() {
        assert_eq!(colored_label(Severity::Debug), "\x1b[36m[DEBUG]\x1b[0m");
        assert_eq!(colored_label(Severity::Info), "\x1b[32m[INFO]\x1b[0m");
        assert_eq!(colored_label(Severity::Warn), "\x1b[33m[WARN]\x1b[0m");
        assert_eq!(colored_label(Severity::Error), "\x1b[31m[ERROR]\x1b[0m");
        assert_eq!(colored_label(Severity::Fatal), "\x1b[35m[FATAL]\x1b[0m");
    }

    #[test]
    fn test_tee_to_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.path().join("dev.log");
        let file = Arc::new(LogFile::open(&path).unwrap());
        let console = SharedBuffer::new();

        let writer = ColorWriter::new(
            Severity::Warn,
            StdStream::custom(console.clone()),
            Some(Arc::clone(&file)),
        );
        let mut now = DeferredNow::new();
        writer.write(&mut now, "[app::main:3] disk almost full").unwrap();
        let stamp = now.format_stamp();
        file.close().unwrap();

        let expected_label = colored_label(Severity::Warn);
        assert_eq!(
            console.contents(),
            format!("{expected_label} {stamp} [app::main:3] disk almost full\n")
        );
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            format!("[WARN] {stamp} [app::main:3] disk almost full\n")
        );
    }
}

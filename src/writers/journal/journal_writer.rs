use super::{Journal, JournalPriority};
use crate::{writers::log_writer::LogWriter, DeferredNow};
use std::sync::Arc;

const SYSLOG_IDENTIFIER: &str = "SYSLOG_IDENTIFIER";

// Relays the records of one severity to the journal, with a fixed priority
// and the program name as syslog identifier.
//
// The journal stamps the entries itself; no label or timestamp is added here.
pub(crate) struct JournalWriter {
    journal: Arc<dyn Journal>,
    priority: JournalPriority,
    identifier: Arc<str>,
}

impl JournalWriter {
    pub(crate) fn new(
        journal: Arc<dyn Journal>,
        priority: JournalPriority,
        identifier: Arc<str>,
    ) -> Self {
        Self {
            journal,
            priority,
            identifier,
        }
    }
}

impl LogWriter for JournalWriter {
    fn write(&self, _now: &mut DeferredNow, text: &str) -> std::io::Result<()> {
        let message = text.strip_suffix('\n').unwrap_or(text);
        self.journal.send(
            message,
            self.priority,
            &[(SYSLOG_IDENTIFIER, &self.identifier)],
        )
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::JournalWriter;
    use crate::{
        writers::{log_writer::LogWriter, Journal, JournalPriority},
        DeferredNow,
    };
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct Sent {
        pub(crate) message: String,
        pub(crate) priority: JournalPriority,
        pub(crate) fields: Vec<(String, String)>,
    }

    // Records what is sent; fails on demand.
    #[derive(Default)]
    pub(crate) struct RecordingJournal {
        pub(crate) available: bool,
        pub(crate) fail: bool,
        pub(crate) sent: Mutex<Vec<Sent>>,
    }

    impl Journal for RecordingJournal {
        fn is_available(&self) -> bool {
            self.available
        }

        fn send(
            &self,
            message: &str,
            priority: JournalPriority,
            fields: &[(&str, &str)],
        ) -> std::io::Result<()> {
            if self.fail {
                return Err(std::io::Error::other("journal is gone"));
            }
            self.sent.lock().unwrap().push(Sent {
                message: message.to_string(),
                priority,
                fields: fields
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                    .collect(),
            });
            Ok(())
        }
    }

    #[test]
    fn test_relay() {
        let journal = Arc::new(RecordingJournal {
            available: true,
            ..Default::default()
        });
        let writer = JournalWriter::new(
            Arc::clone(&journal) as Arc<dyn Journal>,
            JournalPriority::Warning,
            Arc::from("myprog"),
        );
        writer
            .write(&mut DeferredNow::new(), "[net::poll:9] slow peer\n")
            .unwrap();
        writer
            .write(&mut DeferredNow::new(), "[net::poll:10] two\n\n")
            .unwrap();

        let sent = journal.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].message, "[net::poll:9] slow peer");
        assert_eq!(sent[0].priority, JournalPriority::Warning);
        assert_eq!(
            sent[0].fields,
            [("SYSLOG_IDENTIFIER".to_string(), "myprog".to_string())]
        );
        // only a single trailing newline is removed
        assert_eq!(sent[1].message, "[net::poll:10] two\n");
    }

    #[test]
    fn test_failure_is_reported() {
        let journal = Arc::new(RecordingJournal {
            available: true,
            fail: true,
            ..Default::default()
        });
        let writer = JournalWriter::new(journal, JournalPriority::Error, Arc::from("x"));
        assert!(writer.write(&mut DeferredNow::new(), "boom").is_err());
    }
}

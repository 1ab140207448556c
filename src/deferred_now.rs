use chrono::{DateTime, Local};

/// Format of the timestamp in log lines, e.g. `2024/05/17 14:03:59`.
pub const TS_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Deferred timestamp creation.
///
/// Is used to ensure that a log record that is written to multiple outputs
/// (console and file) uses the same timestamp in all of them,
/// and that no timestamp is taken for outputs that don't show one.
#[derive(Debug, Default)]
pub struct DeferredNow(Option<DateTime<Local>>);

impl<'a> DeferredNow {
    /// Constructs a new instance, but does not generate the timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self(None)
    }

    /// Retrieve the timestamp.
    ///
    /// Requires mutability because the first caller will generate the timestamp.
    pub fn now(&'a mut self) -> &'a DateTime<Local> {
        self.0.get_or_insert_with(Local::now)
    }

    /// The timestamp in the format used in log lines ([`TS_FORMAT`]).
    pub fn format_stamp(&'a mut self) -> String {
        self.now().format(TS_FORMAT).to_string()
    }
}

#[cfg(test)]
mod test {
    use super::DeferredNow;

    #[test]
    fn test_deferred_now() {
        let mut deferred_now = DeferredNow::new();
        let now = deferred_now.format_stamp();
        std::thread::sleep(std::time::Duration::from_millis(1100));
        let again = deferred_now.format_stamp();
        assert_eq!(now, again);
    }

    #[test]
    fn test_stamp_layout() {
        let stamp = DeferredNow::new().format_stamp();
        // yyyy/mm/dd hh:mm:ss
        assert_eq!(stamp.len(), 19, "{stamp}");
        assert_eq!(&stamp[4..5], "/");
        assert_eq!(&stamp[7..8], "/");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
    }
}

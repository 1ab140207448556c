use crate::{
    writers::{ColorWriter, JournalWriter, LogWriter, PlainWriter},
    DeferredNow,
};

// The writer that is bound to one severity.
//
// Is chosen once, when the router is built; writing is a plain match, without lookups.
pub(crate) enum Backend {
    // Accepts and drops everything; used for disabled severities,
    // for DEBUG in non-verbose development mode, and before initialization
    Discard,
    // Development console, optionally teed to the log file
    Color(ColorWriter),
    // Production console without journal, optionally teed to the log file
    Plain(PlainWriter),
    // Production with journal
    Journal(JournalWriter),
}

impl Backend {
    pub(crate) fn write(&self, now: &mut DeferredNow, text: &str) -> std::io::Result<()> {
        match *self {
            Self::Discard => Ok(()),
            Self::Color(ref w) => w.write(now, text),
            Self::Plain(ref w) => w.write(now, text),
            Self::Journal(ref w) => w.write(now, text),
        }
    }

    pub(crate) fn is_discard(&self) -> bool {
        matches!(self, Self::Discard)
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Discard => "discard",
            Self::Color(_) => "color",
            Self::Plain(_) => "plain",
            Self::Journal(_) => "journal",
        }
    }
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

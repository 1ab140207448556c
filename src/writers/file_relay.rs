use crate::LinelogError;
use regex::bytes::Regex;
use std::{
    borrow::Cow,
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::{LazyLock, Mutex, PoisonError},
};

// ESC [ ... m; an escape sequence that is cut off at the end of the buffer
// is removed up to the end
static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)\x1b\[[^m]*(?:m|\z)").unwrap(/* ok */));

/// Removes all ANSI escape sequences of the form `ESC [ ... m` from the given bytes.
///
/// All other bytes are preserved. Does not allocate if there is nothing to remove.
#[must_use]
pub fn strip_ansi(bytes: &[u8]) -> Cow<'_, [u8]> {
    ANSI_ESCAPE.replace_all(bytes, &b""[..])
}

// The append-only log file, shared by all writers that tee into it.
//
// Closing is idempotent; lines that arrive after closing are dropped.
pub(crate) struct LogFile {
    path: PathBuf,
    o_file: Mutex<Option<File>>,
}

impl LogFile {
    pub(crate) fn open(path: &Path) -> Result<Self, LinelogError> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        let file = options.open(path).map_err(|source| LinelogError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            o_file: Mutex::new(Some(file)),
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub(crate) fn is_open(&self) -> bool {
        self.o_file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    // Writes the line with color codes removed, in a single write call.
    pub(crate) fn write_stripped(&self, line: &[u8]) -> std::io::Result<()> {
        let mut o_file = self.o_file.lock().unwrap_or_else(PoisonError::into_inner);
        match o_file.as_mut() {
            Some(file) => file.write_all(&strip_ansi(line)),
            None => Ok(()),
        }
    }

    pub(crate) fn close(&self) -> std::io::Result<()> {
        let o_file = self
            .o_file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match o_file {
            Some(mut file) => {
                file.flush()?;
                file.sync_all()
            }
            None => Ok(()),
        }
    }
}

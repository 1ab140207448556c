use super::{Journal, JournalPriority};
use std::path::{Path, PathBuf};

#[cfg(unix)]
use {
    crate::util::io_err,
    std::{
        os::unix::net::UnixDatagram,
        sync::{Mutex, MutexGuard, PoisonError},
    },
};

/// Path of the socket on which systemd-journald accepts native-protocol datagrams.
pub const JOURNAL_SOCKET: &str = "/run/systemd/journal/socket";

/// Connection to systemd-journald, using journald's native protocol.
///
/// Each record is sent as a single datagram that consists of the fields
/// `MESSAGE`, `PRIORITY`, and the additional fields given by the caller.
///
/// The connection is established lazily and re-established after a failed send.
/// Journald accepts datagrams up to the socket's buffer size (usually some hundred KB).
/// A bigger record is rejected with an error and is lost; it is not split or passed
/// through a memory file.
#[derive(Debug)]
pub struct Journald {
    socket_path: PathBuf,
    #[cfg(unix)]
    o_datagram: Mutex<Option<UnixDatagram>>,
}

impl Journald {
    /// Journald on its standard socket, [`JOURNAL_SOCKET`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_socket(JOURNAL_SOCKET)
    }

    /// Journald (or something that speaks its protocol) on a non-standard socket.
    #[must_use]
    pub fn with_socket<P: Into<PathBuf>>(socket_path: P) -> Self {
        Self {
            socket_path: socket_path.into(),
            #[cfg(unix)]
            o_datagram: Mutex::new(None),
        }
    }

    /// The socket this instance sends to.
    #[must_use]
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    #[cfg(unix)]
    fn connection(&self) -> MutexGuard<'_, Option<UnixDatagram>> {
        self.o_datagram
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(unix)]
    fn connect(&self) -> std::io::Result<UnixDatagram> {
        let ud = UnixDatagram::unbound()?;
        ud.connect(&self.socket_path)?;
        Ok(ud)
    }
}

impl Default for Journald {
    fn default() -> Self {
        Self::new()
    }
}

impl Journal for Journald {
    fn is_available(&self) -> bool {
        #[cfg(unix)]
        {
            let mut o_datagram = self.connection();
            if o_datagram.is_none() {
                match self.connect() {
                    Ok(ud) => *o_datagram = Some(ud),
                    Err(_) => return false,
                }
            }
            true
        }
        #[cfg(not(unix))]
        {
            false
        }
    }

    // An entry that exceeds the socket's send buffer fails with `EMSGSIZE` and is dropped.
    #[cfg(unix)]
    fn send(
        &self,
        message: &str,
        priority: JournalPriority,
        fields: &[(&str, &str)],
    ) -> std::io::Result<()> {
        let entry = encode_entry(message, priority, fields);

        let mut o_datagram = self.connection();
        if o_datagram.is_none() {
            *o_datagram = Some(self.connect()?);
        }
        let ud = o_datagram
            .as_ref()
            .ok_or_else(|| io_err("journal connection vanished"))?;
        match ud.send(&entry) {
            Ok(_) => Ok(()),
            Err(e) => {
                // reconnect with the next record
                *o_datagram = None;
                Err(e)
            }
        }
    }

    #[cfg(not(unix))]
    fn send(
        &self,
        _message: &str,
        _priority: JournalPriority,
        _fields: &[(&str, &str)],
    ) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "journald is only available on unix",
        ))
    }
}

// Serializes a journal entry in journald's native protocol.
pub(crate) fn encode_entry(
    message: &str,
    priority: JournalPriority,
    fields: &[(&str, &str)],
) -> Vec<u8> {
    let mut entry = Vec::with_capacity(message.len() + 100);
    append_field(&mut entry, "MESSAGE", message.as_bytes());
    append_field(
        &mut entry,
        "PRIORITY",
        priority.as_u8().to_string().as_bytes(),
    );
    for (key, value) in fields {
        append_field(&mut entry, key, value.as_bytes());
    }
    entry
}

// `KEY=value\n`; values that contain a newline are written
// as `KEY\n`, followed by the value length as u64 little endian, the value, and `\n`.
fn append_field(entry: &mut Vec<u8>, key: &str, value: &[u8]) {
    entry.extend_from_slice(key.as_bytes());
    if value.contains(&b'\n') {
        entry.push(b'\n');
        entry.extend_from_slice(&(value.len() as u64).to_le_bytes());
        entry.extend_from_slice(value);
    } else {
        entry.push(b'=');
        entry.extend_from_slice(value);
    }
    entry.push(b'\n');
}

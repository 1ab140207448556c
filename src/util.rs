use std::{cell::RefCell, io::Write};

#[derive(Copy, Clone, Debug)]
pub(crate) enum ErrorCode {
    Write,
    Flush,
    Journal,
    LogFile,
    Poison,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Write => "Write",
            Self::Flush => "Flush",
            Self::Journal => "Journal",
            Self::LogFile => "LogFile",
            Self::Poison => "Poison",
        }
    }
}

// Problems of the logger itself go to stderr; they are never returned to the
// code that issued the log call.
pub(crate) fn eprint_err(code: ErrorCode, msg: &str, err: &dyn std::error::Error) {
    let s = format!("[linelog][ERRCODE::{}] {msg}, caused by {err}\n", code.as_str());
    std::io::stderr().write_all(s.as_bytes()).ok();
}

pub(crate) fn eprint_msg(code: ErrorCode, msg: &str) {
    let s = format!("[linelog][ERRCODE::{}] {msg}\n", code.as_str());
    std::io::stderr().write_all(s.as_bytes()).ok();
}

pub(crate) fn io_err(s: &'static str) -> std::io::Error {
    std::io::Error::other(s)
}

// Thread-local buffer
pub(crate) fn buffer_with<F>(f: F)
where
    F: FnOnce(&RefCell<Vec<u8>>),
{
    thread_local! {
        static BUFFER: RefCell<Vec<u8>> = RefCell::new(Vec::with_capacity(200));
    }
    BUFFER.with(f);
}

// Composes a complete log line in the thread-local buffer, using `compose`,
// and hands it to `emit` as one slice, so that each output receives the line
// with a single write call.
pub(crate) fn write_composed<C, E>(compose: C, emit: E) -> std::io::Result<()>
where
    C: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
    E: FnOnce(&[u8]) -> std::io::Result<()>,
{
    let mut result = Ok(());
    buffer_with(|tl_buf| match tl_buf.try_borrow_mut() {
        Ok(mut buffer) => {
            buffer.clear();
            result = compose(&mut *buffer).and_then(|()| emit(&buffer[..]));
            buffer.clear();
        }
        Err(_e) => {
            // We arrive here in the rare cases of recursive logging
            // (e.g. log calls in Display implementations of logged values)
            let mut tmp_buf = Vec::<u8>::with_capacity(200);
            result = compose(&mut tmp_buf).and_then(|()| emit(&tmp_buf));
        }
    });
    result
}

use std::{
    io::{Stderr, Stdout, Write},
    sync::{Arc, Mutex, PoisonError},
};

// A console output: stdout, stderr, or a replacement that was injected to capture the output.
#[derive(Clone)]
pub(crate) enum StdStream {
    Out(Arc<Stdout>),
    Err(Arc<Stderr>),
    Custom(Arc<Mutex<dyn Write + Send>>),
}

impl StdStream {
    pub(crate) fn stdout() -> Self {
        StdStream::Out(Arc::new(std::io::stdout()))
    }

    pub(crate) fn stderr() -> Self {
        StdStream::Err(Arc::new(std::io::stderr()))
    }

    pub(crate) fn custom<W: Write + Send + 'static>(w: W) -> Self {
        StdStream::Custom(Arc::new(Mutex::new(w)))
    }

    // Writes the complete line with a single call and flushes,
    // so that nothing is lost if the process exits right afterwards.
    pub(crate) fn write_line(&self, line: &[u8]) -> std::io::Result<()> {
        match self {
            StdStream::Out(s) => {
                let mut w = s.lock();
                w.write_all(line)?;
                w.flush()
            }
            StdStream::Err(s) => {
                let mut w = s.lock();
                w.write_all(line)?;
                w.flush()
            }
            StdStream::Custom(m_w) => {
                let mut w = m_w.lock().unwrap_or_else(PoisonError::into_inner);
                w.write_all(line)?;
                w.flush()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::StdStream;
    use crate::writers::SharedBuffer;

    #[test]
    fn test_custom_stream() {
        let buffer = SharedBuffer::new();
        let stream = StdStream::custom(buffer.clone());
        stream.write_line(b"first\n").unwrap();
        stream.clone().write_line(b"second\n").unwrap();
        assert_eq!(buffer.contents(), "first\nsecond\n");
    }
}

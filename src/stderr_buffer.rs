//! Log sink that holds lines back while the TUI owns the terminal.
//!
//! `tracing-subscriber` writes through [`writer`]; between [`activate`] and
//! [`drain`] every formatted log line is stored instead of hitting stderr.

use std::io::{self, Write};
use std::sync::Mutex;

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

/// Activate buffering.
pub fn activate() {
    if let Ok(mut guard) = BUFFER.lock() {
        *guard = Some(Vec::new());
    }
}

/// Deactivate buffering and return all collected lines.
pub fn drain() -> Vec<String> {
    BUFFER
        .lock()
        .ok()
        .and_then(|mut guard| guard.take())
        .unwrap_or_default()
}

pub fn is_active() -> bool {
    BUFFER.lock().map(|guard| guard.is_some()).unwrap_or(false)
}

/// Writer handed out to the log subscriber, one per event.
pub struct BufferedStderr;

/// `MakeWriter` constructor for `tracing_subscriber::fmt().with_writer(...)`
pub fn writer() -> BufferedStderr {
    BufferedStderr
}

impl Write for BufferedStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = BUFFER
            .lock()
            .map_err(|_| io::Error::other("stderr buffer poisoned"))?;
        if let Some(lines) = guard.as_mut() {
            let text = String::from_utf8_lossy(buf);
            lines.push(text.trim_end_matches('\n').to_string());
            Ok(buf.len())
        } else {
            drop(guard);
            io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test touches the global buffer so parallel tests cannot interleave.
    #[test]
    fn test_activate_buffer_drain_cycle() {
        activate();
        assert!(is_active());

        let mut w = writer();
        w.write_all(b"first line\n").unwrap();
        w.write_all(b"second line\n").unwrap();

        let lines = drain();
        assert_eq!(lines, vec!["first line", "second line"]);
        assert!(!is_active());
        assert!(drain().is_empty());
    }
}

//! Console appender implementation

use crate::core::{Appender, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Writes lines to the process's standard output or standard error.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleAppender {
    stream: ConsoleStream,
}

impl ConsoleAppender {
    pub fn stdout() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
        }
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => std::io::stdout().lock().write_all(line.as_bytes())?,
            ConsoleStream::Stderr => std::io::stderr().lock().write_all(line.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => std::io::stdout().flush()?,
            ConsoleStream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            ConsoleStream::Stdout => "stdout",
            ConsoleStream::Stderr => "stderr",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(ConsoleAppender::stdout().name(), "stdout");
        assert_eq!(ConsoleAppender::stderr().name(), "stderr");
    }

    #[test]
    fn test_append_and_flush() {
        let mut appender = ConsoleAppender::stdout();
        assert!(appender.append("console appender test\n").is_ok());
        assert!(appender.flush().is_ok());
    }
}

//! In-memory appender
//!
//! Keeps every line in a shared buffer. Clones share the buffer, so a test
//! can hand one clone to a logger and read the output through another.

use crate::core::{Appender, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    buffer: Arc<Mutex<String>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        self.buffer.lock().push_str(line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let reader = MemoryAppender::new();
        let mut writer = reader.clone();

        writer.append("a\n").unwrap();
        writer.append("b\n").unwrap();

        assert_eq!(reader.contents(), "a\nb\n");
        assert_eq!(reader.lines(), vec!["a", "b"]);

        reader.clear();
        assert!(writer.is_empty());
    }
}

//! Appender trait for log output destinations

use super::error::Result;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

pub trait Appender: Send {
    /// Write one complete, already formatted line (including its terminator).
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// Shared handle to one output stream.
///
/// Every emission takes the stream's lock for a single `append`, so lines
/// from concurrent callers never interleave. Clones refer to the same stream.
#[derive(Clone)]
pub struct WriteTarget {
    inner: Arc<Mutex<Box<dyn Appender>>>,
}

impl WriteTarget {
    pub fn new<A: Appender + 'static>(appender: A) -> Self {
        Self::from_boxed(Box::new(appender))
    }

    pub fn from_boxed(appender: Box<dyn Appender>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(appender)),
        }
    }

    pub fn append(&self, line: &str) -> Result<()> {
        self.inner.lock().append(line)
    }

    pub fn flush(&self) -> Result<()> {
        self.inner.lock().flush()
    }

    pub fn name(&self) -> String {
        self.inner.lock().name().to_string()
    }

    /// True when both handles refer to the same stream.
    pub fn same_stream(&self, other: &WriteTarget) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<A: Appender + 'static> From<A> for WriteTarget {
    fn from(appender: A) -> Self {
        Self::new(appender)
    }
}

impl fmt::Debug for WriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WriteTarget").field(&self.name()).finish()
    }
}

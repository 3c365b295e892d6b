//! File appender implementation

use crate::core::{Appender, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileAppender {
    writer: Option<BufWriter<File>>,
    path: PathBuf,
    #[cfg(feature = "file")]
    lock_each_write: bool,
}

impl FileAppender {
    /// Open `path` for appending, creating it if needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            path,
            #[cfg(feature = "file")]
            lock_each_write: false,
        })
    }

    /// Take an exclusive advisory lock around every line
    ///
    /// Lines are then written straight through to the file, which lets
    /// several processes share one log file without tearing lines.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use logwrap::appenders::FileAppender;
    ///
    /// let appender = FileAppender::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_locking(true);
    /// ```
    #[cfg(feature = "file")]
    #[must_use]
    pub fn with_locking(mut self, lock_each_write: bool) -> Self {
        self.lock_each_write = lock_each_write;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(feature = "file")]
    fn append_locked(writer: &mut BufWriter<File>, path: &Path, line: &str) -> Result<()> {
        use fs2::FileExt;

        writer.flush()?;
        let file = writer.get_mut();
        file.lock_exclusive()
            .map_err(|_| LoggerError::file_lock(path.display().to_string()))?;
        let written = file.write_all(line.as_bytes());
        let unlocked = FileExt::unlock(file);
        written?;
        unlocked?;
        Ok(())
    }
}

impl Appender for FileAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;

        #[cfg(feature = "file")]
        if self.lock_each_write {
            return Self::append_locked(writer, &self.path, line);
        }

        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

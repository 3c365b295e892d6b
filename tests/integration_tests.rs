//! Integration tests for the leveled logger
//!
//! These tests verify:
//! - Every severity and call variant against off / all-but-one / only-one masks
//! - Stream routing (error stream vs output stream)
//! - Prefixes, header flags and decorators
//! - File streams
//! - Reconfiguration through reset and set_level

use logwrap::prelude::*;
use parking_lot::Mutex;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

const TXT: &str = "PAYLOAD";

#[derive(Clone, Default)]
struct RecordingTerminator {
    codes: Arc<Mutex<Vec<i32>>>,
}

impl Terminator for RecordingTerminator {
    fn terminate(&self, code: i32) {
        self.codes.lock().push(code);
    }
}

struct Capture {
    logger: Logger,
    stderr: MemoryAppender,
    stdout: MemoryAppender,
    exits: RecordingTerminator,
}

impl Capture {
    fn new(level: LevelSet) -> Self {
        let stderr = MemoryAppender::new();
        let stdout = MemoryAppender::new();
        let exits = RecordingTerminator::default();
        let logger = Options::discard()
            .with_stderr(stderr.clone())
            .with_stdout(stdout.clone())
            .with_flags(Flags::NONE)
            .with_level(level)
            .with_terminator(exits.clone())
            .build();
        Self {
            logger,
            stderr,
            stdout,
            exits,
        }
    }

    fn clear(&self) {
        self.stderr.clear();
        self.stdout.clear();
        self.exits.codes.lock().clear();
    }

    fn stderr_text(&self) -> String {
        self.stderr.contents().trim_end_matches('\n').to_string()
    }

    fn stdout_text(&self) -> String {
        self.stdout.contents().trim_end_matches('\n').to_string()
    }
}

type Call = fn(&Logger, &str);

fn calls() -> [(&'static str, Severity, Call); 18] {
    [
        ("debug", Severity::Debug, |l, t| l.debug(t)),
        ("debugln", Severity::Debug, |l, t| l.debugln(t)),
        ("debugf", Severity::Debug, |l, t| l.debugf(format_args!("{}", t))),
        ("error", Severity::Error, |l, t| l.error(t)),
        ("errorln", Severity::Error, |l, t| l.errorln(t)),
        ("errorf", Severity::Error, |l, t| l.errorf(format_args!("{}", t))),
        ("info", Severity::Info, |l, t| l.info(t)),
        ("infoln", Severity::Info, |l, t| l.infoln(t)),
        ("infof", Severity::Info, |l, t| l.infof(format_args!("{}", t))),
        ("warn", Severity::Warn, |l, t| l.warn(t)),
        ("warnln", Severity::Warn, |l, t| l.warnln(t)),
        ("warnf", Severity::Warn, |l, t| l.warnf(format_args!("{}", t))),
        ("trace", Severity::Trace, |l, t| l.trace(t)),
        ("traceln", Severity::Trace, |l, t| l.traceln(t)),
        ("tracef", Severity::Trace, |l, t| l.tracef(format_args!("{}", t))),
        ("fatal", Severity::Fatal, |l, t| l.fatal(t)),
        ("fatalln", Severity::Fatal, |l, t| l.fatalln(t)),
        ("fatalf", Severity::Fatal, |l, t| l.fatalf(format_args!("{}", t))),
    ]
}

#[test]
fn test_every_call_against_level_masks() {
    let capture = Capture::new(LevelSet::OFF);

    for (name, severity, call) in calls() {
        // Log level off
        capture.clear();
        capture.logger.set_level(LevelSet::OFF);
        call(&capture.logger, TXT);
        assert_eq!(capture.stdout_text(), "", "{} wrote stdout while off", name);
        assert_eq!(capture.stderr_text(), "", "{} wrote stderr while off", name);
        assert!(capture.exits.codes.lock().is_empty(), "{} exited while off", name);

        // All but this severity
        capture.clear();
        capture.logger.set_level(LevelSet::ALL ^ severity.bit());
        call(&capture.logger, TXT);
        assert_eq!(capture.stdout_text(), "", "{} wrote stdout while masked", name);
        assert_eq!(capture.stderr_text(), "", "{} wrote stderr while masked", name);
        assert!(capture.exits.codes.lock().is_empty(), "{} exited while masked", name);

        // Only this severity
        capture.clear();
        capture.logger.set_level(severity.bit());
        call(&capture.logger, TXT);
        let (want_out, want_err) = if severity.is_error_class() {
            ("", TXT)
        } else {
            (TXT, "")
        };
        assert_eq!(capture.stdout_text(), want_out, "{} stdout", name);
        assert_eq!(capture.stderr_text(), want_err, "{} stderr", name);

        let exits = capture.exits.codes.lock().clone();
        if severity == Severity::Fatal {
            assert_eq!(exits, vec![FATAL_EXIT_CODE], "{} did not exit", name);
        } else {
            assert!(exits.is_empty(), "{} exited", name);
        }
    }
}

#[test]
fn test_single_severity_isolation() {
    for enabled in Severity::ALL {
        let capture = Capture::new(enabled.bit());
        for (_, _, call) in calls() {
            call(&capture.logger, TXT);
        }

        // Three variants for the enabled severity, nothing for the other five
        let (written, silent) = if enabled.is_error_class() {
            (&capture.stderr, &capture.stdout)
        } else {
            (&capture.stdout, &capture.stderr)
        };
        assert_eq!(written.lines(), vec![TXT; 3], "{}", enabled);
        assert!(silent.is_empty(), "{}", enabled);
    }
}

#[test]
fn test_zero_mask_behaves_like_off() {
    let zero = Capture::new(LevelSet::NONE);
    for (_, _, call) in calls() {
        call(&zero.logger, TXT);
    }
    assert!(zero.stdout.is_empty());
    assert!(zero.stderr.is_empty());
    assert!(zero.exits.codes.lock().is_empty());
}

#[test]
fn test_standard_prefixes_and_msg_prefix() {
    let capture = Capture::new(LevelSet::ALL);
    capture.logger.reset(
        capture
            .logger
            .options()
            .with_prefixes(Prefixes::standard())
            .with_flags(Flags::SHORT_FILE | Flags::MSG_PREFIX),
    );

    let line = line!() + 1;
    capture.logger.warn("disk almost full");
    assert_eq!(
        capture.stderr.contents(),
        format!("integration_tests.rs:{}: WARN: disk almost full\n", line)
    );
}

#[test]
fn test_std_flags_header_shape() {
    let capture = Capture::new(LevelSet::INFO);
    capture.logger.reset(
        capture
            .logger
            .options()
            .with_prefix(Severity::Info, "INFO: ")
            .with_flags(Flags::STD | Flags::UTC),
    );

    capture.logger.info("started");
    let text = capture.stdout.contents();

    // "INFO: YYYY/MM/DD HH:MM:SS started\n"
    assert!(text.starts_with("INFO: "), "{:?}", text);
    assert!(text.ends_with(" started\n"), "{:?}", text);
    let header = &text["INFO: ".len()..text.len() - " started\n".len()];
    assert_eq!(header.len(), "2009/01/23 01:23:23".len(), "{:?}", header);
    assert_eq!(header.matches('/').count(), 2);
    assert_eq!(header.matches(':').count(), 2);
}

#[test]
fn test_ansi_decorator_wraps_prefix_only() {
    let capture = Capture::new(LevelSet::ERROR);
    capture.logger.reset(
        capture
            .logger
            .options()
            .with_prefixes(Prefixes::standard())
            .with_decorator(Decorator::ansi()),
    );

    capture.logger.error("boom");
    let text = capture.stderr.contents();
    assert!(text.contains("ERROR: "));
    assert!(text.ends_with("boom\n"));
}

#[test]
fn test_file_streams() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err_path = temp_dir.path().join("errors.log");
    let out_path = temp_dir.path().join("output.log");

    let logger = Options::discard()
        .with_stderr(FileAppender::new(&err_path).expect("Failed to create appender"))
        .with_stdout(FileAppender::new(&out_path).expect("Failed to create appender"))
        .with_flags(Flags::NONE)
        .with_prefixes(Prefixes::standard())
        .with_level(LevelSet::ALL ^ LevelSet::TRACE)
        .build();

    logger.error("cannot open socket");
    logger.warn("retrying");
    logger.info("connected");
    logger.trace("hidden");

    logger.flush().expect("Failed to flush");

    let errors = fs::read_to_string(&err_path).expect("Failed to read log file");
    let output = fs::read_to_string(&out_path).expect("Failed to read log file");
    assert_eq!(errors, "ERROR: cannot open socket\nWARN: retrying\n");
    assert_eq!(output, "INFO: connected\n");
}

#[test]
fn test_both_classes_can_share_one_stream() {
    let shared = MemoryAppender::new();
    let target = WriteTarget::new(shared.clone());
    let logger = Options::discard()
        .with_stderr(target.clone())
        .with_stdout(target)
        .with_flags(Flags::NONE)
        .build();

    logger.error("a");
    logger.info("b");
    assert_eq!(shared.lines(), vec!["a", "b"]);
}

#[test]
fn test_writer_appender_stream() {
    let logger = Options::discard()
        .with_stdout(WriterAppender::named(std::io::sink(), "sink"))
        .with_flags(Flags::NONE)
        .build();

    logger.info("discarded by sink");
    assert_eq!(logger.stdout().map(|target| target.name()), Some("sink".to_string()));
    assert_eq!(logger.metrics().emitted(), 1);
}

#[test]
fn test_reconfiguration_history_is_forgotten() {
    let capture = Capture::new(LevelSet::ALL);
    let original = capture.logger.options();

    capture.logger.set_level(LevelSet::OFF);
    capture
        .logger
        .reset(original.clone().with_prefixes(Prefixes::standard()));
    capture.logger.reset(original);

    capture.logger.debug("plain");
    assert_eq!(capture.stdout.contents(), "plain\n");
    assert_eq!(capture.logger.level(), LevelSet::ALL);
}

const LEVEL_VAR: &str = "LOGWRAP_IT_LEVEL";

/// Runs only when re-executed with `LEVEL_VAR` set on its own process.
#[test]
fn level_env_child() {
    let Some(level) = LevelSet::from_env(LEVEL_VAR).expect("valid level") else {
        return;
    };

    let logger = Options::new().with_flags(Flags::NONE).with_level(level).build();
    logger.info("info-line");
    logger.debug("debug-line");
    logger.error("error-line");
    logger.flush().expect("Failed to flush");
}

#[test]
fn test_level_from_env_drives_logger() {
    let exe = std::env::current_exe().expect("test binary path");
    let output = std::process::Command::new(exe)
        .args(["level_env_child", "--exact", "--nocapture", "--test-threads=1"])
        .env(LEVEL_VAR, "error,debug")
        .output()
        .expect("failed to run child test");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "{}", stderr);
    assert!(stdout.contains("debug-line"), "{:?}", stdout);
    assert!(!stdout.contains("info-line"), "{:?}", stdout);
    assert!(stderr.lines().any(|line| line == "error-line"), "{:?}", stderr);
}

//! Process termination for the fatal tier

use std::fmt;

/// Exit status used after a fatal line has been written.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Ends the program after a fatal emission.
///
/// The default [`ProcessExit`] never returns. Other implementations may
/// return, in which case the fatal call returns to its caller as well.
pub trait Terminator: Send + Sync {
    fn terminate(&self, code: i32);
}

/// Terminates the current process with [`std::process::exit`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, code: i32) {
        std::process::exit(code)
    }
}

impl fmt::Debug for dyn Terminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Terminator")
    }
}

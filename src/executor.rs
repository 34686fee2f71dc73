//! Running a [`Step`] as a child process.
//!
//! The [`Executor`] trait is the seam between the pipeline and the operating
//! system. [`SystemExecutor`] is the real implementation; tests substitute a
//! recorder.
//!
//! Exit statuses follow POSIX shell conventions so that callers see the same
//! codes a shell script would produce:
//!
//! | Situation | Exit code |
//! |-----------|-----------|
//! | tool exited normally | its own code |
//! | tool killed by signal `N` | `128 + N` |
//! | program not found | `127` |
//! | program found but not runnable | `126` |

use crate::step::Step;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// Exit code reported when a program cannot be found.
pub const NOT_FOUND: i32 = 127;
/// Exit code reported when a program exists but cannot be executed.
pub const NOT_EXECUTABLE: i32 = 126;

/// Runs one step to completion and reports its exit code.
///
/// Implementations block until the step has finished. A return value of `0`
/// means success; anything else stops the pipeline.
pub trait Executor {
    fn execute(&self, step: &Step) -> i32;
}

/// Spawns steps as child processes with inherited stdio.
///
/// The tool's own diagnostics go straight to the terminal; nothing is
/// captured or rewritten.
#[derive(Debug, Clone, Default)]
pub struct SystemExecutor {
    working_dir: Option<PathBuf>,
}

impl SystemExecutor {
    pub fn new() -> Self {
        SystemExecutor::default()
    }

    /// Runs every step in `dir` instead of the current directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        SystemExecutor {
            working_dir: Some(dir.into()),
        }
    }
}

impl Executor for SystemExecutor {
    fn execute(&self, step: &Step) -> i32 {
        let mut command = Command::new(&step.program);
        command.args(&step.args);
        if let Some(ref dir) = self.working_dir {
            command.current_dir(dir);
        }

        match command.status() {
            Ok(status) => exit_code(status),
            Err(e) => {
                let code = spawn_failure_code(&e);
                if code == NOT_FOUND {
                    eprintln!("oxidized-lint: {}: command not found", step.program);
                } else {
                    eprintln!("oxidized-lint: {}: {e}", step.program);
                }
                code
            }
        }
    }
}

/// Maps a finished process's status to a shell-style exit code.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Maps a spawn error to `127` (not found) or `126` (anything else).
pub fn spawn_failure_code(error: &io::Error) -> i32 {
    match error.kind() {
        io::ErrorKind::NotFound => NOT_FOUND,
        _ => NOT_EXECUTABLE,
    }
}

/// Returns `true` if an executable named `cmd` exists on `PATH`.
///
/// A `cmd` containing a path separator is checked directly instead of being
/// searched for. On Unix the file must also have an executable permission bit
/// set.
pub fn which_exists(cmd: &str) -> bool {
    if cmd.contains(std::path::MAIN_SEPARATOR) || cmd.contains('/') {
        return is_executable(std::path::Path::new(cmd));
    }

    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).any(|dir| is_executable(&dir.join(cmd))))
        .unwrap_or(false)
}

fn is_executable(candidate: &std::path::Path) -> bool {
    if !candidate.is_file() {
        return false;
    }
    // A non-executable file on PATH would appear available but fail at runtime.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(candidate)
            .map(|m| m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        true
    }
}

//! Fail-fast step orchestration.
//!
//! [`run`] prints the progress message, then executes each [`Step`] in order
//! through an [`Executor`]. The first step that exits non-zero ends the run;
//! steps after it are never started. There is no retry and no attempt to
//! collect diagnostics from later tools.
//!
//! ```
//! use oxidized_lint::executor::Executor;
//! use oxidized_lint::pipeline;
//! use oxidized_lint::step::Step;
//!
//! struct AlwaysOk;
//! impl Executor for AlwaysOk {
//!     fn execute(&self, _step: &Step) -> i32 { 0 }
//! }
//!
//! let steps = vec![Step::new("black", "black", vec!["pkg".into()])];
//! let mut out = Vec::new();
//! let report = pipeline::run("Running...", &steps, &AlwaysOk, &mut out);
//!
//! assert!(report.passed());
//! assert_eq!(String::from_utf8(out).unwrap(), "Running...\n");
//! ```

use crate::executor::Executor;
use crate::step::Step;
use std::io::Write;
use std::time::Instant;

/// What happened to one executed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub name: String,
    pub command: String,
    pub exit_code: i32,
    pub duration_ms: u64,
}

/// Steps that actually ran, in execution order.
///
/// Only the last record can carry a non-zero exit code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub executed: Vec<StepRecord>,
}

impl RunReport {
    /// `0` when every step succeeded, otherwise the failing step's code.
    pub fn exit_code(&self) -> i32 {
        self.failed_step().map(|s| s.exit_code).unwrap_or(0)
    }

    pub fn passed(&self) -> bool {
        self.failed_step().is_none()
    }

    pub fn failed_step(&self) -> Option<&StepRecord> {
        self.executed.last().filter(|s| s.exit_code != 0)
    }
}

/// Runs `steps` front to back, stopping at the first failure.
///
/// `message` is written to `out` (followed by a newline) and flushed before
/// the first step starts, so it always precedes the tools' own output. A
/// failure to write it is logged and otherwise ignored.
pub fn run<E, W>(message: &str, steps: &[Step], executor: &E, out: &mut W) -> RunReport
where
    E: Executor + ?Sized,
    W: Write + ?Sized,
{
    if let Err(e) = writeln!(out, "{message}").and_then(|()| out.flush()) {
        tracing::warn!(error = %e, "failed to write progress message");
    }

    let mut report = RunReport::default();
    for (index, step) in steps.iter().enumerate() {
        let command = step.command_line();
        tracing::debug!(step = index + 1, name = %step.name, %command, "starting step");

        let start = Instant::now();
        let exit_code = executor.execute(step);
        let duration_ms = start.elapsed().as_millis() as u64;

        report.executed.push(StepRecord {
            name: step.name.clone(),
            command,
            exit_code,
            duration_ms,
        });

        if exit_code != 0 {
            tracing::info!(
                step = index + 1,
                name = %step.name,
                exit_code,
                skipped = steps.len() - index - 1,
                "step failed, stopping"
            );
            break;
        }
        tracing::debug!(step = index + 1, name = %step.name, duration_ms, "step passed");
    }

    report
}

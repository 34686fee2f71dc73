//! # oxidized-lint
//!
//! Fail-fast code-quality runner for a Python package.
//!
//! `oxidized-lint` runs a fixed sequence of third-party tools over a package
//! directory and its tests directory, one after the other, and stops at the
//! first tool that exits non-zero. That tool's exit status becomes the
//! overall status; the tools after it never run.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use oxidized_lint::{config::Config, executor::SystemExecutor, pipeline};
//!
//! let config = Config::builtin().expect("built-in step table is valid");
//! let steps = config.steps(Path::new(".")).expect("package directory readable");
//!
//! let report = pipeline::run(
//!     &config.message,
//!     &steps,
//!     &SystemExecutor::new(),
//!     &mut std::io::stdout(),
//! );
//! std::process::exit(report.exit_code());
//! ```
//!
//! ## Architecture
//!
//! 1. **[`config`]** — the step table, compiled in from `lint.toml`, and its
//!    placeholder expansion.
//! 2. **[`step`]** — a single resolved tool invocation.
//! 3. **[`executor`]** — the [`executor::Executor`] seam and the child-process
//!    implementation.
//! 4. **[`pipeline`]** — ordered, fail-fast execution and the
//!    [`pipeline::RunReport`].
//!
//! ## Steps
//!
//! | # | Tool | Arguments |
//! |---|------|-----------|
//! | 1 | [isort] | package, tests |
//! | 2 | [black] | package, tests |
//! | 3 | [mypy] | package, tests |
//! | 4 | [pylint] | `--fail-under 9`, package `*.py` |
//! | 5 | [flake8] | package, tests |
//! | 6 | [bandit] | `-r`, package |
//! | 7 | [black] | package, tests |
//!
//! [isort]: https://pycqa.github.io/isort/
//! [black]: https://black.readthedocs.io/
//! [mypy]: https://mypy-lang.org/
//! [pylint]: https://pylint.readthedocs.io/
//! [flake8]: https://flake8.pycqa.org/
//! [bandit]: https://bandit.readthedocs.io/

pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod pipeline;
pub mod step;

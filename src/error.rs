//! Error type for loading and resolving the step table.
//!
//! A tool exiting non-zero is **not** a [`LintError`]; it is an ordinary
//! outcome recorded in a [`RunReport`](crate::pipeline::RunReport).

use std::path::PathBuf;

/// Errors raised while parsing, validating, or resolving a step table.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// The TOML step table could not be parsed.
    #[error("failed to parse step table: {0}")]
    Parse(#[from] toml::de::Error),

    /// The step table parsed but is unusable.
    #[error("invalid step table: {0}")]
    Invalid(String),

    /// An argument references a placeholder that does not exist.
    #[error("step '{step}' uses unknown placeholder '{{{placeholder}}}'")]
    UnknownPlaceholder { step: String, placeholder: String },

    /// Reading a directory during placeholder expansion failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

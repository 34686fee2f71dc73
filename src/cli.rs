use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "oxidized-lint",
    version,
    about = "Run isort, black, mypy, pylint, flake8 and bandit in order, stopping at the first failure",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Ignored. The step sequence is fixed.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every step (the default)
    Run {
        /// Ignored. The step sequence is fixed.
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        ignored: Vec<String>,
    },

    /// Check which tools are available on PATH
    CheckTools,

    /// Print the resolved command line of every step
    ListSteps,
}

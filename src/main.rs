mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use oxidized_lint::config::Config;
use oxidized_lint::executor::{which_exists, SystemExecutor};
use oxidized_lint::step::Step;
use oxidized_lint::{logging, pipeline};
use std::path::Path;

fn main() {
    logging::init();
    let cli = Cli::parse();

    let config = Config::builtin().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    match cli.command {
        None | Some(Commands::Run { .. }) => {
            let ignored = match cli.command {
                Some(Commands::Run { ref ignored }) => ignored,
                _ => &cli.ignored,
            };
            if !ignored.is_empty() {
                tracing::debug!(args = ?ignored, "ignoring command-line arguments");
            }

            let steps = resolve_steps(&config);
            let report = {
                let mut stdout = std::io::stdout().lock();
                pipeline::run(&config.message, &steps, &SystemExecutor::new(), &mut stdout)
            };

            std::process::exit(report.exit_code());
        }

        Some(Commands::CheckTools) => {
            println!("{}", "Tool Availability".bold().underline());
            println!();

            for program in config.programs() {
                let status = if which_exists(program) {
                    "READY".green().bold().to_string()
                } else {
                    "NOT AVAILABLE".red().to_string()
                };

                let used_by: Vec<&str> = config
                    .step
                    .iter()
                    .filter(|s| s.program == program)
                    .map(|s| s.name.as_str())
                    .collect();

                println!(
                    "  [{status}] {program:<12} used by: {}",
                    used_by.join(", ")
                );
            }

            println!();
            println!("Note: a missing tool makes its step exit with status 127.");
        }

        Some(Commands::ListSteps) => {
            let steps = resolve_steps(&config);

            println!("{}", "Steps".bold().underline());
            println!();
            for (i, step) in steps.iter().enumerate() {
                println!(
                    "  {:>2}. {name:<18} {command}",
                    i + 1,
                    name = step.name.bold(),
                    command = step.command_line().dimmed(),
                );
            }
            println!();
            println!(
                "  Package: {}  Tests: {}  pylint --fail-under {}",
                config.package_dir, config.tests_dir, config.fail_under
            );
        }
    }
}

/// Resolves the step table against the current directory, exiting with
/// status 2 if the package directory cannot be read.
fn resolve_steps(config: &Config) -> Vec<Step> {
    config.steps(Path::new("")).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    })
}

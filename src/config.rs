//! The step table.
//!
//! The tools, their order, and their arguments are authored as data in
//! `lint.toml` at the crate root. That file is compiled into the binary, so
//! nothing at runtime (flags, environment, files in the working directory)
//! can change which steps run.
//!
//! ```
//! use oxidized_lint::config::Config;
//!
//! let config = Config::builtin().unwrap();
//! assert_eq!(config.step.len(), 7);
//! assert_eq!(config.package_dir, "d8s_ip_addresses");
//! ```
//!
//! # Placeholders
//!
//! Step arguments may reference the table's fields:
//!
//! | Placeholder    | Expands to |
//! |----------------|------------|
//! | `{package}`    | [`Config::package_dir`] |
//! | `{tests}`      | [`Config::tests_dir`] |
//! | `{fail_under}` | [`Config::fail_under`] |
//! | `{package_py}` | one argument per `*.py` file directly inside the package directory |
//!
//! `{package_py}` behaves like an unquoted shell glob: matches are sorted,
//! dotfiles are skipped, any entry type matches (a directory named `x.py`
//! included), and when nothing matches the pattern itself
//! (`<package>/*.py`) is passed through unchanged.

use crate::error::LintError;
use crate::step::Step;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

const BUILTIN_TABLE: &str = include_str!("../lint.toml");

static RE_PLACEHOLDER: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

const PACKAGE_PY: &str = "package_py";

/// A parsed step table.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Progress message printed before the first step.
    pub message: String,
    /// Source package directory, relative to the working directory.
    pub package_dir: String,
    /// Tests directory, relative to the working directory.
    pub tests_dir: String,
    /// Minimum pylint score.
    pub fail_under: f64,
    /// Steps in execution order.
    pub step: Vec<StepConfig>,
}

/// A single `[[step]]` entry before placeholder expansion.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct StepConfig {
    pub name: String,
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            message: "Running linters and formatters...".to_string(),
            package_dir: "d8s_ip_addresses".to_string(),
            tests_dir: "tests".to_string(),
            fail_under: 9.0,
            step: Vec::new(),
        }
    }
}

impl Config {
    /// Parses the step table compiled into the binary.
    ///
    /// # Errors
    ///
    /// Only fails if `lint.toml` itself is broken, which the test suite
    /// guards against.
    pub fn builtin() -> Result<Config, LintError> {
        Config::from_toml_str(BUILTIN_TABLE)
    }

    /// Parses and validates a step table.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Parse`] for malformed TOML or unknown keys, and
    /// the errors of [`Config::validate`] otherwise.
    pub fn from_toml_str(content: &str) -> Result<Config, LintError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the table can be resolved into steps.
    ///
    /// # Errors
    ///
    /// - [`LintError::Invalid`] when there are no steps, a step has an empty
    ///   `name` or `program`, a directory is empty, or `{package_py}` is
    ///   embedded in a larger argument.
    /// - [`LintError::UnknownPlaceholder`] for any other `{name}` reference.
    pub fn validate(&self) -> Result<(), LintError> {
        if self.step.is_empty() {
            return Err(LintError::Invalid("no steps defined".to_string()));
        }
        if self.package_dir.trim().is_empty() || self.tests_dir.trim().is_empty() {
            return Err(LintError::Invalid(
                "package_dir and tests_dir must not be empty".to_string(),
            ));
        }
        if !self.fail_under.is_finite() {
            return Err(LintError::Invalid("fail_under must be a number".to_string()));
        }

        for (i, step) in self.step.iter().enumerate() {
            if step.name.trim().is_empty() {
                return Err(LintError::Invalid(format!("step {} has no name", i + 1)));
            }
            if step.program.trim().is_empty() {
                return Err(LintError::Invalid(format!(
                    "step '{}' has no program",
                    step.name
                )));
            }
            for arg in &step.args {
                for caps in RE_PLACEHOLDER.captures_iter(arg) {
                    let key = &caps[1];
                    if key == PACKAGE_PY && arg != "{package_py}" {
                        return Err(LintError::Invalid(format!(
                            "step '{}': {{package_py}} must be a whole argument",
                            step.name
                        )));
                    }
                    if !matches!(key, "package" | "tests" | "fail_under" | PACKAGE_PY) {
                        return Err(LintError::UnknownPlaceholder {
                            step: step.name.clone(),
                            placeholder: key.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Resolves the table into concrete [`Step`]s.
    ///
    /// `root` is the directory the tools will run in; it is only consulted to
    /// expand `{package_py}`. Resulting paths stay relative to `root`.
    ///
    /// # Errors
    ///
    /// Propagates [`Config::validate`] failures, and [`LintError::Io`] when
    /// the package directory exists but cannot be listed.
    pub fn steps(&self, root: &Path) -> Result<Vec<Step>, LintError> {
        self.validate()?;

        // Expanded once so every step sees the same file list.
        let mut python_files: Option<Vec<String>> = None;
        let fail_under = self.fail_under.to_string();

        let mut steps = Vec::with_capacity(self.step.len());
        for entry in &self.step {
            let mut args = Vec::with_capacity(entry.args.len());
            for arg in &entry.args {
                if arg == "{package_py}" {
                    if python_files.is_none() {
                        python_files = Some(python_files_in(root, &self.package_dir)?);
                    }
                    args.extend(python_files.iter().flatten().cloned());
                    continue;
                }
                let expanded = RE_PLACEHOLDER.replace_all(arg, |caps: &regex::Captures| {
                    match &caps[1] {
                        "package" => self.package_dir.clone(),
                        "tests" => self.tests_dir.clone(),
                        "fail_under" => fail_under.clone(),
                        // validate() rejected anything else
                        other => format!("{{{other}}}"),
                    }
                });
                args.push(expanded.into_owned());
            }
            steps.push(Step::new(&entry.name, &entry.program, args));
        }
        Ok(steps)
    }

    /// Distinct programs in table order.
    pub fn programs(&self) -> Vec<&str> {
        let mut programs: Vec<&str> = Vec::new();
        for step in &self.step {
            if !programs.contains(&step.program.as_str()) {
                programs.push(&step.program);
            }
        }
        programs
    }
}

/// Lists `*.py` files directly inside `root/package_dir`, shell-glob style.
fn python_files_in(root: &Path, package_dir: &str) -> Result<Vec<String>, LintError> {
    let package_dir = package_dir.trim_end_matches('/');
    let pattern = format!("{package_dir}/*.py");
    let dir = root.join(package_dir);
    if !dir.is_dir() {
        return Ok(vec![pattern]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| LintError::Io {
            path: dir.clone(),
            source: e.into(),
        })?;
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') || !name.ends_with(".py") {
            continue;
        }
        files.push(format!("{package_dir}/{name}"));
    }

    if files.is_empty() {
        files.push(pattern);
    }
    Ok(files)
}

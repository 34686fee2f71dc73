use std::fmt;

/// One external tool invocation in the step sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Display name (e.g. `"black (reformat)"`).
    pub name: String,
    /// Program looked up on `PATH`.
    pub program: String,
    /// Fully resolved argument list.
    pub args: Vec<String>,
}

impl Step {
    pub fn new(name: &str, program: &str, args: Vec<String>) -> Self {
        Step {
            name: name.to_string(),
            program: program.to_string(),
            args,
        }
    }

    /// Renders the invocation as a single shell-like line.
    ///
    /// Arguments containing whitespace are single-quoted. This is for display
    /// and logging only; arguments are never passed through a shell.
    ///
    /// ```
    /// use oxidized_lint::step::Step;
    ///
    /// let step = Step::new("bandit", "bandit", vec!["-r".into(), "pkg".into()]);
    /// assert_eq!(step.command_line(), "bandit -r pkg");
    /// ```
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                line.push_str(&format!("'{}'", arg.replace('\'', r"'\''")));
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_line())
    }
}

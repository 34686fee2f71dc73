use std::path::Path;

use oxidized_lint::config::Config;
use oxidized_lint::error::LintError;
use oxidized_lint::step::Step;

/// Helper: resolve the built-in table inside `root`.
fn builtin_steps(root: &Path) -> Vec<Step> {
    Config::builtin().unwrap().steps(root).unwrap()
}

/// Helper: a temp project with the given files under the package directory.
fn project_with(files: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let package = dir.path().join("d8s_ip_addresses");
    std::fs::create_dir_all(&package).unwrap();
    std::fs::create_dir_all(dir.path().join("tests")).unwrap();
    for file in files {
        std::fs::write(package.join(file), "").unwrap();
    }
    dir
}

fn args(step: &Step) -> Vec<&str> {
    step.args.iter().map(String::as_str).collect()
}

// ── built-in table ───────────────────────────────────────────────────────────

#[test]
fn builtin_table_parses() {
    let config = Config::builtin().unwrap();
    assert_eq!(config.message, "Running linters and formatters...");
    assert_eq!(config.package_dir, "d8s_ip_addresses");
    assert_eq!(config.tests_dir, "tests");
    assert_eq!(config.fail_under, 9.0);
    assert_eq!(config.step.len(), 7);
}

#[test]
fn builtin_steps_resolve_against_both_directories() {
    let dir = project_with(&["ip_addresses.py"]);
    let steps = builtin_steps(dir.path());

    let lines: Vec<String> = steps.iter().map(Step::command_line).collect();
    assert_eq!(
        lines,
        [
            "isort d8s_ip_addresses tests",
            "black d8s_ip_addresses tests",
            "mypy d8s_ip_addresses tests",
            "pylint --fail-under 9 d8s_ip_addresses/ip_addresses.py",
            "flake8 d8s_ip_addresses tests",
            "bandit -r d8s_ip_addresses",
            "black d8s_ip_addresses tests",
        ]
    );
}

#[test]
fn reformat_step_repeats_first_format_arguments() {
    let dir = project_with(&["a.py"]);
    let steps = builtin_steps(dir.path());

    assert_eq!(steps[1].program, steps[6].program);
    assert_eq!(steps[1].args, steps[6].args);
}

#[test]
fn builtin_programs_are_distinct_and_ordered() {
    let config = Config::builtin().unwrap();
    assert_eq!(
        config.programs(),
        ["isort", "black", "mypy", "pylint", "flake8", "bandit"]
    );
}

// ── {package_py} expansion ───────────────────────────────────────────────────

#[test]
fn package_py_expands_sorted_python_files_only() {
    let dir = project_with(&["zeta.py", "alpha.py", "notes.txt", ".hidden.py", "py"]);
    let steps = builtin_steps(dir.path());

    assert_eq!(
        args(&steps[3]),
        [
            "--fail-under",
            "9",
            "d8s_ip_addresses/alpha.py",
            "d8s_ip_addresses/zeta.py"
        ]
    );
}

#[test]
fn package_py_does_not_recurse() {
    let dir = project_with(&["top.py"]);
    let nested = dir.path().join("d8s_ip_addresses").join("sub");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(nested.join("deep.py"), "").unwrap();

    let steps = builtin_steps(dir.path());
    assert_eq!(
        args(&steps[3]),
        ["--fail-under", "9", "d8s_ip_addresses/top.py"]
    );
}

#[test]
fn package_py_without_matches_passes_pattern_through() {
    let dir = project_with(&["readme.md"]);
    let steps = builtin_steps(dir.path());
    assert_eq!(
        args(&steps[3]),
        ["--fail-under", "9", "d8s_ip_addresses/*.py"]
    );
}

#[test]
fn package_py_with_missing_package_passes_pattern_through() {
    let dir = tempfile::tempdir().unwrap();
    let steps = builtin_steps(dir.path());
    assert_eq!(
        args(&steps[3]),
        ["--fail-under", "9", "d8s_ip_addresses/*.py"]
    );
}

// ── custom tables ────────────────────────────────────────────────────────────

#[test]
fn custom_directories_and_threshold_are_substituted() {
    let config = Config::from_toml_str(
        r#"
        package_dir = "pkg"
        tests_dir = "spec"
        fail_under = 8.5

        [[step]]
        name = "lint"
        program = "pylint"
        args = ["--fail-under={fail_under}", "{package}", "{tests}/unit"]
        "#,
    )
    .unwrap();

    let steps = config.steps(Path::new(".")).unwrap();
    assert_eq!(
        args(&steps[0]),
        ["--fail-under=8.5", "pkg", "spec/unit"]
    );
}

#[test]
fn step_without_args_is_allowed() {
    let config = Config::from_toml_str(
        r#"
        [[step]]
        name = "version"
        program = "black"
        "#,
    )
    .unwrap();
    let steps = config.steps(Path::new(".")).unwrap();
    assert!(steps[0].args.is_empty());
    assert_eq!(config.message, "Running linters and formatters...");
}

// ── invalid tables ───────────────────────────────────────────────────────────

#[test]
fn empty_table_is_rejected() {
    let err = Config::from_toml_str("message = \"hi\"\n").unwrap_err();
    assert!(matches!(err, LintError::Invalid(_)), "got {err:?}");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Config::from_toml_str("[[step]\nname = ").unwrap_err();
    assert!(matches!(err, LintError::Parse(_)), "got {err:?}");
}

#[test]
fn unknown_key_is_a_parse_error() {
    let err = Config::from_toml_str(
        r#"
        [[step]]
        name = "isort"
        program = "isort"
        argz = ["x"]
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, LintError::Parse(_)), "got {err:?}");
}

#[test]
fn unknown_placeholder_is_rejected() {
    let err = Config::from_toml_str(
        r#"
        [[step]]
        name = "isort"
        program = "isort"
        args = ["{sources}"]
        "#,
    )
    .unwrap_err();

    match err {
        LintError::UnknownPlaceholder { step, placeholder } => {
            assert_eq!(step, "isort");
            assert_eq!(placeholder, "sources");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unknown_placeholder_message_names_it() {
    let err = Config::from_toml_str(
        r#"
        [[step]]
        name = "isort"
        program = "isort"
        args = ["{sources}"]
        "#,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "step 'isort' uses unknown placeholder '{sources}'"
    );
}

#[test]
fn embedded_package_py_is_rejected() {
    let err = Config::from_toml_str(
        r#"
        [[step]]
        name = "pylint"
        program = "pylint"
        args = ["--files={package_py}"]
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, LintError::Invalid(_)), "got {err:?}");
}

#[test]
fn empty_program_is_rejected() {
    let err = Config::from_toml_str(
        r#"
        [[step]]
        name = "nothing"
        program = ""
        "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("has no program"));
}

#[test]
fn plain_braces_without_identifier_are_left_alone() {
    let config = Config::from_toml_str(
        r#"
        [[step]]
        name = "echo"
        program = "echo"
        args = ["{}", "{ package }"]
        "#,
    )
    .unwrap();
    let steps = config.steps(Path::new(".")).unwrap();
    assert_eq!(args(&steps[0]), ["{}", "{ package }"]);
}

// ── Step display ─────────────────────────────────────────────────────────────

#[test]
fn command_line_quotes_arguments_with_spaces() {
    let step = Step::new(
        "x",
        "black",
        vec!["my dir".to_string(), "it's".to_string(), String::new()],
    );
    assert_eq!(step.command_line(), "black 'my dir' it's ''");
    assert_eq!(step.to_string(), step.command_line());
}

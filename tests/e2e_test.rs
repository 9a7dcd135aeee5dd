/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: every dependency at a single version
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("depsync")
            .args(["tests/fixtures/aligned/a", "tests/fixtures/aligned/b"])
            .assert()
            .code(0);
    }

    /// Exit code 1: at least one version mismatch
    #[test]
    fn test_exit_code_mismatch() {
        cargo_bin_cmd!("depsync")
            .arg("tests/fixtures/drift-workspace")
            .assert()
            .code(1);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("depsync").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("depsync")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: no search path given
    #[test]
    fn test_exit_code_no_paths() {
        cargo_bin_cmd!("depsync")
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Usage: depsync"));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("depsync")
            .args(["--invalid-option", "."])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("depsync")
            .args(["-f", "invalid_format", "tests/fixtures/aligned/a"])
            .assert()
            .code(2);
    }

    /// Exit code 3: manifest that cannot be parsed
    #[test]
    fn test_exit_code_application_error_parse_failure() {
        cargo_bin_cmd!("depsync")
            .arg("tests/fixtures/broken")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse manifest file"))
            .stderr(predicate::str::contains("unknown directive: requires"));
    }

    /// Exit code 3: invalid ignore pattern
    #[test]
    fn test_exit_code_application_error_invalid_pattern() {
        cargo_bin_cmd!("depsync")
            .args(["-i", "github.com/google/uuid@v1", "tests/fixtures/aligned/a"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("invalid character '@'"));
    }

    /// Exit code 0: nonexistent path is a warning, not an error
    #[test]
    fn test_exit_code_nonexistent_path() {
        cargo_bin_cmd!("depsync")
            .arg("/nonexistent/path/that/does/not/exist")
            .assert()
            .code(0)
            .stderr(predicate::str::contains("does not exist"))
            .stderr(predicate::str::contains("nothing to check"));
    }
}

#[test]
fn test_e2e_text_report() {
    let output = cargo_bin_cmd!("depsync")
        .arg("tests/fixtures/drift-workspace/go.work")
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "[!] Mismatch for `github.com/google/uuid`. Found 2 versions - {v1.3.0,v1.6.0}"
    );
    assert!(lines[1].starts_with("\t- v1.3.0: "));
    assert!(lines[1].ends_with("drift-workspace/worker/go.mod"));
    assert!(lines[2].ends_with("drift-workspace/api/go.mod"));
    assert_eq!(
        lines[3],
        "[!] Mismatch for `golang.org/x/sync`. Found 2 versions - {v0.6.0,v0.7.0}"
    );
}

#[test]
fn test_e2e_empty_path_checks_current_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    let svc = dir.path().join("svc");
    std::fs::create_dir(&svc).unwrap();
    std::fs::write(
        dir.path().join("go.mod"),
        "module example.com/root\n\ngo 1.22\n\nrequire example.com/pkg v1.2.0\n",
    )
    .unwrap();
    std::fs::write(
        svc.join("go.mod"),
        "module example.com/svc\n\ngo 1.22\n\nrequire example.com/pkg v1.3.0\n",
    )
    .unwrap();

    cargo_bin_cmd!("depsync")
        .current_dir(dir.path())
        .args(["", "svc"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "[!] Mismatch for `example.com/pkg`. Found 2 versions - {v1.2.0,v1.3.0}",
        ));
}

#[test]
fn test_e2e_aligned_text_report_is_empty() {
    cargo_bin_cmd!("depsync")
        .args(["tests/fixtures/aligned/a/go.mod", "tests/fixtures/aligned/b/go.mod"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "All 2 dependency(ies) are required at a single version",
        ));
}

#[test]
fn test_e2e_json_format() {
    let output = cargo_bin_cmd!("depsync")
        .args(["-f", "json", "tests/fixtures/drift-workspace"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["metadata"]["tool_name"], "depsync");
    assert_eq!(json["summary"]["manifests"], 2);
    assert_eq!(json["summary"]["dependencies"], 2);
    assert_eq!(json["summary"]["mismatches"], 2);
    assert_eq!(json["mismatches"][0]["dependency"], "github.com/google/uuid");
    assert_eq!(json["mismatches"][0]["version_count"], 2);
}

#[test]
fn test_e2e_markdown_format() {
    cargo_bin_cmd!("depsync")
        .args(["--format", "markdown", "tests/fixtures/drift-workspace"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("# Dependency Version Report"))
        .stdout(predicate::str::contains(
            "### [`golang.org/x/sync`](https://pkg.go.dev/golang.org/x/sync) (2 versions)",
        ));
}

#[test]
fn test_e2e_ignore_pattern() {
    cargo_bin_cmd!("depsync")
        .args(["-i", "golang.org/x/*", "tests/fixtures/drift-workspace"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("github.com/google/uuid"))
        .stdout(predicate::str::contains("golang.org/x/sync").not());

    cargo_bin_cmd!("depsync")
        .args([
            "-i",
            "golang.org/x/*",
            "-i",
            "github.com/google/*",
            "tests/fixtures/drift-workspace",
        ])
        .assert()
        .code(0);
}

#[test]
fn test_e2e_skip_indirect() {
    cargo_bin_cmd!("depsync")
        .args(["--skip-indirect", "tests/fixtures/drift-workspace"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("golang.org/x/sync").not());
}

#[test]
fn test_e2e_output_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let report = dir.path().join("report.json");

    cargo_bin_cmd!("depsync")
        .args(["-f", "json", "-o"])
        .arg(&report)
        .arg("tests/fixtures/drift-workspace")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Report written to"));

    let content = std::fs::read_to_string(&report).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["summary"]["mismatches"], 2);
}

#[test]
fn test_e2e_output_file_missing_directory() {
    cargo_bin_cmd!("depsync")
        .args(["-o", "/nonexistent/dir/report.txt", "tests/fixtures/aligned/a"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to write to file"));
}

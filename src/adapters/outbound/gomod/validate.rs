//! Argument checks for directives shared by `go.mod` and `go.work`.

use super::version as go_version;
use super::syntax::Directive;
use crate::shared::Result;

/// Checks that a directive has exactly `count` arguments
pub fn expect_args(file_name: &str, directive: &Directive, count: usize, usage: &str) -> Result<()> {
    if directive.args.len() != count {
        anyhow::bail!("{}:{}: usage: {}", file_name, directive.line, usage);
    }
    Ok(())
}

/// Checks a `go` or `toolchain`-style language version such as `1.22`, `1.22.1` or `1.23rc1`
pub fn check_go_version(file_name: &str, directive: &Directive) -> Result<()> {
    expect_args(file_name, directive, 1, "go 1.23.0")?;
    let version = &directive.args[0];
    if !is_go_version(version) {
        anyhow::bail!(
            "{}:{}: invalid go version '{}': must match format 1.23.0",
            file_name,
            directive.line,
            version
        );
    }
    Ok(())
}

fn is_go_version(version: &str) -> bool {
    let release_end = version
        .find(|c: char| c.is_ascii_lowercase())
        .unwrap_or(version.len());
    let (release, suffix) = version.split_at(release_end);

    let parts: Vec<&str> = release.split('.').collect();
    if !(2..=3).contains(&parts.len()) || !parts.iter().all(|p| is_decimal(p)) {
        return false;
    }
    if parts[0] == "0" {
        return false;
    }

    if suffix.is_empty() {
        return true;
    }
    let letters = suffix
        .bytes()
        .take_while(|b| b.is_ascii_lowercase())
        .count();
    let number = &suffix[letters..];
    !number.is_empty() && is_decimal(number)
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && !(s.len() > 1 && s.starts_with('0'))
}

/// Checks `replace old [v] => new [v]`
///
/// The left side is a module path with an optional version; the right side
/// is a module path with a version, or a file path without one.
pub fn check_replace(file_name: &str, directive: &Directive) -> Result<()> {
    let usage = "replace module/path [v1.2.3] => other/module v1.4\n\t or replace module/path [v1.2.3] => ../local/directory";
    let arrow = directive
        .args
        .iter()
        .position(|a| a == "=>")
        .ok_or_else(|| anyhow::anyhow!("{}:{}: usage: {}", file_name, directive.line, usage))?;

    let (old, new) = (&directive.args[..arrow], &directive.args[arrow + 1..]);
    if old.is_empty() || old.len() > 2 || new.is_empty() || new.len() > 2 {
        anyhow::bail!("{}:{}: usage: {}", file_name, directive.line, usage);
    }

    for version in old.get(1).into_iter().chain(new.get(1)) {
        if !go_version::is_valid(version) {
            anyhow::bail!(
                "{}:{}: replace {}: version \"{}\" invalid: must be of the form v1.2.3",
                file_name,
                directive.line,
                old[0],
                version
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directive(verb: &str, args: &[&str]) -> Directive {
        Directive {
            verb: verb.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            comment: None,
            line: 7,
        }
    }

    #[test]
    fn test_go_versions() {
        for v in ["1.21", "1.21.0", "1.22.10", "1.23rc1", "1.21beta2"] {
            assert!(is_go_version(v), "{} should be accepted", v);
        }
        for v in ["1", "go1.21", "1.021", "0.1", "1.21.", "1.23rc", "1.21.0.1"] {
            assert!(!is_go_version(v), "{} should be rejected", v);
        }
    }

    #[test]
    fn test_check_go_version_error() {
        let err = check_go_version("go.mod", &directive("go", &["latest"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "go.mod:7: invalid go version 'latest': must match format 1.23.0"
        );
    }

    #[test]
    fn test_expect_args() {
        let d = directive("use", &["./a", "./b"]);
        let err = expect_args("go.work", &d, 1, "use local/dir").unwrap_err();
        assert_eq!(err.to_string(), "go.work:7: usage: use local/dir");
    }

    #[test]
    fn test_check_replace_forms() {
        assert!(check_replace("go.mod", &directive("replace", &["a.io/x", "=>", "../x"])).is_ok());
        assert!(check_replace(
            "go.mod",
            &directive("replace", &["a.io/x", "v1.0.0", "=>", "b.io/x", "v1.1.0"])
        )
        .is_ok());
        assert!(check_replace("go.mod", &directive("replace", &["a.io/x", "../x"])).is_err());
        assert!(check_replace("go.mod", &directive("replace", &["=>", "../x"])).is_err());
    }

    #[test]
    fn test_check_replace_invalid_version() {
        let err = check_replace(
            "go.mod",
            &directive("replace", &["a.io/x", "1.0", "=>", "../x"]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("version \"1.0\" invalid"));
    }
}

use super::version as go_version;
use super::syntax::{parse_directives, Directive};
use super::validate::{check_go_version, check_replace, expect_args};
use crate::consistency::domain::Requirement;
use crate::ports::outbound::ManifestParser;
use crate::shared::Result;
use std::path::Path;

const KNOWN_DIRECTIVES: &[&str] = &[
    "module",
    "go",
    "toolchain",
    "godebug",
    "require",
    "exclude",
    "replace",
    "retract",
    "tool",
    "ignore",
];

/// GoModParser adapter reading `require` directives from `go.mod` files
///
/// The whole file is validated, so a typo in a `replace` line fails the
/// run the same way `go build` would, but only `require` entries are
/// returned. Versions are returned in canonical form.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoModParser;

impl GoModParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_require(file_name: &str, directive: &Directive) -> Result<Requirement> {
        expect_args(file_name, directive, 2, "require module/path v1.2.3")?;
        let (path, version) = (&directive.args[0], &directive.args[1]);

        let canonical = go_version::canonical(version).ok_or_else(|| {
            anyhow::anyhow!(
                "{}:{}: require {}: version \"{}\" invalid: must be of the form v1.2.3",
                file_name,
                directive.line,
                path,
                version
            )
        })?;

        let requirement = Requirement::new(path.clone(), canonical)
            .map_err(|e| anyhow::anyhow!("{}:{}: {}", file_name, directive.line, e))?;
        Ok(requirement.with_indirect(directive.is_indirect()))
    }

    fn check_exclude(file_name: &str, directive: &Directive) -> Result<()> {
        expect_args(file_name, directive, 2, "exclude module/path v1.2.3")?;
        let version = &directive.args[1];
        if !go_version::is_valid(version) {
            anyhow::bail!(
                "{}:{}: exclude {}: version \"{}\" invalid: must be of the form v1.2.3",
                file_name,
                directive.line,
                directive.args[0],
                version
            );
        }
        Ok(())
    }
}

impl ManifestParser for GoModParser {
    fn parse_requirements(&self, path: &Path, content: &str) -> Result<Vec<Requirement>> {
        let file_name = path.display().to_string();
        let directives = parse_directives(&file_name, content)?;

        let mut requirements = Vec::new();
        let mut seen_module = false;

        for directive in &directives {
            match directive.verb.as_str() {
                "module" => {
                    if seen_module {
                        anyhow::bail!("{}:{}: repeated module statement", file_name, directive.line);
                    }
                    seen_module = true;
                    expect_args(&file_name, directive, 1, "module module/path")?;
                }
                "go" => check_go_version(&file_name, directive)?,
                "toolchain" => expect_args(&file_name, directive, 1, "toolchain go1.23.0")?,
                "require" => requirements.push(Self::parse_require(&file_name, directive)?),
                "exclude" => Self::check_exclude(&file_name, directive)?,
                "replace" => check_replace(&file_name, directive)?,
                verb if KNOWN_DIRECTIVES.contains(&verb) => {
                    if directive.args.is_empty() {
                        anyhow::bail!("{}:{}: usage: {} ...", file_name, directive.line, verb);
                    }
                }
                verb => anyhow::bail!("{}:{}: unknown directive: {}", file_name, directive.line, verb),
            }
        }

        Ok(requirements)
    }
}

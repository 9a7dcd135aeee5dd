use super::syntax::parse_directives;
use super::validate::{check_go_version, check_replace, expect_args};
use crate::ports::outbound::WorkspaceParser;
use crate::shared::Result;
use std::path::Path;

/// GoWorkParser adapter reading `use` directives from `go.work` files
#[derive(Debug, Clone, Copy, Default)]
pub struct GoWorkParser;

impl GoWorkParser {
    pub fn new() -> Self {
        Self
    }
}

impl WorkspaceParser for GoWorkParser {
    fn parse_members(&self, path: &Path, content: &str) -> Result<Vec<String>> {
        let file_name = path.display().to_string();
        let directives = parse_directives(&file_name, content)?;

        let mut members = Vec::new();
        for directive in &directives {
            match directive.verb.as_str() {
                "use" => {
                    expect_args(&file_name, directive, 1, "use local/dir")?;
                    members.push(directive.args[0].clone());
                }
                "go" => check_go_version(&file_name, directive)?,
                "toolchain" => expect_args(&file_name, directive, 1, "toolchain go1.23.0")?,
                "godebug" => {
                    if directive.args.is_empty() {
                        anyhow::bail!("{}:{}: usage: godebug key=value", file_name, directive.line);
                    }
                }
                "replace" => check_replace(&file_name, directive)?,
                verb => anyhow::bail!("{}:{}: unknown directive: {}", file_name, directive.line, verb),
            }
        }

        Ok(members)
    }
}

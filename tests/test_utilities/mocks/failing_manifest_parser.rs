use depsync::prelude::*;
use std::path::Path;

/// Mock ManifestParser that rejects every manifest
#[derive(Default, Clone, Copy)]
pub struct FailingManifestParser;

impl ManifestParser for FailingManifestParser {
    fn parse_requirements(&self, path: &Path, _content: &str) -> Result<Vec<Requirement>> {
        anyhow::bail!("{}:1: unexpected token", path.display())
    }
}

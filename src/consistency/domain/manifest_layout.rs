/// File names that identify manifests and workspace files on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLayout {
    manifest_file_name: String,
    workspace_file_name: String,
}

impl ManifestLayout {
    pub fn new(manifest_file_name: impl Into<String>, workspace_file_name: impl Into<String>) -> Self {
        Self {
            manifest_file_name: manifest_file_name.into(),
            workspace_file_name: workspace_file_name.into(),
        }
    }

    /// Go modules: `go.mod` manifests grouped by `go.work` workspaces
    pub fn go() -> Self {
        Self::new("go.mod", "go.work")
    }

    pub fn manifest_file_name(&self) -> &str {
        &self.manifest_file_name
    }

    pub fn workspace_file_name(&self) -> &str {
        &self.workspace_file_name
    }
}

impl Default for ManifestLayout {
    fn default() -> Self {
        Self::go()
    }
}

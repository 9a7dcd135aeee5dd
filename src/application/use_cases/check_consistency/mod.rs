use crate::application::dto::{CheckRequest, CheckResponse};
use crate::consistency::domain::{DetectionResult, DiscoveryOutcome, ManifestLayout};
use crate::consistency::services::{
    DependencyFilter, ManifestDiscovery, ManifestLoader, MismatchDetector, RequirementAggregator,
};
use crate::ports::outbound::{
    ManifestFileReader, ManifestParser, ProgressReporter, VersionComparator, WorkspaceParser,
};
use crate::shared::Result;

/// CheckConsistencyUseCase - Core use case for version consistency checks
///
/// Runs discovery, loads every manifest, aggregates requirements per
/// dependency, applies the user's filters and detects mismatches. Any
/// read or parse failure aborts the run; nothing is reported from a
/// partial set of manifests.
///
/// # Type Parameters
/// * `FR` - ManifestFileReader implementation
/// * `MP` - ManifestParser implementation
/// * `WP` - WorkspaceParser implementation
/// * `VC` - VersionComparator implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckConsistencyUseCase<FR, MP, WP, VC, PR> {
    file_reader: FR,
    manifest_parser: MP,
    workspace_parser: WP,
    version_comparator: VC,
    progress_reporter: PR,
    layout: ManifestLayout,
}

impl<FR, MP, WP, VC, PR> CheckConsistencyUseCase<FR, MP, WP, VC, PR>
where
    FR: ManifestFileReader,
    MP: ManifestParser,
    WP: WorkspaceParser,
    VC: VersionComparator,
    PR: ProgressReporter,
{
    /// Creates a new CheckConsistencyUseCase with injected dependencies
    pub fn new(
        file_reader: FR,
        manifest_parser: MP,
        workspace_parser: WP,
        version_comparator: VC,
        progress_reporter: PR,
        layout: ManifestLayout,
    ) -> Self {
        Self {
            file_reader,
            manifest_parser,
            workspace_parser,
            version_comparator,
            progress_reporter,
            layout,
        }
    }

    /// Executes the consistency check
    ///
    /// # Errors
    /// Returns an error if an ignore pattern is invalid, or if a workspace
    /// or manifest file that exists cannot be read or parsed
    pub fn execute(&self, request: CheckRequest) -> Result<CheckResponse> {
        // Validate patterns before touching the file system
        let filter = DependencyFilter::new(request.ignore_patterns.clone(), request.skip_indirect)?;

        let outcome = self.discover(&request)?;
        let manifests = outcome.manifests.into_vec();

        if manifests.is_empty() {
            self.progress_reporter.report_warning(&format!(
                "No {} files found in the given paths; nothing to check.",
                self.layout.manifest_file_name()
            ));
            return Ok(CheckResponse::new(
                manifests,
                outcome.skipped,
                Vec::new(),
                DetectionResult::default(),
            ));
        }

        let mut aggregator = RequirementAggregator::new();
        let loader = ManifestLoader::new(&self.file_reader, &self.manifest_parser);
        let total = manifests.len();
        for (index, manifest) in manifests.iter().enumerate() {
            let requirements = match loader.load_requirements(manifest) {
                Ok(requirements) => filter.filter_requirements(requirements),
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "❌ Stopped after loading {} of {} manifest(s)",
                        index, total
                    ));
                    return Err(e);
                }
            };
            aggregator.add_manifest(manifest, requirements);
            self.progress_reporter.report_progress(
                index + 1,
                total,
                Some(&manifest.display().to_string()),
            );
        }

        let mut dep_map = aggregator.finish(&self.version_comparator);
        let before_filter = dep_map.len();
        filter.filter_dep_map(&mut dep_map);
        if dep_map.len() < before_filter {
            self.progress_reporter.report(&format!(
                "🚫 Ignored {} dependency(ies) based on filters",
                before_filter - dep_map.len()
            ));
        }

        let unmatched_patterns = filter.unmatched_patterns();
        for pattern in &unmatched_patterns {
            self.progress_reporter.report_warning(&format!(
                "Ignore pattern '{}' did not match any dependency.",
                pattern
            ));
        }

        let detection = MismatchDetector::detect(&dep_map);
        self.report_outcome(&detection);

        Ok(CheckResponse::new(
            manifests,
            outcome.skipped,
            unmatched_patterns,
            detection,
        ))
    }

    fn discover(&self, request: &CheckRequest) -> Result<DiscoveryOutcome> {
        self.progress_reporter.report(&format!(
            "🔍 Discovering {} files from {} search path(s)...",
            self.layout.manifest_file_name(),
            request.start_paths.len()
        ));

        let discovery = ManifestDiscovery::new(&self.file_reader, &self.workspace_parser, &self.layout);
        let outcome = discovery.discover(&request.start_paths, &request.working_dir)?;

        for skipped in &outcome.skipped {
            self.progress_reporter
                .report_warning(&format!("Skipping {}", skipped));
        }
        if !outcome.manifests.is_empty() {
            self.progress_reporter.report(&format!(
                "📦 Found {} manifest(s)",
                outcome.manifests.len()
            ));
        }

        Ok(outcome)
    }

    fn report_outcome(&self, detection: &DetectionResult) {
        if detection.has_mismatch() {
            self.progress_reporter.report_completion(&format!(
                "❌ {} of {} dependency(ies) are required at more than one version",
                detection.reports().len(),
                detection.checked_dependencies()
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "✅ All {} dependency(ies) are required at a single version",
                detection.checked_dependencies()
            ));
        }
    }
}

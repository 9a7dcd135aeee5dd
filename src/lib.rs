//! depsync - dependency version consistency checker for Go workspaces
//!
//! Finds every `go.mod` reachable from a set of start paths (manifests,
//! `go.work` files or directories), groups their `require` entries by
//! module path and reports modules that are required at more than one
//! version. Follows hexagonal architecture:
//!
//! - **Domain Layer** (`consistency`): domain model and pure services
//! - **Application Layer** (`application`): use case, DTOs, read models, factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): Go grammar, file system, console, formatters
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depsync::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = CheckConsistencyUseCase::new(
//!     FileSystemReader::new(),
//!     GoModParser::new(),
//!     GoWorkParser::new(),
//!     GoSemverComparator::new(),
//!     StderrProgressReporter::new(),
//!     ManifestLayout::go(),
//! );
//!
//! let request = CheckRequest::builder().start_path("go.work").build()?;
//! let response = use_case.execute(request)?;
//!
//! for report in response.detection.reports() {
//!     println!("{} is required at {} versions", report.dependency(), report.version_count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod consistency;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
    pub use crate::adapters::outbound::gomod::{GoModParser, GoSemverComparator, GoWorkParser};
    pub use crate::application::dto::{CheckRequest, CheckResponse, OutputFormat};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::read_models::{ConsistencyReadModel, ConsistencyReadModelBuilder};
    pub use crate::application::use_cases::CheckConsistencyUseCase;
    pub use crate::consistency::domain::{
        DepMap, DependencyPath, DependencyReport, DetectionResult, DiscoveryOutcome,
        ManifestLayout, ManifestSet, ReportMetadata, Requirement, RequirementRecord, SkipReason,
        SkippedPath, UniqueSet, VersionString,
    };
    pub use crate::consistency::services::{
        DependencyFilter, ManifestDiscovery, ManifestLoader, MismatchDetector,
        RequirementAggregator,
    };
    pub use crate::ports::outbound::{
        ManifestFileReader, ManifestParser, OutputPresenter, ProgressReporter, ReportFormatter,
        VersionComparator, WorkspaceParser,
    };
    pub use crate::shared::error::{DepsyncError, ExitCode};
    pub use crate::shared::Result;
}

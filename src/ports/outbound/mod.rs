/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, manifest grammar,
/// version ordering, console).
pub mod formatter;
pub mod manifest_file_reader;
pub mod manifest_parser;
pub mod output_presenter;
pub mod progress_reporter;
pub mod version_comparator;
pub mod workspace_parser;

pub use formatter::ReportFormatter;
pub use manifest_file_reader::ManifestFileReader;
pub use manifest_parser::ManifestParser;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use version_comparator::VersionComparator;
pub use workspace_parser::WorkspaceParser;

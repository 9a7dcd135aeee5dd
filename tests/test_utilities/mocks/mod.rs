/// Mock implementations for testing
mod failing_manifest_parser;
mod in_memory_file_system;
mod mock_progress_reporter;

pub use failing_manifest_parser::FailingManifestParser;
pub use in_memory_file_system::InMemoryFileSystem;
pub use mock_progress_reporter::MockProgressReporter;

/// Go module adapters: `go.mod`/`go.work` grammar and version ordering
mod mod_file;
mod syntax;
mod validate;
pub mod version;
mod work_file;

pub use mod_file::GoModParser;
pub use version::GoSemverComparator;
pub use work_file::GoWorkParser;

/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// the Go manifest grammar, the file system, the console and report formats.
pub mod outbound;

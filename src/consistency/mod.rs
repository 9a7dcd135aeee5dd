/// Consistency checking core: domain model and pure services
///
/// Nothing in here touches the file system or the console directly;
/// I/O goes through the outbound ports.
pub mod domain;
pub mod services;

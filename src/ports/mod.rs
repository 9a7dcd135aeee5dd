/// Ports module defining interfaces for hexagonal architecture
///
/// The consistency core only talks to the outside world through these
/// driven ports; the CLI drives the use case directly.
pub mod outbound;

/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist; the use cases themselves are the
/// driving API.
pub mod outbound;

/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod dependency_sync_port;

pub use dependency_sync_port::DependencySyncPort;

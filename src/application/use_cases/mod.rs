/// Use cases module containing application business logic orchestration
mod sync_dependencies;

pub use sync_dependencies::SyncDependenciesUseCase;

pub mod backend;
pub mod domain;
pub mod ids;
pub mod prefs;

pub use backend::{JsonFileStorage, MemoryStorage, StorageBackend};
pub use domain::DomainStore;

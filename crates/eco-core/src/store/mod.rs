pub mod gateway;
pub mod provider;

pub use gateway::UserStore;
pub use provider::{FileStorage, MemoryStorage, StorageProvider};

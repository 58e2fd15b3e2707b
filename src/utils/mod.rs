// Shared helpers

pub mod constants;
pub mod datetime;
pub mod storage;

pub use constants::*;
pub use storage::{get_local_storage, KeyValueStore, LocalStorage, MemoryStorage};

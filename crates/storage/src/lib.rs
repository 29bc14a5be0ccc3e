pub mod dto;
pub mod error;
pub mod models;
pub mod store;

pub use store::memory::MemoryStore;
pub use store::postgres::{Database, DatabaseConfig};
pub use store::{EntityStore, StoreSession};

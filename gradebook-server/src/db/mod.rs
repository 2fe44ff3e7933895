//! Database layer - connection pool, store abstraction and repositories
//!
//! Handlers only ever see `dyn Store`. `PgStore` issues one parameterized
//! statement per call against a shared `PgPool`; `MemoryStore` keeps the
//! same contract in process for tests.

pub mod error;
pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

pub use error::DbError;
pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::{MarkRepo, StudentRepo};
pub use store::{PgStore, Store};

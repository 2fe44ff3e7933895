//! gradebook-server: HTTP/JSON CRUD API over students and their marks
//!
//! The router is built around an injected [`db::Store`]: production uses
//! [`db::PgStore`] over a sqlx `PgPool`, tests use [`db::MemoryStore`].

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, MemoryStore, PgStore, Store};
pub use http::{build_router, run_server, AppState, ServerConfig};

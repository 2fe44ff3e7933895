//! PostgreSQL repositories
//!
//! Each method issues a single parameterized statement (list methods issue
//! a COUNT and a page query). Columns are cast on the way out so integer,
//! serial and numeric schema variants decode into the same Rust types.

pub mod marks;
pub mod students;

pub use marks::MarkRepo;
pub use students::StudentRepo;

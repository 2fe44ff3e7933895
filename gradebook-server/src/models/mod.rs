//! Domain models
//!
//! Row types mirror the `students` and `marks` tables. Request bodies are
//! separate structs so a missing or mistyped field is rejected at
//! deserialization instead of reaching the store.

pub mod mark;
pub mod pagination;
pub mod student;

pub use mark::{Mark, MarkUpdate, NewMark};
pub use pagination::{PageMeta, Paginated, Pagination, PaginationParams};
pub use student::{Student, StudentInput, StudentWithMarks};

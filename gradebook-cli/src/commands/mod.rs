//! Command implementations for gradebook CLI

pub mod completions;
pub mod serve;

pub use completions::run_completions;
pub use serve::run_serve;

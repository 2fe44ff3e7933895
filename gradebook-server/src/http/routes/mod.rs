//! Route handlers organized by resource

pub mod health;
pub mod marks;
pub mod students;

use serde::Serialize;

/// Acknowledgement body for updates and deletes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

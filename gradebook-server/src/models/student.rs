//! Student records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Mark;

/// Student row from the `students` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Body for creating or replacing a student.
///
/// Updates are full replacements: all three fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl Student {
    /// Build a row from an input and a store-generated id.
    pub fn from_input(id: i64, input: StudentInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            age: input.age,
        }
    }
}

/// Single-student read: the row plus every mark that references it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentWithMarks {
    pub student: Student,
    pub marks: Vec<Mark>,
}

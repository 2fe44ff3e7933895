//! Mark records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Mark row from the `marks` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Mark {
    pub id: i64,
    pub student_id: i64,
    pub subject: String,
    pub score: f64,
}

/// Body for recording a mark.
///
/// `student_id` is not checked against `students`; any foreign key
/// constraint lives in the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMark {
    pub student_id: i64,
    pub subject: String,
    pub score: f64,
}

/// Body for replacing a mark's subject and score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkUpdate {
    pub subject: String,
    pub score: f64,
}

impl Mark {
    /// Build a row from a new mark and a store-generated id.
    pub fn from_new(id: i64, new: NewMark) -> Self {
        Self {
            id,
            student_id: new.student_id,
            subject: new.subject,
            score: new.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_score_is_accepted() {
        let mark: NewMark =
            serde_json::from_str(r#"{"student_id":7,"subject":"Math","score":90}"#).unwrap();
        assert_eq!(mark.score, 90.0);
    }

    #[test]
    fn update_requires_score() {
        assert!(serde_json::from_str::<MarkUpdate>(r#"{"subject":"Math"}"#).is_err());
    }
}

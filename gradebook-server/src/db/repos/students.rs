//! Student repository

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{Paginated, Pagination, Student, StudentInput};

const STUDENT_COLUMNS: &str = "id::int8 AS id, name, email, age::int4 AS age";

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a student and return the stored row.
    pub async fn create(&self, input: &StudentInput) -> Result<Student, DbError> {
        let sql = format!(
            "INSERT INTO students (name, email, age) VALUES ($1, $2, $3) RETURNING {}",
            STUDENT_COLUMNS
        );
        let student: Student = sqlx::query_as(&sql)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.age)
            .fetch_one(self.pool)
            .await?;

        Ok(student)
    }

    /// List one page of students ordered by id, with the table's total row count.
    pub async fn list(&self, page: Pagination) -> Result<Paginated<Student>, DbError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students")
            .fetch_one(self.pool)
            .await?;

        let sql = format!(
            "SELECT {} FROM students ORDER BY id LIMIT $1 OFFSET $2",
            STUDENT_COLUMNS
        );
        let students: Vec<Student> = sqlx::query_as(&sql)
            .bind(i64::try_from(page.limit()).unwrap_or(i64::MAX))
            .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .fetch_all(self.pool)
            .await?;

        Ok(page.paginate(students, total))
    }

    /// Get a single student by id.
    pub async fn get(&self, id: i64) -> Result<Student, DbError> {
        let sql = format!("SELECT {} FROM students WHERE id = $1", STUDENT_COLUMNS);
        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "Student",
                id: id.to_string(),
            })
    }

    /// Overwrite name, email and age. Returns the number of rows touched.
    pub async fn update(&self, id: i64, input: &StudentInput) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE students SET name = $1, email = $2, age = $3 WHERE id = $4")
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.age)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete a student. Returns the number of rows removed.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

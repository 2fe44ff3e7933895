//! Mark repository

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{Mark, MarkUpdate, NewMark, Paginated, Pagination};

const MARK_COLUMNS: &str =
    "id::int8 AS id, student_id::int8 AS student_id, subject, score::float8 AS score";

/// Mark repository
pub struct MarkRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MarkRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a mark and return the stored row.
    pub async fn create(&self, new: &NewMark) -> Result<Mark, DbError> {
        let sql = format!(
            "INSERT INTO marks (student_id, subject, score) VALUES ($1, $2, $3) RETURNING {}",
            MARK_COLUMNS
        );
        let mark: Mark = sqlx::query_as(&sql)
            .bind(new.student_id)
            .bind(&new.subject)
            .bind(new.score)
            .fetch_one(self.pool)
            .await?;

        Ok(mark)
    }

    /// All marks for a student, ordered by id.
    pub async fn all_for_student(&self, student_id: i64) -> Result<Vec<Mark>, DbError> {
        let sql = format!(
            "SELECT {} FROM marks WHERE student_id = $1 ORDER BY id",
            MARK_COLUMNS
        );
        let marks = sqlx::query_as(&sql)
            .bind(student_id)
            .fetch_all(self.pool)
            .await?;

        Ok(marks)
    }

    /// One page of a student's marks, with the student's total mark count.
    pub async fn list_for_student(
        &self,
        student_id: i64,
        page: Pagination,
    ) -> Result<Paginated<Mark>, DbError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM marks WHERE student_id = $1")
            .bind(student_id)
            .fetch_one(self.pool)
            .await?;

        let sql = format!(
            "SELECT {} FROM marks WHERE student_id = $1 ORDER BY id LIMIT $2 OFFSET $3",
            MARK_COLUMNS
        );
        let marks: Vec<Mark> = sqlx::query_as(&sql)
            .bind(student_id)
            .bind(i64::try_from(page.limit()).unwrap_or(i64::MAX))
            .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .fetch_all(self.pool)
            .await?;

        Ok(page.paginate(marks, total))
    }

    /// Overwrite subject and score. Returns the number of rows touched.
    pub async fn update(&self, id: i64, update: &MarkUpdate) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE marks SET subject = $1, score = $2 WHERE id = $3")
            .bind(&update.subject)
            .bind(update.score)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete a mark. Returns the number of rows removed.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM marks WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

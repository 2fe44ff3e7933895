//! Store abstraction shared by every handler

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, MarkRepo, StudentRepo};
use crate::models::{Mark, MarkUpdate, NewMark, Paginated, Pagination, Student, StudentInput};

/// Persistence operations behind the HTTP API.
///
/// Every method maps to one statement (two for paginated lists). Nothing is
/// wrapped in a transaction, and updates/deletes of missing ids succeed.
#[async_trait]
pub trait Store: Send + Sync {
    async fn create_student(&self, input: StudentInput) -> Result<Student, DbError>;

    async fn list_students(&self, page: Pagination) -> Result<Paginated<Student>, DbError>;

    /// Returns `DbError::NotFound` when no student has this id.
    async fn get_student(&self, id: i64) -> Result<Student, DbError>;

    async fn update_student(&self, id: i64, input: StudentInput) -> Result<(), DbError>;

    async fn delete_student(&self, id: i64) -> Result<(), DbError>;

    async fn create_mark(&self, new: NewMark) -> Result<Mark, DbError>;

    /// Every mark referencing `student_id`, ordered by id.
    async fn marks_for_student(&self, student_id: i64) -> Result<Vec<Mark>, DbError>;

    async fn list_marks(
        &self,
        student_id: i64,
        page: Pagination,
    ) -> Result<Paginated<Mark>, DbError>;

    async fn update_mark(&self, id: i64, update: MarkUpdate) -> Result<(), DbError>;

    async fn delete_mark(&self, id: i64) -> Result<(), DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_student(&self, input: StudentInput) -> Result<Student, DbError> {
        StudentRepo::new(&self.pool).create(&input).await
    }

    async fn list_students(&self, page: Pagination) -> Result<Paginated<Student>, DbError> {
        StudentRepo::new(&self.pool).list(page).await
    }

    async fn get_student(&self, id: i64) -> Result<Student, DbError> {
        StudentRepo::new(&self.pool).get(id).await
    }

    async fn update_student(&self, id: i64, input: StudentInput) -> Result<(), DbError> {
        let rows = StudentRepo::new(&self.pool).update(id, &input).await?;
        tracing::debug!(id, rows, "student update applied");
        Ok(())
    }

    async fn delete_student(&self, id: i64) -> Result<(), DbError> {
        let rows = StudentRepo::new(&self.pool).delete(id).await?;
        tracing::debug!(id, rows, "student delete applied");
        Ok(())
    }

    async fn create_mark(&self, new: NewMark) -> Result<Mark, DbError> {
        MarkRepo::new(&self.pool).create(&new).await
    }

    async fn marks_for_student(&self, student_id: i64) -> Result<Vec<Mark>, DbError> {
        MarkRepo::new(&self.pool).all_for_student(student_id).await
    }

    async fn list_marks(
        &self,
        student_id: i64,
        page: Pagination,
    ) -> Result<Paginated<Mark>, DbError> {
        MarkRepo::new(&self.pool)
            .list_for_student(student_id, page)
            .await
    }

    async fn update_mark(&self, id: i64, update: MarkUpdate) -> Result<(), DbError> {
        let rows = MarkRepo::new(&self.pool).update(id, &update).await?;
        tracing::debug!(id, rows, "mark update applied");
        Ok(())
    }

    async fn delete_mark(&self, id: i64) -> Result<(), DbError> {
        let rows = MarkRepo::new(&self.pool).delete(id).await?;
        tracing::debug!(id, rows, "mark delete applied");
        Ok(())
    }
}

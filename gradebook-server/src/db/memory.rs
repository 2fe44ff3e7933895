//! In-memory store for tests and local runs without PostgreSQL
//!
//! Behaves like a schema with no constraints: ids come from per-table
//! sequences starting at 1, marks may reference students that do not exist,
//! and deleting a student leaves its marks in place.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, Store};
use crate::models::{Mark, MarkUpdate, NewMark, Paginated, Pagination, Student, StudentInput};

#[derive(Debug, Default)]
struct Tables {
    students: BTreeMap<i64, Student>,
    marks: BTreeMap<i64, Mark>,
    student_seq: i64,
    mark_seq: i64,
    /// When set, every operation fails with this message
    failure: Option<String>,
}

impl Tables {
    fn check(&self) -> Result<(), DbError> {
        match &self.failure {
            Some(message) => Err(DbError::Backend(message.clone())),
            None => Ok(()),
        }
    }
}

/// Thread-safe in-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with `message`, the way an
    /// unreachable database would.
    pub async fn fail_with(&self, message: impl Into<String>) {
        self.tables.write().await.failure = Some(message.into());
    }

    /// Clear a failure set by [`MemoryStore::fail_with`].
    pub async fn recover(&self) {
        self.tables.write().await.failure = None;
    }
}

fn page_of<T: Clone>(rows: Vec<&T>, page: Pagination) -> Paginated<T> {
    let total = rows.len() as i64;
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let data = rows
        .into_iter()
        .skip(offset)
        .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
        .cloned()
        .collect();
    page.paginate(data, total)
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_student(&self, input: StudentInput) -> Result<Student, DbError> {
        let mut tables = self.tables.write().await;
        tables.check()?;

        tables.student_seq += 1;
        let student = Student::from_input(tables.student_seq, input);
        tables.students.insert(student.id, student.clone());
        Ok(student)
    }

    async fn list_students(&self, page: Pagination) -> Result<Paginated<Student>, DbError> {
        let tables = self.tables.read().await;
        tables.check()?;

        Ok(page_of(tables.students.values().collect(), page))
    }

    async fn get_student(&self, id: i64) -> Result<Student, DbError> {
        let tables = self.tables.read().await;
        tables.check()?;

        tables
            .students
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::NotFound {
                resource: "Student",
                id: id.to_string(),
            })
    }

    async fn update_student(&self, id: i64, input: StudentInput) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        tables.check()?;

        if let Some(student) = tables.students.get_mut(&id) {
            *student = Student::from_input(id, input);
        }
        Ok(())
    }

    async fn delete_student(&self, id: i64) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        tables.check()?;

        tables.students.remove(&id);
        Ok(())
    }

    async fn create_mark(&self, new: NewMark) -> Result<Mark, DbError> {
        let mut tables = self.tables.write().await;
        tables.check()?;

        tables.mark_seq += 1;
        let mark = Mark::from_new(tables.mark_seq, new);
        tables.marks.insert(mark.id, mark.clone());
        Ok(mark)
    }

    async fn marks_for_student(&self, student_id: i64) -> Result<Vec<Mark>, DbError> {
        let tables = self.tables.read().await;
        tables.check()?;

        Ok(tables
            .marks
            .values()
            .filter(|m| m.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn list_marks(
        &self,
        student_id: i64,
        page: Pagination,
    ) -> Result<Paginated<Mark>, DbError> {
        let tables = self.tables.read().await;
        tables.check()?;

        let rows: Vec<&Mark> = tables
            .marks
            .values()
            .filter(|m| m.student_id == student_id)
            .collect();
        Ok(page_of(rows, page))
    }

    async fn update_mark(&self, id: i64, update: MarkUpdate) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        tables.check()?;

        if let Some(mark) = tables.marks.get_mut(&id) {
            mark.subject = update.subject;
            mark.score = update.score;
        }
        Ok(())
    }

    async fn delete_mark(&self, id: i64) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        tables.check()?;

        tables.marks.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str) -> StudentInput {
        StudentInput {
            name: name.into(),
            email: format!("{}@example.com", name),
            age: 20,
        }
    }

    fn mark(student_id: i64, subject: &str, score: f64) -> NewMark {
        NewMark {
            student_id,
            subject: subject.into(),
            score,
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_per_table() {
        let store = MemoryStore::new();
        let a = store.create_student(student("a")).await.unwrap();
        let b = store.create_student(student("b")).await.unwrap();
        let m = store.create_mark(mark(a.id, "Math", 1.0)).await.unwrap();

        assert_eq!((a.id, b.id, m.id), (1, 2, 1));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let a = store.create_student(student("a")).await.unwrap();
        store.delete_student(a.id).await.unwrap();
        let b = store.create_student(student("b")).await.unwrap();

        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn list_pages_in_id_order() {
        let store = MemoryStore::new();
        for name in ["a", "b", "c", "d", "e", "f", "g"] {
            store.create_student(student(name)).await.unwrap();
        }

        let page = store.list_students(Pagination::new(2, 5)).await.unwrap();
        let ids: Vec<_> = page.data.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![6, 7]);
        assert_eq!(page.meta.total, 7);

        let beyond = store.list_students(Pagination::new(9, 5)).await.unwrap();
        assert!(beyond.data.is_empty());
        assert_eq!(beyond.meta.total, 7);
    }

    #[tokio::test]
    async fn marks_are_scoped_to_student() {
        let store = MemoryStore::new();
        store.create_mark(mark(1, "Math", 90.0)).await.unwrap();
        store.create_mark(mark(2, "Art", 80.0)).await.unwrap();
        store.create_mark(mark(1, "Music", 70.0)).await.unwrap();

        let marks = store.marks_for_student(1).await.unwrap();
        let subjects: Vec<_> = marks.iter().map(|m| m.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Math", "Music"]);

        let page = store.list_marks(1, Pagination::new(1, 1)).await.unwrap();
        assert_eq!(page.meta.total, 2);
        assert_eq!(page.data[0].subject, "Math");
    }

    #[tokio::test]
    async fn updates_of_missing_rows_are_no_ops() {
        let store = MemoryStore::new();
        store.update_student(5, student("ghost")).await.unwrap();
        store
            .update_mark(
                5,
                MarkUpdate {
                    subject: "None".into(),
                    score: 0.0,
                },
            )
            .await
            .unwrap();

        assert!(matches!(
            store.get_student(5).await,
            Err(DbError::NotFound { .. })
        ));
        assert!(store.marks_for_student(5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_student_keeps_marks() {
        let store = MemoryStore::new();
        let s = store.create_student(student("a")).await.unwrap();
        store.create_mark(mark(s.id, "Math", 50.0)).await.unwrap();
        store.delete_student(s.id).await.unwrap();

        assert_eq!(store.marks_for_student(s.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn injected_failure_and_recovery() {
        let store = MemoryStore::new();
        store.fail_with("connection refused").await;

        let err = store.create_student(student("a")).await.unwrap_err();
        assert_eq!(err.client_message(), "connection refused");

        store.recover().await;
        assert!(store.create_student(student("a")).await.is_ok());
    }
}

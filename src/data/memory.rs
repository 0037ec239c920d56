use crate::{
    data::{NewStudent, Student, StudentFilter, StudentPatch, StudentStore},
    error::RosterResult,
};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

/// In-process stand-in for MongoDB, keeping students in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStudentStore {
    students: RwLock<Vec<Student>>,
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn insert(&self, to_be_added: NewStudent) -> RosterResult<ObjectId> {
        let student = to_be_added.into_student(ObjectId::new());
        let id = student.id;
        self.students.write().await.push(student);
        Ok(id)
    }

    async fn list(&self, filter: &StudentFilter, limit: i64) -> RosterResult<Vec<Student>> {
        Ok(self
            .students
            .read()
            .await
            .iter()
            .filter(|student| filter.matches(student))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn get(&self, id: ObjectId) -> RosterResult<Option<Student>> {
        Ok(self
            .students
            .read()
            .await
            .iter()
            .find(|student| student.id == id)
            .cloned())
    }

    async fn update(&self, id: ObjectId, patch: &StudentPatch) -> RosterResult<bool> {
        let mut students = self.students.write().await;
        let Some(student) = students.iter_mut().find(|student| student.id == id) else {
            return Ok(false);
        };
        patch.apply(student);
        Ok(true)
    }

    async fn delete(&self, id: ObjectId) -> RosterResult<bool> {
        let mut students = self.students.write().await;
        let before = students.len();
        students.retain(|student| student.id != id);
        Ok(students.len() != before)
    }
}

use crate::error::RosterResult;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::fmt::Debug;

pub mod mongo;
pub mod student;

#[cfg(test)]
pub mod memory;

pub use student::{NewStudent, Student, StudentFilter, StudentPatch, StudentView};

/// Upper bound on the number of students a single listing returns.
pub const LIST_LIMIT: i64 = 100;

/// Storage for [`Student`]s. Every method maps onto exactly one round-trip to the backing store.
#[async_trait]
pub trait StudentStore: Send + Sync + Debug {
    /// Inserts a new student under a freshly generated id and returns that id.
    async fn insert(&self, to_be_added: NewStudent) -> RosterResult<ObjectId>;
    /// Returns at most `limit` students matching `filter`, in storage order.
    async fn list(&self, filter: &StudentFilter, limit: i64) -> RosterResult<Vec<Student>>;
    async fn get(&self, id: ObjectId) -> RosterResult<Option<Student>>;
    /// Overwrites the fields present in `patch`. Returns whether a student with `id` existed.
    async fn update(&self, id: ObjectId, patch: &StudentPatch) -> RosterResult<bool>;
    /// Returns whether a student was actually removed.
    async fn delete(&self, id: ObjectId) -> RosterResult<bool>;

    async fn shutdown(&self) {}
}

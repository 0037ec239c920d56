use crate::{
    config::DbConfig,
    data::{NewStudent, Student, StudentFilter, StudentPatch, StudentStore},
    error::{MakeQuerySnafu, OpenDatabaseSnafu, PingDatabaseSnafu, RosterResult},
};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{doc, oid::ObjectId},
};
use snafu::ResultExt;

#[derive(Clone, Debug)]
pub struct MongoStudentStore {
    client: Client,
    students: Collection<Student>,
}

impl MongoStudentStore {
    pub async fn connect(config: &DbConfig) -> RosterResult<Self> {
        let client = Client::with_uri_str(config.uri())
            .await
            .context(OpenDatabaseSnafu)?;
        let database = client.database(config.database());

        database
            .run_command(doc! { "ping": 1 })
            .await
            .context(PingDatabaseSnafu {
                database: config.database(),
            })?;
        info!(database = config.database(), "Connected to MongoDB");

        Ok(Self {
            students: database.collection(config.collection()),
            client,
        })
    }
}

#[async_trait]
impl StudentStore for MongoStudentStore {
    async fn insert(&self, to_be_added: NewStudent) -> RosterResult<ObjectId> {
        let student = to_be_added.into_student(ObjectId::new());
        self.students
            .insert_one(&student)
            .await
            .context(MakeQuerySnafu)?;
        Ok(student.id)
    }

    async fn list(&self, filter: &StudentFilter, limit: i64) -> RosterResult<Vec<Student>> {
        self.students
            .find(filter.to_document())
            .limit(limit)
            .await
            .context(MakeQuerySnafu)?
            .try_collect()
            .await
            .context(MakeQuerySnafu)
    }

    async fn get(&self, id: ObjectId) -> RosterResult<Option<Student>> {
        self.students
            .find_one(doc! { "_id": id })
            .await
            .context(MakeQuerySnafu)
    }

    async fn update(&self, id: ObjectId, patch: &StudentPatch) -> RosterResult<bool> {
        //an empty `$set` is refused by older servers, and there is nothing to write anyway
        if patch.is_empty() {
            let count = self
                .students
                .count_documents(doc! { "_id": id })
                .limit(1)
                .await
                .context(MakeQuerySnafu)?;
            return Ok(count > 0);
        }

        let result = self
            .students
            .update_one(doc! { "_id": id }, doc! { "$set": patch.to_set_document() })
            .await
            .context(MakeQuerySnafu)?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> RosterResult<bool> {
        let result = self
            .students
            .delete_one(doc! { "_id": id })
            .await
            .context(MakeQuerySnafu)?;
        Ok(result.deleted_count > 0)
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
    }
}

use crate::{
    config::RuntimeConfiguration,
    data::{StudentStore, mongo::MongoStudentStore},
    error::RosterResult,
};
use std::{ops::Deref, sync::Arc};

#[derive(Clone, Debug)]
pub struct RosterState {
    students: Arc<dyn StudentStore>,
}

impl RosterState {
    pub async fn new(config: &RuntimeConfiguration) -> RosterResult<Self> {
        let store = MongoStudentStore::connect(&config.db_config()).await?;
        Ok(Self::with_store(Arc::new(store)))
    }

    pub fn with_store(students: Arc<dyn StudentStore>) -> Self {
        Self { students }
    }

    pub async fn sensible_shutdown(&self) {
        self.students.shutdown().await;
        info!("Student store shut down");
    }
}

impl Deref for RosterState {
    type Target = dyn StudentStore;

    fn deref(&self) -> &Self::Target {
        &*self.students
    }
}

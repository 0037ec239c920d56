use crate::{
    routes::{
        index::get_index_route,
        students::{delete_student, get_student, get_students, patch_student, post_new_student},
    },
    state::RosterState,
};
use axum::{Router, routing::get};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub mod index;
pub mod students;

#[derive(Serialize, Debug)]
pub struct Message {
    pub message: &'static str,
}

pub fn router(state: RosterState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/students", get(get_students).post(post_new_student))
        .route(
            "/students/{id}",
            get(get_student).patch(patch_student).delete(delete_student),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

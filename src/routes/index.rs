use crate::routes::Message;
use axum::Json;

pub async fn get_index_route() -> Json<Message> {
    Json(Message {
        message: "Hello, Render!",
    })
}

use crate::{
    data::{LIST_LIMIT, NewStudent, StudentFilter, StudentPatch, StudentView},
    error::{
        JsonBodySnafu, MissingStudentSnafu, ParseObjectIdSnafu, QueryStringSnafu, RosterResult,
    },
    routes::Message,
    state::RosterState,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use snafu::{OptionExt, ResultExt};

#[derive(Serialize, Deserialize, Debug)]
pub struct CreatedStudent {
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct StudentList {
    pub data: Vec<StudentView>,
}

fn parse_id(original: String) -> RosterResult<ObjectId> {
    ObjectId::parse_str(&original).context(ParseObjectIdSnafu { original })
}

pub async fn post_new_student(
    State(state): State<RosterState>,
    body: Result<Json<NewStudent>, JsonRejection>,
) -> RosterResult<impl IntoResponse> {
    let Json(to_be_added) = body.context(JsonBodySnafu)?;

    let id = state.insert(to_be_added).await?;
    info!(%id, "Created student");

    Ok((
        StatusCode::CREATED,
        Json(CreatedStudent { id: id.to_hex() }),
    ))
}

pub async fn get_students(
    State(state): State<RosterState>,
    query: Result<Query<StudentFilter>, QueryRejection>,
) -> RosterResult<Json<StudentList>> {
    let Query(filter) = query.context(QueryStringSnafu)?;

    let students = state.list(&filter, LIST_LIMIT).await?;
    debug!(?filter, found = students.len(), "Listed students");

    Ok(Json(StudentList {
        data: students.into_iter().map(StudentView::from).collect(),
    }))
}

pub async fn get_student(
    State(state): State<RosterState>,
    Path(id): Path<String>,
) -> RosterResult<Json<StudentView>> {
    let id = parse_id(id)?;

    let student = state.get(id).await?.context(MissingStudentSnafu { id })?;
    Ok(Json(student.into()))
}

pub async fn patch_student(
    State(state): State<RosterState>,
    Path(id): Path<String>,
    body: Result<Json<StudentPatch>, JsonRejection>,
) -> RosterResult<StatusCode> {
    let id = parse_id(id)?;
    let Json(patch) = body.context(JsonBodySnafu)?;

    if !state.update(id, &patch).await? {
        return MissingStudentSnafu { id }.fail();
    }
    info!(%id, ?patch, "Updated student");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_student(
    State(state): State<RosterState>,
    Path(id): Path<String>,
) -> RosterResult<Json<Message>> {
    let id = parse_id(id)?;

    if !state.delete(id).await? {
        return MissingStudentSnafu { id }.fail();
    }
    info!(%id, "Deleted student");

    Ok(Json(Message {
        message: "Student deleted successfully",
    }))
}

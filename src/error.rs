use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mongodb::{
    bson::{self, oid::ObjectId},
    error::ErrorKind,
};
use serde_json::json;
use snafu::Snafu;
use std::num::ParseIntError;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Error connecting to MongoDB"))]
    OpenDatabase { source: mongodb::error::Error },
    #[snafu(display("Error pinging MongoDB database `{}`", database))]
    PingDatabase {
        source: mongodb::error::Error,
        database: &'static str,
    },
    #[snafu(display("Error making MongoDB query"))]
    MakeQuery { source: mongodb::error::Error },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse port {:?}", original))]
    ParsePort {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Invalid student id {:?}", original))]
    ParseObjectId {
        source: bson::oid::Error,
        original: String,
    },
    #[snafu(display("{}", source.body_text()))]
    JsonBody { source: JsonRejection },
    #[snafu(display("{}", source.body_text()))]
    QueryString { source: QueryRejection },
    #[snafu(display("Student not found"))]
    MissingStudent { id: ObjectId },
}

impl RosterError {
    pub fn status_code(&self) -> StatusCode {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input
        const UE: StatusCode = StatusCode::UNPROCESSABLE_ENTITY; //unprocessable entity
        const SU: StatusCode = StatusCode::SERVICE_UNAVAILABLE; //service unavailable

        match self {
            Self::OpenDatabase { .. } | Self::PingDatabase { .. } => SU,
            Self::MakeQuery { source } => match *source.kind {
                ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => SU,
                _ => ISE,
            },
            Self::BadEnvVar { .. } | Self::ParsePort { .. } => ISE,
            Self::ParseObjectId { .. } => BI,
            Self::JsonBody { source } => match source {
                //body never arrived whole, e.g. over the length limit
                JsonRejection::BytesRejection(_) => source.status(),
                _ => UE,
            },
            Self::QueryString { .. } => UE,
            Self::MissingStudent { .. } => NF,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            error!(?self, "Error!");
        } else {
            debug!(?self, %status_code, "Rejected request");
        }

        (status_code, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

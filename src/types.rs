use crate::error::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub struct WebError(pub Error);

pub type AppError = WebError;
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

/// One row of the backing file. Ids are unique and the file is kept
/// sorted ascending by id after every mutation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CreateUserBody {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

/// Update payload. `avatar` is deliberately absent: the stored avatar is
/// never overwritten, even if the caller supplies one.
#[derive(Serialize, Deserialize, Clone)]
pub struct UpdateUserBody {
    pub id: BodyId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// The web client submits ids as strings; curl users tend to send numbers.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum BodyId {
    Num(u64),
    Text(String),
}

impl BodyId {
    pub fn matches(&self, id: u64) -> bool {
        match self {
            BodyId::Num(n) => *n == id,
            BodyId::Text(s) => s == &id.to_string(),
        }
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyId::Num(n) => write!(f, "{}", n),
            BodyId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Deserialize)]
pub struct PageParams {
    pub perpage: Option<usize>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PageResponse {
    pub total_pages: usize,
    pub data: Vec<User>,
}

pub struct AppState {
    pub data_file: PathBuf,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self.0 {
            Error::Validation(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            Error::UserNotFound(_) | Error::PageNotFound(_) => {
                (StatusCode::NOT_FOUND, "NotFoundError")
            }
            Error::Io(_) | Error::SerdeJson(_) | Error::Custom(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "StorageError")
            }
        };
        tracing::error!("Handler error: {:?}", self.0);
        let resp = ErrorResponse {
            error: kind,
            message: self.0.to_string(),
        };
        (status, Json(resp)).into_response()
    }
}

impl From<Error> for WebError {
    fn from(e: Error) -> Self {
        WebError(e)
    }
}

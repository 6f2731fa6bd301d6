use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("{0} is not a valid user id")]
    Validation(String),
    #[error("user {0} not found")]
    UserNotFound(String),
    #[error("page {0} not found")]
    PageNotFound(i64),
    #[error("{0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, Error>;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug, PartialEq)]
pub enum Error {
    #[error("Symbol is required")]
    MissingParameter,
    #[error("No data found for the symbol: {0}")]
    NotFound(String),
    #[error("Internal Server Error: {0}")]
    Upstream(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::MissingParameter => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<stockview::data::Error> for Error {
    fn from(error: stockview::data::Error) -> Self {
        Error::Upstream(error.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

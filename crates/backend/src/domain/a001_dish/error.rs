use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use thiserror::Error;

/// Ошибки чтения источника карты
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Failed to read menu file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch menu spreadsheet: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Menu CSV has no '{0}' column")]
    MissingColumn(&'static str),

    #[error("Malformed menu CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl MenuError {
    pub fn status(&self) -> StatusCode {
        match self {
            MenuError::Fetch(_) => StatusCode::BAD_GATEWAY,
            MenuError::MissingColumn(_) | MenuError::Csv(_) => StatusCode::UNPROCESSABLE_ENTITY,
            MenuError::Read { .. } | MenuError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for MenuError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (self.status(), self.to_string()).into_response()
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AppError {
    /// Generic API error carrying its own status code.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("Not Found")]
    NotFound,

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),
}

impl AppError {
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn with_status(mut self, code: StatusCode) -> Self {
        if let Self::Api { status, .. } = &mut self {
            *status = code;
        }
        self
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Api { status, .. } => *status,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::OrmError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::OrmError(err) = &self {
            tracing::error!(error = %err, "database error");
        }

        let body = ErrorBody {
            message: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

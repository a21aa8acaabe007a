//! API error types with IntoResponse
//!
//! Every failure becomes `{"detail": <string>}` with a status chosen per
//! error kind. Storage failures carry the driver message, prefixed with
//! `Error: `.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use sqlx::error::ErrorKind;

use crate::db::DbError;

/// API error type with explicit HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// No row for the requested id (404)
    NotFound { resource: &'static str },

    /// Form or path could not be coerced to the expected types (422)
    Unprocessable { message: String },

    /// The database rejected the statement on a constraint (409)
    Conflict(sqlx::Error),

    /// No usable connection: pool timeout, pool closed, I/O, TLS (503)
    Unavailable(sqlx::Error),

    /// Any other storage failure (500)
    Database(sqlx::Error),

    /// Request exceeded the configured timeout (504)
    Timeout { seconds: u64 },

    /// Failure outside the storage layer (500)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::Unprocessable { message } => message.clone(),
            Self::Conflict(e) | Self::Unavailable(e) | Self::Database(e) => {
                format!("Error: {}", e)
            }
            Self::Timeout { seconds } => {
                format!("request timed out after {} seconds", seconds)
            }
            Self::Internal { message } => format!("Error: {}", message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        match &self {
            Self::Conflict(e) | Self::Unavailable(e) | Self::Database(e) => {
                tracing::error!(status = status.as_u16(), "Database error: {}", e);
            }
            Self::Unprocessable { message } => {
                tracing::debug!("Rejected request: {}", message);
            }
            Self::Timeout { seconds } => {
                tracing::warn!("Request timed out after {} seconds", seconds);
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
            }
            Self::NotFound { .. } => {}
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        let unavailable = matches!(
            e,
            sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
        );
        let conflict = matches!(&e, sqlx::Error::Database(db) if is_constraint(db.kind()));

        if unavailable {
            Self::Unavailable(e)
        } else if conflict {
            Self::Conflict(e)
        } else {
            Self::Database(e)
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, .. } => Self::NotFound { resource },
            DbError::Sqlx(e) => e.into(),
        }
    }
}

fn is_constraint(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation
    )
}
